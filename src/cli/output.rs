//! Output formatting utilities

use crate::application::{CheckReport, ExpansionResult};

/// Format expanded prompts, one block per batch item
pub fn format_expansion(result: &ExpansionResult) -> String {
    let mut output = String::new();
    let numbered = result.items.len() > 1;

    for (index, item) in result.items.iter().enumerate() {
        if numbered {
            output.push_str(&format!("[{}] seed {}\n", index + 1, item.seed));
        }
        for (variant, text) in &item.prompts {
            if text.is_empty() {
                continue;
            }
            output.push_str(&format!("{}: {}\n", variant.label(), text));
        }
    }

    for (name, raw) in &result.raw_prompts {
        output.push_str(&format!("{}: {}\n", name, raw));
    }

    output
}

/// Format a list of tag paths for display
pub fn format_tag_list(paths: &[String]) -> String {
    if paths.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for path in paths {
        output.push_str(&format!("@{}@\n", path));
    }
    output
}

/// Format a load check report
pub fn format_check_report(report: &CheckReport) -> String {
    let mut output = format!(
        "{} tag file(s) in {}, {} namespace(s) loaded\n",
        report.files,
        report.tags_dir.display(),
        report.namespaces
    );
    for diagnostic in &report.skipped {
        output.push_str(&format!(
            "skipped {}: {}\n",
            diagnostic.origin.display(),
            diagnostic.error
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ExpandedItem, PromptVariant};
    use crate::domain::LoadDiagnostic;
    use crate::error::DocumentError;
    use std::path::PathBuf;

    #[test]
    fn test_format_single_item() {
        let result = ExpansionResult {
            items: vec![ExpandedItem {
                seed: 5,
                prompts: vec![
                    (PromptVariant::Positive, "red shirt".to_string()),
                    (PromptVariant::Negative, String::new()),
                ],
            }],
            raw_prompts: Default::default(),
        };
        assert_eq!(format_expansion(&result), "prompt: red shirt\n");
    }

    #[test]
    fn test_format_batch_and_raw_prompts() {
        let item = |seed, text: &str| ExpandedItem {
            seed,
            prompts: vec![(PromptVariant::Positive, text.to_string())],
        };
        let mut result = ExpansionResult {
            items: vec![item(1, "red"), item(2, "blue")],
            raw_prompts: Default::default(),
        };
        result
            .raw_prompts
            .insert("Input Prompt".to_string(), "@colors@".to_string());

        let output = format_expansion(&result);
        assert_eq!(
            output,
            "[1] seed 1\nprompt: red\n[2] seed 2\nprompt: blue\nInput Prompt: @colors@\n"
        );
    }

    #[test]
    fn test_format_empty_tag_list() {
        assert_eq!(format_tag_list(&[]), "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["colors".to_string(), "outfits:casual".to_string()];
        assert_eq!(format_tag_list(&tags), "@colors@\n@outfits:casual@\n");
    }

    #[test]
    fn test_format_check_report() {
        let report = CheckReport {
            tags_dir: PathBuf::from("tags"),
            files: 2,
            namespaces: 1,
            skipped: vec![LoadDiagnostic {
                origin: PathBuf::from("tags/empty.yml"),
                error: DocumentError::Empty {
                    namespace: "empty".to_string(),
                },
            }],
        };
        let output = format_check_report(&report);
        assert!(output.starts_with("2 tag file(s) in tags, 1 namespace(s) loaded\n"));
        assert!(output.contains("skipped tags/empty.yml: 'empty' is empty"));
    }
}
