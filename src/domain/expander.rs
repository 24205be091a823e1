//! Prompt template expansion

use crate::domain::directive::{Directive, DIRECTIVE_MARKER};
use crate::domain::resolver::resolve;
use crate::domain::seeding::rng_for;
use crate::domain::store::TagStore;
use log::{debug, warn};
use rand::Rng;

/// Default cap on substitution passes over one prompt
pub const DEFAULT_MAX_PASSES: usize = 100;

/// Default ceiling on how many values one directive may draw
pub const DEFAULT_MAX_REPEAT: u32 = 100;

/// Joins the values drawn by a repeated directive
pub const VALUE_SEPARATOR: &str = ", ";

/// Expands directives in prompts, pass by pass, until none remain or the
/// pass limit is hit. Directives still present at the limit are left verbatim.
///
/// Repeat counts above `max_repeat` are clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateExpander {
    max_passes: usize,
    max_repeat: u32,
}

impl Default for TemplateExpander {
    fn default() -> Self {
        TemplateExpander::new(DEFAULT_MAX_PASSES)
    }
}

impl TemplateExpander {
    pub fn new(max_passes: usize) -> Self {
        TemplateExpander {
            max_passes,
            max_repeat: DEFAULT_MAX_REPEAT,
        }
    }

    pub fn with_max_repeat(mut self, max_repeat: u32) -> Self {
        self.max_repeat = max_repeat;
        self
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    pub fn max_repeat(&self) -> u32 {
        self.max_repeat
    }

    /// Expand `prompt`, reproducibly when `seed` is given
    pub fn expand(&self, store: &TagStore, prompt: &str, seed: Option<u64>) -> String {
        let mut rng = rng_for(seed);
        self.expand_with_rng(store, prompt, &mut rng)
    }

    /// Expand `prompt` drawing every random choice from `rng`
    pub fn expand_with_rng<R>(&self, store: &TagStore, prompt: &str, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let mut text = prompt.to_string();
        let mut passes = 0;

        while passes < self.max_passes && text.contains(DIRECTIVE_MARKER) {
            let directives = Directive::scan(&text);
            if directives.is_empty() {
                break;
            }

            for directive in &directives {
                let value = expand_directive(store, directive, self.max_repeat, &mut *rng);
                text = text.replacen(&directive.raw, &value, 1);
            }
            passes += 1;
        }

        if passes == self.max_passes && !Directive::scan(&text).is_empty() {
            debug!(
                "Stopped after {} passes with directives remaining",
                self.max_passes
            );
        } else {
            debug!("Expanded prompt in {} pass(es)", passes);
        }

        text
    }
}

/// Draw a repeat count, resolve the path that many times and join the values.
/// A failed resolution contributes an empty value.
fn expand_directive<R>(
    store: &TagStore,
    directive: &Directive,
    max_repeat: u32,
    rng: &mut R,
) -> String
where
    R: Rng + ?Sized,
{
    let repeat = directive.repeat;
    if repeat.max > max_repeat {
        warn!(
            "{} asks for up to {} values, limiting to {}",
            directive.raw, repeat.max, max_repeat
        );
    }
    let max = repeat.max.min(max_repeat);
    let count = rng.random_range(repeat.min.min(max)..=max);

    let mut values = Vec::new();
    for _ in 0..count {
        match resolve(store.namespaces(), &directive.path, &mut *rng) {
            Ok(value) => values.push(value),
            Err(e) => {
                warn!("Could not resolve {}: {}", directive.raw, e);
                values.push(String::new());
            }
        }
    }

    values.join(VALUE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::SourceDocument;
    use std::path::PathBuf;

    fn store(docs: &[(&str, &str)]) -> TagStore {
        TagStore::load(
            docs.iter()
                .map(|(ns, yaml)| SourceDocument::new(*ns, PathBuf::from(*ns), *yaml))
                .collect::<Vec<_>>(),
        )
    }

    fn colors() -> TagStore {
        store(&[("colors", "warm: [red, orange]\ncool: [blue, green]\n")])
    }

    #[test]
    fn test_no_marker_is_identity() {
        let expander = TemplateExpander::default();
        let prompt = "a cat sitting on a chair, masterpiece";
        assert_eq!(expander.expand(&colors(), prompt, Some(1)), prompt);
        assert_eq!(expander.expand(&TagStore::default(), prompt, None), prompt);
        assert_eq!(expander.expand(&colors(), "", None), "");
    }

    #[test]
    fn test_single_pick() {
        let expander = TemplateExpander::default();
        let out = expander.expand(&colors(), "@colors:warm@ shirt", Some(1));
        assert!(out == "red shirt" || out == "orange shirt", "got {out}");
        assert_eq!(expander.expand(&colors(), "@colors:warm@ shirt", Some(1)), out);
    }

    #[test]
    fn test_fixed_repeat_joins_with_comma() {
        let expander = TemplateExpander::default();
        let out = expander.expand(&colors(), "@2$$colors:warm@", Some(5));
        let parts: Vec<&str> = out.split(VALUE_SEPARATOR).collect();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| *p == "red" || *p == "orange"), "got {out}");
    }

    #[test]
    fn test_repeat_range_bounds() {
        let expander = TemplateExpander::default();
        for seed in 0..30 {
            let out = expander.expand(&colors(), "@3-1$$colors:cool@", Some(seed));
            let n = out.split(VALUE_SEPARATOR).count();
            assert!((1..=3).contains(&n), "got {out}");
        }
    }

    #[test]
    fn test_zero_repeat_is_empty() {
        let expander = TemplateExpander::default();
        assert_eq!(expander.expand(&colors(), "[@0$$colors@]", Some(1)), "[]");
    }

    #[test]
    fn test_missing_key_becomes_empty() {
        let expander = TemplateExpander::default();
        assert_eq!(expander.expand(&colors(), "a @nope@ b", Some(1)), "a  b");
        assert_eq!(expander.expand(&TagStore::default(), "@nope@", None), "");
    }

    #[test]
    fn test_partial_failures_keep_other_repeats() {
        let tags = store(&[("x", "only: value\n")]);
        let expander = TemplateExpander::default();
        assert_eq!(expander.expand(&tags, "@2$$x:missing@", Some(1)), ", ");
    }

    #[test]
    fn test_malformed_repeat_is_single() {
        let expander = TemplateExpander::default();
        let out = expander.expand(&colors(), "@abc$$colors:warm@", Some(1));
        assert!(out == "red" || out == "orange", "got {out}");
    }

    #[test]
    fn test_nested_templates_resolve_across_passes() {
        let tags = store(&[
            ("colors", "warm: [red]\n"),
            ("outfits", "casual: \"@colors:warm@ hoodie\"\n"),
        ]);
        let expander = TemplateExpander::default();
        assert_eq!(expander.expand(&tags, "@outfits:casual@", None), "red hoodie");
    }

    #[test]
    fn test_duplicate_directives_each_replaced() {
        let tags = store(&[("c", "[a]\n")]);
        let expander = TemplateExpander::default();
        assert_eq!(expander.expand(&tags, "@c@ and @c@", None), "a and a");
    }

    #[test]
    fn test_pass_cap_leaves_directives_verbatim() {
        let tags = store(&[("loop", "self: \"@loop:self@\"\n")]);
        let expander = TemplateExpander::new(3);
        assert_eq!(expander.expand(&tags, "x @loop:self@", Some(1)), "x @loop:self@");
    }

    #[test]
    fn test_huge_repeat_is_clamped() {
        let tags = store(&[("c", "[x]")]);
        let expander = TemplateExpander::default();
        let output = expander.expand(&tags, "@4000000000$$c@", Some(1));
        assert_eq!(output.split(", ").count(), DEFAULT_MAX_REPEAT as usize);
        assert!(output.split(", ").all(|v| v == "x"));
    }

    #[test]
    fn test_repeat_range_above_ceiling() {
        let tags = store(&[("c", "[x]")]);
        let expander = TemplateExpander::default().with_max_repeat(3);
        for seed in 0..10 {
            let output = expander.expand(&tags, "@5-9$$c@", Some(seed));
            assert_eq!(output, "x, x, x");
        }
        let output = expander.expand(&tags, "@1-9$$c@", Some(4));
        assert!((1..=3).contains(&output.split(", ").count()));
    }

    #[test]
    fn test_zero_repeat_ceiling_draws_nothing() {
        let expander = TemplateExpander::default().with_max_repeat(0);
        assert_eq!(expander.expand(&colors(), "a @2$$colors@ b", Some(1)), "a  b");
    }

    #[test]
    fn test_zero_passes_is_identity() {
        let expander = TemplateExpander::new(0);
        assert_eq!(expander.expand(&colors(), "@colors@", Some(1)), "@colors@");
    }

    #[test]
    fn test_marker_without_directive() {
        let expander = TemplateExpander::default();
        assert_eq!(
            expander.expand(&colors(), "mail me at someone@example.com", Some(1)),
            "mail me at someone@example.com"
        );
    }

    #[test]
    fn test_stable_output_is_idempotent() {
        let expander = TemplateExpander::default();
        let once = expander.expand(&colors(), "@2$$colors@, @colors:cool@", Some(8));
        assert_eq!(expander.expand(&colors(), &once, Some(99)), once);
    }

    #[test]
    fn test_same_seed_same_output() {
        let expander = TemplateExpander::default();
        let prompt = "@1-4$$colors@, @colors:warm@, @colors@";
        for seed in 0..10 {
            assert_eq!(
                expander.expand(&colors(), prompt, Some(seed)),
                expander.expand(&colors(), prompt, Some(seed))
            );
        }
    }
}
