//! `@...@` directive scanning

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for directives: `@path@`, `@N$$path@`, `@N-M$$path@`.
///
/// The path may hold any character except `>`; it stops at the next `@`.
fn directive_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"@(?:(?P<repeat>[^@>$]*)\$\$)?(?P<path>[^>]+?)@").unwrap()
    })
}

/// Marker that opens (and closes) a directive
pub const DIRECTIVE_MARKER: char = '@';

/// Inclusive bounds on how many values a directive draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatRange {
    pub min: u32,
    pub max: u32,
}

impl Default for RepeatRange {
    fn default() -> Self {
        RepeatRange { min: 1, max: 1 }
    }
}

impl RepeatRange {
    /// Parse `N` or `N-M` (either order). Anything else yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let bounds = match text.split_once('-') {
            Some((a, b)) => (parse_count(a)?, parse_count(b)?),
            None => {
                let n = parse_count(text)?;
                (n, n)
            }
        };
        Some(RepeatRange {
            min: bounds.0.min(bounds.1),
            max: bounds.0.max(bounds.1),
        })
    }
}

fn parse_count(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// One directive occurrence found in a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Exact matched text, including both markers
    pub raw: String,
    pub repeat: RepeatRange,
    /// Colon-separated keys
    pub path: Vec<String>,
}

impl Directive {
    /// Find all non-overlapping directives, left to right.
    pub fn scan(prompt: &str) -> Vec<Directive> {
        directive_regex()
            .captures_iter(prompt)
            .map(|cap| {
                let repeat = match cap.name("repeat") {
                    Some(m) => RepeatRange::parse(m.as_str()).unwrap_or_else(|| {
                        debug!(
                            "Repeat count '{}' is not a count or range, using 1",
                            m.as_str()
                        );
                        RepeatRange::default()
                    }),
                    None => RepeatRange::default(),
                };

                Directive {
                    raw: cap[0].to_string(),
                    repeat,
                    path: cap["path"].split(':').map(str::to_string).collect(),
                }
            })
            .collect()
    }
}
