//! promptsel - Prompt template expansion from YAML tag dictionaries
//!
//! Prompts may embed directives such as `@outfits:casual@`,
//! `@3$$colors@` or `@1-3$$props:weapons@`. Each directive is replaced by
//! values drawn from a hierarchical tag dictionary loaded from YAML files,
//! reproducibly when a seed is supplied.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{TagNode, TagStore, TemplateExpander};
pub use error::PromptselError;
