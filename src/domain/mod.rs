//! Domain layer - Tag dictionary and prompt expansion

pub mod directive;
pub mod expander;
pub mod namespace;
pub mod node;
pub mod resolver;
pub mod seeding;
pub mod store;

pub use directive::{Directive, RepeatRange};
pub use expander::TemplateExpander;
pub use namespace::NamespaceKeying;
pub use node::{TagMap, TagNode, YamlNode};
pub use seeding::SeedSequence;
pub use store::{LoadDiagnostic, SourceDocument, TagStore};
