//! Application layer - Use cases and orchestration

pub mod check_tags;
pub mod expand_prompt;
pub mod init;
pub mod list_tags;
pub mod manage_config;

pub use check_tags::{CheckReport, CheckTagsService};
pub use expand_prompt::{
    ExpandPromptService, ExpandedItem, ExpansionResult, GenerationRequest, PromptVariant,
};
pub use init::InitService;
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
