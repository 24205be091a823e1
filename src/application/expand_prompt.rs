//! Prompt expansion use case
//!
//! Mirrors how an image-generation host drives expansion: every batch item
//! gets one seed, shared by all of that item's prompt variants.

use crate::domain::directive::DIRECTIVE_MARKER;
use crate::domain::{SeedSequence, TagStore, TemplateExpander};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};
use std::collections::BTreeMap;

/// Which prompt of a generation request a text belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PromptVariant {
    Positive,
    Negative,
    HiresPositive,
    HiresNegative,
}

impl PromptVariant {
    /// Generation parameter name used when recording the raw prompt
    pub fn raw_param_name(&self) -> &'static str {
        match self {
            PromptVariant::Positive => "Input Prompt",
            PromptVariant::Negative => "Input NegativePrompt",
            PromptVariant::HiresPositive => "Input Prompt(Hires)",
            PromptVariant::HiresNegative => "Input NegativePrompt(Hires)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptVariant::Positive => "prompt",
            PromptVariant::Negative => "negative",
            PromptVariant::HiresPositive => "hires prompt",
            PromptVariant::HiresNegative => "hires negative",
        }
    }
}

/// A batch of generations sharing the same prompt texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub hires_prompt: Option<String>,
    pub hires_negative_prompt: Option<String>,
    /// Number of items; each gets its own seed
    pub batch_size: usize,
    /// Fixes the per-item seeds; None draws them from OS entropy
    pub seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            negative_prompt: String::new(),
            hires_prompt: None,
            hires_negative_prompt: None,
            batch_size: 1,
            seed: None,
        }
    }

    /// Variants present in this request, in processing order
    pub fn variants(&self) -> Vec<(PromptVariant, &str)> {
        let mut variants = vec![
            (PromptVariant::Positive, self.prompt.as_str()),
            (PromptVariant::Negative, self.negative_prompt.as_str()),
        ];
        if let Some(text) = self.hires_prompt.as_deref().filter(|t| !t.is_empty()) {
            variants.push((PromptVariant::HiresPositive, text));
        }
        if let Some(text) = self.hires_negative_prompt.as_deref().filter(|t| !t.is_empty()) {
            variants.push((PromptVariant::HiresNegative, text));
        }
        variants
    }
}

/// Expanded prompts for one batch item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedItem {
    pub seed: u64,
    pub prompts: Vec<(PromptVariant, String)>,
}

impl ExpandedItem {
    pub fn get(&self, variant: PromptVariant) -> Option<&str> {
        self.prompts
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, text)| text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionResult {
    pub items: Vec<ExpandedItem>,
    /// Pre-expansion text per parameter name, when raw prompt saving is on
    pub raw_prompts: BTreeMap<String, String>,
}

/// Expand every variant of every batch item.
///
/// Variants with no directive marker are passed through untouched and never
/// recorded as raw prompts.
pub fn expand_request(
    store: &TagStore,
    expander: &TemplateExpander,
    request: &GenerationRequest,
    save_raw_prompt: bool,
) -> ExpansionResult {
    let mut result = ExpansionResult::default();
    let mut seeds = SeedSequence::new(request.seed);

    for _ in 0..request.batch_size {
        let seed = seeds.next_seed();
        let mut prompts = Vec::new();

        for (variant, text) in request.variants() {
            if !text.contains(DIRECTIVE_MARKER) {
                prompts.push((variant, text.to_string()));
                continue;
            }

            if save_raw_prompt {
                result
                    .raw_prompts
                    .insert(variant.raw_param_name().to_string(), text.replace('\n', " "));
            }

            prompts.push((variant, expander.expand(store, text, Some(seed))));
        }

        result.items.push(ExpandedItem { seed, prompts });
    }

    result
}

/// Service for expanding prompts against the workspace's tag files
pub struct ExpandPromptService {
    repository: FileSystemRepository,
}

impl ExpandPromptService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Load the tag store fresh and expand the request
    pub fn execute(&self, request: &GenerationRequest) -> Result<ExpansionResult> {
        let config = self.repository.load_config()?;
        let store = self.repository.load_store(&config);
        let expander =
            TemplateExpander::new(config.max_passes).with_max_repeat(config.max_repeat);

        Ok(expand_request(
            &store,
            &expander,
            request,
            config.save_raw_prompt,
        ))
    }
}
