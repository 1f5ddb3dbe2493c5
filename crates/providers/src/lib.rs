//! LLM Provider implementations for jobcrew.
//!
//! All providers implement the `jobcrew_core::Provider` trait.

pub mod openai_compat;

use std::sync::Arc;

use jobcrew_config::LlmConfig;
use jobcrew_core::Provider;

pub use openai_compat::OpenAiCompatProvider;

/// Build the provider described by the `[llm]` config section.
pub fn build_from_config(config: &LlmConfig, api_key: &str) -> Arc<dyn Provider> {
    Arc::new(OpenAiCompatProvider::new("openai", &config.base_url, api_key))
}
