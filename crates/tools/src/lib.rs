//! Tool implementations for jobcrew agents.
//!
//! Only the market researcher carries a tool: web search backed by the
//! Serper API, used to find current job listings.

pub mod web_search;

use jobcrew_config::SearchConfig;
use jobcrew_core::tool::ToolRegistry;

pub use web_search::{SerperSearchTool, WEB_SEARCH};

/// Create the tool registry the crew runs with.
pub fn default_registry(config: &SearchConfig, serper_api_key: &str) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(SerperSearchTool::new(
        &config.base_url,
        serper_api_key,
        config.num_results,
    )));
    registry
}
