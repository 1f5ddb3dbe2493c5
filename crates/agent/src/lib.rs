//! The job-search crew.
//!
//! A run follows a fixed three-step chain:
//!
//! 1. **Market research**: survey openings, salaries, and demand (web search)
//! 2. **Skills matching**: compare the seeker's profile with the research
//! 3. **Opportunity curation**: rank and present the best openings, using
//!    the output of both earlier steps
//!
//! [`PromptBuilder`] renders the tasks, [`DependencyGraph`] decides which
//! outputs feed which task, [`WorkflowRunner`] assembles the crew and hands
//! it to an [`Executor`](jobcrew_core::Executor). [`CrewExecutor`] is the
//! LLM-backed executor used in production.

pub mod executor;
pub mod graph;
pub mod profiles;
pub mod prompts;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::sync::Arc;

use jobcrew_config::{AppConfig, Credentials};
use jobcrew_core::event::EventBus;

pub use executor::CrewExecutor;
pub use graph::DependencyGraph;
pub use prompts::PromptBuilder;
pub use runner::WorkflowRunner;

/// Build the production runner.
///
/// Requires checked [`Credentials`], so a runner can only exist once every
/// key has been found. Task progress is published on `events`.
pub fn build_runner(
    config: &AppConfig,
    credentials: &Credentials,
    events: Arc<EventBus>,
) -> WorkflowRunner {
    let provider = jobcrew_providers::build_from_config(&config.llm, &credentials.openai_api_key);
    let tools = Arc::new(jobcrew_tools::default_registry(
        &config.search,
        &credentials.serper_api_key,
    ));

    let executor = CrewExecutor::new(provider, &config.llm.model, tools)
        .with_temperature(config.llm.temperature)
        .with_max_tokens(config.llm.max_tokens)
        .with_max_iterations(config.llm.max_iterations)
        .with_event_bus(events);

    WorkflowRunner::new(Arc::new(executor))
}
