//! Executor trait — the abstraction over the crew execution engine.
//!
//! The workflow layer never calls an LLM directly. It renders a [`Crew`] and
//! hands it to an `Executor`, which decides how each task is carried out and
//! returns the final artifact.

use async_trait::async_trait;

use crate::crew::{Crew, WorkflowResult};
use crate::error::ExecutionError;

/// Runs an ordered crew and returns the final task's text.
///
/// Implementations must run tasks in crew order and supply each task's
/// declared context from the outputs of earlier tasks.
#[async_trait]
pub trait Executor: Send + Sync {
    /// A human-readable name for this engine (e.g., "llm", "scripted").
    fn name(&self) -> &str;

    /// Execute every task in the crew.
    async fn execute(&self, crew: &Crew) -> std::result::Result<WorkflowResult, ExecutionError>;
}
