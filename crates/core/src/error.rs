//! Error types for the jobcrew domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum.

use thiserror::Error;

use crate::crew::TaskId;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name}: {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

/// Failures raised while a crew runs. None of these are retried.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("LLM call failed during {task}: {source}")]
    Provider {
        task: TaskId,
        #[source]
        source: ProviderError,
    },

    #[error("{task} needs the output of {missing}, which has not run yet")]
    MissingContext { task: TaskId, missing: TaskId },

    #[error("{task} did not produce a final answer within {limit} iterations")]
    IterationLimit { task: TaskId, limit: u32 },

    #[error("Crew has no tasks to execute")]
    EmptyCrew,

    #[error("Execution engine failure: {0}")]
    Engine(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = ExecutionError::Provider {
            task: TaskId::MarketResearch,
            source: ProviderError::ApiError {
                status_code: 429,
                message: "Too many requests".into(),
            },
        };
        assert!(err.to_string().contains("market_research"));
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn missing_context_names_both_tasks() {
        let err = ExecutionError::MissingContext {
            task: TaskId::OpportunityCuration,
            missing: TaskId::SkillsMatching,
        };
        let msg = err.to_string();
        assert!(msg.contains("opportunity_curation"));
        assert!(msg.contains("skills_matching"));
    }
}
