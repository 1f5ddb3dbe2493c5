//! # jobcrew Core
//!
//! Domain types, traits, and error definitions for the jobcrew job-search
//! crew. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator is defined as a trait here: the LLM backend
//! ([`Provider`]), the callable tools ([`Tool`]), and the crew execution
//! engine ([`Executor`]). Implementations live in their respective crates,
//! so the orchestration logic can be exercised against scripted stand-ins.

pub mod criteria;
pub mod crew;
pub mod error;
pub mod event;
pub mod executor;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use criteria::{CriteriaUpdate, SearchCriteria};
pub use crew::{AgentProfile, Crew, TaskId, TaskOutput, TaskSpec, WorkflowResult};
pub use error::ExecutionError;
pub use event::{DomainEvent, EventBus};
pub use executor::Executor;
pub use message::{Conversation, Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
