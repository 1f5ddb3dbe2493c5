//! The fixed task dependency graph.
//!
//! ```text
//!   market_research
//!        │    └──────────────┐
//!        ▼                   ▼
//!   skills_matching ──► opportunity_curation
//! ```
//!
//! The shape is compiled in; there is no runtime mutation and no cycle is
//! expressible.

use jobcrew_core::TaskId;

pub struct DependencyGraph;

impl DependencyGraph {
    /// The order tasks execute in. Each task runs after all of its dependencies.
    pub const ORDER: [TaskId; 3] = [
        TaskId::MarketResearch,
        TaskId::SkillsMatching,
        TaskId::OpportunityCuration,
    ];

    /// Tasks whose output is supplied as context to `task`, in declaration order.
    pub const fn dependencies(task: TaskId) -> &'static [TaskId] {
        match task {
            TaskId::MarketResearch => &[],
            TaskId::SkillsMatching => &[TaskId::MarketResearch],
            TaskId::OpportunityCuration => &[TaskId::MarketResearch, TaskId::SkillsMatching],
        }
    }
}
