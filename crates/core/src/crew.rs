//! Crew domain types: agents, tasks, and the result of running them.
//!
//! A [`Crew`] is the ordered collection of [`AgentProfile`]s and
//! [`TaskSpec`]s handed to an [`Executor`](crate::Executor) for one run.
//! Nothing here is shared between runs; every run builds its own crew.

use serde::{Deserialize, Serialize};

/// Identifies one of the three tasks in the job-search chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskId {
    /// Survey openings, salaries, and demand for the role.
    MarketResearch,
    /// Compare the seeker's profile against the market.
    SkillsMatching,
    /// Rank and present the best opportunities.
    OpportunityCuration,
}

impl TaskId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskId::MarketResearch => "market_research",
            TaskId::SkillsMatching => "skills_matching",
            TaskId::OpportunityCuration => "opportunity_curation",
        }
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role/goal/backstory template that conditions one LLM-driven step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Short role title, e.g. "Job Market Research Specialist"
    pub role: String,

    /// What the agent is trying to achieve
    pub goal: String,

    /// Persona text prepended to every request
    pub backstory: String,

    /// Names of the tools this agent may call
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,

    /// Whether the agent may hand work to another agent (always false here)
    #[serde(default)]
    pub allow_delegation: bool,

    /// Whether progress for this agent is logged verbosely
    #[serde(default)]
    pub verbose: bool,
}

impl AgentProfile {
    /// Render the system prompt for this agent.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {role}. {backstory}\n\nYour personal goal is: {goal}",
            role = self.role,
            backstory = self.backstory,
            goal = self.goal,
        )
    }
}

/// A rendered task: instruction text, expected output, owner, and context.
///
/// Immutable once built. `context` lists the tasks whose results are
/// supplied as extra input, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: TaskId,
    pub description: String,
    pub expected_output: String,
    pub agent: AgentProfile,
    #[serde(default)]
    pub context: Vec<TaskId>,
}

/// The ordered agents and tasks for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crew {
    pub agents: Vec<AgentProfile>,
    pub tasks: Vec<TaskSpec>,
    #[serde(default)]
    pub verbose: bool,
}

/// Text produced by a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task: TaskId,
    pub agent_role: String,
    pub text: String,
}

/// The artifact returned by a run: the last task's text, plus every
/// intermediate output in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub text: String,
    #[serde(default)]
    pub tasks: Vec<TaskOutput>,
}

impl WorkflowResult {
    /// Build a result from per-task outputs. The final text is the last output.
    pub fn from_outputs(tasks: Vec<TaskOutput>) -> Option<Self> {
        let text = tasks.last()?.text.clone();
        Some(Self { text, tasks })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for WorkflowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
