//! Workflow runner: turns search criteria into a crew and executes it.

use std::sync::Arc;

use jobcrew_core::{Crew, ExecutionError, Executor, SearchCriteria, WorkflowResult};
use tracing::{error, info};

use crate::graph::DependencyGraph;
use crate::profiles;
use crate::prompts::PromptBuilder;

/// Builds a fresh crew per run and hands it to the injected executor.
///
/// Holds no per-run state, so one runner can serve any number of runs.
#[derive(Clone)]
pub struct WorkflowRunner {
    executor: Arc<dyn Executor>,
}

impl WorkflowRunner {
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self { executor }
    }

    pub fn executor_name(&self) -> &str {
        self.executor.name()
    }

    /// Assemble the three agents and their tasks, in dependency order.
    pub fn build_crew(criteria: &SearchCriteria) -> Crew {
        let builder = PromptBuilder::new(criteria);
        let agents = vec![
            profiles::job_market_researcher(),
            profiles::skills_analyzer(),
            profiles::opportunity_curator(),
        ];

        let tasks = DependencyGraph::ORDER
            .into_iter()
            .zip(agents.iter().cloned())
            .map(|(id, agent)| builder.task(id, agent))
            .collect();

        Crew {
            agents,
            tasks,
            verbose: true,
        }
    }

    /// Run the full chain once. Execution failures are passed through unchanged.
    pub async fn run(&self, criteria: &SearchCriteria) -> Result<WorkflowResult, ExecutionError> {
        info!(
            job_title = %criteria.job_title,
            location = %criteria.location,
            executor = self.executor_name(),
            "Starting job search crew"
        );

        let crew = Self::build_crew(criteria);
        match self.executor.execute(&crew).await {
            Ok(result) => {
                info!(tasks = result.tasks.len(), "Job search crew finished");
                Ok(result)
            }
            Err(e) => {
                error!(error = %e, "Job search crew failed");
                Err(e)
            }
        }
    }
}
