//! The registered job-search crew.
//!
//! [`JobSearchCrew`] holds the base criteria and the runner. `kickoff`
//! merges caller overrides into a fresh value per call; the base is never
//! mutated, so concurrent callers cannot observe each other's overrides.

use jobcrew_agent::WorkflowRunner;
use jobcrew_config::RegistrationConfig;
use jobcrew_core::{CriteriaUpdate, ExecutionError, SearchCriteria, WorkflowResult};
use tracing::{info, warn};

use crate::registration::{
    ParameterSchema, RegistrationError, RegistrationOutcome, RegistrationRequest, Registrar,
};

pub struct JobSearchCrew {
    base: SearchCriteria,
    runner: WorkflowRunner,
}

impl JobSearchCrew {
    pub fn new(base: SearchCriteria, runner: WorkflowRunner) -> Self {
        Self { base, runner }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.base
    }

    /// Apply `update` to the base criteria and run the crew once.
    pub async fn kickoff(&self, update: &CriteriaUpdate) -> Result<WorkflowResult, ExecutionError> {
        let criteria = self.base.merged(update);
        if !update.is_empty() {
            info!(job_title = %criteria.job_title, "Kickoff with overrides");
        }
        self.runner.run(&criteria).await
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::search_criteria()
    }

    /// Register with the discovery platform.
    ///
    /// A response without an `address` is logged but still returned.
    pub async fn register(
        &self,
        registrar: &dyn Registrar,
        config: &RegistrationConfig,
        api_token: &str,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let request = RegistrationRequest::from_config(config, api_token);
        let outcome = registrar.register(&request).await?;

        match outcome.address() {
            Some(address) => info!(%address, "Agent registered"),
            None => warn!("Registration response did not include an address"),
        }
        Ok(outcome)
    }
}
