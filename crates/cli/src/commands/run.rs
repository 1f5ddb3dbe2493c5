//! `jobcrew run`: one crew run from the command line.

use std::sync::Arc;

use jobcrew_config::{AppConfig, Credentials};
use jobcrew_core::SearchCriteria;
use jobcrew_core::event::EventBus;

use super::{CommandResult, progress};

pub async fn run(criteria: SearchCriteria) -> CommandResult {
    super::with_credentials(Credentials::from_env, &mut std::io::stdout(), |credentials| {
        run_once(credentials, criteria)
    })
    .await
}

async fn run_once(credentials: Credentials, criteria: SearchCriteria) -> CommandResult {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let events = Arc::new(EventBus::default());
    let printer = progress::spawn(&events, |line| println!("{line}"));
    let runner = jobcrew_agent::build_runner(&config, &credentials, events);

    println!("🔎 Searching for {} roles in {}", criteria.job_title, criteria.location);
    println!("   Model: {}\n", config.llm.model);

    let result = runner.run(&criteria).await;

    // Closing the bus lets the printer flush what is queued and exit.
    drop(runner);
    let _ = printer.await;

    println!("\n{}", result?);
    Ok(())
}
