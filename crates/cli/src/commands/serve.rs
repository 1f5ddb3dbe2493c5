//! `jobcrew serve`: register, then serve kickoff requests until Ctrl-C.

use std::future::Future;
use std::sync::Arc;

use jobcrew_config::{AppConfig, Credentials};
use jobcrew_core::SearchCriteria;
use jobcrew_core::event::EventBus;
use jobcrew_gateway::{HttpRegistrar, JobSearchCrew};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info};

use super::{CommandResult, progress};

pub async fn run(port_override: Option<u16>, register: bool) -> CommandResult {
    super::with_credentials(Credentials::from_env, &mut std::io::stdout(), |credentials| {
        serve(credentials, port_override, register)
    })
    .await
}

async fn serve(credentials: Credentials, port_override: Option<u16>, register: bool) -> CommandResult {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    if let Some(port) = port_override {
        config.registration.port = port;
    }

    let events = Arc::new(EventBus::default());
    progress::spawn(&events, |line| info!("{line}"));

    let runner = jobcrew_agent::build_runner(&config, &credentials, events);
    let crew = Arc::new(JobSearchCrew::new(SearchCriteria::default(), runner));

    if register {
        let registrar = HttpRegistrar::new(&config.registration.endpoint);
        let outcome = crew
            .register(&registrar, &config.registration, &credentials.agentverse_api_key)
            .await?;

        if let Some(address) = outcome.address() {
            println!("Agent registered with address: {address}");
        }
        println!("\n{} registration result: {}", config.registration.name, outcome.raw());
    }

    let listener = TcpListener::bind((config.gateway.host.as_str(), config.registration.port)).await?;
    println!("   Listening: {}:{}", config.gateway.host, config.registration.port);

    let (tx, rx) = oneshot::channel();
    tokio::spawn(forward_shutdown(tokio::signal::ctrl_c(), tx));

    jobcrew_gateway::serve(listener, crew, rx).await?;
    println!("\nExiting...");

    Ok(())
}

/// Fire `tx` once `signal` resolves.
///
/// A closed channel also stops the server, so when the signal cannot be
/// installed the sender is held for the life of the process.
async fn forward_shutdown(
    signal: impl Future<Output = std::io::Result<()>>,
    tx: oneshot::Sender<()>,
) {
    match signal.await {
        Ok(()) => {
            info!("Interrupt received, shutting down");
            let _ = tx.send(());
        }
        Err(e) => {
            error!(error = %e, "Cannot listen for Ctrl-C, serving until killed");
            let _tx = tx;
            std::future::pending::<()>().await;
        }
    }
}
