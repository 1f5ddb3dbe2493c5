//! Registration with the agent discovery platform.
//!
//! The agent advertises a fixed parameter schema so remote callers know which
//! criteria fields they may send. The platform answers with an opaque JSON
//! document; only its `address` field is ever read.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use jobcrew_config::RegistrationConfig;
use jobcrew_core::criteria::{OPTIONAL_FIELDS, REQUIRED_FIELDS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Type and presence of one advertised parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
}

/// Parameter name → spec, serialized as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSchema(BTreeMap<String, ParameterSpec>);

impl ParameterSchema {
    /// The schema for search criteria: four required and four optional
    /// string parameters.
    pub fn search_criteria() -> Self {
        let spec = |required| ParameterSpec {
            kind: "str".into(),
            required,
        };
        let params = REQUIRED_FIELDS
            .iter()
            .map(|name| (name.to_string(), spec(true)))
            .chain(OPTIONAL_FIELDS.iter().map(|name| (name.to_string(), spec(false))))
            .collect();
        Self(params)
    }
}

/// Everything the platform needs to list and reach the agent.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub port: u16,
    pub description: String,
    /// Sent as a bearer token, never in the body.
    #[serde(skip_serializing)]
    pub api_token: String,
    pub mailbox: bool,
    pub parameters: ParameterSchema,
    pub example_query: String,
}

impl RegistrationRequest {
    pub fn from_config(config: &RegistrationConfig, api_token: impl Into<String>) -> Self {
        Self {
            name: config.name.clone(),
            port: config.port,
            description: config.description.clone(),
            api_token: api_token.into(),
            mailbox: config.mailbox,
            parameters: ParameterSchema::search_criteria(),
            example_query: config.example_query.clone(),
        }
    }
}

/// The platform's answer, kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOutcome(pub serde_json::Value);

impl RegistrationOutcome {
    pub fn address(&self) -> Option<&str> {
        self.0.get("address").and_then(|a| a.as_str())
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Registration request failed: {0}")]
    Transport(String),

    #[error("Registration rejected (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid registration response: {0}")]
    InvalidResponse(String),
}

/// The external registration mechanism.
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, RegistrationError>;
}

/// Registers over HTTPS with a bearer token.
pub struct HttpRegistrar {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRegistrar {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl Registrar for HttpRegistrar {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        debug!(endpoint = %self.endpoint, name = %request.name, "Sending registration");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&request.api_token)
            .json(request)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RegistrationError::InvalidResponse(e.to_string()))?;

        info!(name = %request.name, "Registration accepted");
        Ok(RegistrationOutcome(value))
    }
}
