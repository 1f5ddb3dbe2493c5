//! Configuration loading, validation, and credential checks for jobcrew.
//!
//! Settings come from `~/.jobcrew/config.toml` (defaults when absent) with a
//! few environment variable overrides. The three API credentials are read
//! from the environment only and are never written to the config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the agent-platform API token.
pub const AGENTVERSE_API_KEY: &str = "AGENTVERSE_API_KEY";
/// Environment variable holding the LLM provider key.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable holding the search provider key.
pub const SERPER_API_KEY: &str = "SERPER_API_KEY";

/// The root configuration structure.
///
/// Maps directly to `~/.jobcrew/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// LLM backend settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Web search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Agent-platform registration settings
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Local HTTP endpoint settings
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-compatible API base URL
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upper bound on model round-trips per task
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".into()
}
fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    4096
}
fn default_max_iterations() -> u32 {
    10
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            max_iterations: default_max_iterations(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_base_url")]
    pub base_url: String,

    /// Results requested per query
    #[serde(default = "default_num_results")]
    pub num_results: u32,
}

fn default_search_base_url() -> String {
    "https://google.serper.dev".into()
}
fn default_num_results() -> u32 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
            num_results: default_num_results(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Display name on the discovery platform
    #[serde(default = "default_agent_name")]
    pub name: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_example_query")]
    pub example_query: String,

    /// Port the agent listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable store-and-forward delivery
    #[serde(default = "default_true")]
    pub mailbox: bool,

    /// Registration endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_agent_name() -> String {
    "Job Search Agent".into()
}
fn default_description() -> String {
    "A CrewAI agent that searches for job opportunities and matches them to user skills and \
     preferences using market research, skills analysis, and opportunity curation specialists"
        .into()
}
fn default_example_query() -> String {
    "Find software engineering jobs in San Francisco for someone with 5+ years experience, \
     skills in Python, React, and AWS, looking for senior roles in tech companies with \
     120k-180k salary range."
        .into()
}
fn default_port() -> u16 {
    8001
}
fn default_true() -> bool {
    true
}
fn default_endpoint() -> String {
    "https://agentverse.ai/v1/crewai/agents".into()
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            description: default_description(),
            example_query: default_example_query(),
            port: default_port(),
            mailbox: true,
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.jobcrew/config.toml).
    ///
    /// Environment overrides:
    /// - `JOBCREW_MODEL` replaces `llm.model`
    /// - `JOBCREW_PORT` replaces `registration.port`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("JOBCREW_MODEL").filter(|m| !m.trim().is_empty()) {
            self.llm.model = model;
        }

        if let Some(port) = lookup("JOBCREW_PORT") {
            self.registration.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("JOBCREW_PORT is not a valid port: {port}"))
            })?;
        }

        self.validate()
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".jobcrew")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::ValidationError(
                "llm.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.llm.max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "llm.max_iterations must be at least 1".into(),
            ));
        }

        if self.registration.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "registration.name must not be empty".into(),
            ));
        }

        Ok(())
    }
}

/// The three API credentials required before anything runs.
#[derive(Clone)]
pub struct Credentials {
    pub agentverse_api_key: String,
    pub openai_api_key: String,
    pub serper_api_key: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through `lookup`, checking in a fixed order.
    ///
    /// A missing or blank value is reported as [`ConfigError::MissingCredential`]
    /// naming the first absent variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingCredential(name))
        };

        Ok(Self {
            agentverse_api_key: require(AGENTVERSE_API_KEY)?,
            openai_api_key: require(OPENAI_API_KEY)?,
            serper_api_key: require(SERPER_API_KEY)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("agentverse_api_key", &"[REDACTED]")
            .field("openai_api_key", &"[REDACTED]")
            .field("serper_api_key", &"[REDACTED]")
            .finish()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("{0} not found in environment")]
    MissingCredential(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.registration.port, 8001);
        assert!(config.registration.mailbox);
        assert_eq!(config.registration.name, "Job Search Agent");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.llm.model, config.llm.model);
        assert_eq!(parsed.registration.port, config.registration.port);
    }

    #[test]
    fn invalid_temperature_rejected() {
        let mut config = AppConfig::default();
        config.llm.temperature = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_iterations_rejected() {
        let mut config = AppConfig::default();
        config.llm.max_iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.registration.port, 8001);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[llm]\nmodel = \"gpt-4o\"\n\n[registration]\nport = 9100\nmailbox = false\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_iterations, 10);
        assert_eq!(config.registration.port, 9100);
        assert!(!config.registration.mailbox);
        assert_eq!(config.registration.name, "Job Search Agent");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm\nmodel = ").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn env_overrides_model_and_port() {
        let vars = env(&[("JOBCREW_MODEL", "gpt-4.1"), ("JOBCREW_PORT", "8123")]);
        let mut config = AppConfig::default();
        config.apply_overrides(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.llm.model, "gpt-4.1");
        assert_eq!(config.registration.port, 8123);
    }

    #[test]
    fn bad_port_override_rejected() {
        let vars = env(&[("JOBCREW_PORT", "eighty")]);
        let mut config = AppConfig::default();
        let err = config.apply_overrides(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn credentials_all_present() {
        let vars = env(&[
            (AGENTVERSE_API_KEY, "av"),
            (OPENAI_API_KEY, "sk"),
            (SERPER_API_KEY, "sp"),
        ]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.agentverse_api_key, "av");
        assert_eq!(creds.openai_api_key, "sk");
        assert_eq!(creds.serper_api_key, "sp");
    }

    #[test]
    fn each_missing_credential_is_reported() {
        let all = [
            (AGENTVERSE_API_KEY, "av"),
            (OPENAI_API_KEY, "sk"),
            (SERPER_API_KEY, "sp"),
        ];
        for (missing, _) in all {
            let vars: HashMap<String, String> = all
                .iter()
                .filter(|(k, _)| *k != missing)
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
            match err {
                ConfigError::MissingCredential(name) => assert_eq!(name, missing),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let vars = env(&[
            (AGENTVERSE_API_KEY, "av"),
            (OPENAI_API_KEY, "   "),
            (SERPER_API_KEY, "sp"),
        ]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err.to_string(), "OPENAI_API_KEY not found in environment");
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let creds = Credentials {
            agentverse_api_key: "secret-av".into(),
            openai_api_key: "secret-sk".into(),
            serper_api_key: "secret-sp".into(),
        };
        let dbg = format!("{creds:?}");
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("REDACTED"));
    }
}
