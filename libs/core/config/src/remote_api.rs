use crate::{env_flag, env_or_default, env_parse, ConfigError, Environment, FromEnv};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://localhost:5003";

/// Connection settings for the remote events API.
#[derive(Clone, Debug)]
pub struct RemoteApiConfig {
    /// Origin of the remote API, e.g. `https://localhost:5003`
    pub base_url: String,
    /// Skip TLS certificate validation. Only ever true in development.
    pub accept_invalid_certs: bool,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Match JSON field names case-insensitively when decoding responses
    pub case_insensitive: bool,
}

impl RemoteApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load settings, letting the environment decide the TLS default.
    ///
    /// - REMOTE_API_BASE_URL: defaults to https://localhost:5003
    /// - REMOTE_API_ACCEPT_INVALID_CERTS: defaults to true in development,
    ///   forced to false in production
    /// - REMOTE_API_TIMEOUT_SECS: defaults to 30
    /// - REMOTE_API_CONNECT_TIMEOUT_SECS: defaults to 10
    /// - REMOTE_API_CASE_INSENSITIVE: defaults to true
    pub fn from_env_for(environment: &Environment) -> Result<Self, ConfigError> {
        let base_url = env_or_default("REMOTE_API_BASE_URL", DEFAULT_BASE_URL);
        let requested_insecure =
            env_flag("REMOTE_API_ACCEPT_INVALID_CERTS", environment.is_development())?;

        if requested_insecure && environment.is_production() {
            tracing::warn!(
                "REMOTE_API_ACCEPT_INVALID_CERTS ignored: certificate validation stays on in production"
            );
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            accept_invalid_certs: requested_insecure && environment.is_development(),
            timeout: Duration::from_secs(env_parse("REMOTE_API_TIMEOUT_SECS", 30u64)?),
            connect_timeout: Duration::from_secs(env_parse(
                "REMOTE_API_CONNECT_TIMEOUT_SECS",
                10u64,
            )?),
            case_insensitive: env_flag("REMOTE_API_CASE_INSENSITIVE", true)?,
        })
    }
}

impl FromEnv for RemoteApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_for(&Environment::from_env())
    }
}

impl Default for RemoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            accept_invalid_certs: false,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            case_insensitive: true,
        }
    }
}
