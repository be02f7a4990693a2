//! Application state management.

use remote_api::ApiClient;

/// Shared application state.
///
/// Cloned into each domain's repository; `ApiClient` clones share one
/// connection pool and one set of decode options.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Client for the remote events API
    pub client: ApiClient,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> eyre::Result<Self> {
        let client = ApiClient::from_config(&config.remote_api)
            .map_err(|e| eyre::eyre!("Remote API client setup failed: {}", e))?;

        Ok(Self { config, client })
    }
}
