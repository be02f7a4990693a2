use core_config::remote_api::RemoteApiConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Portal configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub remote_api: RemoteApiConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set
        let remote_api = RemoteApiConfig::from_env_for(&environment)?;

        Ok(Self {
            app: app_info!(),
            server,
            remote_api,
            environment,
        })
    }
}
