use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

use events_portal::config::Config;
use events_portal::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        base_url = %config.remote_api.base_url,
        case_insensitive = config.remote_api.case_insensitive,
        "Using remote events API"
    );

    let state = AppState::new(config)?;
    let app = events_portal::build_app(&state).await?;

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Events portal shutdown complete");
    Ok(())
}
