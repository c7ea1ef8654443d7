use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interest_match::{
    config::Config,
    routes::{create_router, AppState},
    services::load_from_source,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting interest-match v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config);

    // Best effort: on failure the bundled dataset stays active
    if let Some(source) = &state.dataset_source {
        if let Err(e) = load_from_source(&state.dataset, source.as_ref()).await {
            tracing::warn!(error = %e, "Using bundled default dataset");
        }
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server running on http://{}", config.bind_address());
    axum::serve(listener, app).await?;

    Ok(())
}
