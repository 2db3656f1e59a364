//! PigWeb harm–benefit calculator server
//!
//! Run with: cargo run -p pigweb-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use pigweb_common::AppConfig;
use pigweb_web::{router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pigweb=debug,info")),
        )
        .init();

    let config = AppConfig::load()?;
    info!(
        bind = %config.server.bind,
        gene_lookup = config.gene_lookup.enabled,
        "Starting PigWeb server..."
    );

    let bind = config.server.bind.clone();
    let state = AppState::new(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("🐖 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
