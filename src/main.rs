use anyhow::Context;
use clap::Parser;
use movies_api::{AppConfig, AppState, MovieService, MovieStore, build_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movies_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::parse();

    let store = match &config.data {
        Some(path) => MovieStore::from_json_file(path)
            .with_context(|| format!("failed to load movies from {}", path.display()))?,
        None => MovieStore::bundled().context("failed to load bundled movies")?,
    };

    let state = AppState::new(MovieService::new(store));
    let router = build_router(state, config.allowed_origins());

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
