mod api_doc;
mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod seed;
mod state;

use catalog::CatalogStore;
use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("route-catalog starting");

    let config = Config::from_env()?;
    config.log_startup();

    let catalog = CatalogStore::seeded();
    tracing::info!("Catalog seeded with {} routes", catalog.route_count().await);

    let app = routes::router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
