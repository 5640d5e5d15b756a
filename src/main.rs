use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use locallift_api::api::{create_router, AppState};
use locallift_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locallift_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        seeded = config.seed_catalogue,
        new_listing_cutoff_year = config.new_listing_cutoff_year,
        "Server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
