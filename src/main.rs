use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use football_standings::client::HttpFootballData;
use football_standings::config::Config;
use football_standings::routes;
use football_standings::service::StandingService;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting football standings server...");

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match HttpFootballData::new(&config.upstream) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create upstream client: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Using football API at {}", config.upstream.base_url);

    let app = routes::router(StandingService::new(client));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
