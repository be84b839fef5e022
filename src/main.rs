use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitcatalog::config::Config;
use fitcatalog::db::{self, Database};
use fitcatalog::migrations::run_migrations;
use fitcatalog::validation::PayloadValidator;
use fitcatalog::version::GIT_VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables first so RUST_LOG can come from .env
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitcatalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Starting fitcatalog {}", GIT_VERSION);
    tracing::info!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(
        &config.database_url,
        config.db_max_conns,
        config.query_timeout,
    )?;

    run_migrations(&pool)?;

    let database = Database::new(pool, config.query_timeout);
    let validator = PayloadValidator::new(config.max_secondary_targets);
    let app = fitcatalog::build_app(database, validator);

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
