//! # Expense Tracker Application
//!
//! Binary that wires together all the components:
//! - Load configuration from flags and environment
//! - Initialize the selected repository adapter
//! - Create the expense service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expense_hex::{ExpenseService, inbound::HttpServer};
use expense_repo::{MemoryCategoryRepo, Storage, build_repo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Structured JSON logs on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,expense_app=debug,expense_hex=debug,expense_repo=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = config::Config::load();

    tracing::info!("Starting expense tracker on port {}", config.port);

    // Build repository (connects and creates the table in database mode)
    let storage = config.storage();
    if matches!(storage, Storage::Database(_)) && config.database_url.is_none() {
        tracing::info!(
            host = %config.db_config.db_host,
            port = config.db_config.db_port,
            database = %config.db_config.db_name,
            "Database mode enabled"
        );
    }
    let repo = build_repo(&storage).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to initialize storage");
    })?;

    let service = ExpenseService::new(repo, MemoryCategoryRepo::seeded());

    let server = HttpServer::new(service);
    server.run(&config.addr()).await?;

    Ok(())
}
