//! São Rafael Library Management System
//!
//! Interactive command-line manager for a small library's catalog,
//! membership roster, and open loans.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca::{cli, config::AppConfig, repository::Repository, services::LendingService, storage::JsonStore};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; logs go to stderr so the menu owns stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblioteca={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting library manager v{}", env!("CARGO_PKG_VERSION"));

    // Load the three collections from durable storage
    let store = Arc::new(JsonStore::new(config.storage.data_dir.clone()));
    let mut repository = Repository::load(store)?;

    tracing::info!(
        data_dir = %config.storage.data_dir.display(),
        books = repository.catalog.list().len(),
        members = repository.roster.list().len(),
        loans = repository.ledger.list().len(),
        "collections loaded"
    );

    let lending = LendingService::new(config.loans.loan_period_days);

    cli::run(&mut repository, &lending)?;

    tracing::info!("Session ended");
    Ok(())
}
