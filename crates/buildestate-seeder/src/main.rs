use anyhow::Context;
use buildestate_core::models::SeederConfig;
use buildestate_core::services::MongoUserStore;
use buildestate_seeder::{AdminSeed, EXIT_FAILURE, seed_admin};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    info!("Starting BuildEstate admin seeder");

    let store = match connect().await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Failed to create admin user");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    ExitCode::from(seed_admin(&store, &AdminSeed::default()).await)
}

async fn connect() -> anyhow::Result<MongoUserStore> {
    let config = SeederConfig::from_env()?;
    MongoUserStore::connect(&config.mongo_uri)
        .await
        .context("Failed to connect to MongoDB")
}
