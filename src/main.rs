use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vehicle_store::config::ServerConfig;
use vehicle_store::{http, InMemoryVehicleStore, VehicleJsonFile};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    init_tracing();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "vehicle server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = match &config.data {
        Some(path) => InMemoryVehicleStore::with_vehicles(VehicleJsonFile::new(path).load()?),
        None => {
            tracing::info!("no data file configured, starting with an empty store");
            InMemoryVehicleStore::new()
        }
    };

    http::serve(Arc::new(store), &config.bind).await?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
