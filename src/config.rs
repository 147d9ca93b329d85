//! Server configuration, from command-line flags or the environment.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Configuration for the `vehicle-server` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "vehicle-server", version, about = "Serve an in-memory vehicle registry over HTTP")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "VEHICLES_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// JSON file of vehicles to seed the store with. Starts empty when omitted.
    #[arg(long, env = "VEHICLES_DATA")]
    pub data: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data: None,
        }
    }
}
