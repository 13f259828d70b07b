//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_run_migrations() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
/// Settings required to start the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Apply embedded migrations on startup.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}
