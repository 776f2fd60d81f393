mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads configuration from the optional YAML file, then applies the
/// environment overrides the deployment actually sets: `OPENAI_API_KEY`
/// (the upstream credential) and `PORT` (hosting platforms inject it).
///
/// A missing file is not an error; the server runs on defaults plus
/// environment variables alone.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => {
            debug!("Loading configuration from: {}", config_path);
            serde_yaml::from_str(&config_str)?
        }
        Err(_) => {
            debug!("No configuration file at {}, using defaults", config_path);
            Config::default()
        }
    };

    if let Ok(api_key) = env::var("OPENAI_API_KEY") {
        config.llm.api_key = api_key;
    }

    if let Ok(port) = env::var("PORT") {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(_) => return Err(crate::Error::config(format!("Invalid PORT value: {}", port))),
        }
    }

    Ok(config)
}
