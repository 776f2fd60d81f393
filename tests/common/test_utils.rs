use educa_relay::config::{Config, LlmConfig, LogsConfig, ServerConfig};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: create_test_llm_config(),
    }
}

pub fn create_test_llm_config() -> LlmConfig {
    LlmConfig {
        base_url: "https://api.openai.com".to_string(),
        api_key: "test-api-key".to_string(),
        model: "gpt-4o-mini".to_string(),
        max_tokens: 1400,
        temperature: 0.2,
    }
}

/// Same configuration but without the upstream credential.
pub fn create_unconfigured_llm_config() -> LlmConfig {
    LlmConfig {
        api_key: String::new(),
        ..create_test_llm_config()
    }
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> std::io::Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
llm:
  base_url: "https://api.openai.com"
  api_key: "yaml-api-key"
  model: "gpt-4o"
  max_tokens: 900
  temperature: 0.5

server:
  host: "127.0.0.1"
  port: 8081
  logs:
    level: "debug"
"#;

/// Configuration with only one section; everything else must default.
pub const PARTIAL_CONFIG_YAML: &str = r#"
llm:
  model: "gpt-4o"
"#;
