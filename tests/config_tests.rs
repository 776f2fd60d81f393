use educa_relay::config::{self, Config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

use common::test_utils::{PARTIAL_CONFIG_YAML, SAMPLE_CONFIG_YAML, create_test_config_file};

#[test]
fn full_yaml_parses() {
    let config: Config = serde_yaml::from_str(SAMPLE_CONFIG_YAML).unwrap();

    assert_eq!(config.llm.api_key, "yaml-api-key");
    assert_eq!(config.llm.model, "gpt-4o");
    assert_eq!(config.llm.max_tokens, 900);
    assert_eq!(config.llm.temperature, 0.5);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.logs.level, "debug");
}

#[test]
fn empty_document_yields_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();

    assert_eq!(config.llm.base_url, "https://api.openai.com");
    assert_eq!(config.llm.api_key, "");
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.llm.max_tokens, 1400);
    assert_eq!(config.llm.temperature, 0.2);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.logs.level, "info");
}

#[test]
fn partial_yaml_fills_the_rest_with_defaults() {
    let config: Config = serde_yaml::from_str(PARTIAL_CONFIG_YAML).unwrap();

    assert_eq!(config.llm.model, "gpt-4o");
    assert_eq!(config.llm.max_tokens, 1400);
    assert_eq!(config.server.port, 3000);
}

#[test]
fn invalid_yaml_is_an_error() {
    let result: Result<Config, _> = serde_yaml::from_str("server:\n  port: \"not-a-number\"");
    assert!(result.is_err());
}

// Environment-variable layering is covered by one test because the process
// environment is shared across the test binary's threads.
#[tokio::test]
async fn load_applies_file_then_env_overrides() {
    let dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(&dir, SAMPLE_CONFIG_YAML)
        .await
        .unwrap();

    unsafe {
        std::env::set_var("CONFIG_PATH", &config_path);
        std::env::set_var("OPENAI_API_KEY", "env-api-key");
        std::env::set_var("PORT", "9090");
    }

    let config = config::load().await.unwrap();

    // env wins over file
    assert_eq!(config.llm.api_key, "env-api-key");
    assert_eq!(config.server.port, 9090);
    // untouched values still come from the file
    assert_eq!(config.llm.model, "gpt-4o");
    assert_eq!(config.server.logs.level, "debug");

    unsafe {
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("PORT");
    }

    // a missing file is not an error, the server runs on defaults
    let missing = dir.path().join("missing.yaml");
    unsafe {
        std::env::set_var("CONFIG_PATH", &missing);
    }
    let config = config::load().await.unwrap();
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.server.port, 3000);

    unsafe {
        std::env::remove_var("CONFIG_PATH");
    }
}
