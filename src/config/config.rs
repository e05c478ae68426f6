use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::store::StoreConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: the backend to bootstrap against, where the
/// token lives, and logging.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    pub backend: BackendConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Where and how to reach the marketplace backend.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct BackendConfig {
    /// Base URL of the REST API, e.g. "https://api.example.com".
    pub base_url: String,
    /// Path of the authenticated current-user endpoint.
    #[serde(default = "default_current_user_path")]
    pub current_user_path: String,
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
    /// Whether an explicit 401/403 during bootstrap deletes the persisted
    /// token. Transient failures never do.
    #[serde(default = "default_clear_token_on_rejection")]
    pub clear_token_on_rejection: bool,
}

fn default_current_user_path() -> String {
    "/users/current".to_string()
}

fn default_timeout_in_ms() -> u64 {
    3000
}

fn default_clear_token_on_rejection() -> bool {
    true
}

/// Load config from "config.yaml" in the current directory, with
/// CAREERGATE_-prefixed environment variables taking precedence.
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new()
        .merge(Yaml::file("./config.yaml"))
        .merge(Env::prefixed("CAREERGATE_").split("__"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version: "1.0.0"
backend:
  base_url: "https://api.example.com"
store:
  type: file
  path: "./session-token.json"
logging:
  level: "info"
  format: "console"
"#;

    #[test]
    fn test_parse_with_defaults() {
        let config: Config = Figment::new()
            .merge(Yaml::string(SAMPLE))
            .extract()
            .expect("sample config should parse");
        let Config::ConfigV1(config) = config;

        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.current_user_path, "/users/current");
        assert_eq!(config.backend.timeout_in_ms, 3000);
        assert!(config.backend.clear_token_on_rejection);
        assert!(matches!(config.store, StoreConfig::File(_)));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let result = Figment::new()
            .merge(Yaml::string(r#"version: "9.9.9""#))
            .extract::<Config>();
        assert!(result.is_err());
    }
}
