use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_db_connect_timeout() -> u64 {
  5
}

fn default_cors_origins() -> Vec<String> {
  vec![
    "http://localhost:3000".to_string(),
    "http://ahaha-craft.org".to_string(),
    "https://ahaha-craft.org".to_string(),
  ]
}

fn default_db_acquire_timeout() -> u64 {
  3
}

fn default_generation_timeout() -> u64 {
  30
}

fn default_openai_model() -> String {
  "gpt-4.1".to_string()
}

fn default_system_prompt() -> String {
  "あなたは心理テスト「Hue Are You」の結果生成AIです。\n\
   各ワードに対して選択された色から心理的特徴を分析し、最終的なrgb値(0〜255)と2〜4文程度の日本語メッセージを返してください。\n\
   分析には、選ばれた色に意識を向けるより「普通の人ならこう選ぶところをこの人はこの色を選んだので、こういう人なのだろう」という推察もしてください。\n\
   メッセージは分析の結果を伝えるのではなくふんわりした内容で、いいサービスだったと思ってもらえる分にしましょう。"
    .to_string()
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  pub security: SecurityConfig,
  pub hue: HueConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Origins the browser may call the API from
  #[serde(default = "default_cors_origins")]
  pub cors_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  pub url: String,
  pub max_connections: u32,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
}

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
  pub session_ttl_seconds: u64,
}

/// Result-generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HueConfig {
  /// OpenAI-compatible Responses API endpoint
  pub api_endpoint: String,
  pub api_key: String,
  #[serde(default = "default_openai_model")]
  pub model: String,
  #[serde(default = "default_system_prompt")]
  pub system_prompt: String,
  #[serde(default = "default_generation_timeout")]
  pub request_timeout_seconds: u64,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Sources are layered, later ones override earlier ones:
  /// 1. config/default.toml
  /// 2. config/local.toml (if present)
  /// 3. config/{RUN_MODE}.toml (if present)
  /// 4. Environment variables with the HUEAREYOU_ prefix and `__` as the
  ///    section separator, e.g. `HUEAREYOU_SERVER__PORT=8080`,
  ///    `HUEAREYOU_HUE__API_KEY=sk-...`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` when the default file is missing, a file
  /// contains invalid TOML, or a required value is absent or mistyped.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("HUEAREYOU")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_deserializes_with_defaults() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [database]
            url = "postgres://localhost/hueareyou"
            max_connections = 5

            [security]
            session_ttl_seconds = 86400

            [hue]
            api_endpoint = "https://api.openai.com/v1/responses"
            api_key = "sk-test"
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.cors_origins.len(), 3); // default
    assert_eq!(config.server.cors_origins[0], "http://localhost:3000");
    assert_eq!(config.database.url, "postgres://localhost/hueareyou");
    assert_eq!(config.database.connect_timeout_seconds, 5); // default
    assert_eq!(config.database.acquire_timeout_seconds, 3); // default
    assert_eq!(config.security.session_ttl_seconds, 86400);
    assert_eq!(config.hue.model, "gpt-4.1"); // default
    assert!(!config.hue.system_prompt.is_empty()); // default
    assert_eq!(config.hue.request_timeout_seconds, 30); // default
  }
}
