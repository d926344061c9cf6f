//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_DATABASE_URL;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub log_filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    /// Empty, or containing `*`, means any origin.
    pub allowed_origins: Vec<String>,
}

impl CorsSettings {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl AppConfig {
    /// Loads defaults, then `config/default`, `config/{APP_ENV}`, `APP__*`-style
    /// environment variables, and finally `DATABASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let database_url = std::env::var("DATABASE_URL").ok();
        Self::build(&env, database_url)
    }

    pub fn build(env: &str, database_url: Option<String>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000)?
            .set_default("app.name", "API de Cadastro de Clientes")?
            .set_default("app.log_filter", "info,clientes_api=debug,clientes_core=debug")?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .set_override_option("database.url", database_url)?
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::build("test", None).unwrap();
        assert_eq!(config.app.env, "test");
        assert!(config.database.max_connections >= config.database.min_connections);
        assert!(config.cors.allows_any_origin());
    }

    #[test]
    fn test_database_url_override() {
        let url = "postgres://user:secret@db:5432/other".to_string();
        let config = AppConfig::build("test", Some(url.clone())).unwrap();
        assert_eq!(config.database.url, url);
    }

    #[test]
    fn test_cors_restricted() {
        let cors = CorsSettings {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        };
        assert!(!cors.allows_any_origin());

        let wildcard = CorsSettings {
            allowed_origins: vec!["*".to_string()],
        };
        assert!(wildcard.allows_any_origin());
    }
}
