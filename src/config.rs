use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl Config {
    /// Load configuration from the config file with environment overrides.
    ///
    /// Priority (highest to lowest):
    /// 1. Well-known environment variables (PORT, HOST, DATABASE_URL,
    ///    JWT_SECRET, JWT_EXPIRES_IN)
    /// 2. Prefixed environment variables (APP_SERVER__PORT, APP_JWT__SECRET, ...)
    /// 3. Config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.expires_in", 3600)?
            .add_source(File::with_name("config/default").required(false))
            // Example: APP_DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("APP").separator("__"));

        if let Ok(host) = env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }
        if let Ok(secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", secret)?;
        }
        if let Ok(expires_in) = env::var("JWT_EXPIRES_IN") {
            builder = builder.set_override("jwt.expires_in", expires_in)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required environment variables
        env::set_var("DATABASE_URL", "postgres://test");
        env::set_var("JWT_SECRET", "test-secret");

        let config = Config::load().unwrap();

        assert_eq!(config.database.url, "postgres://test");
        assert_eq!(config.jwt.secret, "test-secret");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.jwt.expires_in, 3600);

        // Env vars take precedence over file and defaults
        env::set_var("PORT", "3000");
        env::set_var("HOST", "0.0.0.0");
        env::set_var("JWT_EXPIRES_IN", "600");

        let config = Config::load().unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.jwt.expires_in, 600);
        assert_eq!(config.server_url(), "http://0.0.0.0:3000");

        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("JWT_EXPIRES_IN");
    }
}
