/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * the optional PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * Later sources override earlier ones:
 * 1. Built-in defaults
 * 2. A TOML file named by `SPORTSHUB_CONFIG` (optional)
 * 3. Environment variables (`.env` is loaded first if present):
 *    `JWT_SECRET`, `DATABASE_URL`, `SERVER_HOST`, `SERVER_PORT`,
 *    `TOKEN_TTL_DAYS`, `LOGIN_PATH`
 *
 * # Error Handling
 *
 * A missing or empty signing secret is a hard error: the server refuses to
 * start. A missing or unreachable database is not; database-backed
 * handlers answer a generic 500 instead.
 *
 * # Example TOML
 *
 * ```toml
 * jwt_secret = "change-me"
 * port = 8080
 * token_ttl_days = 7
 * public_prefixes = ["/", "/login", "/api/auth/login"]
 * ```
 */

use chrono::Duration;
use serde::Deserialize;
use sqlx::PgPool;
use std::path::Path;
use thiserror::Error;

use crate::backend::auth::sessions::{DEFAULT_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS};
use crate::backend::middleware::routes::{
    RouteClassifier, DEFAULT_PROTECTED_PREFIXES, DEFAULT_PUBLIC_PREFIXES,
};

/// Environment variable naming the optional TOML config file
pub const CONFIG_PATH_ENV: &str = "SPORTSHUB_CONFIG";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    /// Where the middleware redirects rejected requests
    pub login_path: String,
    /// Name of the session cookie
    pub cookie_name: String,
    pub public_prefixes: Vec<String>,
    pub protected_prefixes: Vec<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_configured", &self.database_url.is_some())
            .field("token_ttl", &self.token_ttl)
            .field("login_path", &self.login_path)
            .field("cookie_name", &self.cookie_name)
            .field("public_prefixes", &self.public_prefixes)
            .field("protected_prefixes", &self.protected_prefixes)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from `.env`, the optional TOML file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = Self::builder();
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            tracing::info!("Loading configuration file {}", path);
            builder = builder.apply_file(FileConfig::from_path(path)?);
        }
        builder.apply_env(|key| std::env::var(key).ok())?.build()
    }

    /// Route classifier built from the configured prefix lists
    pub fn classifier(&self) -> RouteClassifier {
        RouteClassifier::new(self.public_prefixes.clone(), self.protected_prefixes.clone())
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Optional settings read from a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub jwt_secret: Option<String>,
    pub token_ttl_days: Option<i64>,
    pub login_path: Option<String>,
    pub cookie_name: Option<String>,
    pub public_prefixes: Option<Vec<String>>,
    pub protected_prefixes: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_days: Option<i64>,
    login_path: Option<String>,
    cookie_name: Option<String>,
    public_prefixes: Option<Vec<String>>,
    protected_prefixes: Option<Vec<String>>,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_days(mut self, days: i64) -> Self {
        self.token_ttl_days = Some(days);
        self
    }

    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = Some(name.into());
        self
    }

    pub fn public_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.public_prefixes = Some(prefixes);
        self
    }

    pub fn protected_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.protected_prefixes = Some(prefixes);
        self
    }

    /// Fill in every value the file sets
    pub fn apply_file(mut self, file: FileConfig) -> Self {
        self.host = file.host.or(self.host);
        self.port = file.port.or(self.port);
        self.database_url = file.database_url.or(self.database_url);
        self.jwt_secret = file.jwt_secret.or(self.jwt_secret);
        self.token_ttl_days = file.token_ttl_days.or(self.token_ttl_days);
        self.login_path = file.login_path.or(self.login_path);
        self.cookie_name = file.cookie_name.or(self.cookie_name);
        self.public_prefixes = file.public_prefixes.or(self.public_prefixes);
        self.protected_prefixes = file.protected_prefixes.or(self.protected_prefixes);
        self
    }

    /// Override values from environment variables
    ///
    /// `lookup` is `std::env::var` in production and a map in tests.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = Some(host);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                field: "SERVER_PORT",
                message: e.to_string(),
            })?;
            self.port = Some(port);
        }
        if let Some(days) = lookup("TOKEN_TTL_DAYS") {
            let days = days.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                field: "TOKEN_TTL_DAYS",
                message: e.to_string(),
            })?;
            self.token_ttl_days = Some(days);
        }
        if let Some(path) = lookup("LOGIN_PATH") {
            self.login_path = Some(path);
        }
        Ok(self)
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let ttl_days = self.token_ttl_days.unwrap_or(DEFAULT_TOKEN_TTL_DAYS);
        let token_ttl = Duration::try_days(ttl_days)
            .filter(|_| (1..=MAX_TOKEN_TTL_DAYS).contains(&ttl_days))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "token_ttl_days",
                message: format!("must be between 1 and {}", MAX_TOKEN_TTL_DAYS),
            })?;

        let login_path = self.login_path.unwrap_or_else(|| "/login".to_string());
        check_path("login_path", &login_path)?;

        let public_prefixes = self.public_prefixes.unwrap_or_else(|| to_owned(DEFAULT_PUBLIC_PREFIXES));
        let protected_prefixes = self
            .protected_prefixes
            .unwrap_or_else(|| to_owned(DEFAULT_PROTECTED_PREFIXES));
        for prefix in public_prefixes.iter().chain(protected_prefixes.iter()) {
            check_path("route prefix", prefix)?;
        }

        let cookie_name = self.cookie_name.unwrap_or_else(|| "token".to_string());
        if cookie_name.is_empty() || cookie_name.contains(&[';', '=', ' '][..]) {
            return Err(ConfigError::InvalidValue {
                field: "cookie_name",
                message: format!("'{}' is not a valid cookie name", cookie_name),
            });
        }

        Ok(ServerConfig {
            host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: self.port.unwrap_or(3000),
            database_url: self.database_url.filter(|url| !url.is_empty()),
            jwt_secret,
            token_ttl,
            login_path,
            cookie_name,
            public_prefixes,
            protected_prefixes,
        })
    }
}

fn to_owned(prefixes: &[&str]) -> Vec<String> {
    prefixes.iter().map(|p| p.to_string()).collect()
}

fn check_path(field: &'static str, path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::InvalidValue {
            field,
            message: format!("'{}' must start with '/'", path),
        });
    }
    Ok(())
}

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Creates a PostgreSQL connection pool from the configured URL
/// 2. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if database is successfully configured
/// - `None` if no URL is configured or connection fails
pub async fn load_database(config: &ServerConfig) -> DatabaseConfig {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
