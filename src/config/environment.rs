// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Environment-based configuration management for production deployment

use crate::constants::{auth, defaults, env_config};
use anyhow::{Context, Result};
use burjo_intelligence::{HoursFallback, OperatingHoursSettings};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite`, used by tests
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// # Errors
    ///
    /// Returns an error for non-`SQLite` URLs
    pub fn parse_url(s: &str) -> Result<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str.trim_start_matches("//")),
                })
            }
        } else if s.contains("://") {
            anyhow::bail!("Unsupported database URL scheme: {s}")
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/burjo.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Token and password hashing settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for JWT signing; generated at startup when absent
    pub jwt_secret: Option<String>,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any
    pub allowed_origins: Vec<String>,
}

/// Conversational endpoint settings
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Daily service window
    pub operating_hours: OperatingHoursSettings,
    /// Phrases that short-circuit to the emergency reply
    pub emergency_keywords: Vec<String>,
    /// Emergency reply text
    pub emergency_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            operating_hours: OperatingHoursSettings::default(),
            emergency_keywords: parse_list(defaults::CHAT_EMERGENCY_KEYWORDS),
            emergency_message: defaults::CHAT_EMERGENCY_MESSAGE.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database location
    pub database: DatabaseUrl,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Chat configuration
    pub chat: ChatConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed, or if
    /// production is missing a `JWT_SECRET`
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let fallback_raw = env_var_or("CHAT_HOURS_FALLBACK", defaults::CHAT_HOURS_FALLBACK);
        let fallback = HoursFallback::parse(&fallback_raw).unwrap_or_else(|| {
            warn!(value = %fallback_raw, "Unknown CHAT_HOURS_FALLBACK, keeping chat open");
            HoursFallback::AlwaysOpen
        });

        let config = Self {
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
            database: DatabaseUrl::parse_url(&env_config::database_url())
                .context("Invalid DATABASE_URL value")?,
            auth: AuthConfig {
                jwt_secret: env_config::jwt_secret(),
                jwt_expiry_hours: env_var_or(
                    "JWT_EXPIRY_HOURS",
                    &auth::DEFAULT_JWT_EXPIRY_HOURS.to_string(),
                )
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
                bcrypt_cost: env_var_or("BCRYPT_COST", &defaults::BCRYPT_COST.to_string())
                    .parse()
                    .context("Invalid BCRYPT_COST value")?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    "CORS_ALLOWED_ORIGINS",
                    defaults::CORS_ALLOWED_ORIGINS,
                )),
            },
            chat: ChatConfig {
                operating_hours: OperatingHoursSettings {
                    start_time: env_var_or("CHAT_START_TIME", defaults::CHAT_START_TIME),
                    end_time: env_var_or("CHAT_END_TIME", defaults::CHAT_END_TIME),
                    timezone: env_var_or("CHAT_TIMEZONE", defaults::CHAT_TIMEZONE),
                    fallback,
                    out_of_hours_message: env::var("CHAT_OUT_OF_HOURS_MESSAGE")
                        .unwrap_or_else(|_| OperatingHoursSettings::default().out_of_hours_message),
                },
                emergency_keywords: parse_list(&env_var_or(
                    "CHAT_EMERGENCY_KEYWORDS",
                    defaults::CHAT_EMERGENCY_KEYWORDS,
                )),
                emergency_message: env_var_or(
                    "CHAT_EMERGENCY_MESSAGE",
                    defaults::CHAT_EMERGENCY_MESSAGE,
                ),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Configuration for tests: in-memory database, fixed secret, cheap hashing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            http_port: 0,
            log_level: LogLevel::Warn,
            environment: Environment::Testing,
            database: DatabaseUrl::Memory,
            auth: AuthConfig {
                jwt_secret: Some("test-secret-for-burjo-integration-tests".to_owned()),
                jwt_expiry_hours: auth::DEFAULT_JWT_EXPIRY_HOURS,
                bcrypt_cost: 4,
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_owned()],
            },
            chat: ChatConfig::default(),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error when values are inconsistent
    pub fn validate(&self) -> Result<()> {
        if self.environment.is_production() && self.auth.jwt_secret.is_none() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        if self.auth.jwt_expiry_hours <= 0 {
            anyhow::bail!("JWT_EXPIRY_HOURS must be positive");
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            anyhow::bail!("BCRYPT_COST must be between 4 and 31");
        }
        if self.chat.emergency_keywords.is_empty() {
            warn!("No emergency keywords configured; emergency scan disabled");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Burjo Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - JWT Secret: {}\n\
             - Token Expiry: {}h\n\
             - CORS Origins: {}\n\
             - Chat Hours: {}-{} {} (fallback: {})\n\
             - Emergency Keywords: {}",
            self.http_port,
            self.environment,
            self.log_level,
            if self.database.is_memory() {
                "SQLite (memory)"
            } else {
                "SQLite"
            },
            if self.auth.jwt_secret.is_some() {
                "Configured"
            } else {
                "Generated"
            },
            self.auth.jwt_expiry_hours,
            self.cors.allowed_origins.join(", "),
            self.chat.operating_hours.start_time,
            self.chat.operating_hours.end_time,
            self.chat.operating_hours.timezone,
            self.chat.operating_hours.fallback.as_str(),
            self.chat.emergency_keywords.len(),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a comma-separated list, dropping blanks
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        parse_list(origins_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://burjo.id,"),
            vec!["http://localhost:3000", "https://burjo.id"]
        );
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        let file = DatabaseUrl::parse_url("sqlite:./test.db").unwrap();
        assert_eq!(file.to_connection_string(), "sqlite:./test.db");
        assert!(!file.is_memory());

        assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());
        assert!(DatabaseUrl::parse_url("./some/path.db").is_ok());
        assert!(DatabaseUrl::parse_url("postgresql://localhost/db").is_err());
    }

    #[test]
    fn test_validation_rejects_production_without_secret() {
        let mut config = ServerConfig::for_testing();
        config.environment = Environment::Production;
        config.auth.jwt_secret = None;
        assert!(config.validate().is_err());

        config.auth.jwt_secret = Some("s3cret".to_owned());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_bcrypt_cost() {
        let mut config = ServerConfig::for_testing();
        config.auth.bcrypt_cost = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_hides_secret() {
        let config = ServerConfig::for_testing();
        let summary = config.summary();
        assert!(summary.contains("JWT Secret: Configured"));
        assert!(!summary.contains("test-secret"));
        assert!(!format!("{:?}", config.auth).contains("test-secret"));
    }
}
