// ABOUTME: Server-level constants and environment variable accessors
// ABOUTME: Re-exports shared domain limits and supplies defaults for runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Constants for the Burjo HTTP server

use std::env;

pub use burjo_core::constants::{
    auth, chat_limits, exercise_limits, health_limits, mood_limits, ports, profile_limits,
    schedule_limits, service_names,
};

/// Default values used when an environment variable is absent
pub mod defaults {
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/burjo.db";
    /// Default bcrypt work factor
    pub const BCRYPT_COST: u32 = 10;
    /// Default allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";

    /// Chat opening time, local to [`CHAT_TIMEZONE`]
    pub const CHAT_START_TIME: &str = "08:00";
    /// Chat closing time, local to [`CHAT_TIMEZONE`]
    pub const CHAT_END_TIME: &str = "16:00";
    /// IANA zone the chat window is defined in
    pub const CHAT_TIMEZONE: &str = "Asia/Jakarta";
    /// Behavior when the chat window cannot be parsed
    pub const CHAT_HOURS_FALLBACK: &str = "open";
    /// Phrases that trigger the emergency reply
    pub const CHAT_EMERGENCY_KEYWORDS: &str =
        "darurat,emergency,bunuh diri,serangan jantung,pingsan,sesak napas berat";
    /// Reply sent when an emergency phrase is detected
    pub const CHAT_EMERGENCY_MESSAGE: &str = "Ini terdengar seperti keadaan darurat. \
        Segera hubungi layanan gawat darurat 119 atau 112, atau minta bantuan orang terdekat. \
        Jangan lanjutkan olahraga sampai kondisi Anda diperiksa tenaga medis.";
}

/// Environment variable accessors with defaults
pub mod env_config {
    use super::{defaults, env, ports};

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into())
    }

    /// Get deployment environment name from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }

    /// Get the `JWT` signing secret, if configured
    #[must_use]
    pub fn jwt_secret() -> Option<String> {
        env::var("JWT_SECRET").ok().filter(|s| !s.trim().is_empty())
    }
}
