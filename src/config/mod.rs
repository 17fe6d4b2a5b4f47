// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes environment-driven server, auth, CORS, and chat configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Configuration module for the Burjo server
//!
//! All runtime settings come from environment variables (optionally loaded
//! from a `.env` file) through [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AuthConfig, ChatConfig, CorsConfig, DatabaseUrl, Environment, LogLevel, ServerConfig,
};
