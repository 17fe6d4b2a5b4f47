// ABOUTME: Main library entry point for the Burjo fitness backend
// ABOUTME: Exposes configuration, persistence, authentication and the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

#![deny(unsafe_code)]

//! # Burjo Server
//!
//! HTTP backend for personal fitness tracking. Users register, keep a health
//! profile, log their mood and plan a weekly schedule. A rule engine maps
//! health conditions to a risk category that filters exercise
//! recommendations and personalizes chat replies.
//!
//! The decision logic lives in `burjo-intelligence`; this crate supplies
//! storage, authentication and routing around it.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use burjo_server::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = burjo_server::server::build_resources(config).await?;
//!     burjo_server::server::run(resources).await
//! }
//! ```

/// Token issuance and password hashing
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Server constants and environment accessors
pub mod constants;

/// `SQLite` persistence
pub mod database;

/// Error types shared with the domain crates
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Bootstrap and serve
pub mod server;
