// ABOUTME: Server bootstrap that opens storage, seeds the catalog and serves the HTTP API
// ABOUTME: Shared by the binary and integration tests so both build the same application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! # Server bootstrap

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::resources::ServerResources;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Open the database, seed reference data and wire every engine
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeded, or the
/// signing secret cannot be generated
pub async fn build_resources(config: ServerConfig) -> Result<Arc<ServerResources>> {
    let database = Database::new(&config.database)
        .await
        .context("Failed to initialize database")?;

    let seeded = database
        .exercises()
        .seed_reference_catalog()
        .await
        .context("Failed to seed exercise catalog")?;
    if seeded > 0 {
        info!(count = seeded, "Seeded reference exercise catalog");
    }

    let auth_manager = AuthManager::from_config(&config.auth)?;
    info!(
        expiry_hours = auth_manager.token_expiry_hours(),
        "Authentication manager initialized"
    );

    Ok(Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    )))
}

/// Build the application router from a configuration
///
/// # Errors
///
/// Returns an error if resource initialization fails
pub async fn build_app(config: ServerConfig) -> Result<Router> {
    let resources = build_resources(config).await?;
    Ok(routes::router(resources))
}

/// Serve the API until ctrl-c
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let port = resources.config.http_port;
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local = listener.local_addr()?;

    info!(%local, "HTTP server listening");
    axum::serve(listener, routes::router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
