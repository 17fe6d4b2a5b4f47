// ABOUTME: Server binary for the Burjo fitness backend
// ABOUTME: Loads configuration, initializes logging and serves the HTTP API until ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! # Burjo Server Binary

use anyhow::Result;
use burjo_server::{config::ServerConfig, logging, server};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "burjo-server")]
#[command(about = "Burjo fitness backend - risk assessment, recommendations, mood and chat")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database = burjo_server::config::DatabaseUrl::parse_url(&url)?;
    }

    logging::init_from_env()?;

    info!("Starting Burjo server");
    info!("{}", config.summary());

    let resources = server::build_resources(config).await?;
    display_available_endpoints(resources.config.http_port);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://{host}:{port}/health, /ready");
    info!("   Auth:              POST http://{host}:{port}/api/auth/register, /api/auth/login");
    info!("   Account:           GET|DELETE http://{host}:{port}/api/users/me");
    info!("   Profile:           GET|PUT http://{host}:{port}/api/profile");
    info!("   Conditions:        GET|POST|PUT http://{host}:{port}/api/health/conditions");
    info!("   Risk:              GET  http://{host}:{port}/api/health/risk-assessment");
    info!("   Exercises:         http://{host}:{port}/api/exercises[/:id|/recommendations]");
    info!("   Mood:              http://{host}:{port}/api/mood[/history|/latest|/today]");
    info!("   Schedule:          http://{host}:{port}/api/schedule[/:id]");
    info!("   Chat:              http://{host}:{port}/api/chat/send|welcome|help|status");
    info!("=== End of Endpoint List ===");
}
