// ABOUTME: Server binary for the unit converter HTTP API and browser form
// ABOUTME: Parses CLI overrides, loads environment configuration, initializes logging, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unit Converter Server Binary
//!
//! Starts the conversion API on the configured address. Command-line flags
//! take precedence over environment variables.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use unit_converter::{config::environment::ServerConfig, logging, server};

#[derive(Parser)]
#[command(name = "unit-converter-server")]
#[command(about = "Unit converter API - length, weight and temperature conversions")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override static asset directory
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    logging::init_from_env()?;

    info!("Starting unit converter");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   List Units:   GET  http://{host}:{port}/api/converter/units/{{category}}");
    info!("   Convert:      POST http://{host}:{port}/api/converter/convert/{{category}}");
    info!("   Health:       GET  http://{host}:{port}/api/health");
    info!("   Readiness:    GET  http://{host}:{port}/api/ready");
    info!("   Browser Form: GET  http://{host}:{port}/");
    info!("=== End of Endpoint List ===");
}
