// ABOUTME: Liveness and readiness routes for the unit converter process
// ABOUTME: Both answer from memory; conversions need no backing store to be ready
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health routes
//!
//! - `GET /health` reports that the process is answering requests
//! - `GET /ready` additionally reports the build version
//!
//! Unit tables are compiled in, so readiness never waits on anything.

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::service_names;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the liveness and readiness routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::UNIT_CONVERTER,
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn handle_ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "service": service_names::UNIT_CONVERTER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }
}
