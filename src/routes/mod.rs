// ABOUTME: Route module organization for the converter HTTP endpoints
// ABOUTME: Groups handlers by domain; the server mounts them under /api
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module exposes a `*Routes` struct whose `routes()` returns an
//! axum `Router`. Handlers stay thin and delegate to the conversion crates.

/// Unit listing and conversion routes
pub mod converter;
/// Health check and readiness routes
pub mod health;

/// Converter route handlers
pub use converter::ConverterRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
