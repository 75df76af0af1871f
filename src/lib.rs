// ABOUTME: Main library entry point for the unit converter HTTP service
// ABOUTME: Wires configuration, logging, middleware, and routes around the conversion crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Unit Converter
//!
//! An HTTP service converting values between units of length, weight and
//! temperature, plus a small browser form served as static assets.
//!
//! ## Architecture
//!
//! - **`converter-core`**: error taxonomy, unit tables, request/result models
//! - **`converter-engine`**: unit catalog, rate-table and temperature conversions
//! - **this crate**: configuration, logging, middleware, routes and the server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use unit_converter::config::environment::ServerConfig;
//! use unit_converter::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     unit_converter::server::run(config).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Environment variable names and default values
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (request IDs, tracing, CORS)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
