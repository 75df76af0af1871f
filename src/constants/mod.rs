// ABOUTME: Server-level constants for environment variables, defaults, and service identity
// ABOUTME: Unit tables and display precision live in converter-core; this covers the HTTP process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Conversion data (rate tables, unit labels, precision) lives in
//! `converter_core::constants`.

use std::env;

/// Environment variable names read by [`crate::config::environment::ServerConfig`]
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Listening port
    pub const PORT: &str = "PORT";
    /// Legacy listening port, consulted when `PORT` is unset
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Directory holding the browser form
    pub const STATIC_DIR: &str = "STATIC_DIR";
    /// Comma-separated list of allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Maximum accepted request body size in bytes
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Environment-based configuration
///
/// These accessors return the raw value (or the default) without parsing so
/// that the config loader can report malformed values instead of masking them.
pub mod env_config {
    use super::{defaults, env, env_vars};

    /// Bind address from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_owned())
    }

    /// Raw port value, preferring `PORT` over `HTTP_PORT`
    #[must_use]
    pub fn port() -> Option<String> {
        env::var(env_vars::PORT)
            .or_else(|_| env::var(env_vars::HTTP_PORT))
            .ok()
    }

    /// Static asset directory from environment or default
    #[must_use]
    pub fn static_dir() -> String {
        env::var(env_vars::STATIC_DIR).unwrap_or_else(|_| defaults::STATIC_DIR.to_owned())
    }

    /// Allowed CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var(env_vars::CORS_ALLOWED_ORIGINS)
            .unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.to_owned())
    }

    /// Raw request timeout value
    #[must_use]
    pub fn request_timeout_secs() -> Option<String> {
        env::var(env_vars::REQUEST_TIMEOUT_SECS).ok()
    }

    /// Raw body limit value
    #[must_use]
    pub fn max_body_bytes() -> Option<String> {
        env::var(env_vars::MAX_BODY_BYTES).ok()
    }

    /// Log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var(env_vars::RUST_LOG).unwrap_or_else(|_| defaults::LOG_LEVEL.to_owned())
    }

    /// Deployment environment from environment or default
    #[must_use]
    pub fn environment() -> String {
        env::var(env_vars::ENVIRONMENT).unwrap_or_else(|_| defaults::ENVIRONMENT.to_owned())
    }
}

/// Default configuration values
pub mod defaults {
    /// Listen on every interface
    pub const HOST: &str = "0.0.0.0";
    /// Default HTTP port
    pub const PORT: u16 = 3000;
    /// Default static asset directory, relative to the working directory
    pub const STATIC_DIR: &str = "public";
    /// Allow any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Default per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default body limit (64 KiB)
    pub const MAX_BODY_BYTES: usize = 64 * 1024;
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
    /// Default deployment environment
    pub const ENVIRONMENT: &str = "development";
}

/// Service names
pub mod service_names {
    /// Unit converter service name, used in structured logs
    pub const UNIT_CONVERTER: &str = "unit_converter";
}

/// HTTP header names used by middleware
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
