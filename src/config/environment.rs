// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, static asset directory, CORS, and request limits from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the converter server

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{defaults, env_config, env_vars};
use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational output
    #[default]
    Info,
    /// Debug output, including each conversion
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    ///
    /// A full filter directive such as `info,tower_http=debug` is accepted and
    /// its leading level is used.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let level = s.split(',').next().unwrap_or_default().trim();
        match level.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Directory served for every non-API path
    pub static_dir: PathBuf,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::PORT,
            static_dir: PathBuf::from(defaults::STATIC_DIR),
            cors: CorsConfig::default(),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            max_body_bytes: defaults::MAX_BODY_BYTES,
            log_level: LogLevel::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a numeric variable cannot be parsed or a
    /// limit is zero.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let request_timeout_secs = parse_env_value(
            env_vars::REQUEST_TIMEOUT_SECS,
            env_config::request_timeout_secs(),
            defaults::REQUEST_TIMEOUT_SECS,
        )?;
        let max_body_bytes = parse_env_value(
            env_vars::MAX_BODY_BYTES,
            env_config::max_body_bytes(),
            defaults::MAX_BODY_BYTES,
        )?;

        let config = Self {
            host: env_config::host(),
            http_port: parse_env_value(env_vars::PORT, env_config::port(), defaults::PORT)?,
            static_dir: PathBuf::from(env_config::static_dir()),
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_body_bytes,
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_config::environment()),
        };

        config.validate()?;
        info!("Configuration loaded from environment");
        Ok(config)
    }

    /// Check limits that parse correctly but cannot work
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the request timeout or the body limit is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.request_timeout.is_zero() {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_vars::REQUEST_TIMEOUT_SECS
            )));
        }
        if self.max_body_bytes == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_vars::MAX_BODY_BYTES
            )));
        }
        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Unit Converter Configuration:\n\
             - Environment: {}\n\
             - Bind Address: {}\n\
             - Static Assets: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Body Size: {} bytes\n\
             - Log Level: {}",
            self.environment,
            self.bind_address(),
            self.static_dir.display(),
            self.cors.allowed_origins,
            self.request_timeout.as_secs(),
            self.max_body_bytes,
            self.log_level,
        )
    }
}

/// Parse an optional raw environment value, falling back to `default` when unset
fn parse_env_value<T>(key: &str, raw: Option<String>, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid value for {key}: '{value}' ({e})"))
        }),
    }
}
