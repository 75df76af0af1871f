// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser clients of the converter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::environment::ServerConfig;
use crate::constants::headers;

/// Configure CORS settings for the converter API
///
/// Reads the origin list from `config.cors.allowed_origins`. An empty value or
/// `*` allows any origin; otherwise the value is a comma-separated list.
///
/// ```bash
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://tools.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors.allowed_origins))
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(headers::REQUEST_ID),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([HeaderName::from_static(headers::REQUEST_ID)])
}

fn allowed_origins(raw: &str) -> AllowOrigin {
    if raw.is_empty() || raw == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect();

    if origins.is_empty() {
        // Nothing parsed; behave as if unset
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
