// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process HTTP driver and router builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use std::path::Path;

use unit_converter::config::environment::{Environment, ServerConfig};

/// Configuration for tests, serving static assets from `static_dir`
#[allow(dead_code)]
pub fn test_config(static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        static_dir: static_dir.to_path_buf(),
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Full application router with a static directory that holds no files
#[allow(dead_code)]
pub fn test_router() -> axum::Router {
    let config = test_config(Path::new("does-not-exist"));
    unit_converter::server::build_router(&config)
}
