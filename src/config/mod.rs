// ABOUTME: Configuration module root for the converter server
// ABOUTME: Exposes environment-driven server settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and server settings
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, ServerConfig};
