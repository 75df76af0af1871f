// ABOUTME: Core types and constants for the unit converter service
// ABOUTME: Foundation crate with error handling, conversion models, and unit tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Converter Core
//!
//! Foundation crate providing shared types and constants for the unit
//! converter service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Conversion rate tables, unit labels, and display precision
//! - **models**: `Category`, `ConversionRequest`, and `ConversionResult`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Unit tables and conversion constants organized by category
pub mod constants;

/// Conversion data models (categories, requests, results)
pub mod models;
