// ABOUTME: Error types for the HTTP server, re-exported from converter-core
// ABOUTME: AppError carries an ErrorCode and renders as a JSON error response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The server and the conversion crates share one error type. With the
//! `http-response` feature enabled, [`AppError`] implements axum's
//! `IntoResponse`, so handlers return `AppResult<T>` directly.

pub use converter_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
