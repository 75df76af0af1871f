// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, per-request spans, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use tracing::{
    propagate_request_id_layer, request_id_header, set_request_id_layer, trace_layer,
    MakeRequestUuid, RequestSpan,
};
