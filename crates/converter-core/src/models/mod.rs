// ABOUTME: Conversion data models shared by the engine and the HTTP layer
// ABOUTME: Re-exports categories, conversion requests, and conversion results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Conversion category enumeration
pub mod category;
/// Per-request conversion inputs and outputs
pub mod conversion;

pub use category::Category;
pub use conversion::{ConversionInput, ConversionRequest, ConversionResult};
