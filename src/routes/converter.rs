// ABOUTME: Converter route handlers for listing units and performing conversions
// ABOUTME: Thin axum handlers delegating to UnitCatalog and ConversionEngine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Converter routes
//!
//! - `GET /converter/units/:category` lists unit codes and labels
//! - `POST /converter/convert/:category` converts a value between two units
//!
//! Both are mounted under `/api` by [`crate::server::build_router`].

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use converter_core::models::{Category, ConversionInput};
use converter_engine::{ConversionEngine, UnitCatalog};
use tracing::info;

use crate::errors::AppError;

/// Converter routes implementation
pub struct ConverterRoutes;

impl ConverterRoutes {
    /// Create all converter routes
    pub fn routes() -> Router {
        Router::new()
            .route("/converter/units/:category", get(Self::handle_list_units))
            .route("/converter/convert/:category", post(Self::handle_convert))
    }

    /// Handle GET /api/converter/units/:category
    async fn handle_list_units(Path(category): Path<String>) -> Result<Response, AppError> {
        let listing = UnitCatalog::list_units(&category)?;
        Ok((StatusCode::OK, Json(listing)).into_response())
    }

    /// Handle POST /api/converter/convert/:category
    ///
    /// The category is checked before the body so an unknown category is
    /// reported as such even when the body is also malformed.
    async fn handle_convert(
        Path(category): Path<String>,
        body: Result<Json<ConversionInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let category: Category = category.parse()?;
        let Json(input) = body.map_err(Self::body_error)?;

        let request = input.into_request(category)?;
        let result = ConversionEngine::execute(request)?;

        info!(
            category = %category,
            from_unit = %result.from_unit,
            to_unit = %result.to_unit,
            "Conversion completed"
        );

        Ok((StatusCode::OK, Json(result)).into_response())
    }

    fn body_error(rejection: JsonRejection) -> AppError {
        AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
            .with_source(rejection)
    }
}
