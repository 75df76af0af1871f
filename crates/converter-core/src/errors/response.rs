// ABOUTME: Axum response integration for AppError
// ABOUTME: Renders errors as JSON bodies with the status mapped from their ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = %self.code, message = %self.message, "Request failed");
        } else {
            warn!(code = %self.code, message = %self.message, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
