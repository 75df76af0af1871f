// ABOUTME: HTTP server assembly: router, middleware stack, static assets, and graceful shutdown
// ABOUTME: Mounts converter and health routes under /api and serves the browser form elsewhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server assembly
//!
//! Request flow, outermost first: request ID assignment, tracing span,
//! request ID propagation, body limit, CORS, timeout, then routing. Paths
//! under `/api` that match no route get a JSON `RESOURCE_NOT_FOUND` error;
//! every other path is served from the static asset directory.

use axum::{extract::OriginalUri, http::StatusCode, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, timeout::TimeoutLayer};
use tracing::{info, warn};

use crate::config::environment::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::middleware::{
    propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer,
};
use crate::routes::{ConverterRoutes, HealthRoutes};

/// Build the complete application router
#[must_use]
pub fn build_router(config: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(ConverterRoutes::routes())
        .merge(HealthRoutes::routes())
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
                .layer(setup_cors(config))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                )),
        )
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(config: ServerConfig) -> AppResult<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::internal(format!("Failed to bind {address}")).with_source(e)
    })?;

    serve(listener, &config).await
}

/// Serve on an already bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, config: &ServerConfig) -> AppResult<()> {
    let app = build_router(config);

    if let Ok(local) = listener.local_addr() {
        info!(address = %local, "Unit converter listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("HTTP server failed").with_source(e))?;

    info!("Unit converter stopped");
    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
