//! HTTP binding for the retrieval API
//!
//! ```text
//! GET /api/asphalt-methods[/]      ──► api::list_methods
//! GET /api/asphalt-methods/:id[/]  ──► api::get_method
//! anything else                    ──► 404 {"message": "Not found"}
//! ```
//!
//! A single trailing slash is accepted on both routes.

use anyhow::Context;
use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::api::{self, ApiError};
use crate::catalog::{AsphaltMethod, Storage};
use crate::Result;

/// Longest request log line before it is cut with an ellipsis
pub const LOG_LINE_LIMIT: usize = 80;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body())).into_response()
    }
}

/// Build the application router over a shared store
pub fn router<S: Storage + 'static>(storage: Arc<S>) -> Router {
    Router::new()
        .route("/api/asphalt-methods", get(list_methods::<S>))
        .route("/api/asphalt-methods/", get(list_methods::<S>))
        .route("/api/asphalt-methods/:id", get(get_method::<S>))
        .route("/api/asphalt-methods/:id/", get(get_method::<S>))
        .fallback(route_not_found)
        .layer(middleware::from_fn(log_api_requests))
        .with_state(storage)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve<S: Storage + 'static>(storage: Arc<S>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("serving on {}", listener.local_addr()?);

    axum::serve(listener, router(storage))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn list_methods<S: Storage>(
    State(storage): State<Arc<S>>,
) -> std::result::Result<Json<Vec<AsphaltMethod>>, ApiError> {
    api::list_methods(storage.as_ref()).map(Json)
}

async fn get_method<S: Storage>(
    State(storage): State<Arc<S>>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> std::result::Result<Json<AsphaltMethod>, ApiError> {
    let Path(id) = id.map_err(|e| {
        debug!(error = %e, "Rejected method id segment");
        ApiError::InvalidId
    })?;
    api::get_method(storage.as_ref(), &id).map(Json)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Log one line per `/api` request once the response is ready:
/// `GET /api/asphalt-methods/1 200 in 0ms :: {"id":1,...}`
async fn log_api_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;
    if !path.starts_with("/api") {
        return response;
    }

    let elapsed = start.elapsed().as_millis();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    let (parts, body) = response.into_parts();
    let mut line = format!("{} {} {} in {}ms", method, path, parts.status.as_u16(), elapsed);

    if !is_json {
        info!("{}", truncate_log_line(&line));
        return Response::from_parts(parts, body);
    }

    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, path = %path, "Failed to buffer response body for logging");
            return ApiError::Internal.into_response();
        }
    };

    if !bytes.is_empty() {
        line.push_str(" :: ");
        line.push_str(&String::from_utf8_lossy(&bytes));
    }
    info!("{}", truncate_log_line(&line));

    Response::from_parts(parts, Body::from(bytes))
}

/// Cut `line` to [`LOG_LINE_LIMIT`] characters, the last being `…`
pub fn truncate_log_line(line: &str) -> String {
    if line.chars().count() <= LOG_LINE_LIMIT {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(LOG_LINE_LIMIT - 1).collect();
    cut.push('\u{2026}');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_are_untouched() {
        let line = "GET /api/asphalt-methods/abc 400 in 0ms";
        assert_eq!(truncate_log_line(line), line);
    }

    #[test]
    fn test_long_lines_end_with_ellipsis() {
        let line = format!("GET /api/asphalt-methods 200 in 1ms :: {}", "x".repeat(200));
        let cut = truncate_log_line(&line);
        assert_eq!(cut.chars().count(), LOG_LINE_LIMIT);
        assert!(cut.ends_with('\u{2026}'));
        assert!(cut.starts_with("GET /api/asphalt-methods 200"));
    }

    #[test]
    fn test_exactly_at_limit_is_kept() {
        let line = "y".repeat(LOG_LINE_LIMIT);
        assert_eq!(truncate_log_line(&line), line);
    }
}
