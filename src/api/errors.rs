//! Server Error Rendering
//!
//! Every 500 leaves the handler stack with a generic body and a
//! [`ServerFailure`] extension. The middleware here logs the failure and, in
//! development mode, swaps in a body that shows the error.

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::config::RunMode;
use crate::error::ServerFailure;
use crate::models::ServerErrorResponse;

/// Middleware that finalizes 500 responses for the configured [`RunMode`].
pub async fn render_server_errors(
    State(mode): State<RunMode>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let Some(failure) = response.extensions_mut().remove::<ServerFailure>() else {
        return response;
    };

    error!(%method, %path, kind = failure.kind, "{}", failure.message);

    match mode {
        RunMode::Production => response,
        RunMode::Development => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ServerErrorResponse::detailed(failure.kind, failure.message)),
        )
            .into_response(),
    }
}

/// Converts a handler panic into a server failure.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ServerFailure::new("Panic", message).into_response()
}
