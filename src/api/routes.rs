//! API Routes
//!
//! Configures the Axum router with all address book endpoints.

use axum::{
    http::{HeaderName, HeaderValue},
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::errors::{panic_response, render_server_errors};
use super::handlers::{create_handler, delete_handler, list_handler, AppState};

/// Headers added to every response that does not already set them.
const SECURITY_HEADERS: [(&str, &str); 12] = [
    (
        "content-security-policy",
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;\
         form-action 'self';frame-ancestors 'self';img-src 'self' data:;\
         object-src 'none';script-src 'self';script-src-attr 'none';\
         style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("referrer-policy", "no-referrer"),
    ("x-xss-protection", "0"),
];

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /address` - List every record
/// - `POST /address` - Create a record
/// - `DELETE /address/:id` - Delete a record
///
/// # Middleware
/// - Panics become 500 responses
/// - 500 bodies are rendered for the configured run mode
/// - Security headers on every response
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let mode = state.config.mode;

    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let router = Router::new()
        .route("/address", get(list_handler).post(create_handler))
        .route("/address/:id", delete(delete_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(mode, render_server_errors));

    SECURITY_HEADERS
        .iter()
        .fold(router, |router, &(name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
        .layer(cors)
        .layer(trace)
        .with_state(state)
}
