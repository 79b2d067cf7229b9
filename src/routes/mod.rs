//! Router assembly: book routes, common routes, fallbacks, and the tracing/limit layers.

mod book;
mod common;

pub use book::book_routes;
pub use common::{common_routes, common_routes_with_ready};

use crate::error::AppError;
use crate::handlers::common::{method_not_allowed, not_found};
use crate::state::AppState;
use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

/// Request bodies above this size are rejected with a 413 envelope.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router. Every request is logged with method, path, status and latency.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(book_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                )
                .layer(middleware::from_fn(envelope_oversized_bodies))
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}

/// The limit layer answers a declared oversized Content-Length with plain text; rewrap it.
async fn envelope_oversized_bodies(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE && !is_json(&response) {
        return AppError::PayloadTooLarge(format!("body exceeds {} bytes", MAX_BODY_BYTES))
            .into_response();
    }
    response
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
