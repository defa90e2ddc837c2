use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Guest list API
        .merge(api::guest_list::router())
        // Arrived guests API
        .merge(api::guests::router())
        // Empty seats API
        .merge(api::seats::router())
        // Table management API
        .merge(api::tables::router())
        // Health API
        .merge(api::health::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and tests driving the router directly
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // Request body size limit
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID: Set must wrap Propagate (the last layer added is outermost)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
}
