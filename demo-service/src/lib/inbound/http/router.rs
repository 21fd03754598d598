use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use duo_web::DuoWeb;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::MakeRequestUuid;
use tower_http::request_id::PropagateRequestIdLayer;
use tower_http::request_id::SetRequestIdLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::callback::callback;
use super::handlers::callback::enroll_callback;
use super::handlers::prompt::enroll_prompt;
use super::handlers::prompt::prompt;
use crate::config::DuoConfig;

#[derive(Clone)]
pub struct AppState {
    pub duo: Arc<DuoWeb>,
    pub duo_config: Arc<DuoConfig>,
}

pub fn create_router(duo: Arc<DuoWeb>, duo_config: Arc<DuoConfig>) -> Router {
    let state = AppState { duo, duo_config };

    let routes = Router::new()
        .route("/api/prompt", get(prompt).post(callback))
        .route("/api/enroll", get(enroll_prompt).post(enroll_callback));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("unknown");

            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                request_id = %request_id,
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Caller-supplied X-Request-Id is kept, otherwise one is generated
    let request_layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::x_request_id());

    routes
        .layer(request_layers)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
