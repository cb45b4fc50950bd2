use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::metrics::export_metrics;
use super::handlers::register::register;
use super::handlers::verify::verify;
use super::middleware::track_metrics;
use crate::domain::user::ports::AuthServicePort;
use crate::metrics::Metrics;

pub struct AppState<S: AuthServicePort> {
    pub auth_service: Arc<S>,
    pub metrics: Metrics,
}

// Manual impl: S itself need not be Clone behind the Arc
impl<S: AuthServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            metrics: self.metrics.clone(),
        }
    }
}

pub fn create_router<S: AuthServicePort>(auth_service: Arc<S>, metrics: Metrics) -> Router {
    let state = AppState {
        auth_service,
        metrics,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers stay out of the span: the Authorization value is a
            // live credential
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
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

    Router::new()
        .route("/register", post(register::<S>))
        .route("/login", post(login::<S>))
        .route("/verify", get(verify::<S>))
        .route("/health", get(health))
        .route("/metrics", get(export_metrics::<S>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_metrics::<S>,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
