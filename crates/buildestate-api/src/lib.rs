/// BuildEstate API - mail health Lambda
///
/// Exposes the mail dispatcher's health check to pollers.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    http::{Method, header},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::get,
};
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Builds the axum router for the API
pub fn router(ctx: Arc<ApiContext>) -> Router {
    let v1_router = Router::new().route("/health", get(api::health::handler));

    Router::new()
        .nest("/v1", v1_router)
        .fallback(api::not_found)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        )
        .with_state(ctx)
}

/// Main API handler - converts Lambda HTTP request to Axum router
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    info!("Processing API request: {} {}", event.method(), event.uri());

    let app = router(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    let response = match app.oneshot(axum_request).await {
        Ok(response) => response,
        Err(err) => {
            error!("Axum router error: {}", err);
            ApiError::Internal("Internal server error".to_string()).into_response()
        }
    };

    // Convert Axum response body to Lambda response body
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await?;

    Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
}
