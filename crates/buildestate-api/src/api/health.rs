/// Health check endpoint
use axum::{Json, extract::State, http::StatusCode};
use buildestate_core::{HealthStatus, TransportMode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::context::ApiContext;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub mode: TransportMode,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub email: HealthStatus,
}

/// Health check handler
/// This endpoint does not require authentication
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let email = ctx.dispatcher.check_email_health().await;
    let healthy = email.is_healthy();

    if !healthy {
        error!(message = %email.message, "Email health check failed");
    }

    let response = HealthResponse {
        status: if healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        mode: ctx.dispatcher.mode(),
        checks: HealthChecks { email },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
