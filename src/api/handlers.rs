//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use crate::config::BuildInfo;

/// Greeting returned by the root endpoint.
pub const ROOT_MESSAGE: &str = "Hello, CI/CD with Flask!";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Static greeting.
    pub message: &'static str,
    /// Deployed version, `APP_VERSION` or "1.0.0".
    pub version: String,
    /// Build time, `BUILD_TIMESTAMP` or "unknown".
    pub timestamp: String,
}

impl From<BuildInfo> for RootResponse {
    fn from(info: BuildInfo) -> Self {
        Self {
            message: ROOT_MESSAGE,
            version: info.app_version,
            timestamp: info.build_timestamp,
        }
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Root handler - greeting plus build metadata, read fresh from the environment.
pub async fn root() -> impl IntoResponse {
    let info = BuildInfo::from_env();
    debug!(
        version = %info.app_version,
        timestamp = %info.build_timestamp,
        "Serving build info"
    );
    Json(RootResponse::from(info))
}
