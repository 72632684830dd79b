//! Health check endpoint

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}
