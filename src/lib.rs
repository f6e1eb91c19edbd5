use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub mod auth;
pub mod config;
pub mod consumer;
pub mod kafka;
pub mod producer;

pub fn set_up_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

/// Fixed-shape result returned to the Lambda runtime by both handlers.
///
/// The `body` carries a JSON-encoded string, so the wire form is
/// `{"statusCode": 200, "body": "\"...\""}`. Failure paths never produce a
/// response of this shape; errors propagate to the runtime instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok(message: &str) -> Result<Self, serde_json::Error> {
        Ok(HandlerResponse {
            status_code: 200,
            body: serde_json::to_string(message)?,
        })
    }
}
