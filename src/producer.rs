use chrono::{SecondsFormat, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::kafka::Publisher;
use crate::HandlerResponse;

/// Message emitted per invocation: the publish-time UTC timestamp plus the
/// request id of the invocation that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    pub timestamp: String,
    #[serde(rename = "aws.request_id")]
    pub request_id: String,
}

impl MessagePayload {
    /// The timestamp is captured here, at construction, not at invocation
    /// start.
    pub fn new(request_id: &str) -> Self {
        MessagePayload {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            request_id: request_id.to_string(),
        }
    }
}

/// Publishes one timestamped message to the configured topic and returns a
/// fixed success response once the client has flushed the send.
///
/// A single linear attempt: any error from serialization, send, or flush
/// propagates to the runtime, which owns the retry policy.
pub async fn function_handler<P: Publisher>(
    config: &Config,
    publisher: &P,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    info!("Event: {}", event.payload);
    info!("Context: {:?}", event.context);

    let message = MessagePayload::new(&event.context.request_id);
    let payload = serde_json::to_vec(&message)?;

    publisher.send(&config.topic, &payload).await?;
    publisher.flush().await?;

    Ok(HandlerResponse::ok("Message sent successfully!")?)
}

#[cfg(test)]
mod test {
    use chrono::DateTime;

    use super::*;

    #[test]
    fn test_message_payload_wire_format() {
        let message = MessagePayload::new("req-123");
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["aws.request_id"], "req-123");
        let timestamp = value["timestamp"]
            .as_str()
            .expect("timestamp should be a string");
        DateTime::parse_from_rfc3339(timestamp).expect("timestamp should be RFC 3339");
    }
}
