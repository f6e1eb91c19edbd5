use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::HandlerResponse;

/// Logs the incoming invocation and returns a static success response. Any
/// event shape is accepted, including an empty object.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
    info!("Event: {}", event.payload);
    info!("Context: {:?}", event.context);

    Ok(HandlerResponse::ok("Hello, World!")?)
}
