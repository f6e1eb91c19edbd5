use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use msk_event_publisher::auth::MskTokenProvider;
use msk_event_publisher::config::Config;
use msk_event_publisher::kafka::KafkaPublisher;
use msk_event_publisher::{producer, HandlerResponse};
use serde_json::Value;
use tokio::runtime::Handle;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    msk_event_publisher::set_up_logging();

    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::load_from_env()?;

    run(service_fn(|event: LambdaEvent<Value>| {
        handle(&config, event)
    }))
    .await
}

// A fresh publisher per invocation: the broker connection it opens requests
// one IAM token through the provider, and nothing is shared across calls.
async fn handle(config: &Config, event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
    let provider = MskTokenProvider::new(Handle::current());
    let publisher = KafkaPublisher::new(&config.bootstrap_servers, provider)?;

    producer::function_handler(config, &publisher, event).await
}
