use lambda_runtime::{run, service_fn, Error};
use msk_event_publisher::consumer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    msk_event_publisher::set_up_logging();

    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    run(service_fn(consumer::function_handler)).await
}
