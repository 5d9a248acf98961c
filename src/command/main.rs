mod clock;
mod config;
mod form;
mod handler;
mod message;
mod types;

use std::sync::Arc;

use lambda_http::{run, service_fn, Error};

use clock::SystemClock;
use config::CommandConfig;
use handler::CommandHandler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    let config = CommandConfig::from_env()?;
    let command_handler = Arc::new(CommandHandler::new(config, SystemClock));

    run(service_fn(move |event| {
        let command_handler = Arc::clone(&command_handler);
        async move { command_handler.handle(event) }
    }))
    .await
}
