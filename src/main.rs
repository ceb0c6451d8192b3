use hello_world::{handler, logging, Config};
use lambda_http::{service_fn, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env();
    tracing::info!(error_trigger = config.error_trigger, "function starting");

    let func = service_fn(move |event: Request| handler::handle(config, event));
    lambda_http::run(func).await
}
