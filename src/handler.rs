use lambda_http::{Body, Error, Request, RequestExt, Response};

use crate::{config::Config, response, router, Route};

pub async fn handle(config: Config, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = route_path(&event);
    let path = path.as_str();
    tracing::info!(%method, path, "handling request");

    match router::route(&config, method, path).and_then(Route::into_response) {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!(error = %err, %method, path, "request failed");
            Ok(response::internal_error()?)
        }
    }
}

// API Gateway REST events put the stage in front of the uri path; the raw
// path is the resource path the caller asked for.
fn route_path(event: &Request) -> String {
    match event.raw_http_path() {
        raw if raw.is_empty() => event.uri().path().to_string(),
        raw => raw,
    }
}
