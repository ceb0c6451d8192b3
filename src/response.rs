use lambda_http::{
    http::{header::CONTENT_TYPE, StatusCode},
    Body, Response,
};
use serde::Serialize;

use crate::error::RouteError;

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage<'a> {
    pub error: &'a str,
}

pub fn json<T>(status: StatusCode, body: &T) -> Result<Response<Body>, RouteError>
where
    T: Serialize,
{
    let body = serde_json::to_string(body)?;

    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))?;

    Ok(response)
}

pub fn internal_error() -> Result<Response<Body>, RouteError> {
    json(
        StatusCode::INTERNAL_SERVER_ERROR,
        &Message {
            message: "some error happened",
        },
    )
}
