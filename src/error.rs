use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("simulated internal error on {path}")]
    Simulated { path: String },

    #[error("failed to serialize response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to build response: {0}")]
    Http(#[from] lambda_http::http::Error),
}
