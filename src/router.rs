//! Rules are checked in order and the first match wins:
//!
//! | Method  | Path             | Outcome                     |
//! |---------|------------------|-----------------------------|
//! | GET     | `/error-trigger` | [`RouteError::Simulated`]   |
//! | GET     | `/health`        | [`Route::Health`]           |
//! | GET     | anything else    | [`Route::Hello`]            |
//! | non-GET | anything         | [`Route::MethodNotAllowed`] |

use lambda_http::{
    http::{Method, StatusCode},
    Body, Response,
};

use crate::{
    config::Config,
    error::RouteError,
    response::{self, ErrorMessage, Message},
};

pub const HEALTH_PATH: &str = "/health";
pub const ERROR_TRIGGER_PATH: &str = "/error-trigger";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Hello,
    MethodNotAllowed,
}

pub fn route(config: &Config, method: &Method, path: &str) -> Result<Route, RouteError> {
    if *method != Method::GET {
        return Ok(Route::MethodNotAllowed);
    }

    match path {
        ERROR_TRIGGER_PATH if config.error_trigger => Err(RouteError::Simulated {
            path: path.to_string(),
        }),
        HEALTH_PATH => Ok(Route::Health),
        _ => Ok(Route::Hello),
    }
}

impl Route {
    pub fn status(&self) -> StatusCode {
        match self {
            Route::Health | Route::Hello => StatusCode::OK,
            Route::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn into_response(self) -> Result<Response<Body>, RouteError> {
        let status = self.status();
        match self {
            Route::Health => response::json(
                status,
                &Message {
                    message: "API is healthy and running!",
                },
            ),
            Route::Hello => response::json(
                status,
                &Message {
                    message: "hello world",
                },
            ),
            Route::MethodNotAllowed => response::json(
                status,
                &ErrorMessage {
                    error: "Method Not Allowed",
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str) -> Result<Route, RouteError> {
        route(&Config::default(), &Method::GET, path)
    }

    #[test]
    fn health() {
        assert_eq!(get("/health").unwrap(), Route::Health);
    }

    #[test]
    fn other_get_paths_say_hello() {
        for path in ["/", "/hello", "/health/", "/Health", "/error-trigger/x", ""] {
            assert_eq!(get(path).unwrap(), Route::Hello, "path {path:?}");
        }
    }

    #[test]
    fn error_trigger_raises() {
        match get("/error-trigger") {
            Err(RouteError::Simulated { path }) => assert_eq!(path, "/error-trigger"),
            other => panic!("expected simulated fault, got {other:?}"),
        }
    }

    #[test]
    fn error_trigger_can_be_switched_off() {
        let config = Config {
            error_trigger: false,
        };

        let route = route(&config, &Method::GET, "/error-trigger").unwrap();
        assert_eq!(route, Route::Hello);
    }

    #[test]
    fn non_get_is_not_allowed_anywhere() {
        let methods = [
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::HEAD,
            Method::OPTIONS,
        ];
        for method in methods {
            for path in ["/", "/health", "/error-trigger"] {
                let route = route(&Config::default(), &method, path).unwrap();
                assert_eq!(route, Route::MethodNotAllowed, "{method} {path}");
            }
        }
    }

    #[test]
    fn statuses() {
        assert_eq!(Route::Health.status(), StatusCode::OK);
        assert_eq!(Route::Hello.status(), StatusCode::OK);
        assert_eq!(Route::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
