pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod response;
pub mod router;

pub use config::Config;
pub use error::RouteError;
pub use router::Route;
