//! falcon-server: the monitoring endpoint of the Millennium Falcon server.
//!
//! Exposes `GET /monitoring`, which answers `Läuft!` while the process is up.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use crate::config::{AppConfig, ConfigError};
pub use crate::http::{start_server, ServerError};
pub use crate::routes::create_router;
