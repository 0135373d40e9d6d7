//! HTTP server module.
//!
//! Serves plain HTTP and shuts down gracefully on SIGTERM/SIGINT, draining
//! in-flight connections for a bounded grace period.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
pub use shutdown::{setup_shutdown_handler, shutdown_on, shutdown_signal, ShutdownSignal};
