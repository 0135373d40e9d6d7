//! Monitoring endpoint.
//!
//! Answers `GET /monitoring` with a fixed plain-text body so that uptime
//! checks and load balancers can tell the process is up and routing.

use crate::config::MONITORING_BODY;

/// Monitoring handler.
///
/// Always returns 200 with `Läuft!` as `text/plain; charset=utf-8`.
pub async fn monitoring() -> &'static str {
    MONITORING_BODY
}
