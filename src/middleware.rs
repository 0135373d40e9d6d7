//! Request ID middleware for correlating logs with requests.
//!
//! Every request runs inside a `request` span carrying a UUID v4. Monitoring
//! probes arrive every few seconds from load balancers, so their completion
//! is logged at DEBUG; anything else (404s, 405s) is logged at INFO.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, Level};
use uuid::Uuid;

use crate::config::MONITORING_PATH;

/// Request ID stored in request extensions.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

/// Level at which the completion of a request to `path` is logged.
pub fn completion_level(path: &str) -> Level {
    if path == MONITORING_PATH {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Middleware that tags the request with an ID and wraps it in a span.
///
/// Must be the outermost layer so the span also covers unmatched routes.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let id = RequestId(Uuid::new_v4());
    let path = request.uri().path().to_owned();
    let level = completion_level(&path);

    let span = tracing::info_span!(
        "request",
        request_id = %id.0,
        method = %request.method(),
        path = %path,
    );
    request.extensions_mut().insert(id);

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    span.in_scope(|| {
        if level == Level::DEBUG {
            tracing::debug!(status, elapsed_ms, "Request completed");
        } else {
            tracing::info!(status, elapsed_ms, "Request completed");
        }
    });

    response
}
