//! HTTP route handlers.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod monitoring;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_MONITORING, MONITORING_PATH};
use crate::middleware::request_id_layer;

/// Creates the Axum router with the monitoring route.
pub fn create_router() -> Router {
    // Monitoring - never cached, probes must reach the process
    let monitoring_routes = Router::new()
        .route(MONITORING_PATH, get(monitoring::monitoring))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_MONITORING),
        ));

    Router::new()
        .merge(monitoring_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{header::CONTENT_TYPE, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_router().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn monitoring_returns_ok_with_body() {
        let response = send(Method::GET, "/monitoring").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], "Läuft!".as_bytes());
    }

    #[tokio::test]
    async fn monitoring_sets_plain_text_and_no_store() {
        let response = send(Method::GET, "/monitoring").await;

        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
    }

    #[tokio::test]
    async fn monitoring_ignores_request_headers_and_body() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/monitoring?verbose=1")
            .header("accept", "application/json")
            .header("x-custom", "anything")
            .body(Body::from("ignored"))
            .unwrap();
        let response = create_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], "Läuft!".as_bytes());
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() {
        let router = create_router();
        let mut bodies = Vec::new();
        for _ in 0..5 {
            let request = Request::builder()
                .uri("/monitoring")
                .body(Body::empty())
                .unwrap();
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            bodies.push(response.into_body().collect().await.unwrap().to_bytes());
        }
        assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn other_path_is_not_found() {
        let response = send(Method::GET, "/other").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_to_monitoring_is_method_not_allowed() {
        let response = send(Method::POST, "/monitoring").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn head_to_monitoring_has_empty_body() {
        let response = send(Method::HEAD, "/monitoring").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
