//! Request correlation IDs.
//!
//! # Responsibilities
//! - Assign a unique ID to every request that arrives without one
//! - Echo the ID on the response so clients and logs can correlate
//!
//! # Design Decisions
//! - Incoming IDs are trusted and preserved so upstream callers can
//!   propagate their own correlation
//! - The ID lives in the `x-request-id` header on both sides

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Header carrying the correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Ensure the request carries an ID and mirror it onto the response.
pub async fn request_id_middleware(mut req: Request<Body>, next: Next) -> Response {
    let id = match req.headers().get(X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            match HeaderValue::from_str(&generated) {
                Ok(value) => {
                    req.headers_mut().insert(X_REQUEST_ID, value.clone());
                    value
                }
                Err(_) => return next.run(req).await,
            }
        }
    };

    let mut response = next.run(req).await;
    response.headers_mut().insert(X_REQUEST_ID, id);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    fn router() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_id_when_absent() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers().get(X_REQUEST_ID).unwrap();
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_preserves_caller_id() {
        let request = Request::builder()
            .uri("/")
            .header(X_REQUEST_ID, "caller-supplied")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(X_REQUEST_ID).unwrap(),
            "caller-supplied"
        );
    }
}
