//! Request gate middleware.
//!
//! # Responsibilities
//! - Run the configured [`RequiredFields`] check against each request
//! - Reject failing requests with 400 and the standard rejection body
//! - Hand passing requests to the inner service untouched
//!
//! # Data Flow
//! Request -> extract fields from the configured source -> presence check
//! -> 400 rejection | inner service
//!
//! # Design Decisions
//! - Body-sourced gates buffer the body once and reinstall it, so inner
//!   extractors still see the full payload
//! - The gate is silent: it neither logs nor records anything on either
//!   outcome, leaving observability to the outer layers

use std::sync::Arc;

use axum::body::{self, Body};
use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{RawPathParams, State};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::validation::fields::{RequiredFields, ValidationResult};
use crate::validation::source::{self, DataSource};

/// Largest body the gate will buffer; anything beyond counts as absent.
const MAX_BUFFERED_BODY: usize = 2 * 1024 * 1024;

/// Error message carried by every gate rejection.
const REJECTION_ERROR: &str = "Missing or empty fields";

#[derive(Debug, Serialize)]
struct RejectionBody {
    error: &'static str,
    #[serde(rename = "missingFields")]
    missing_fields: Vec<String>,
}

/// Gate an incoming request on the presence of the configured fields.
///
/// Attach with `middleware::from_fn_with_state(gate, require_fields)` on the
/// routes to protect. Requests that fail the check are answered directly
/// with 400 and never reach the inner service.
pub async fn require_fields(
    State(gate): State<Arc<RequiredFields>>,
    params: Result<RawPathParams, RawPathParamsRejection>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (fields, req) = match gate.source() {
        DataSource::Body => {
            let (parts, raw) = req.into_parts();
            let bytes = body::to_bytes(raw, MAX_BUFFERED_BODY)
                .await
                .unwrap_or_default();
            let fields = source::from_body(&parts.headers, &bytes);
            (fields, Request::from_parts(parts, Body::from(bytes)))
        }
        DataSource::Query => (source::from_query(req.uri()), req),
        DataSource::Params => (source::from_params(params.as_ref().ok()), req),
    };

    match gate.check(&fields) {
        ValidationResult::Valid => next.run(req).await,
        ValidationResult::Invalid { missing_fields } => (
            StatusCode::BAD_REQUEST,
            Json(RejectionBody {
                error: REJECTION_ERROR,
                missing_fields,
            }),
        )
            .into_response(),
    }
}
