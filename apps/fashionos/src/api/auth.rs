//! # Authentication Module
//!
//! Optional operator API key for the FashionOS HTTP API. When
//! `FASHIONOS_API_KEY` is set, every request except `/health` must carry it:
//!
//! ```text
//! Authorization: Bearer <your-api-key>
//! ```
//!
//! This guards the service, not end users; the site has no user accounts.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use super::types::ErrorResponse;

/// Expected key, shared by every request.
pub type ApiKey = Arc<str>;

/// Compare keys in constant time.
///
/// Both sides are padded to the same length so the comparison always covers
/// the same number of bytes; the lengths are compared separately.
#[must_use]
pub fn keys_match(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();

    let max_len = provided.len().max(expected.len());
    let mut padded_provided = vec![0u8; max_len];
    let mut padded_expected = vec![0u8; max_len];
    padded_provided[..provided.len()].copy_from_slice(provided);
    padded_expected[..expected.len()].copy_from_slice(expected);

    let bytes_match: bool = padded_provided.ct_eq(&padded_expected).into();
    bytes_match && provided.len() == expected.len()
}

/// API key authentication middleware.
///
/// Accepts both `Bearer <key>` and a raw `<key>` in the Authorization header.
pub async fn api_key_auth_middleware(
    State(expected): State<ApiKey>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v));

    let rejection = match provided {
        Some(key) if keys_match(key, &expected) => None,
        Some(_) => Some("invalid_api_key"),
        None => Some("missing_authorization_header"),
    };
    let Some(reason) = rejection else {
        return next.run(request).await;
    };

    tracing::warn!(event = "auth_failure", reason, "Authentication failed");
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new("Unauthorized")),
    )
        .into_response()
}

// =============================================================================
// TESTS
// =============================================================================
