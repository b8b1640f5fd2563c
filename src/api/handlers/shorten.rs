//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new short link.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "validity": 30,          // optional, minutes
///   "shortcode": "promo1"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the public short link and its expiry:
///
/// ```json
/// {
///   "shortLink": "http://localhost:8000/promo1",
///   "expiry": "2025-01-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for an invalid URL, shortcode, or validity window, and 409
/// when the requested shortcode is already registered.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await?;

    let short_link = state.link_service.short_url(&state.base_url, &link.code);

    tracing::info!(code = %link.code, expiry = %link.expires_at, "short link created");

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_link,
            expiry: link.expires_at,
        }),
    ))
}
