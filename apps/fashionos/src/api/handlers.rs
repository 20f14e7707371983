//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Every wizard endpoint takes the registry write lock once, performs a
//! single controller operation and answers with the resulting view.

use super::{
    AppState,
    types::{
        ErrorResponse, HealthResponse, ImageUploadRequest, ProfileResponse, TagToggleRequest,
        WizardResponse, WizardView, error_status,
    },
};
use crate::sessions::WizardId;
use crate::submission::drive_submission;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use fashionos_core::{FashionError, FieldUpdate, WizardController, resolve_profile};
use std::sync::Arc;

type WizardReply = (StatusCode, Json<WizardResponse>);

fn wizard_error(error: &FashionError) -> WizardReply {
    (
        error_status(error),
        Json(WizardResponse::error(error.to_string())),
    )
}

fn bad_body(rejection: &JsonRejection) -> WizardReply {
    (
        StatusCode::BAD_REQUEST,
        Json(WizardResponse::error(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
}

/// Run one operation against a session and report the new view.
async fn with_wizard(
    state: &AppState,
    id: WizardId,
    op: &'static str,
    apply: impl FnOnce(&mut WizardController) -> bool,
) -> WizardReply {
    let mut wizards = state.wizards.write().await;
    match wizards.get_mut(id) {
        Ok(wizard) => {
            let moved = apply(wizard);
            tracing::debug!(
                wizard_id = id,
                op,
                moved,
                step = wizard.current_step().number(),
                "Wizard operation"
            );
            (
                StatusCode::OK,
                Json(WizardResponse::success(WizardView::new(id, wizard), moved)),
            )
        }
        Err(e) => wizard_error(&e),
    }
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CATALOG HANDLERS
// =============================================================================

/// Brand copy.
pub async fn site_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.brand().clone())
}

/// All collections.
pub async fn collections_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.collections().to_vec())
}

/// One collection by id.
pub async fn collection_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.collection(&id) {
        Some(collection) => (StatusCode::OK, Json(collection.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Collection '{}' not found", id))),
        )
            .into_response(),
    }
}

/// Designer directory.
pub async fn designers_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.designers().to_vec())
}

/// Catalog designer profile.
pub async fn designer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match resolve_profile(Some(&id), None, &state.catalog) {
        Some(profile) => (StatusCode::OK, Json(ProfileResponse::found(profile))),
        None => (StatusCode::NOT_FOUND, Json(ProfileResponse::not_found())),
    }
}

// =============================================================================
// SESSION HANDLERS
// =============================================================================

/// Open a new wizard session.
pub async fn create_wizard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut wizards = state.wizards.write().await;
    let id = match wizards.create() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(sessions = wizards.len(), "Wizard refused: {}", e);
            return wizard_error(&e);
        }
    };
    tracing::info!(wizard_id = id, sessions = wizards.len(), "Wizard created");

    match wizards.get(id) {
        Ok(wizard) => (
            StatusCode::CREATED,
            Json(WizardResponse::success(WizardView::new(id, wizard), false)),
        ),
        Err(e) => wizard_error(&e),
    }
}

/// Current view of a session.
pub async fn get_wizard_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    let wizards = state.wizards.read().await;
    match wizards.get(id) {
        Ok(wizard) => (
            StatusCode::OK,
            Json(WizardResponse::success(WizardView::new(id, wizard), false)),
        ),
        Err(e) => wizard_error(&e),
    }
}

/// Discard a session.
pub async fn delete_wizard_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    let mut wizards = state.wizards.write().await;
    match wizards.remove(id) {
        Ok(_) => {
            tracing::info!(wizard_id = id, "Wizard discarded");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => wizard_error(&e).into_response(),
    }
}

// =============================================================================
// EDITING HANDLERS
// =============================================================================

/// Overwrite one draft field.
pub async fn set_field_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
    body: Result<Json<FieldUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let update = match body {
        Ok(Json(update)) => update,
        Err(rejection) => return bad_body(&rejection),
    };
    with_wizard(&state, id, "set_field", |w| w.set_field(update)).await
}

/// Append uploaded images.
pub async fn add_images_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
    body: Result<Json<ImageUploadRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_body(&rejection),
    };
    let assets = match request.to_assets() {
        Ok(assets) => assets,
        Err(e) => return wizard_error(&e),
    };
    tracing::debug!(
        wizard_id = id,
        count = assets.len(),
        bytes = assets.iter().map(|a| a.size()).sum::<usize>(),
        "Images decoded"
    );
    with_wizard(&state, id, "add_images", |w| w.add_images(assets)).await
}

/// Remove one image by position.
pub async fn remove_image_handler(
    State(state): State<AppState>,
    Path((id, index)): Path<(WizardId, usize)>,
) -> impl IntoResponse {
    with_wizard(&state, id, "remove_image", |w| {
        w.remove_image(index).is_some()
    })
    .await
}

/// Toggle a style tag.
pub async fn toggle_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
    body: Result<Json<TagToggleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let tag = match body.map_err(|r| bad_body(&r)).and_then(|Json(request)| {
        request.to_tag().map_err(|e| wizard_error(&e))
    }) {
        Ok(tag) => tag,
        Err(reply) => return reply,
    };

    let mut selected = None;
    let (status, Json(response)) = with_wizard(&state, id, "toggle_tag", |w| {
        selected = w.toggle_tag(tag);
        selected.is_some()
    })
    .await;
    (status, Json(response.with_selected(selected)))
}

// =============================================================================
// NAVIGATION HANDLERS
// =============================================================================

/// Gated move to the next step.
pub async fn advance_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    with_wizard(&state, id, "advance", WizardController::advance).await
}

/// Move to the previous step.
pub async fn retreat_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    with_wizard(&state, id, "retreat", WizardController::retreat).await
}

/// Jump straight to review when every step is satisfied.
pub async fn review_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    with_wizard(&state, id, "jump_to_review", WizardController::jump_to_review).await
}

/// Back to an empty first step.
pub async fn reset_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    with_wizard(&state, id, "reset", WizardController::reset).await
}

// =============================================================================
// SUBMISSION HANDLER
// =============================================================================

/// Freeze the draft and hand it to the gateway in the background.
///
/// Answers 202 once the session is `submitting`; poll the session to see it
/// settle. A refused submit (wrong step, incomplete, already submitting) is
/// 200 with `moved: false`.
pub async fn submit_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    let mut wizards = state.wizards.write().await;
    let wizard = match wizards.get_mut(id) {
        Ok(wizard) => wizard,
        Err(e) => return wizard_error(&e),
    };

    let Some(record) = wizard.submit() else {
        tracing::debug!(wizard_id = id, "Submit refused");
        return (
            StatusCode::OK,
            Json(WizardResponse::success(WizardView::new(id, wizard), false)),
        );
    };

    let view = WizardView::new(id, wizard);
    drop(wizards);

    tracing::info!(
        wizard_id = id,
        collection = %record.collection_name,
        "Submission started"
    );
    tokio::spawn(drive_submission(
        Arc::clone(&state.wizards),
        Arc::clone(&state.gateway),
        id,
        record,
    ));

    (StatusCode::ACCEPTED, Json(WizardResponse::success(view, true)))
}

// =============================================================================
// PREVIEW HANDLER
// =============================================================================

/// Profile preview built from the session's handoff payload.
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(id): Path<WizardId>,
) -> impl IntoResponse {
    let handoff = match state.wizards.read().await.get(id) {
        Ok(wizard) => wizard.handoff(),
        Err(e) => {
            return (
                error_status(&e),
                Json(ProfileResponse::error(e.to_string())),
            );
        }
    };

    match resolve_profile(None, Some(&handoff), &state.catalog) {
        Some(profile) => (StatusCode::OK, Json(ProfileResponse::found(profile))),
        None => (StatusCode::NOT_FOUND, Json(ProfileResponse::not_found())),
    }
}
