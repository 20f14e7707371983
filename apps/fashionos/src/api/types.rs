//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use crate::sessions::WizardId;
use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fashionos_core::{
    DesignerProfile, DraftSubmission, FashionError, ImageAsset, PriceRange, StyleTag,
    SubmittedRecord, WizardController, WizardPhase,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body of any failed request that has no richer response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

/// HTTP status for a core error.
#[must_use]
pub fn error_status(error: &FashionError) -> StatusCode {
    match error {
        FashionError::WizardNotFound(_) => StatusCode::NOT_FOUND,
        FashionError::UnknownStyleTag(_) | FashionError::InvalidAsset(_) => {
            StatusCode::BAD_REQUEST
        }
        FashionError::SessionLimit(_) => StatusCode::SERVICE_UNAVAILABLE,
        FashionError::SubmissionFailed(_) => StatusCode::BAD_GATEWAY,
        FashionError::Config(_) | FashionError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// WIZARD VIEW
// =============================================================================

/// Draft as shown to clients. Image bytes stay on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftView {
    pub image_names: Vec<String>,
    pub image_count: usize,
    pub collection_name: String,
    pub description: String,
    pub designer_name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub website: String,
    pub social_handle: String,
    pub style_tags: Vec<StyleTag>,
    pub price_range: Option<PriceRange>,
}

impl From<&DraftSubmission> for DraftView {
    fn from(draft: &DraftSubmission) -> Self {
        Self {
            image_names: draft.image_names(),
            image_count: draft.images.len(),
            collection_name: draft.collection_name.clone(),
            description: draft.description.clone(),
            designer_name: draft.designer_name.clone(),
            email: draft.email.clone(),
            location: draft.location.clone(),
            bio: draft.bio.clone(),
            website: draft.website.clone(),
            social_handle: draft.social_handle.clone(),
            style_tags: draft.style_tags.clone(),
            price_range: draft.price_range,
        }
    }
}

/// Frozen submission as shown on the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedView {
    pub collection_name: String,
    pub description: String,
    pub designer_name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub website: Option<String>,
    pub social_handle: Option<String>,
    pub style_tags: Vec<StyleTag>,
    pub price_range: String,
    pub image_names: Vec<String>,
    pub image_count: usize,
}

impl From<&SubmittedRecord> for SubmittedView {
    fn from(record: &SubmittedRecord) -> Self {
        Self {
            collection_name: record.collection_name.clone(),
            description: record.description.clone(),
            designer_name: record.designer_name.clone(),
            email: record.email.clone(),
            location: record.location.clone(),
            bio: record.bio.clone(),
            website: record.website.clone(),
            social_handle: record.social_handle.clone(),
            style_tags: record.style_tags.clone(),
            price_range: record.price_label().to_string(),
            image_names: record.image_names(),
            image_count: record.image_count(),
        }
    }
}

/// Snapshot of one wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardView {
    pub id: WizardId,
    pub phase: WizardPhase,
    pub step: u8,
    pub step_label: String,
    pub progress_percent: u8,
    pub step_valid: bool,
    pub draft: DraftView,
    pub submitted: Option<SubmittedView>,
}

impl WizardView {
    #[must_use]
    pub fn new(id: WizardId, wizard: &WizardController) -> Self {
        let step = wizard.current_step();
        Self {
            id,
            phase: wizard.phase(),
            step: step.number(),
            step_label: step.label().to_string(),
            progress_percent: step.progress_percent(),
            step_valid: wizard.is_step_valid(),
            draft: DraftView::from(wizard.draft()),
            submitted: wizard.submitted().map(SubmittedView::from),
        }
    }
}

/// Response of every wizard endpoint.
///
/// `moved` reports whether the operation took effect. A blocked advance or an
/// edit outside the editing phase is `moved: false`, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardResponse {
    pub success: bool,
    pub moved: bool,
    /// Tag state after a toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    pub wizard: Option<WizardView>,
    pub error: Option<String>,
}

impl WizardResponse {
    pub fn success(wizard: WizardView, moved: bool) -> Self {
        Self {
            success: true,
            moved,
            selected: None,
            wizard: Some(wizard),
            error: None,
        }
    }

    #[must_use]
    pub fn with_selected(mut self, selected: Option<bool>) -> Self {
        self.selected = selected;
        self
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            moved: false,
            selected: None,
            wizard: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// WIZARD REQUESTS
// =============================================================================

/// One uploaded image, base64 encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    pub name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    pub data: String,
}

/// Image upload request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUploadRequest {
    pub images: Vec<ImagePayload>,
}

impl ImageUploadRequest {
    /// Decode every payload. One bad entry rejects the whole batch.
    pub fn to_assets(&self) -> Result<Vec<ImageAsset>, FashionError> {
        self.images
            .iter()
            .map(|payload| {
                if payload.name.trim().is_empty() {
                    return Err(FashionError::InvalidAsset(
                        "Image name must not be empty".to_string(),
                    ));
                }
                let bytes = STANDARD.decode(payload.data.as_bytes()).map_err(|e| {
                    FashionError::InvalidAsset(format!("'{}': {}", payload.name, e))
                })?;
                let asset = ImageAsset::new(payload.name.clone(), bytes);
                Ok(match &payload.content_type {
                    Some(ct) => asset.with_content_type(ct.clone()),
                    None => asset,
                })
            })
            .collect()
    }
}

/// Tag toggle request. The tag is matched case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagToggleRequest {
    pub tag: String,
}

impl TagToggleRequest {
    pub fn to_tag(&self) -> Result<StyleTag, FashionError> {
        self.tag.parse()
    }
}

// =============================================================================
// PROFILE RESPONSE
// =============================================================================

/// Designer profile response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub found: bool,
    pub profile: Option<DesignerProfile>,
    pub error: Option<String>,
}

impl ProfileResponse {
    pub fn found(profile: DesignerProfile) -> Self {
        Self {
            success: true,
            found: true,
            profile: Some(profile),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: true,
            found: false,
            profile: None,
            error: Some("Designer Not Found".to_string()),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            found: false,
            profile: None,
            error: Some(msg.into()),
        }
    }
}
