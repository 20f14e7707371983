//! # Designer Profiles
//!
//! The profile view shows either a catalog designer or a preview of a
//! designer who is still in (or just finished) the submission wizard. The
//! wizard data reaches the view as an explicit [`HandoffPayload`] carried by
//! the navigation layer; there is no shared state between the two.
//!
//! Resolution order:
//! 1. A handoff payload, when present
//! 2. The catalog designer with the requested id (featured designer if no id)
//! 3. Nothing ("Designer Not Found")

use crate::catalog::{Catalog, Collection, Designer};
use crate::primitives::{FALLBACK_SPECIALTY, PLACEHOLDER_PORTRAIT_URL};
use crate::wizard::{DraftSubmission, SubmittedRecord};
use crate::StyleTag;
use serde::{Deserialize, Serialize};

// =============================================================================
// HANDOFF PAYLOAD
// =============================================================================

/// Wizard data handed to the profile view at navigation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffPayload {
    pub designer_name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub website: String,
    pub social_handle: String,
    pub style_tags: Vec<StyleTag>,
}

impl HandoffPayload {
    /// Payload from a live draft.
    #[must_use]
    pub fn from_draft(draft: &DraftSubmission) -> Self {
        Self {
            designer_name: draft.designer_name.clone(),
            email: draft.email.clone(),
            location: draft.location.clone(),
            bio: draft.bio.clone(),
            website: draft.website.clone(),
            social_handle: draft.social_handle.clone(),
            style_tags: draft.style_tags.clone(),
        }
    }

    /// Payload from a frozen submission.
    #[must_use]
    pub fn from_record(record: &SubmittedRecord) -> Self {
        Self {
            designer_name: record.designer_name.clone(),
            email: record.email.clone(),
            location: record.location.clone(),
            bio: record.bio.clone(),
            website: record.website.clone().unwrap_or_default(),
            social_handle: record.social_handle.clone().unwrap_or_default(),
            style_tags: record.style_tags.clone(),
        }
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// A profile ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignerProfile {
    pub name: String,
    pub location: String,
    pub bio: String,
    pub image_url: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<String>,
    /// Shows the "New Arrival" badge.
    pub is_new: bool,
    /// Catalog collections credited to this designer.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl DesignerProfile {
    /// Profile of a catalog designer.
    #[must_use]
    pub fn from_designer(designer: &Designer, catalog: &Catalog) -> Self {
        Self {
            name: designer.name.clone(),
            location: designer.location.clone(),
            bio: designer.bio.clone(),
            image_url: designer.image_url.clone(),
            specialty: designer.specialty.clone(),
            email: designer.email.clone(),
            website: designer.website.clone(),
            social: designer.social.clone(),
            is_new: designer.is_new,
            collections: catalog.collections_by(&designer.name).cloned().collect(),
        }
    }

    /// Preview profile of a wizard designer.
    ///
    /// Specialty is the first chosen style tag, or "Emerging Talent".
    #[must_use]
    pub fn from_handoff(payload: &HandoffPayload, catalog: &Catalog) -> Self {
        let specialty = payload
            .style_tags
            .first()
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| FALLBACK_SPECIALTY.to_string());

        Self {
            name: payload.designer_name.clone(),
            location: payload.location.clone(),
            bio: payload.bio.clone(),
            image_url: PLACEHOLDER_PORTRAIT_URL.to_string(),
            specialty,
            email: non_blank(&payload.email),
            website: non_blank(&payload.website),
            social: non_blank(&payload.social_handle),
            is_new: true,
            collections: catalog
                .collections_by(&payload.designer_name)
                .cloned()
                .collect(),
        }
    }
}

/// Resolve the profile to display.
///
/// A handoff payload wins over the id. Without one, `designer_id` is looked
/// up in the catalog; `None` means the featured designer.
#[must_use]
pub fn resolve_profile(
    designer_id: Option<&str>,
    handoff: Option<&HandoffPayload>,
    catalog: &Catalog,
) -> Option<DesignerProfile> {
    if let Some(payload) = handoff {
        return Some(DesignerProfile::from_handoff(payload, catalog));
    }

    let designer = match designer_id {
        Some(id) => catalog.designer(id),
        None => catalog.featured_designer(),
    }?;

    Some(DesignerProfile::from_designer(designer, catalog))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
