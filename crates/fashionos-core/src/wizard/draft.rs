//! # Draft Submission Record
//!
//! The mutable form data of one wizard session, the field-update protocol
//! used to edit it, and the immutable snapshot produced on submission.
//!
//! Edits never validate. Validity is derived on demand by
//! [`compute_step_validity`](super::compute_step_validity).

use super::validity::first_invalid_step;
use crate::{ImageAsset, PriceRange, StyleTag};
use serde::{Deserialize, Serialize};

// =============================================================================
// DRAFT
// =============================================================================

/// In-progress wizard data.
///
/// `style_tags` never holds duplicates and `images` keeps upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftSubmission {
    // Step 1: assets
    pub images: Vec<ImageAsset>,
    // Step 2: collection
    pub collection_name: String,
    pub description: String,
    // Step 3: designer profile
    pub designer_name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub website: String,
    pub social_handle: String,
    // Step 4: tags
    pub style_tags: Vec<StyleTag>,
    // Step 5: market
    pub price_range: Option<PriceRange>,
}

impl DraftSubmission {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field. Never fails, never validates.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Images(images) => self.images = images,
            FieldUpdate::CollectionName(v) => self.collection_name = v,
            FieldUpdate::Description(v) => self.description = v,
            FieldUpdate::DesignerName(v) => self.designer_name = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Location(v) => self.location = v,
            FieldUpdate::Bio(v) => self.bio = v,
            FieldUpdate::Website(v) => self.website = v,
            FieldUpdate::SocialHandle(v) => self.social_handle = v,
            FieldUpdate::StyleTags(tags) => self.style_tags = dedup_tags(tags),
            FieldUpdate::PriceRange(v) => self.price_range = v,
        }
    }

    /// Append assets after the ones already uploaded.
    pub fn add_images(&mut self, images: impl IntoIterator<Item = ImageAsset>) {
        self.images.extend(images);
    }

    /// Remove the asset at `index`, shifting later ones down.
    ///
    /// An out-of-range index leaves the list untouched.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageAsset> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Remove `tag` if selected, otherwise append it.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: StyleTag) -> bool {
        match self.style_tags.iter().position(|t| *t == tag) {
            Some(pos) => {
                self.style_tags.remove(pos);
                false
            }
            None => {
                self.style_tags.push(tag);
                true
            }
        }
    }

    /// Display names of the uploaded assets, in order.
    #[must_use]
    pub fn image_names(&self) -> Vec<String> {
        self.images.iter().map(|i| i.name.clone()).collect()
    }

    /// Check that every data-collecting step (1 through 5) passes validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        first_invalid_step(self).is_none()
    }

    /// Drop duplicate tags, keeping the first occurrence.
    pub(crate) fn normalize(mut self) -> Self {
        self.style_tags = dedup_tags(std::mem::take(&mut self.style_tags));
        self
    }
}

fn dedup_tags(tags: Vec<StyleTag>) -> Vec<StyleTag> {
    let mut out = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

// =============================================================================
// FIELD UPDATES
// =============================================================================

/// A single field write, tagged by field name.
///
/// JSON form: `{"field": "collection_name", "value": "Eye Spy"}`.
/// An empty `price_range` is written as `{"field": "price_range", "value": null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    Images(Vec<ImageAsset>),
    CollectionName(String),
    Description(String),
    DesignerName(String),
    Email(String),
    Location(String),
    Bio(String),
    Website(String),
    SocialHandle(String),
    StyleTags(Vec<StyleTag>),
    PriceRange(Option<PriceRange>),
}

// =============================================================================
// SUBMITTED RECORD
// =============================================================================

/// Immutable snapshot of a complete draft, produced by `submit`.
///
/// Carries everything a profile preview needs without re-validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub collection_name: String,
    pub description: String,
    pub designer_name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
    pub style_tags: Vec<StyleTag>,
    pub price_range: PriceRange,
    pub images: Vec<ImageAsset>,
}

impl SubmittedRecord {
    /// Freeze a draft, leaving it empty.
    ///
    /// Returns `None` and leaves `draft` untouched unless steps 1 through 5
    /// all pass.
    #[must_use]
    pub fn freeze(draft: &mut DraftSubmission) -> Option<Self> {
        if !draft.is_complete() {
            return None;
        }
        let price_range = draft.price_range?;
        let draft = std::mem::take(draft);

        Some(Self {
            collection_name: draft.collection_name,
            description: draft.description,
            designer_name: draft.designer_name,
            email: draft.email,
            location: draft.location,
            bio: draft.bio,
            website: non_empty(draft.website),
            social_handle: non_empty(draft.social_handle),
            style_tags: draft.style_tags,
            price_range,
            images: draft.images,
        })
    }

    /// Turn the snapshot back into an editable draft.
    #[must_use]
    pub fn into_draft(self) -> DraftSubmission {
        DraftSubmission {
            images: self.images,
            collection_name: self.collection_name,
            description: self.description,
            designer_name: self.designer_name,
            email: self.email,
            location: self.location,
            bio: self.bio,
            website: self.website.unwrap_or_default(),
            social_handle: self.social_handle.unwrap_or_default(),
            style_tags: self.style_tags,
            price_range: Some(self.price_range),
        }
    }

    /// Number of uploaded assets.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Display names of the uploaded assets, in order.
    #[must_use]
    pub fn image_names(&self) -> Vec<String> {
        self.images.iter().map(|i| i.name.clone()).collect()
    }

    /// Price bracket label.
    #[must_use]
    pub fn price_label(&self) -> &'static str {
        self.price_range.label()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
