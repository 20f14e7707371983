//! # Core Type Definitions
//!
//! This module contains the vocabulary types shared by the wizard, the
//! catalog and the profile view:
//! - Binary asset handles (`ImageAsset`)
//! - Fixed vocabularies (`StyleTag`, `PriceRange`)
//! - Error types (`FashionError`)
//!
//! The fixed vocabularies serialize with their display labels so that a
//! presentation layer can render them without a lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// IMAGE ASSET
// =============================================================================

/// A binary asset handed over by the file-selection collaborator.
///
/// The bytes are opaque at this layer: no size or type limits are applied.
/// Only the display name and content type are serialized; the bytes stay in
/// process memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Display name (usually the picked file name).
    pub name: String,
    /// MIME type, if the picker reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Raw asset bytes.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    /// Create an asset handle with no known content type.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    /// Attach a MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Size of the asset in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// =============================================================================
// STYLE TAGS
// =============================================================================

/// Style descriptors a designer can attach to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StyleTag {
    Minimalist,
    #[serde(rename = "Avant-Garde")]
    AvantGarde,
    Sustainable,
    Vintage,
    Cyberpunk,
    Bohemian,
    Structural,
}

impl StyleTag {
    /// Every tag, in the order the picker presents them.
    pub const ALL: [StyleTag; 7] = [
        StyleTag::Minimalist,
        StyleTag::AvantGarde,
        StyleTag::Sustainable,
        StyleTag::Vintage,
        StyleTag::Cyberpunk,
        StyleTag::Bohemian,
        StyleTag::Structural,
    ];

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StyleTag::Minimalist => "Minimalist",
            StyleTag::AvantGarde => "Avant-Garde",
            StyleTag::Sustainable => "Sustainable",
            StyleTag::Vintage => "Vintage",
            StyleTag::Cyberpunk => "Cyberpunk",
            StyleTag::Bohemian => "Bohemian",
            StyleTag::Structural => "Structural",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StyleTag {
    type Err = FashionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StyleTag::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FashionError::UnknownStyleTag(s.to_string()))
    }
}

// =============================================================================
// PRICE RANGE
// =============================================================================

/// Average item price bracket of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$100 - $500")]
    Accessible,
    #[serde(rename = "$500 - $1,500")]
    Contemporary,
    #[serde(rename = "$1,500+")]
    Luxury,
}

impl PriceRange {
    /// Every bracket, cheapest first.
    pub const ALL: [PriceRange; 3] = [
        PriceRange::Accessible,
        PriceRange::Contemporary,
        PriceRange::Luxury,
    ];

    /// Bracket label as shown to the designer.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Accessible => "$100 - $500",
            PriceRange::Contemporary => "$500 - $1,500",
            PriceRange::Luxury => "$1,500+",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the FashionOS system.
///
/// Blocked wizard transitions are NOT errors: `advance` on an invalid step is
/// a silent no-op. These variants cover malformed input at the boundaries and
/// the app layer's I/O.
#[derive(Debug, Error)]
pub enum FashionError {
    /// The tag is not part of the style vocabulary.
    #[error("Unknown style tag: {0}")]
    UnknownStyleTag(String),

    /// No wizard session with this id exists.
    #[error("Wizard not found: {0}")]
    WizardNotFound(u64),

    /// Every session slot is taken by an unfinished wizard.
    #[error("Too many open wizards (limit {0})")]
    SessionLimit(usize),

    /// An uploaded asset could not be decoded.
    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    /// The submission collaborator rejected the record.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// A configuration file or value could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
