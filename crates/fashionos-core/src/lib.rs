//! # fashionos-core
//!
//! The deterministic logic behind the FashionOS atelier site - THE LOGIC.
//!
//! The site itself is mostly presentation. What is left once markup and
//! styling are removed lives here:
//! - `wizard`: the six-step submission wizard (draft record, gating,
//!   validation, submission state machine)
//! - `catalog`: the read-only collections/designers data source
//! - `profile`: resolving a designer profile from a transient handoff
//!   payload or from the catalog
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Has NO async, NO network dependencies (pure Rust)
//! - Never initiates interaction; only reacts to explicit operations
//! - Treats blocked wizard transitions as silent no-ops, not errors

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod primitives;
pub mod profile;
pub mod types;
pub mod wizard;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{FashionError, ImageAsset, PriceRange, StyleTag};

// =============================================================================
// RE-EXPORTS: Wizard
// =============================================================================

pub use wizard::{
    DraftSubmission, FieldUpdate, Step, SubmittedRecord, WizardController, WizardPhase,
    WizardState, compute_step_validity,
};

// =============================================================================
// RE-EXPORTS: Catalog & Profiles
// =============================================================================

pub use catalog::{Brand, Catalog, Collection, Designer};
pub use profile::{DesignerProfile, HandoffPayload, resolve_profile};
