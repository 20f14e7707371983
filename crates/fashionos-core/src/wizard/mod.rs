//! # Submission Wizard
//!
//! A six-step form controller: a draft record, per-step validity
//! predicates that gate forward navigation, and a small submission state
//! machine (`Editing` → `Submitting` → `Submitted`).
//!
//! The submission boundary itself (the delay, or a real request) is not
//! here. The controller only freezes the record and records the outcome;
//! whoever performs the submission calls back into it.

mod controller;
mod draft;
mod step;
mod validity;

pub use controller::{WizardController, WizardPhase, WizardState};
pub use draft::{DraftSubmission, FieldUpdate, SubmittedRecord};
pub use step::Step;
pub use validity::{compute_step_validity, first_invalid_step};
