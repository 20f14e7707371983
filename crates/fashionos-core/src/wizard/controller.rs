//! # Wizard Controller
//!
//! Owns one draft and drives it through the submission state machine:
//!
//! ```text
//!   Editing(1..=6) ──submit()──▶ Submitting ──complete_submission()──▶ Submitted
//!        ▲    │                      │                                     │
//!        │    └ advance / retreat    └ abort_submission() ─▶ Editing(6)    │
//!        └──────────────────────────── reset() ◀───────────────────────────┘
//! ```
//!
//! `reset()` also works while editing; it is refused while submitting.
//!
//! Forward moves are gated on the current step's validity; a blocked move is
//! a silent no-op, never an error. Backward moves are never gated. Field
//! edits apply only while editing.

use super::validity::compute_step_validity;
use super::{DraftSubmission, FieldUpdate, Step, SubmittedRecord};
use crate::profile::HandoffPayload;
use crate::{ImageAsset, StyleTag};
use serde::{Deserialize, Serialize};

// =============================================================================
// STATE
// =============================================================================

/// Where a wizard session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// The draft is editable; `step` is the visible step.
    Editing { step: Step },
    /// The frozen record is with the submission collaborator.
    Submitting { record: SubmittedRecord },
    /// The collaborator confirmed the record.
    Submitted { record: SubmittedRecord },
}

/// Discriminant of [`WizardState`], for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    Editing,
    Submitting,
    Submitted,
}

impl WizardState {
    /// The phase of this state.
    #[must_use]
    pub fn phase(&self) -> WizardPhase {
        match self {
            WizardState::Editing { .. } => WizardPhase::Editing,
            WizardState::Submitting { .. } => WizardPhase::Submitting,
            WizardState::Submitted { .. } => WizardPhase::Submitted,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::Editing { step: Step::FIRST }
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// The submission wizard.
///
/// Single writer: every operation is a discrete, synchronous mutation.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    draft: DraftSubmission,
    state: WizardState,
}

impl WizardController {
    /// Create a wizard with an empty draft at step 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wizard at step 1 around an existing draft.
    ///
    /// Duplicate tags in `draft` are dropped.
    #[must_use]
    pub fn from_draft(draft: DraftSubmission) -> Self {
        Self {
            draft: draft.normalize(),
            state: WizardState::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The live draft. Empty once a submission has started.
    #[must_use]
    pub fn draft(&self) -> &DraftSubmission {
        &self.draft
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> WizardPhase {
        self.state.phase()
    }

    /// The visible step. Review once a submission has started.
    #[must_use]
    pub fn current_step(&self) -> Step {
        match self.state {
            WizardState::Editing { step } => step,
            WizardState::Submitting { .. } | WizardState::Submitted { .. } => Step::LAST,
        }
    }

    /// Validity of the visible step, recomputed on every call.
    #[must_use]
    pub fn is_step_valid(&self) -> bool {
        match self.state {
            WizardState::Editing { step } => compute_step_validity(&self.draft, step),
            WizardState::Submitting { .. } | WizardState::Submitted { .. } => true,
        }
    }

    /// The frozen record, while submitting or after submission.
    #[must_use]
    pub fn record(&self) -> Option<&SubmittedRecord> {
        match &self.state {
            WizardState::Editing { .. } => None,
            WizardState::Submitting { record } | WizardState::Submitted { record } => Some(record),
        }
    }

    /// The confirmed record, once submitted.
    #[must_use]
    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        match &self.state {
            WizardState::Submitted { record } => Some(record),
            _ => None,
        }
    }

    /// Payload for a profile preview: the frozen record if there is one,
    /// otherwise the live draft.
    #[must_use]
    pub fn handoff(&self) -> HandoffPayload {
        match self.record() {
            Some(record) => HandoffPayload::from_record(record),
            None => HandoffPayload::from_draft(&self.draft),
        }
    }

    fn is_editing(&self) -> bool {
        matches!(self.state, WizardState::Editing { .. })
    }

    // -------------------------------------------------------------------------
    // Field mutation
    // -------------------------------------------------------------------------

    /// Overwrite one draft field. Returns `false` when not editing.
    pub fn set_field(&mut self, update: FieldUpdate) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.draft.apply(update);
        true
    }

    /// Append uploaded assets. Returns `false` when not editing.
    pub fn add_images(&mut self, images: Vec<ImageAsset>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.draft.add_images(images);
        true
    }

    /// Remove the asset at `index`, keeping the others in order.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageAsset> {
        if !self.is_editing() {
            return None;
        }
        self.draft.remove_image(index)
    }

    /// Toggle a style tag. Returns whether it is selected afterwards, or
    /// `None` when not editing.
    pub fn toggle_tag(&mut self, tag: StyleTag) -> Option<bool> {
        self.is_editing().then(|| self.draft.toggle_tag(tag))
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Move one step forward if the current step is valid.
    ///
    /// Returns whether the step changed. Invalid steps and Review stay put.
    pub fn advance(&mut self) -> bool {
        let WizardState::Editing { step } = self.state else {
            return false;
        };
        if !compute_step_validity(&self.draft, step) {
            return false;
        }
        let next = step.next();
        self.state = WizardState::Editing { step: next };
        next != step
    }

    /// Move one step back. Never gated; clamps at step 1.
    pub fn retreat(&mut self) -> bool {
        let WizardState::Editing { step } = self.state else {
            return false;
        };
        let previous = step.previous();
        self.state = WizardState::Editing { step: previous };
        previous != step
    }

    /// Jump straight to Review when steps 1 through 5 all pass.
    pub fn jump_to_review(&mut self) -> bool {
        let WizardState::Editing { step } = self.state else {
            return false;
        };
        if step.is_review() || !self.draft.is_complete() {
            return false;
        }
        self.state = WizardState::Editing { step: Step::LAST };
        true
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Freeze the draft and enter `Submitting`.
    ///
    /// Only from Review with a complete draft; anything else (including a
    /// second call while submitting) is a no-op returning `None`. The live
    /// draft is discarded; the returned record goes to the collaborator.
    pub fn submit(&mut self) -> Option<SubmittedRecord> {
        if self.state != (WizardState::Editing { step: Step::LAST }) {
            return None;
        }
        if !compute_step_validity(&self.draft, Step::LAST) || !self.draft.is_complete() {
            return None;
        }
        let record = SubmittedRecord::freeze(&mut self.draft)?;
        self.state = WizardState::Submitting {
            record: record.clone(),
        };
        Some(record)
    }

    /// `Submitting` → `Submitted`. No-op in any other state.
    pub fn complete_submission(&mut self) -> Option<&SubmittedRecord> {
        match std::mem::take(&mut self.state) {
            WizardState::Submitting { record } => {
                self.state = WizardState::Submitted { record };
                self.submitted()
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// `Submitting` → `Editing(6)` with the frozen record restored as draft.
    ///
    /// Used when a submission collaborator reports failure.
    pub fn abort_submission(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            WizardState::Submitting { record } => {
                self.draft = record.into_draft();
                self.state = WizardState::Editing { step: Step::LAST };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Discard the draft and any snapshot and start over at step 1.
    ///
    /// A submission in flight cannot be interrupted: returns `false` and
    /// changes nothing while `Submitting`.
    pub fn reset(&mut self) -> bool {
        if self.phase() == WizardPhase::Submitting {
            return false;
        }
        *self = Self::new();
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
