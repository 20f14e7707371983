//! # Wizard Steps
//!
//! | Step | Label | Collects |
//! |------|-------|----------|
//! | 1 | Upload | images |
//! | 2 | Details | collection name, description |
//! | 3 | Designer | name, email, location, bio, website, social handle |
//! | 4 | Tags | style tags |
//! | 5 | Market | price range |
//! | 6 | Review | nothing, submission happens here |
//!
//! Moving outside `[1, 6]` clamps instead of failing.

use crate::primitives::STEP_COUNT;
use serde::{Deserialize, Serialize};

/// One of the six ordered stages of the submission wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Upload,
    Details,
    Designer,
    Tags,
    Market,
    Review,
}

impl Step {
    /// Every step in wizard order.
    pub const ALL: [Step; STEP_COUNT as usize] = [
        Step::Upload,
        Step::Details,
        Step::Designer,
        Step::Tags,
        Step::Market,
        Step::Review,
    ];

    /// The step a fresh wizard starts on.
    pub const FIRST: Step = Step::Upload;

    /// The review step, the only one that can submit.
    pub const LAST: Step = Step::Review;

    /// 1-based step number.
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            Step::Upload => 1,
            Step::Details => 2,
            Step::Designer => 3,
            Step::Tags => 4,
            Step::Market => 5,
            Step::Review => 6,
        }
    }

    /// Step for a 1-based number, clamped into `[1, 6]`.
    #[must_use]
    pub fn clamped(number: i64) -> Step {
        let index = number.clamp(1, i64::from(STEP_COUNT)) - 1;
        Step::ALL[index as usize]
    }

    /// Short label shown above the progress bar.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Step::Upload => "Upload",
            Step::Details => "Details",
            Step::Designer => "Designer",
            Step::Tags => "Tags",
            Step::Market => "Market",
            Step::Review => "Review",
        }
    }

    /// The following step, saturating at Review.
    #[must_use]
    pub fn next(&self) -> Step {
        Step::clamped(i64::from(self.number()) + 1)
    }

    /// The preceding step, saturating at Upload.
    #[must_use]
    pub fn previous(&self) -> Step {
        Step::clamped(i64::from(self.number()) - 1)
    }

    /// Progress bar fill, in whole percent.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        (u16::from(self.number()) * 100 / u16::from(STEP_COUNT)) as u8
    }

    /// Check if this is the review step.
    #[must_use]
    pub fn is_review(&self) -> bool {
        matches!(self, Step::Review)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_match_order() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(usize::from(step.number()), i + 1);
            assert_eq!(Step::clamped(i64::from(step.number())), *step);
        }
    }

    #[test]
    fn clamping() {
        assert_eq!(Step::clamped(0), Step::Upload);
        assert_eq!(Step::clamped(-3), Step::Upload);
        assert_eq!(Step::clamped(7), Step::Review);
    }

    #[test]
    fn next_and_previous_saturate() {
        assert_eq!(Step::Review.next(), Step::Review);
        assert_eq!(Step::Upload.previous(), Step::Upload);
        assert_eq!(Step::Designer.next(), Step::Tags);
        assert_eq!(Step::Designer.previous(), Step::Details);
    }

    #[test]
    fn progress() {
        assert_eq!(Step::Upload.progress_percent(), 16);
        assert_eq!(Step::Designer.progress_percent(), 50);
        assert_eq!(Step::Review.progress_percent(), 100);
    }
}
