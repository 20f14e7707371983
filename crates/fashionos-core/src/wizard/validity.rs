//! # Step Validity
//!
//! Pure predicates deciding whether a step's required fields are filled.
//!
//! - Step 1: at least one image
//! - Step 2: collection name > 2 chars, description > 10 chars (trimmed)
//! - Step 3: designer name > 2, email contains `@`, location > 2, bio > 10
//! - Step 4: at least one style tag
//! - Step 5: a price range is chosen
//! - Step 6: always valid
//!
//! Lengths count Unicode scalar values after trimming surrounding whitespace.
//! Nothing here is cached: callers recompute after every mutation.

use super::{DraftSubmission, Step};
use crate::primitives::{EMAIL_MARKER, PROSE_MIN_EXCLUSIVE, SHORT_TEXT_MIN_EXCLUSIVE};

/// Check whether `step`'s required fields in `draft` are satisfied.
#[must_use]
pub fn compute_step_validity(draft: &DraftSubmission, step: Step) -> bool {
    match step {
        Step::Upload => !draft.images.is_empty(),
        Step::Details => {
            longer_than(&draft.collection_name, SHORT_TEXT_MIN_EXCLUSIVE)
                && longer_than(&draft.description, PROSE_MIN_EXCLUSIVE)
        }
        Step::Designer => {
            longer_than(&draft.designer_name, SHORT_TEXT_MIN_EXCLUSIVE)
                && draft.email.contains(EMAIL_MARKER)
                && longer_than(&draft.location, SHORT_TEXT_MIN_EXCLUSIVE)
                && longer_than(&draft.bio, PROSE_MIN_EXCLUSIVE)
        }
        Step::Tags => !draft.style_tags.is_empty(),
        Step::Market => draft.price_range.is_some(),
        Step::Review => true,
    }
}

/// The earliest step before Review whose predicate fails, if any.
#[must_use]
pub fn first_invalid_step(draft: &DraftSubmission) -> Option<Step> {
    Step::ALL
        .into_iter()
        .take_while(|step| !step.is_review())
        .find(|step| !compute_step_validity(draft, *step))
}

// Counts scalar values, so "👗👗" is 2 long (a UTF-16 count would say 4).
fn longer_than(text: &str, min_exclusive: usize) -> bool {
    text.trim().chars().count() > min_exclusive
}
