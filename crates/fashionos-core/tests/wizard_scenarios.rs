//! # Wizard Scenario Tests
//!
//! End-to-end walks through the submission wizard, one module per concern.
//!
//! ## Groups
//! - Gating: blocked and allowed forward moves
//! - Collection editing: tags and images
//! - Submission: the Submitting → Submitted lifecycle

use fashionos_core::{
    DraftSubmission, FieldUpdate, ImageAsset, PriceRange, Step, StyleTag, WizardController,
    WizardPhase,
};

fn image(name: &str) -> ImageAsset {
    ImageAsset::new(name, vec![0xFF, 0xD8, 0xFF]).with_content_type("image/jpeg")
}

fn fill_designer(wizard: &mut WizardController, name: &str) {
    wizard.set_field(FieldUpdate::DesignerName(name.to_string()));
    wizard.set_field(FieldUpdate::Email("andrew@atelier.example".to_string()));
    wizard.set_field(FieldUpdate::Location("London, UK".to_string()));
    wizard.set_field(FieldUpdate::Bio(
        "Merging traditional craftsmanship with cinematic storytelling.".to_string(),
    ));
}

/// Walk a fresh wizard to step 3 with valid upload and details.
fn wizard_at_designer_step() -> WizardController {
    let mut wizard = WizardController::new();
    wizard.add_images(vec![image("dive-dress.jpg")]);
    assert!(wizard.advance());
    wizard.set_field(FieldUpdate::CollectionName("Eye Spy".to_string()));
    wizard.set_field(FieldUpdate::Description(
        "A study in reflective surfaces".to_string(),
    ));
    assert!(wizard.advance());
    assert_eq!(wizard.current_step(), Step::Designer);
    wizard
}

// =============================================================================
// GATING
// =============================================================================

mod gating {
    use super::*;

    /// An empty draft cannot leave step 1.
    #[test]
    fn empty_draft_is_blocked_at_upload() {
        let mut wizard = WizardController::new();

        assert!(!wizard.is_step_valid());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), Step::Upload);
        assert_eq!(wizard.draft(), &DraftSubmission::new());
    }

    /// Upload then details reach step 3.
    #[test]
    fn upload_and_details_reach_designer_step() {
        let mut wizard = WizardController::new();
        wizard.add_images(vec![image("look-01.jpg")]);
        assert!(wizard.is_step_valid());
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), Step::Details);

        wizard.set_field(FieldUpdate::CollectionName("Eye Spy".to_string()));
        wizard.set_field(FieldUpdate::Description(
            "A study in reflective surfaces".to_string(),
        ));
        assert!(wizard.is_step_valid());
        assert!(wizard.advance());
        assert_eq!(wizard.current_step().number(), 3);
    }

    /// A two-letter designer name blocks step 3 until it is lengthened.
    #[test]
    fn short_designer_name_blocks_until_fixed() {
        let mut wizard = wizard_at_designer_step();

        fill_designer(&mut wizard, "AM");
        let before = wizard.draft().clone();
        assert!(!wizard.is_step_valid());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), Step::Designer);
        assert_eq!(wizard.draft(), &before);

        wizard.set_field(FieldUpdate::DesignerName("Andrew M".to_string()));
        assert!(wizard.is_step_valid());
        assert!(wizard.advance());
        assert_eq!(wizard.current_step().number(), 4);
    }

    /// Going back is never gated, even from an invalid step.
    #[test]
    fn retreat_ignores_validity() {
        let mut wizard = wizard_at_designer_step();
        wizard.set_field(FieldUpdate::CollectionName(String::new()));

        assert!(wizard.retreat());
        assert_eq!(wizard.current_step(), Step::Details);
        assert!(!wizard.is_step_valid());
        assert!(wizard.retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_step(), Step::Upload);
    }

    /// Validity follows edits immediately, with no stale cache.
    #[test]
    fn validity_tracks_every_edit() {
        let mut wizard = WizardController::new();
        wizard.add_images(vec![image("a.jpg")]);
        assert!(wizard.is_step_valid());
        wizard.remove_image(0);
        assert!(!wizard.is_step_valid());
    }
}

// =============================================================================
// COLLECTION EDITING
// =============================================================================

mod editing {
    use super::*;

    /// Minimalist, Avant-Garde, Minimalist leaves only Avant-Garde.
    #[test]
    fn toggling_tags() {
        let mut wizard = WizardController::new();

        assert_eq!(wizard.toggle_tag(StyleTag::Minimalist), Some(true));
        assert_eq!(wizard.toggle_tag(StyleTag::AvantGarde), Some(true));
        assert_eq!(wizard.toggle_tag(StyleTag::Minimalist), Some(false));

        assert_eq!(wizard.draft().style_tags, vec![StyleTag::AvantGarde]);
    }

    /// Removing the middle image keeps the others in order.
    #[test]
    fn removing_middle_image() {
        let mut wizard = WizardController::new();
        wizard.add_images(vec![image("A"), image("B"), image("C")]);

        let removed = wizard.remove_image(1).expect("removed");
        assert_eq!(removed.name, "B");
        assert_eq!(wizard.draft().image_names(), vec!["A", "C"]);
    }

    /// Uploads append to what is already there.
    #[test]
    fn uploads_append() {
        let mut wizard = WizardController::new();
        wizard.add_images(vec![image("A")]);
        wizard.add_images(vec![image("B"), image("C")]);
        assert_eq!(wizard.draft().image_names(), vec!["A", "B", "C"]);
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

mod submission {
    use super::*;

    fn wizard_at_review() -> WizardController {
        let mut wizard = wizard_at_designer_step();
        fill_designer(&mut wizard, "Andrew M");
        wizard.set_field(FieldUpdate::Website("https://majtenyi.example".to_string()));
        assert!(wizard.advance());

        wizard.toggle_tag(StyleTag::AvantGarde);
        assert!(wizard.advance());

        wizard.set_field(FieldUpdate::PriceRange(Some(PriceRange::Contemporary)));
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), Step::Review);
        assert!(wizard.is_step_valid());
        wizard
    }

    /// Full submission, then reset back to an empty step 1.
    #[test]
    fn submit_complete_reset() {
        let mut wizard = wizard_at_review();

        let record = wizard.submit().expect("submission starts");
        assert_eq!(wizard.phase(), WizardPhase::Submitting);
        assert_eq!(record.collection_name, "Eye Spy");
        assert_eq!(record.designer_name, "Andrew M");
        assert_eq!(record.website.as_deref(), Some("https://majtenyi.example"));
        assert_eq!(record.social_handle, None);
        assert_eq!(record.style_tags, vec![StyleTag::AvantGarde]);
        assert_eq!(record.price_label(), "$500 - $1,500");
        assert_eq!(record.image_count(), 1);

        let confirmed = wizard.complete_submission().cloned().expect("confirmed");
        assert_eq!(wizard.phase(), WizardPhase::Submitted);
        assert_eq!(confirmed, record);

        assert!(wizard.reset());
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert_eq!(wizard.current_step(), Step::Upload);
        assert_eq!(wizard.draft(), &DraftSubmission::new());
        assert!(wizard.submitted().is_none());
    }

    /// A second submit while submitting does not finalize twice.
    #[test]
    fn double_submit_is_ignored() {
        let mut wizard = wizard_at_review();
        assert!(wizard.submit().is_some());
        assert!(wizard.submit().is_none());
        assert!(wizard.complete_submission().is_some());
        assert!(wizard.complete_submission().is_none());
        assert!(wizard.submit().is_none());
    }
}
