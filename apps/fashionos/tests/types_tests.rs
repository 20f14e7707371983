//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::StatusCode;
use fashionos::api::{
    DraftView, HealthResponse, ImagePayload, ImageUploadRequest, ProfileResponse,
    TagToggleRequest, WizardResponse, WizardView, error_status,
};
use fashionos_core::{
    FashionError, FieldUpdate, ImageAsset, PriceRange, StyleTag, WizardController,
};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status":"healthy","version":"1.0.0"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "1.0.0");
}

// =============================================================================
// WIZARD VIEW TESTS
// =============================================================================

#[test]
fn test_wizard_view_shape() {
    let mut wizard = WizardController::new();
    wizard.add_images(vec![
        ImageAsset::new("look-01.jpg", vec![0xFF; 2048]).with_content_type("image/jpeg"),
    ]);
    wizard.toggle_tag(StyleTag::AvantGarde);

    let view = WizardView::new(7, &wizard);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["phase"], "editing");
    assert_eq!(json["step"], 1);
    assert_eq!(json["step_label"], "Upload");
    assert_eq!(json["progress_percent"], 16);
    assert_eq!(json["step_valid"], true);
    assert_eq!(json["draft"]["image_names"][0], "look-01.jpg");
    assert_eq!(json["draft"]["image_count"], 1);
    assert_eq!(json["draft"]["style_tags"][0], "Avant-Garde");
    assert!(json["draft"]["price_range"].is_null());
    assert!(json["submitted"].is_null());
}

#[test]
fn test_draft_view_carries_no_bytes() {
    let mut wizard = WizardController::new();
    wizard.add_images(vec![ImageAsset::new("a.jpg", b"secret-bytes".to_vec())]);

    let json = serde_json::to_string(&DraftView::from(wizard.draft())).unwrap();
    assert!(!json.contains("bytes"));
    assert!(!json.contains("secret"));
}

#[test]
fn test_wizard_response_error() {
    let response = WizardResponse::error("Wizard not found: 3");
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["moved"], false);
    assert!(json["wizard"].is_null());
    assert!(json.get("selected").is_none());
    assert_eq!(json["error"], "Wizard not found: 3");
}

#[test]
fn test_wizard_response_round_trip() {
    let mut wizard = WizardController::new();
    wizard.set_field(FieldUpdate::PriceRange(Some(PriceRange::Accessible)));
    let response = WizardResponse::success(WizardView::new(1, &wizard), true).with_selected(Some(true));

    let json = serde_json::to_string(&response).unwrap();
    let back: WizardResponse = serde_json::from_str(&json).unwrap();
    assert!(back.moved);
    assert_eq!(back.selected, Some(true));
    assert_eq!(
        back.wizard.unwrap().draft.price_range,
        Some(PriceRange::Accessible)
    );
}

// =============================================================================
// REQUEST TESTS
// =============================================================================

#[test]
fn test_image_upload_decodes_base64() {
    let request: ImageUploadRequest = serde_json::from_str(
        r#"{"images":[{"name":"a.png","content_type":"image/png","data":"iVBORw=="},{"name":"b.jpg","data":""}]}"#,
    )
    .unwrap();

    let assets = request.to_assets().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].bytes, vec![0x89, b'P', b'N', b'G']);
    assert_eq!(assets[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(assets[1].content_type, None);
    assert_eq!(assets[1].size(), 0);
}

#[test]
fn test_image_upload_rejects_bad_entries() {
    let bad_data = ImageUploadRequest {
        images: vec![ImagePayload {
            name: "x.jpg".to_string(),
            content_type: None,
            data: "%%%".to_string(),
        }],
    };
    assert!(matches!(
        bad_data.to_assets(),
        Err(FashionError::InvalidAsset(_))
    ));

    let blank_name = ImageUploadRequest {
        images: vec![ImagePayload {
            name: "  ".to_string(),
            content_type: None,
            data: String::new(),
        }],
    };
    assert!(blank_name.to_assets().is_err());
}

#[test]
fn test_tag_toggle_request() {
    let request = TagToggleRequest {
        tag: " cyberpunk ".to_string(),
    };
    assert_eq!(request.to_tag().unwrap(), StyleTag::Cyberpunk);

    let unknown = TagToggleRequest {
        tag: "Grunge".to_string(),
    };
    assert!(matches!(
        unknown.to_tag(),
        Err(FashionError::UnknownStyleTag(_))
    ));
}

#[test]
fn test_field_update_wire_format() {
    let update: FieldUpdate =
        serde_json::from_str(r#"{"field":"social_handle","value":"@atelier"}"#).unwrap();
    assert_eq!(update, FieldUpdate::SocialHandle("@atelier".to_string()));

    let tags: FieldUpdate =
        serde_json::from_str(r#"{"field":"style_tags","value":["Vintage","Bohemian"]}"#).unwrap();
    assert_eq!(
        tags,
        FieldUpdate::StyleTags(vec![StyleTag::Vintage, StyleTag::Bohemian])
    );
}

// =============================================================================
// ERROR MAPPING TESTS
// =============================================================================

#[test]
fn test_error_status_mapping() {
    assert_eq!(
        error_status(&FashionError::WizardNotFound(1)),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        error_status(&FashionError::UnknownStyleTag("x".to_string())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        error_status(&FashionError::InvalidAsset("x".to_string())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        error_status(&FashionError::SessionLimit(8)),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        error_status(&FashionError::SubmissionFailed("x".to_string())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        error_status(&FashionError::Config("x".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_profile_not_found_response() {
    let json = serde_json::to_value(ProfileResponse::not_found()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["found"], false);
    assert_eq!(json["error"], "Designer Not Found");
}
