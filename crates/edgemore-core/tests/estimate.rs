use edgemore_core::filenames::{estimate_attachment, sanitize_filename};
use edgemore_core::models::estimate::{EstimateRequest, FORM_KEYS};

#[test]
fn empty_form_defaults_every_field() {
    let request = EstimateRequest::from_form_pairs(Vec::<(String, String)>::new());
    assert_eq!(request, EstimateRequest::default());
    assert_eq!(request.name, "");
    assert_eq!(request.referral, "");
}

#[test]
fn recognized_keys_map_to_fields() {
    let pairs = vec![
        ("name", "Jane Roe"),
        ("zip", "33602"),
        ("square_footage", "450"),
        ("contact_method", "Text"),
        ("vision", "Metallic\nepoxy"),
    ];

    let request = EstimateRequest::from_form_pairs(pairs);
    assert_eq!(request.name, "Jane Roe");
    assert_eq!(request.zip_code, "33602");
    assert_eq!(request.sqft, "450");
    assert_eq!(request.contact_method, "Text");
    assert_eq!(request.vision, "Metallic\nepoxy");
    assert_eq!(request.city, "");
}

#[test]
fn every_form_key_is_recognized() {
    let pairs: Vec<(&str, String)> = FORM_KEYS.iter().map(|k| (*k, format!("v-{k}"))).collect();
    let request = EstimateRequest::from_form_pairs(pairs);

    assert_eq!(request.name, "v-name");
    assert_eq!(request.phone, "v-phone");
    assert_eq!(request.email, "v-email");
    assert_eq!(request.contact_method, "v-contact_method");
    assert_eq!(request.address, "v-address");
    assert_eq!(request.city, "v-city");
    assert_eq!(request.zip_code, "v-zip");
    assert_eq!(request.space_type, "v-space_type");
    assert_eq!(request.sqft, "v-square_footage");
    assert_eq!(request.finish, "v-finish");
    assert_eq!(request.condition, "v-condition");
    assert_eq!(request.vision, "v-vision");
    assert_eq!(request.timeline, "v-timeline");
    assert_eq!(request.budget, "v-budget");
    assert_eq!(request.referral, "v-referral");
}

#[test]
fn unknown_keys_are_ignored_and_values_kept_verbatim() {
    let pairs = vec![("honeypot", "spam"), ("name", "  padded  "), ("Name", "wrong case")];
    let request = EstimateRequest::from_form_pairs(pairs);
    assert_eq!(request.name, "  padded  ");
}

#[test]
fn first_occurrence_wins() {
    let pairs = vec![("phone", "111"), ("phone", "222")];
    let request = EstimateRequest::from_form_pairs(pairs);
    assert_eq!(request.phone, "111");
}

#[test]
fn display_name_falls_back_to_unknown() {
    assert_eq!(EstimateRequest::default().display_name(), "Unknown");
    let request = EstimateRequest {
        name: "Ana".to_string(),
        ..Default::default()
    };
    assert_eq!(request.display_name(), "Ana");
}

#[test]
fn sanitize_strips_disallowed_characters() {
    assert_eq!(sanitize_filename("John Doe!"), "JohnDoe");
    assert_eq!(sanitize_filename("A-B_C"), "A-B_C");
    assert_eq!(sanitize_filename("O'Brien & Sons"), "OBrienSons");
}

#[test]
fn sanitize_falls_back_to_client() {
    assert_eq!(sanitize_filename(""), "client");
    assert_eq!(sanitize_filename("___"), "client");
    assert_eq!(sanitize_filename("!!!"), "client");
}

#[test]
fn sanitize_trims_only_underscores() {
    assert_eq!(sanitize_filename("_Jo_"), "Jo");
    assert_eq!(sanitize_filename("-Jo-"), "-Jo-");
}

#[test]
fn attachment_name_uses_sanitized_stem() {
    assert_eq!(estimate_attachment("John Doe!"), "Edgemore_Estimate_JohnDoe.pdf");
    assert_eq!(estimate_attachment(""), "Edgemore_Estimate_client.pdf");
}

#[test]
fn deserializes_with_form_key_names() {
    let json = r#"{"name":"Lee","zip":"34677","square_footage":"900"}"#;
    let request: EstimateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.name, "Lee");
    assert_eq!(request.zip_code, "34677");
    assert_eq!(request.sqft, "900");
    assert_eq!(request.budget, "");
}
