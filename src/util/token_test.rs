use super::*;

fn encode(payload: &serde_json::Value) -> String {
    URL_SAFE_NO_PAD.encode(payload.to_string())
}

// =============================================================
// decode_session_user — accepted shapes
// =============================================================

#[test]
fn subject_without_role_defaults_to_user() {
    let user = decode_session_user("a.eyJzdWIiOiJ4QHkuY29tIn0.c").unwrap();
    assert_eq!(user.email, "x@y.com");
    assert_eq!(user.role, "user");
}

#[test]
fn role_claim_is_carried_through() {
    let token = format!("h.{}.s", encode(&serde_json::json!({"sub": "p@q.com", "role": "premium"})));
    let user = decode_session_user(&token).unwrap();
    assert_eq!(user.email, "p@q.com");
    assert_eq!(user.role, "premium");
}

#[test]
fn empty_role_claim_defaults_to_user() {
    let token = format!("h.{}.s", encode(&serde_json::json!({"sub": "x@y.com", "role": ""})));
    let user = decode_session_user(&token).unwrap();
    assert_eq!(user.role, DEFAULT_ROLE);
}

#[test]
fn padded_standard_alphabet_payload_decodes() {
    // {"sub":"a?b"} encodes with '/' in the standard alphabet.
    let std = base64::engine::general_purpose::STANDARD.encode(r#"{"sub":"a?b>"}"#);
    assert!(std.contains('/') || std.contains('+') || std.ends_with('='));
    let user = decode_session_user(&format!("h.{std}.s")).unwrap();
    assert_eq!(user.email, "a?b>");
}

#[test]
fn extra_claims_are_ignored() {
    let token = format!(
        "h.{}.s",
        encode(&serde_json::json!({"sub": "e@f.com", "exp": 1_700_000_000, "iat": 1}))
    );
    assert_eq!(decode_session_user(&token).unwrap().email, "e@f.com");
}

// =============================================================
// decode_session_user — rejections
// =============================================================

#[test]
fn not_a_jwt_is_malformed() {
    assert_eq!(decode_session_user("not-a-jwt"), Err(TokenError::Malformed));
}

#[test]
fn too_many_segments_is_malformed() {
    assert_eq!(decode_session_user("a.b.c.d"), Err(TokenError::Malformed));
}

#[test]
fn empty_payload_segment_is_malformed() {
    assert_eq!(decode_session_user("a..c"), Err(TokenError::Malformed));
}

#[test]
fn non_base64_payload_is_encoding_error() {
    assert!(matches!(decode_session_user("a.!!!!.c"), Err(TokenError::Encoding(_))));
}

#[test]
fn non_json_payload_is_payload_error() {
    let token = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
    assert!(matches!(decode_session_user(&token), Err(TokenError::Payload(_))));
}

#[test]
fn missing_subject_is_rejected() {
    let token = format!("a.{}.c", encode(&serde_json::json!({"role": "premium"})));
    assert_eq!(decode_session_user(&token), Err(TokenError::MissingSubject));
}
