use super::*;

#[test]
fn auth_required_reports_401_and_fixed_message() {
    let err = ApiError::AuthRequired;
    assert_eq!(err.status(), 401);
    assert_eq!(err.message(), AUTH_REQUIRED_MESSAGE);
    assert!(err.details().is_none());
}

#[test]
fn storage_failure_is_status_zero() {
    let err = ApiError::Storage { message: "localStorage unavailable".to_owned() };
    assert_eq!(err.status(), 0);
    assert_eq!(err.message(), "could not store credential: localStorage unavailable");
    assert!(!err.is_not_found());
}

#[test]
fn transport_blank_message_falls_back_to_network_error() {
    let err = ApiError::transport("  ");
    assert_eq!(err.status(), 0);
    assert_eq!(err.message(), NETWORK_ERROR_MESSAGE);
}

#[test]
fn transport_keeps_original_message() {
    let err = ApiError::transport("connection refused");
    assert_eq!(err.message(), "connection refused");
}

#[test]
fn http_error_exposes_status_message_and_details() {
    let body = serde_json::json!({"detail": "nope"});
    let err = ApiError::Http { status: 403, message: "nope".to_owned(), details: Some(body.clone()) };
    assert_eq!(err.status(), 403);
    assert_eq!(err.message(), "nope");
    assert_eq!(err.details(), Some(&body));
    assert!(!err.is_not_found());
}

#[test]
fn is_not_found_only_for_http_404() {
    let err = ApiError::Http { status: 404, message: "gone".to_owned(), details: None };
    assert!(err.is_not_found());
    assert!(!ApiError::transport("x").is_not_found());
}

#[test]
fn invalid_credential_has_status_zero() {
    let err = ApiError::InvalidCredential { reason: TokenError::MissingSubject };
    assert_eq!(err.status(), 0);
    assert!(err.message().starts_with("invalid credential"));
}
