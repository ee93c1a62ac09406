use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com ", "secret"),
        Ok(("a@b.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Please enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Please enter both email and password."));
}

#[test]
fn registered_banner_only_for_true_flag() {
    assert!(show_registered_banner(Some("true")));
    assert!(!show_registered_banner(Some("false")));
    assert!(!show_registered_banner(Some("")));
    assert!(!show_registered_banner(None));
}
