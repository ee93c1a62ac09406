use super::*;

// =============================================================
// ApiConfig::from_value
// =============================================================

#[test]
fn from_value_none_uses_default() {
    let cfg = ApiConfig::from_value(None);
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_value_blank_uses_default() {
    let cfg = ApiConfig::from_value(Some("   "));
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_value_trims_whitespace_and_trailing_slashes() {
    let cfg = ApiConfig::from_value(Some("  https://api.example.test// "));
    assert_eq!(cfg.base_url, "https://api.example.test");
}

// =============================================================
// url_for
// =============================================================

#[test]
fn url_for_keeps_leading_slash() {
    let cfg = ApiConfig::from_value(Some("http://h:1"));
    assert_eq!(cfg.url_for("/api/v1/user/profile"), "http://h:1/api/v1/user/profile");
}

#[test]
fn url_for_inserts_missing_slash() {
    let cfg = ApiConfig::from_value(Some("http://h:1"));
    assert_eq!(cfg.url_for("api/v1/workout/plan"), "http://h:1/api/v1/workout/plan");
}
