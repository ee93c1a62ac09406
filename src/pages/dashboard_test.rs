use super::*;

#[test]
fn display_name_uses_local_part() {
    assert_eq!(display_name("alex@example.com"), "alex");
}

#[test]
fn display_name_falls_back_to_whole_value() {
    assert_eq!(display_name("no-at-sign"), "no-at-sign");
    assert_eq!(display_name("@example.com"), "@example.com");
}

#[test]
fn greeting_names_the_user() {
    assert_eq!(greeting(Some("sam@x.io")), "Welcome back, sam!");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(None), "Welcome back!");
    assert_eq!(greeting(Some("")), "Welcome back!");
}
