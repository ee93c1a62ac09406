use super::*;

#[test]
fn date_prefix_strips_time_component() {
    assert_eq!(date_prefix("2024-03-05T12:34:56.000Z"), "2024-03-05");
}

#[test]
fn date_prefix_passes_plain_dates_through() {
    assert_eq!(date_prefix("2024-03-05"), "2024-03-05");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn today_iso_is_a_date_off_browser() {
    assert_eq!(today_iso().len(), 10);
}
