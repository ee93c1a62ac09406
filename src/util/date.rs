//! Calendar date helpers for day-keyed backend routes.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Today's date as `YYYY-MM-DD` in UTC.
///
/// Reads the browser clock; off-browser builds report the Unix epoch date
/// since no page data is fetched there.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        date_prefix(&iso).to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01".to_owned()
    }
}

/// The `YYYY-MM-DD` part of an ISO-8601 timestamp.
pub fn date_prefix(iso: &str) -> &str {
    iso.split_once('T').map_or(iso, |(date, _)| date)
}
