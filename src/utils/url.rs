//! Serialization of a [`SearchQuery`] into `/search` navigation parameters
//! and parsing of those parameters back on the results page.
//!
//! Dates travel as ISO-8601 calendar dates, guest counts as a JSON-encoded
//! object. Only populated fields are emitted.

use chrono::{DateTime, NaiveDate};

use crate::model::{Guests, SearchQuery};

/// Builds the `/search` URL for a query. `None` when the location is empty;
/// submission is blocked in that case.
pub fn build_search_url(query: &SearchQuery) -> Option<String> {
    if query.location.is_empty() {
        return None;
    }
    let mut params = vec![("location", query.location.clone())];
    if !query.property_type.is_empty() {
        params.push(("propertyType", query.property_type.clone()));
    }
    if !query.furnishing.is_empty() {
        params.push(("furnishing", query.furnishing.clone()));
    }
    if let Some(check_in) = query.check_in {
        params.push(("checkIn", iso_date(check_in)));
    }
    if let Some(check_out) = query.check_out {
        params.push(("checkOut", iso_date(check_out)));
    }
    if !query.guests.is_empty() {
        // Guests is a flat struct of u32s; serialization cannot fail.
        params.push(("guests", serde_json::to_string(&query.guests).unwrap_or_default()));
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", percent_encode(value)))
        .collect();
    Some(format!("/search?{}", encoded.join("&")))
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Accepts both the calendar-date form this layer emits and full RFC 3339
/// timestamps. Anything else parses to `None`.
pub fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub fn parse_query_guests(raw: &str) -> Guests {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_location_blocks_submission() {
        assert_eq!(build_search_url(&SearchQuery::default()), None);
    }

    #[test]
    fn lone_location_emits_only_location() {
        let query = SearchQuery { location: "Mohali".into(), ..SearchQuery::default() };
        assert_eq!(build_search_url(&query).as_deref(), Some("/search?location=Mohali"));
    }

    #[test]
    fn full_query_emits_every_populated_field() {
        let query = SearchQuery {
            location: "Mohali".into(),
            check_in: Some(date(2025, 12, 12)),
            check_out: Some(date(2025, 12, 17)),
            guests: Guests { adults: 2, children: 0, infants: 1 },
            property_type: "House/Flat".into(),
            furnishing: "Any".into(),
        };
        let url = build_search_url(&query).unwrap();
        assert!(url.starts_with("/search?location=Mohali"));
        assert!(url.contains("propertyType=House%2FFlat"));
        assert!(url.contains("furnishing=Any"));
        assert!(url.contains("checkIn=2025-12-12"));
        assert!(url.contains("checkOut=2025-12-17"));
        assert!(url.contains("guests=%7B%22adults%22%3A2%2C%22children%22%3A0%2C%22infants%22%3A1%7D"));
    }

    #[test]
    fn query_dates_round_trip() {
        let d = date(2025, 12, 12);
        assert_eq!(parse_query_date(&iso_date(d)), Some(d));
    }

    #[test]
    fn rfc3339_timestamps_are_accepted() {
        assert_eq!(parse_query_date("2025-12-12T00:00:00.000Z"), Some(date(2025, 12, 12)));
    }

    #[test]
    fn malformed_dates_parse_to_none() {
        assert_eq!(parse_query_date("next tuesday"), None);
        assert_eq!(parse_query_date(""), None);
    }

    #[test]
    fn guests_round_trip_and_degrade() {
        let guests = Guests { adults: 2, children: 1, infants: 0 };
        let raw = serde_json::to_string(&guests).unwrap();
        assert_eq!(parse_query_guests(&raw), guests);
        assert_eq!(parse_query_guests("not json"), Guests::default());
    }

    #[test]
    fn encoding_covers_spaces_and_json() {
        assert_eq!(percent_encode("Sahibzada Ajit Singh Nagar"), "Sahibzada%20Ajit%20Singh%20Nagar");
        assert_eq!(percent_encode(r#"{"a":1}"#), "%7B%22a%22%3A1%7D");
    }
}
