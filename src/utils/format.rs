//! Display formatting for guest counts and date ranges.

use chrono::NaiveDate;

use crate::model::Guests;

/// "2 guests", "2 guests, 1 infant". Infants are listed separately and never
/// counted toward the total; a zero total formats to `None`.
pub fn format_guests(guests: &Guests, no_infants: bool) -> Option<String> {
    let total = guests.total();
    if total == 0 {
        return None;
    }
    let mut out = format!("{} guest{}", total, plural(total));
    if !no_infants && guests.infants > 0 {
        out.push_str(&format!(", {} infant{}", guests.infants, plural(guests.infants)));
    }
    Some(out)
}

/// "Dec 12 - Dec 17". `None` unless both bounds are set.
pub fn format_range_date(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{} - {}", check_date(start), check_date(end))),
        _ => None,
    }
}

/// "Dec 12".
pub fn format_check_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(check_date)
}

fn check_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn plural(n: u32) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn guests_formats_total_and_infants() {
        let g = Guests { adults: 2, children: 1, infants: 1 };
        assert_eq!(format_guests(&g, false).as_deref(), Some("3 guests, 1 infant"));
        assert_eq!(format_guests(&g, true).as_deref(), Some("3 guests"));
    }

    #[test]
    fn single_guest_is_singular() {
        let g = Guests { adults: 1, ..Guests::default() };
        assert_eq!(format_guests(&g, false).as_deref(), Some("1 guest"));
    }

    #[test]
    fn infants_alone_do_not_format() {
        let g = Guests { infants: 2, ..Guests::default() };
        assert_eq!(format_guests(&g, false), None);
    }

    #[test]
    fn range_requires_both_bounds() {
        let start = date(2025, 12, 12);
        let end = date(2025, 12, 17);
        assert_eq!(
            format_range_date(Some(start), Some(end)).as_deref(),
            Some("Dec 12 - Dec 17")
        );
        assert_eq!(format_range_date(Some(start), None), None);
        assert_eq!(format_range_date(None, None), None);
    }

    #[test]
    fn check_date_drops_zero_padding() {
        assert_eq!(format_check_date(Some(date(2025, 12, 5))).as_deref(), Some("Dec 5"));
    }
}
