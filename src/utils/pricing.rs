//! The one place that turns a per-night price into a stay total.
//!
//! Every component that displays a derived price consumes [`stay_quote`];
//! nights and fee rates are not duplicated anywhere else.

use once_cell::sync::Lazy;
use regex::Regex;

/// Display approximation, not a booking computation.
pub const ASSUMED_STAY_NIGHTS: i64 = 5;

const CLEANING_FEE_RATE: f64 = 0.10;
const SERVICE_FEE_RATE: f64 = 0.14;

static PRICE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9][0-9,]*)").unwrap());

/// Structured price breakdown for a stay, all amounts in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    pub per_night: i64,
    pub nights: i64,
    pub subtotal: i64,
    pub cleaning_fee: i64,
    pub service_fee: i64,
    pub total: i64,
}

/// Extracts the leading numeric run from a localized price string such as
/// "₹2,511/night", ignoring the currency glyph and digit-group separators.
/// Unmatched input degrades silently to 0.
pub fn parse_price_per_night(price: &str) -> i64 {
    PRICE_RUN
        .captures(price)
        .and_then(|caps| caps.get(1))
        .and_then(|run| run.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}

pub fn stay_quote(per_night: i64, nights: i64) -> StayQuote {
    let subtotal = per_night * nights;
    let cleaning_fee = (subtotal as f64 * CLEANING_FEE_RATE).round() as i64;
    let service_fee = (subtotal as f64 * SERVICE_FEE_RATE).round() as i64;
    StayQuote {
        per_night,
        nights,
        subtotal,
        cleaning_fee,
        service_fee,
        total: subtotal + cleaning_fee + service_fee,
    }
}

/// Indian-system digit grouping with zero fraction digits: 12555 → "₹12,555",
/// 251100 → "₹2,51,100".
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    if digits.len() <= 3 {
        grouped.push_str(&digits);
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let head_bytes = head.as_bytes();
        let lead = head_bytes.len() % 2;
        if lead == 1 {
            grouped.push(head_bytes[0] as char);
        }
        for pair in head_bytes[lead..].chunks(2) {
            if !grouped.is_empty() {
                grouped.push(',');
            }
            grouped.push(pair[0] as char);
            grouped.push(pair[1] as char);
        }
        grouped.push(',');
        grouped.push_str(tail);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_localized_price_string() {
        assert_eq!(parse_price_per_night("₹2,511/night"), 2511);
        assert_eq!(parse_price_per_night("₹1,898/night"), 1898);
        assert_eq!(parse_price_per_night("2397"), 2397);
    }

    #[test]
    fn unmatched_input_parses_to_zero() {
        assert_eq!(parse_price_per_night("no-digits"), 0);
        assert_eq!(parse_price_per_night(""), 0);
        assert_eq!(parse_price_per_night("₹/night"), 0);
    }

    #[test]
    fn five_night_quote_matches_card_display() {
        let quote = stay_quote(parse_price_per_night("₹2,511/night"), ASSUMED_STAY_NIGHTS);
        assert_eq!(quote.subtotal, 12_555);
        assert_eq!(format_inr(quote.subtotal), "₹12,555");
    }

    #[test]
    fn fees_round_to_whole_rupees() {
        let quote = stay_quote(2397, 5);
        assert_eq!(quote.subtotal, 11_985);
        assert_eq!(quote.cleaning_fee, 1_199); // 1198.5 rounds up
        assert_eq!(quote.service_fee, 1_678); // 1677.9 rounds up
        assert_eq!(quote.total, 14_862);
    }

    #[test]
    fn inr_uses_indian_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(12_555), "₹12,555");
        assert_eq!(format_inr(251_100), "₹2,51,100");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn zero_per_night_yields_zero_quote() {
        let quote = stay_quote(parse_price_per_night("call for price"), ASSUMED_STAY_NIGHTS);
        assert_eq!(quote.total, 0);
    }
}
