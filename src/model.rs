//! Plain serializable records shared across pages. Nothing here is
//! persisted by this layer; the shapes mirror the upstream JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub img: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub room_details: String,
    pub star: String,
    pub reviews: String,
    /// Localized per-night price string, e.g. "₹2,511/night".
    pub price: String,
    pub lat: f64,
    pub long: f64,
    pub check_in: String,
    pub check_out: String,
    pub is_guest_favourite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub location: String,
    pub img: String,
    pub distance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveAnywhere {
    pub title: String,
    pub img: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub text: &'static str,
    /// Star rating, 0..=5.
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreLaunchProperty {
    pub id: String,
    pub img: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Monthly price string, e.g. "₹18,500".
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<String>,
}

/// Guest counts by category, JSON-encoded into the `guests` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guests {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Guests {
    /// Infants do not count toward the guest total.
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }

    pub fn is_empty(&self) -> bool {
        self.adults == 0 && self.children == 0 && self.infants == 0
    }
}

/// The user's in-progress search criteria. One writer path (the search bar's
/// dispatched actions), many readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub location: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Guests,
    pub property_type: String,
    pub furnishing: String,
}

pub const PROPERTY_TYPES: [&str; 4] = ["House/Flat", "PG", "Room", "Commercial"];
pub const FURNISHING_OPTIONS: [&str; 4] = ["Any", "Furnished", "Semi Furnished", "Unfurnished"];

#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    pub name: &'static str,
    pub avatar: &'static str,
    pub is_superhost: bool,
    pub hosting_since: &'static str,
    pub rating: f64,
    pub host_reviews: u32,
    pub response_time: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bedroom {
    pub image: &'static str,
    pub name: &'static str,
    pub beds: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleReview {
    pub name: &'static str,
    pub avatar: &'static str,
    pub date: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub id: String,
    pub title: &'static str,
    pub location: &'static str,
    pub rating: f64,
    pub reviews: u32,
    pub is_guest_favourite: bool,
    pub host: Host,
    /// Per-night price in whole rupees.
    pub price: i64,
    pub images: Vec<&'static str>,
    pub description: &'static str,
    pub features: Vec<Feature>,
    pub bedroom: Bedroom,
    pub amenities: Vec<Amenity>,
    pub total_amenities: u32,
    pub lat: f64,
    pub long: f64,
    pub neighborhood: &'static str,
    pub house_rules: Vec<&'static str>,
    pub health_safety: Vec<&'static str>,
    pub cancellation_policy: &'static str,
    pub review_breakdown: Vec<(&'static str, f64)>,
    pub sample_reviews: Vec<SampleReview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guests_total_excludes_infants() {
        let g = Guests { adults: 2, children: 1, infants: 1 };
        assert_eq!(g.total(), 3);
        assert!(!g.is_empty());
        assert!(Guests::default().is_empty());
    }

    #[test]
    fn guests_round_trip_through_json() {
        let g = Guests { adults: 2, children: 0, infants: 1 };
        let encoded = serde_json::to_string(&g).unwrap();
        let decoded: Guests = serde_json::from_str(&encoded).unwrap();
        assert_eq!(g, decoded);
    }

    #[test]
    fn guests_tolerates_missing_fields() {
        let decoded: Guests = serde_json::from_str(r#"{"adults":2}"#).unwrap();
        assert_eq!(decoded.adults, 2);
        assert_eq!(decoded.children, 0);
        assert_eq!(decoded.infants, 0);
    }

    #[test]
    fn listing_uses_camel_case_field_names() {
        let json = serde_json::json!({
            "id": "1",
            "img": "/assets/a.webp",
            "title": "Room in Mohali",
            "location": "Mohali",
            "description": "Comfortable stay",
            "roomDetails": "1 double bed",
            "star": "4.78",
            "reviews": "92",
            "price": "₹1,898/night",
            "lat": 30.7046,
            "long": 76.7179,
            "checkIn": "22 Dec",
            "checkOut": "27 Dec",
            "isGuestFavourite": true,
        });
        let listing: Listing = serde_json::from_value(json).unwrap();
        assert_eq!(listing.room_details, "1 double bed");
        assert!(listing.is_guest_favourite);
        assert!(listing.images.is_empty());
    }
}
