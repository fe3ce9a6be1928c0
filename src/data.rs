//! Static data providers standing in for a future listings API, plus the
//! one remote fetch this layer performs.

use crate::api::{self, FetchError};
use crate::model::{
    Amenity, Bedroom, Feature, Host, Listing, ListingDetail, LiveAnywhere, NearbyPlace,
    PreLaunchProperty, Review, SampleReview,
};

const LIVE_ANYWHERE_URL: &str = "https://firebasestorage.googleapis.com/v0/b/edwintantawi-25f09.appspot.com/o/airbnb-web-clone%2Flive-anywhere.json?alt=media";

/// Destinations for the "live anywhere" section. Decorative content: a
/// failure is logged by the caller and the section renders empty. No retry,
/// timeout, or schema versioning.
pub async fn fetch_live_anywhere() -> Result<Vec<LiveAnywhere>, FetchError> {
    api::get_json(LIVE_ANYWHERE_URL).await
}

pub fn explore_nearby() -> Vec<NearbyPlace> {
    [
        ("Chandigarh", "/assets/explore-nearby/1to.webp", "15 km away"),
        ("Panchkula", "/assets/explore-nearby/2k3.webp", "12 km away"),
        ("Zirakpur", "/assets/explore-nearby/40m.webp", "18 km away"),
        ("Kharar", "/assets/explore-nearby/41m.webp", "22 km away"),
        ("Kurali", "/assets/explore-nearby/5j2.webp", "28 km away"),
        ("Rupnagar", "/assets/explore-nearby/kji.webp", "42 km away"),
        ("Patiala", "/assets/explore-nearby/msp.webp", "65 km away"),
        ("Ambala", "/assets/explore-nearby/ynx.webp", "55 km away"),
    ]
    .into_iter()
    .map(|(location, img, distance)| NearbyPlace {
        location: location.into(),
        img: img.into(),
        distance: distance.into(),
    })
    .collect()
}

/// Mohali/Chandigarh area search results.
pub fn search_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".into(),
            img: "/assets/search/013c9377-349f-418b-8d4c-15f923234a5f.webp".into(),
            images: Vec::new(),
            location: "Sahibzada Ajit Singh Nagar".into(),
            title: "Room in Sahibzada Ajit Singh Nagar".into(),
            description: "BlueBliss(bath...".into(),
            room_details: "1 king bed".into(),
            star: "4.89".into(),
            reviews: "103".into(),
            price: "₹2,511/night".into(),
            lat: 30.7046,
            long: 76.7179,
            check_in: "20 Dec".into(),
            check_out: "25 Dec".into(),
            is_guest_favourite: true,
        },
        Listing {
            id: "2".into(),
            img: "/assets/search/1379331e-593a-4c1e-af51-222808c85a11.webp".into(),
            images: Vec::new(),
            location: "Chandigarh".into(),
            title: "Centrally located private room with a park view".into(),
            description: "Centrally located private room".into(),
            room_details: "1 king bed".into(),
            star: "4.97".into(),
            reviews: "240".into(),
            price: "₹2,397/night".into(),
            lat: 30.7333,
            long: 76.7794,
            check_in: "12 Dec".into(),
            check_out: "17 Dec".into(),
            is_guest_favourite: true,
        },
        Listing {
            id: "3".into(),
            img: "/assets/search/2dd686bc-0195-40db-a37f-8b02476415b7.webp".into(),
            images: Vec::new(),
            location: "Chandigarh".into(),
            title: "Apartment in Chandigarh".into(),
            description: "Subko Abode- RK with Mountain...".into(),
            room_details: "1 bedroom 1 double bed".into(),
            star: "5.0".into(),
            reviews: "5".into(),
            price: "₹2,876/night".into(),
            lat: 30.7415,
            long: 76.7681,
            check_in: "10 Dec".into(),
            check_out: "15 Dec".into(),
            is_guest_favourite: false,
        },
        Listing {
            id: "4".into(),
            img: "/assets/search/44cb0de7-fa62-49e2-b4b8-68aed14373cb.webp".into(),
            images: Vec::new(),
            location: "Panchkula".into(),
            title: "Room in Panchkula".into(),
            description: "Cozy room with modern amenities".into(),
            room_details: "1 queen bed".into(),
            star: "4.85".into(),
            reviews: "87".into(),
            price: "₹2,055/night".into(),
            lat: 30.6942,
            long: 76.8616,
            check_in: "18 Dec".into(),
            check_out: "23 Dec".into(),
            is_guest_favourite: true,
        },
        Listing {
            id: "5".into(),
            img: "/assets/search/97bc37a6-9a1b-4bb2-8564-771319b246fb.webp".into(),
            images: Vec::new(),
            location: "Zirakpur".into(),
            title: "Apartment in Zirakpur".into(),
            description: "Spacious apartment near highway".into(),
            room_details: "2 bedrooms".into(),
            star: "4.92".into(),
            reviews: "156".into(),
            price: "₹3,200/night".into(),
            lat: 30.6422,
            long: 76.8172,
            check_in: "15 Dec".into(),
            check_out: "20 Dec".into(),
            is_guest_favourite: false,
        },
        Listing {
            id: "6".into(),
            img: "/assets/search/dde44668-1df5-41b6-8f91-5051975c4865.webp".into(),
            images: Vec::new(),
            location: "Mohali".into(),
            title: "Room in Mohali".into(),
            description: "Comfortable stay near airport".into(),
            room_details: "1 double bed".into(),
            star: "4.78".into(),
            reviews: "92".into(),
            price: "₹1,898/night".into(),
            lat: 30.7046,
            long: 76.7179,
            check_in: "22 Dec".into(),
            check_out: "27 Dec".into(),
            is_guest_favourite: true,
        },
    ]
}

pub struct LocationListings {
    pub chandigarh: Vec<Listing>,
    pub gurgaon: Vec<Listing>,
}

pub fn location_listings() -> LocationListings {
    let all = search_listings();
    let chandigarh = all
        .iter()
        .filter(|listing| {
            matches!(listing.location.as_str(), "Chandigarh" | "Panchkula" | "Zirakpur")
        })
        .cloned()
        .collect();
    let gurgaon = vec![
        Listing {
            id: "7".into(),
            img: "/assets/search/0e3f7892-6ab4-43bd-9a02-55f35fd98c81.webp".into(),
            images: Vec::new(),
            location: "Sector 29, Gurgaon".into(),
            title: "Studio near Leisure Valley".into(),
            description: "Walkable to cafes and the park".into(),
            room_details: "1 queen bed".into(),
            star: "4.81".into(),
            reviews: "64".into(),
            price: "₹3,450/night".into(),
            lat: 28.4601,
            long: 77.0648,
            check_in: "14 Dec".into(),
            check_out: "19 Dec".into(),
            is_guest_favourite: false,
        },
        Listing {
            id: "8".into(),
            img: "/assets/search/5b7a1c20-91d4-4a38-bb1e-2f8a97f2f6a3.webp".into(),
            images: Vec::new(),
            location: "DLF Phase 3, Gurgaon".into(),
            title: "Apartment in DLF Phase 3".into(),
            description: "Quiet 1BHK close to Cyber Hub".into(),
            room_details: "1 bedroom 1 double bed".into(),
            star: "4.90".into(),
            reviews: "121".into(),
            price: "₹4,100/night".into(),
            lat: 28.4936,
            long: 77.0937,
            check_in: "11 Dec".into(),
            check_out: "16 Dec".into(),
            is_guest_favourite: true,
        },
        Listing {
            id: "9".into(),
            img: "/assets/search/c2d1a7e4-3f0b-4f5f-8d25-60c5a1b0a9d7.webp".into(),
            images: Vec::new(),
            location: "Golf Course Road, Gurgaon".into(),
            title: "Room with balcony on Golf Course Road".into(),
            description: "Sunlit room, fast Wi-Fi".into(),
            room_details: "1 king bed".into(),
            star: "4.74".into(),
            reviews: "48".into(),
            price: "₹2,950/night".into(),
            lat: 28.4420,
            long: 77.1025,
            check_in: "16 Dec".into(),
            check_out: "21 Dec".into(),
            is_guest_favourite: false,
        },
        Listing {
            id: "10".into(),
            img: "/assets/search/f4a8b6d1-7c52-4f19-9e3a-8b1d2c7e5f90.webp".into(),
            images: Vec::new(),
            location: "Sohna Road, Gurgaon".into(),
            title: "Entire flat on Sohna Road".into(),
            description: "2BHK for families, covered parking".into(),
            room_details: "2 bedrooms".into(),
            star: "4.88".into(),
            reviews: "133".into(),
            price: "₹5,200/night".into(),
            lat: 28.4089,
            long: 77.0419,
            check_in: "13 Dec".into(),
            check_out: "18 Dec".into(),
            is_guest_favourite: true,
        },
    ];
    LocationListings { chandigarh, gurgaon }
}

/// Upcoming monthly-stay properties for the pre-launch carousel.
pub fn pre_launch_properties() -> Vec<PreLaunchProperty> {
    [
        (
            "pl-1",
            "/assets/pre-launch/aerocity.webp",
            "Serviced studio in Aerocity",
            "Opening January, early-bird pricing",
            "Aerocity, Mohali",
            "₹18,500",
            Some("4.6"),
            Some("12"),
        ),
        (
            "pl-2",
            "/assets/pre-launch/new-chandigarh.webp",
            "1BHK in New Chandigarh",
            "Fitted kitchen, balcony facing the Shivaliks",
            "New Chandigarh",
            "₹22,000",
            None,
            None,
        ),
        (
            "pl-3",
            "/assets/pre-launch/kharar.webp",
            "Shared PG near Kharar bus stand",
            "All-inclusive rent, weekly housekeeping",
            "Kharar",
            "₹9,800",
            Some("4.3"),
            Some("7"),
        ),
        (
            "pl-4",
            "/assets/pre-launch/sector-70.webp",
            "Room in Sector 70",
            "Attached bath, work desk, fast Wi-Fi",
            "Sector 70, Mohali",
            "₹12,400",
            None,
            None,
        ),
        (
            "pl-5",
            "/assets/pre-launch/zirakpur-heights.webp",
            "2BHK at Zirakpur Heights",
            "Tower launch, possession from March",
            "Zirakpur",
            "₹26,700",
            Some("4.8"),
            Some("21"),
        ),
        (
            "pl-6",
            "/assets/pre-launch/panchkula-ext.webp",
            "Row house in Panchkula Extension",
            "Gated community, pet friendly",
            "Panchkula",
            "₹31,000",
            None,
            None,
        ),
    ]
    .into_iter()
    .map(|(id, img, title, description, location, price, star, reviews)| PreLaunchProperty {
        id: id.into(),
        img: img.into(),
        title: title.into(),
        description: description.into(),
        location: location.into(),
        price: price.into(),
        star: star.map(Into::into),
        reviews: reviews.map(Into::into),
    })
    .collect()
}

pub fn guest_reviews() -> Vec<Review> {
    vec![
        Review {
            name: "Anita Desai",
            location: "Mumbai",
            date: "November 2025",
            text: "Amazing experience! The property was exactly as described and the host was very helpful. Would definitely recommend to anyone looking for a great stay.",
            rating: 5,
        },
        Review {
            name: "Vikram Mehta",
            location: "Delhi",
            date: "October 2025",
            text: "Great location, clean and comfortable. The host went above and beyond to make sure we had everything we needed. Would definitely book again!",
            rating: 5,
        },
        Review {
            name: "Priya Sharma",
            location: "Bangalore",
            date: "September 2025",
            text: "Perfect stay for our family vacation. The property was spacious, well-maintained, and had all the amenities we needed. Highly recommended!",
            rating: 5,
        },
        Review {
            name: "Rajesh Kumar",
            location: "Pune",
            date: "August 2025",
            text: "Excellent service and beautiful property. The location was perfect and the host was very accommodating. Will definitely return!",
            rating: 5,
        },
    ]
}

pub fn listing_detail(id: &str) -> ListingDetail {
    ListingDetail {
        id: id.to_owned(),
        title: "Centrally located private room with a park view",
        location: "Room in Chandigarh, India",
        rating: 4.97,
        reviews: 240,
        is_guest_favourite: true,
        host: Host {
            name: "Paramjit",
            avatar: "/assets/hero.jpg",
            is_superhost: true,
            hosting_since: "2 years hosting",
            rating: 4.9,
            host_reviews: 577,
            response_time: "within an hour",
        },
        price: 2397,
        images: vec![
            "/assets/search/1379331e-593a-4c1e-af51-222808c85a11.webp",
            "/assets/search/013c9377-349f-418b-8d4c-15f923234a5f.webp",
            "/assets/search/2dd686bc-0195-40db-a37f-8b02476415b7.webp",
            "/assets/search/44cb0de7-fa62-49e2-b4b8-68aed14373cb.webp",
            "/assets/search/97bc37a6-9a1b-4bb2-8564-771319b246fb.webp",
        ],
        description: "This centrally located private room offers a comfortable stay with a beautiful park view. The room features modern amenities, a comfortable king-size bed, and easy access to the city center. Perfect for solo travelers or couples looking for a peaceful yet convenient location.",
        features: vec![
            Feature { icon: "🔑", text: "Self check-in", subtext: "95% 5-star rating" },
            Feature { icon: "📍", text: "Great location", subtext: "95% 5-star rating" },
            Feature { icon: "✓", text: "Free cancellation", subtext: "Before Dec 10" },
        ],
        bedroom: Bedroom {
            image: "/assets/search/1379331e-593a-4c1e-af51-222808c85a11.webp",
            name: "Bedroom",
            beds: "1 king bed",
        },
        amenities: vec![
            Amenity { icon: "🔒", text: "Lock on bedroom door" },
            Amenity { icon: "🌿", text: "Garden view" },
            Amenity { icon: "📶", text: "Free Wi-Fi" },
            Amenity { icon: "🍳", text: "Kitchen" },
            Amenity { icon: "📺", text: "TV" },
            Amenity { icon: "🚨", text: "Smoke alarm" },
            Amenity { icon: "🔥", text: "Heating" },
            Amenity { icon: "🧺", text: "Washer" },
        ],
        total_amenities: 43,
        lat: 30.7333,
        long: 76.7794,
        neighborhood: "Chandigarh is known for its well-planned architecture and beautiful gardens. This location is close to major attractions, shopping centers, and restaurants. The area is safe, clean, and perfect for both short and long stays.",
        house_rules: vec![
            "Check-in: After 3:00 PM",
            "Checkout: 11:00 AM",
            "Self check-in with keypad",
            "No smoking",
            "No pets",
            "No parties or events",
        ],
        health_safety: vec![
            "Carbon monoxide alarm",
            "Smoke alarm",
            "Security camera/recording device",
            "No contact check-in",
        ],
        cancellation_policy: "Free cancellation for 48 hours. After that, cancel before 3:00 PM on Dec 10 for a partial refund.",
        review_breakdown: vec![
            ("Cleanliness", 5.0),
            ("Accuracy", 4.9),
            ("Communication", 5.0),
            ("Location", 5.0),
            ("Check-in", 5.0),
            ("Value", 4.9),
        ],
        sample_reviews: vec![
            SampleReview {
                name: "Sarah",
                avatar: "/assets/hero.jpg",
                date: "December 2023",
                rating: 5,
                text: "Great location and very clean room. The host was very responsive and helpful. Would definitely stay again!",
            },
            SampleReview {
                name: "Michael",
                avatar: "/assets/hero.jpg",
                date: "November 2023",
                rating: 5,
                text: "Perfect stay! The room was exactly as described and the park view was beautiful. Highly recommend!",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::pricing::parse_price_per_night;

    #[test]
    fn every_search_listing_has_a_parseable_price() {
        for listing in search_listings() {
            assert!(parse_price_per_night(&listing.price) > 0, "listing {}", listing.id);
        }
    }

    #[test]
    fn location_sections_are_non_empty() {
        let sections = location_listings();
        assert!(!sections.chandigarh.is_empty());
        assert!(!sections.gurgaon.is_empty());
    }

    #[test]
    fn pre_launch_overflows_one_page() {
        // The grouped carousel shows 3 per page; controls only appear past that.
        assert!(pre_launch_properties().len() > 3);
    }

    #[test]
    fn four_fixed_guest_reviews() {
        assert_eq!(guest_reviews().len(), 4);
    }

    #[test]
    fn listing_detail_echoes_the_requested_id() {
        assert_eq!(listing_detail("42").id, "42");
    }
}
