pub mod banner;
pub mod counter;
pub mod date_range;
pub mod footer;
pub mod guest_reviews;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod icons;
pub mod location_section;
pub mod map_view;
pub mod nearby;
pub mod place_card;
pub mod pre_launch;
pub mod search_bar;
pub mod search_option;
pub mod section;
