//! Search results page: parses the navigation query, renders the results
//! grid, and keeps the map pane centered on the result set.

use leptos::*;
use leptos_router::use_query_map;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, ListIcon, MapIcon};
use crate::components::map_view::MapView;
use crate::components::place_card::PlaceCard;
use crate::context::{QueryAction, SearchCtx};
use crate::data;
use crate::map::{CenterInput, MarkerSpec};
use crate::utils::geo::center_of;
use crate::utils::url::{parse_query_date, parse_query_guests};

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = SearchCtx::expect();
    let query = use_query_map();

    // Rehydrate the shared query from the URL so a direct load of /search
    // shows the same header summary as an in-app navigation.
    create_effect(move |_| {
        query.with(|params| {
            if let Some(location) = params.get("location") {
                ctx.dispatch(QueryAction::SetLocation(location.clone()));
            }
            let check_in = params.get("checkIn").and_then(|raw| parse_query_date(raw));
            let check_out = params.get("checkOut").and_then(|raw| parse_query_date(raw));
            if check_in.is_some() || check_out.is_some() {
                ctx.dispatch(QueryAction::SetDates { check_in, check_out });
            }
            if let Some(raw) = params.get("guests") {
                ctx.dispatch(QueryAction::SetGuests(parse_query_guests(raw)));
            }
            if let Some(property_type) = params.get("propertyType") {
                ctx.dispatch(QueryAction::SetPropertyType(property_type.clone()));
            }
            if let Some(furnishing) = params.get("furnishing") {
                ctx.dispatch(QueryAction::SetFurnishing(furnishing.clone()));
            }
        });
    });

    let location = move || {
        query.with(|params| params.get("location").cloned()).unwrap_or_default()
    };

    let results = data::search_listings();

    let center = center_of(
        &results.iter().map(|listing| (listing.lat, listing.long)).collect::<Vec<_>>(),
    )
    .map(|(latitude, longitude)| CenterInput::new(latitude, longitude));

    let markers: Vec<MarkerSpec> = results
        .iter()
        .map(|listing| MarkerSpec {
            latitude: listing.lat,
            longitude: listing.long,
            label: listing.price.split('/').next().unwrap_or(&listing.price).to_owned(),
            title: listing.title.clone(),
        })
        .collect();

    let is_full_map = create_rw_signal(false);
    let show_map_mobile = create_rw_signal(false);

    // The floating map button hides while the user scrolls down and comes
    // back on the first upward scroll.
    let map_button_visible = create_rw_signal(true);
    let last_scroll = store_value(0.0_f64);
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let position = window().scroll_y().unwrap_or(0.0);
        map_button_visible.set(position <= last_scroll.get_value());
        last_scroll.set_value(position);
    });
    on_cleanup(move || scroll_listener.remove());

    let filters = ["Cancellation flexibility", "Type of place", "Price", "Instant Book", "More filters"];

    view! {
        <div class="flex flex-col min-h-screen">
            <Header search_page=true />
            <main class=move || {
                if is_full_map.get() {
                    "flex-grow grid grid-cols-1 mt-[86px] duration-500"
                } else {
                    "flex-grow grid grid-cols-1 lg:grid-cols-[1fr,400px] xl:grid-cols-[1fr,500px] mt-[86px] duration-500"
                }
            }>
                <div class=move || {
                    if is_full_map.get() {
                        "hidden"
                    } else {
                        "px-4 py-8 duration-500 lg:py-12 lg:px-7 overflow-y-auto"
                    }
                }>
                    <div class="flex items-center justify-between mb-6">
                        <h1 class="text-xl font-semibold md:text-2xl lg:text-3xl">
                            {move || {
                                let location = location();
                                let shown = if location.is_empty() { "Chandigarh".to_owned() } else { location };
                                format!("Over 1,000 homes in {shown}")
                            }}
                        </h1>
                        <span class="px-3 py-1 text-xs font-medium bg-pink-100 text-pink-700 rounded-full">
                            "Prices include all fees"
                        </span>
                    </div>

                    <div class="mb-6 flex flex-wrap gap-2">
                        {filters
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <button class="px-4 py-2 text-sm font-medium text-gray-700 border border-gray-300 rounded-full hover:border-gray-900 transition-colors">
                                        {filter}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {results
                            .iter()
                            .map(|listing| view! { <PlaceCard data=listing.clone() /> })
                            .collect::<Vec<_>>()}
                    </section>
                </div>

                <section class=move || {
                    if show_map_mobile.get() {
                        "block fixed left-0 right-0 bottom-0 top-[86px] bg-gray-100"
                    } else {
                        "hidden sm:block sm:sticky top-[86px] h-[calc(100vh-86px)] flex-grow bg-gray-100"
                    }
                }>
                    <MapView center=Signal::derive(move || center) markers=markers.clone()>
                        <button
                            class="items-center hidden p-3 m-4 text-gray-500 duration-300 bg-white border border-gray-200 rounded-lg shadow-lg sm:flex active:scale-90"
                            on:click=move |_| is_full_map.update(|full| *full = !*full)
                        >
                            {move || {
                                if is_full_map.get() {
                                    view! {
                                        <ChevronRightIcon class="h-5 w-5" />
                                        <span class="ml-2 text-sm font-semibold">"Show list"</span>
                                    }
                                    .into_view()
                                } else {
                                    view! { <ChevronLeftIcon class="h-5 w-5" /> }.into_view()
                                }
                            }}
                        </button>
                    </MapView>
                </section>

                <button
                    class=move || {
                        if map_button_visible.get() {
                            "translate-y-0 md:translate-y-[50px] lg:hidden duration-300 fixed flex items-center px-5 py-3 text-sm text-white translate-x-1/2 bg-gray-500 rounded-full right-1/2 bottom-20 shadow-lg active:scale-90"
                        } else {
                            "translate-y-[80px] md:translate-y-[200px] lg:hidden duration-300 fixed flex items-center px-5 py-3 text-sm text-white translate-x-1/2 bg-gray-500 rounded-full right-1/2 bottom-20 shadow-lg active:scale-90"
                        }
                    }
                    on:click=move |_| show_map_mobile.update(|shown| *shown = !*shown)
                >
                    {move || {
                        if show_map_mobile.get() {
                            view! {
                                <span>"List"</span>
                                <ListIcon class="h-4 w-4 ml-2" />
                            }
                            .into_view()
                        } else {
                            view! {
                                <span>"Map"</span>
                                <MapIcon class="h-4 w-4 ml-2" />
                            }
                            .into_view()
                        }
                    }}
                </button>
            </main>
            <Show when=move || !is_full_map.get()>
                <Footer />
            </Show>
        </div>
    }
}
