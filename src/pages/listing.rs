//! Listing detail page: gallery, expandable sections, and the booking card
//! driven by the shared stay quote.

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::icons::{HeartIcon, StarIcon};
use crate::components::map_view::MapView;
use crate::data;
use crate::map::CenterInput;
use crate::model::ListingDetail;
use crate::utils::pricing::{format_inr, stay_quote, ASSUMED_STAY_NIGHTS};

#[component]
pub fn ListingPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|params| params.get("id").cloned()).unwrap_or_default();

    view! {
        <div class="min-h-screen bg-white">
            <Header />
            {move || {
                let listing = data::listing_detail(&id());
                view! { <ListingContent listing=listing /> }
            }}
            <Footer />
        </div>
    }
}

#[component]
fn ListingContent(listing: ListingDetail) -> impl IntoView {
    let selected_image = create_rw_signal(0usize);
    let is_favorite = create_rw_signal(false);
    let show_all_amenities = create_rw_signal(false);
    let show_all_reviews = create_rw_signal(false);
    let guests = create_rw_signal(1u32);

    let quote = stay_quote(listing.price, ASSUMED_STAY_NIGHTS);
    let center = CenterInput::new(listing.lat, listing.long);

    let images = listing.images.clone();
    let main_image = {
        let images = images.clone();
        move || images.get(selected_image.get()).copied().unwrap_or_default()
    };
    let thumbnails = images
        .iter()
        .enumerate()
        .skip(1)
        .take(4)
        .map(|(index, img)| {
            let img = *img;
            view! {
                <div
                    class="relative rounded-r-2xl overflow-hidden cursor-pointer group"
                    on:click=move |_| selected_image.set(index)
                >
                    <img
                        src=img
                        alt=format!("{} {}", listing.title, index + 1)
                        class="w-full h-full object-cover group-hover:opacity-80 transition-opacity"
                    />
                </div>
            }
        })
        .collect::<Vec<_>>();

    let amenities = listing.amenities.clone();
    let amenity_views = move || {
        let shown = if show_all_amenities.get() { amenities.len() } else { 8 };
        amenities
            .iter()
            .take(shown)
            .map(|amenity| {
                view! {
                    <div class="flex items-center gap-3">
                        <span class="text-xl">{amenity.icon}</span>
                        <span class="text-base">{amenity.text}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let sample_reviews = listing.sample_reviews.clone();
    let review_views = move || {
        let shown = if show_all_reviews.get() { sample_reviews.len() } else { 2 };
        sample_reviews
            .iter()
            .take(shown)
            .map(|review| {
                let stars = (0..5)
                    .map(|i| {
                        let class = if i < review.rating { "h-4 w-4 text-black" } else { "h-4 w-4 text-gray-300" };
                        view! { <StarIcon class=class /> }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="border-b pb-6 last:border-0">
                        <div class="flex items-center gap-3 mb-3">
                            <img
                                src=review.avatar
                                alt=review.name
                                class="w-10 h-10 rounded-full object-cover"
                            />
                            <div>
                                <div class="font-semibold">{review.name}</div>
                                <div class="text-sm text-gray-600">{review.date}</div>
                            </div>
                        </div>
                        <div class="flex items-center gap-1 mb-2">{stars}</div>
                        <p class="text-gray-700">{review.text}</p>
                        <button class="mt-2 font-semibold underline">"Show more"</button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let breakdown = listing
        .review_breakdown
        .iter()
        .map(|(label, value)| {
            let width = format!("width: {}%", (value / 5.0) * 100.0);
            view! {
                <div class="flex items-center justify-between">
                    <span>{*label}</span>
                    <div class="flex items-center gap-2">
                        <div class="w-32 h-2 bg-gray-200 rounded-full overflow-hidden">
                            <div class="h-full bg-black" style=width></div>
                        </div>
                        <span class="font-semibold">{*value}</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let guest_options = (1..=6u32)
        .map(|count| {
            let label = if count == 1 { format!("{count} guest") } else { format!("{count} guests") };
            view! { <option value=count.to_string()>{label}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="mt-[86px] px-4 md:px-8 lg:px-16 py-6">
            <div class="relative grid grid-cols-4 gap-2 h-[400px] md:h-[600px]">
                <div class="col-span-4 md:col-span-2 row-span-2 relative rounded-l-2xl overflow-hidden">
                    <img
                        src=main_image
                        alt=listing.title
                        class="w-full h-full object-cover cursor-pointer"
                    />
                    <button
                        on:click=move |_| is_favorite.update(|fav| *fav = !*fav)
                        class="absolute top-4 right-4 p-2 bg-white rounded-full shadow-lg hover:scale-110 transition-transform z-10"
                    >
                        {move || {
                            let filled = is_favorite.get();
                            let class = if filled { "h-6 w-6 text-red-500" } else { "h-6 w-6 text-gray-700" };
                            view! { <HeartIcon class=class filled=filled /> }
                        }}
                    </button>
                </div>
                {thumbnails}
                <button class="absolute bottom-6 right-6 px-4 py-2 bg-white rounded-lg shadow-lg font-medium text-sm hover:bg-gray-50 z-10">
                    {format!("Show all {} photos", listing.images.len())}
                </button>
            </div>
        </div>

        <div class="px-4 md:px-8 lg:px-16 pb-16">
            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-[2fr,1fr] gap-12">
                <div class="space-y-8">
                    <div>
                        <h1 class="text-2xl md:text-3xl font-semibold mb-2">{listing.title}</h1>
                        <p class="text-base text-gray-600">{listing.location}</p>
                    </div>

                    <Show when={
                        let guest_favourite = listing.is_guest_favourite;
                        move || guest_favourite
                    }>
                        <div class="flex items-center gap-2 p-4 bg-gradient-to-r from-amber-50 to-orange-50 rounded-xl border border-amber-200">
                            <div class="text-2xl">"🏆"</div>
                            <div>
                                <div class="font-semibold text-gray-900">"Guest favourite"</div>
                                <div class="text-sm text-gray-600">
                                    "One of the most loved homes on Staynest, according to guests"
                                </div>
                            </div>
                        </div>
                    </Show>

                    <div class="flex items-center justify-between border-b pb-6">
                        <div class="flex items-center gap-4">
                            <div class="flex items-center gap-1">
                                <StarIcon class="h-5 w-5 text-black" />
                                <span class="font-semibold">{listing.rating}</span>
                                <span class="text-gray-600">{format!("({} reviews)", listing.reviews)}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <img
                                    src=listing.host.avatar
                                    alt=listing.host.name
                                    class="w-10 h-10 rounded-full object-cover"
                                />
                                <div>
                                    <div class="font-semibold">{format!("Hosted by {}", listing.host.name)}</div>
                                    <div class="text-sm text-gray-600">{listing.host.hosting_since}</div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 border-b pb-6">
                        {listing
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="flex items-start gap-3">
                                        <div class="text-2xl">{feature.icon}</div>
                                        <div>
                                            <div class="font-semibold">{feature.text}</div>
                                            <div class="text-sm text-gray-600">{feature.subtext}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="border-b pb-6">
                        <p class="text-base text-gray-700 leading-relaxed">{listing.description}</p>
                        <button class="mt-2 font-semibold underline">"Show more"</button>
                    </div>

                    <div class="border-b pb-6">
                        <h2 class="text-xl font-semibold mb-4">"Where you'll sleep"</h2>
                        <div class="border rounded-xl p-4 max-w-xs">
                            <img
                                src=listing.bedroom.image
                                alt=listing.bedroom.name
                                class="w-full h-32 mb-3 rounded-lg object-cover"
                            />
                            <div class="font-semibold">{listing.bedroom.name}</div>
                            <div class="text-sm text-gray-600">{listing.bedroom.beds}</div>
                        </div>
                    </div>

                    <div class="border-b pb-6">
                        <h2 class="text-xl font-semibold mb-4">"What this place offers"</h2>
                        <div class="grid grid-cols-2 gap-4">{amenity_views}</div>
                        <Show when=move || !show_all_amenities.get()>
                            <button
                                on:click=move |_| show_all_amenities.set(true)
                                class="mt-4 font-semibold underline"
                            >
                                {format!("Show all {} amenities", listing.total_amenities)}
                            </button>
                        </Show>
                    </div>

                    <div class="border-b pb-6">
                        <h2 class="text-xl font-semibold mb-4">"5 nights in Chandigarh"</h2>
                        <div class="text-sm text-gray-600">
                            "Calendar view would go here (Dec 10 - Dec 15 highlighted)"
                        </div>
                    </div>

                    <div class="border-b pb-6">
                        <div class="flex items-center justify-between mb-6">
                            <div class="flex items-center gap-2">
                                <StarIcon class="h-6 w-6 text-black" />
                                <span class="text-2xl font-semibold">{listing.rating}</span>
                                <span class="text-gray-600">{format!("({} reviews)", listing.reviews)}</span>
                            </div>
                            <Show when={
                                let guest_favourite = listing.is_guest_favourite;
                                move || guest_favourite
                            }>
                                <div class="px-3 py-1 bg-amber-100 rounded-full text-sm font-semibold">
                                    "Guest favourite"
                                </div>
                            </Show>
                        </div>
                        <div class="grid grid-cols-2 gap-4 mb-6">{breakdown}</div>
                        <div class="space-y-6">{review_views}</div>
                        <Show when=move || !show_all_reviews.get()>
                            <button
                                on:click=move |_| show_all_reviews.set(true)
                                class="mt-4 font-semibold underline"
                            >
                                {format!("Show all {} reviews", listing.reviews)}
                            </button>
                        </Show>
                    </div>

                    <div class="border-b pb-6">
                        <h2 class="text-xl font-semibold mb-4">"Where you'll be"</h2>
                        <div class="h-96 rounded-xl overflow-hidden">
                            <MapView center=Signal::derive(move || Some(center)) />
                        </div>
                        <p class="mt-4 text-base font-semibold">"Chandigarh, India"</p>
                    </div>

                    <div class="border-b pb-6">
                        <h2 class="text-xl font-semibold mb-4">"Neighbourhood highlights"</h2>
                        <p class="text-base text-gray-700 leading-relaxed">{listing.neighborhood}</p>
                        <button class="mt-2 font-semibold underline">"Show more"</button>
                    </div>

                    <div class="border-b pb-6">
                        <h2 class="text-xl font-semibold mb-4">"Meet your host"</h2>
                        <div class="flex items-start gap-4">
                            <img
                                src=listing.host.avatar
                                alt=listing.host.name
                                class="w-16 h-16 rounded-full object-cover"
                            />
                            <div class="flex-1">
                                <div class="flex items-center gap-2 mb-2">
                                    <span class="font-semibold">{listing.host.name}</span>
                                    <Show when={
                                        let superhost = listing.host.is_superhost;
                                        move || superhost
                                    }>
                                        <span class="px-2 py-1 bg-amber-100 rounded text-xs font-semibold">
                                            "Superhost"
                                        </span>
                                    </Show>
                                </div>
                                <div class="flex items-center gap-1 mb-2">
                                    <StarIcon class="h-4 w-4 text-black" />
                                    <span class="font-semibold">{listing.host.rating}</span>
                                    <span class="text-gray-600">
                                        {format!("({} reviews)", listing.host.host_reviews)}
                                    </span>
                                </div>
                                <div class="text-sm text-gray-600 mb-4">
                                    {format!("Response time: {}", listing.host.response_time)}
                                </div>
                                <button class="px-6 py-3 border border-gray-900 rounded-lg font-semibold hover:bg-gray-50">
                                    {format!("Message {}", listing.host.name)}
                                </button>
                            </div>
                        </div>
                    </div>

                    <div>
                        <h2 class="text-xl font-semibold mb-4">"Things to know"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            <div>
                                <h3 class="font-semibold mb-3">"House rules"</h3>
                                <ul class="space-y-2 text-sm text-gray-700">
                                    {listing
                                        .house_rules
                                        .iter()
                                        .map(|rule| view! { <li>{*rule}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                            <div>
                                <h3 class="font-semibold mb-3">"Health & safety"</h3>
                                <ul class="space-y-2 text-sm text-gray-700">
                                    {listing
                                        .health_safety
                                        .iter()
                                        .map(|item| view! { <li>{*item}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                            <div>
                                <h3 class="font-semibold mb-3">"Cancellation policy"</h3>
                                <p class="text-sm text-gray-700">{listing.cancellation_policy}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="lg:sticky lg:top-[86px]">
                    <div class="border rounded-2xl p-6 shadow-lg lg:sticky lg:top-24">
                        <div class="flex items-center justify-between mb-4">
                            <div>
                                <div class="text-2xl font-semibold">
                                    {format_inr(quote.total)}
                                    <span class="text-base font-normal">" total"</span>
                                </div>
                                <div class="flex items-center gap-1 mt-1">
                                    <StarIcon class="h-4 w-4 text-black" />
                                    <span class="font-semibold">{listing.rating}</span>
                                    <span class="text-gray-600 text-sm">{format!("({})", listing.reviews)}</span>
                                </div>
                            </div>
                        </div>

                        <div class="border rounded-lg p-4 space-y-4 mb-4">
                            <div class="grid grid-cols-2 gap-2 border rounded-lg">
                                <div class="p-3 border-r">
                                    <div class="text-xs font-semibold uppercase mb-1">"Check-in"</div>
                                    <div class="text-sm">"Dec 12, 2025"</div>
                                </div>
                                <div class="p-3">
                                    <div class="text-xs font-semibold uppercase mb-1">"Check-out"</div>
                                    <div class="text-sm">"Dec 17, 2025"</div>
                                </div>
                            </div>
                            <div class="border-t pt-3">
                                <div class="text-xs font-semibold uppercase mb-1">"Guests"</div>
                                <select
                                    class="w-full text-sm"
                                    on:change=move |ev| {
                                        guests.set(event_target_value(&ev).parse().unwrap_or(1));
                                    }
                                    prop:value=move || guests.get().to_string()
                                >
                                    {guest_options}
                                </select>
                            </div>
                        </div>

                        <button class="w-full bg-gradient-to-r from-pink-500 to-pink-600 text-white py-4 rounded-lg font-semibold text-lg hover:from-pink-600 hover:to-pink-700 transition-colors mb-2">
                            "Reserve"
                        </button>
                        <p class="text-center text-sm text-gray-600 mb-4">"You won't be charged yet"</p>

                        <div class="space-y-3 text-sm border-t pt-4">
                            <div class="flex justify-between">
                                <span>{format!("{} x {} nights", format_inr(quote.per_night), quote.nights)}</span>
                                <span>{format_inr(quote.subtotal)}</span>
                            </div>
                            <div class="flex justify-between">
                                <span>"Cleaning fee"</span>
                                <span>{format_inr(quote.cleaning_fee)}</span>
                            </div>
                            <div class="flex justify-between">
                                <span>"Service fee"</span>
                                <span>{format_inr(quote.service_fee)}</span>
                            </div>
                            <div class="flex justify-between font-semibold border-t pt-3">
                                <span>"Total"</span>
                                <span>{format_inr(quote.total)}</span>
                            </div>
                        </div>

                        <A
                            href="/"
                            class="block text-center text-sm text-gray-600 mt-4 underline"
                        >
                            "Report this listing"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
