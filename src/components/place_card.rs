use leptos::*;
use leptos_router::A;

use crate::components::icons::{HeartIcon, StarIcon};
use crate::model::Listing;
use crate::utils::pricing::{format_inr, parse_price_per_night, stay_quote, ASSUMED_STAY_NIGHTS};

/// One listing summary card. Favorite state and image-dot pagination are
/// local UI state; the displayed total comes from the shared stay quote.
#[component]
pub fn PlaceCard(data: Listing) -> impl IntoView {
    let Listing {
        id,
        img,
        images,
        title,
        location,
        description,
        room_details,
        star,
        reviews,
        price,
        check_in,
        check_out,
        is_guest_favourite,
        ..
    } = data;

    let is_favorite = create_rw_signal(false);
    let current_image = create_rw_signal(0usize);

    let quote = stay_quote(parse_price_per_night(&price), ASSUMED_STAY_NIGHTS);
    let total_label = format_inr(quote.subtotal);
    let nights_label = format!("for {} nights", quote.nights);

    let check_in = if check_in.is_empty() { "20 Dec".to_owned() } else { check_in };
    let check_out = if check_out.is_empty() { "25 Dec".to_owned() } else { check_out };

    let has_dots = images.len() > 1;
    let has_description = !description.is_empty();
    let has_room_details = !room_details.is_empty();

    let shown_image = {
        let images = images.clone();
        move || images.get(current_image.get()).cloned().unwrap_or_else(|| img.clone())
    };

    let dots = images
        .iter()
        .enumerate()
        .map(|(index, _)| {
            view! {
                <button
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        current_image.set(index);
                    }
                    class=move || {
                        if current_image.get() == index {
                            "h-1.5 w-6 rounded-full bg-white transition-all"
                        } else {
                            "h-1.5 w-1.5 rounded-full bg-white/60 transition-all"
                        }
                    }
                />
            }
        })
        .collect_view();

    view! {
        <A href=format!("/listing/{id}")>
            <div class="mb-8 cursor-pointer group">
                <div class="relative w-full h-64 md:h-72 rounded-xl overflow-hidden mb-3">
                    <img
                        src=shown_image
                        alt=title.clone()
                        class="w-full h-full object-cover rounded-xl transition-transform duration-300 group-hover:scale-105"
                    />
                    <button
                        on:click=move |ev| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            is_favorite.update(|fav| *fav = !*fav);
                        }
                        class="absolute top-3 right-3 p-2 bg-white rounded-full shadow-md hover:scale-110 transition-transform z-10"
                    >
                        {move || {
                            let filled = is_favorite.get();
                            let class = if filled { "h-5 w-5 text-red-500" } else { "h-5 w-5 text-gray-700" };
                            view! { <HeartIcon class=class filled=filled /> }
                        }}
                    </button>
                    <Show when=move || is_guest_favourite>
                        <div class="absolute top-3 left-3 bg-white px-3 py-1 rounded-full text-xs font-semibold shadow-md z-10">
                            "Guest favourite"
                        </div>
                    </Show>
                    <Show when=move || has_dots>
                        <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex gap-1 z-10">
                            {dots.clone()}
                        </div>
                    </Show>
                </div>

                <div class="space-y-1">
                    <div class="flex items-start justify-between">
                        <div class="flex-1 min-w-0">
                            <h3 class="text-base font-semibold text-gray-900 truncate">{title}</h3>
                            <p class="text-sm text-gray-500 truncate">{location}</p>
                        </div>
                    </div>
                    <Show when=move || has_description>
                        <p class="text-sm text-gray-500 truncate">{description.clone()}</p>
                    </Show>
                    <Show when=move || has_room_details>
                        <p class="text-sm text-gray-500">{room_details.clone()}</p>
                    </Show>
                    <p class="text-sm text-gray-500">{format!("{check_in} - {check_out}")}</p>
                    <div class="flex items-center justify-between pt-2">
                        <div class="flex items-center gap-1">
                            <StarIcon class="h-4 w-4 text-black" />
                            <span class="text-sm font-semibold">{star}</span>
                            <span class="text-sm text-gray-500">{format!("({reviews})")}</span>
                        </div>
                        <div class="flex items-baseline gap-1 text-right">
                            <span class="text-base font-semibold">{total_label}</span>
                            <span class="text-sm text-gray-500">{nights_label}</span>
                        </div>
                    </div>
                </div>
            </div>
        </A>
    }
}
