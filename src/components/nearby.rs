use leptos::*;

use crate::model::NearbyPlace;

/// One explore-nearby tile.
#[component]
pub fn Nearby(data: NearbyPlace) -> impl IntoView {
    let href = format!("/search?location={}", crate::utils::url::percent_encode(&data.location));
    view! {
        <a href=href class="flex items-center gap-4 p-2 rounded-xl hover:bg-gray-100 transition-colors">
            <img src=data.img alt=data.location.clone() class="w-16 h-16 rounded-lg object-cover" />
            <div>
                <h3 class="font-semibold text-gray-900">{data.location}</h3>
                <p class="text-sm text-gray-500">{data.distance}</p>
            </div>
        </a>
    }
}
