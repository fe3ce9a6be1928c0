//! Pre-launch carousel: same autoplay machine as the reviews carousel but
//! advancing a full page of three cards per slide.

use leptos::*;
use leptos_router::A;

use crate::carousel::{use_carousel, CarouselCore, Granularity};
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, HeartIcon, StarIcon};
use crate::model::PreLaunchProperty;

const PROPERTIES_PER_VIEW: usize = 3;

#[component]
pub fn PreLaunch(properties: Vec<PreLaunchProperty>) -> impl IntoView {
    let container: NodeRef<html::Div> = create_node_ref();
    let carousel = use_carousel(
        CarouselCore {
            item_count: properties.len(),
            per_view: PROPERTIES_PER_VIEW,
            granularity: Granularity::Page,
        },
        container,
    );
    let controls = carousel.core.controls_visible();
    let index = carousel.index;
    let go_to = carousel.go_to;
    let next = carousel.next;
    let prev = carousel.prev;
    let pause = carousel.pause;
    let resume = carousel.resume;

    let dots = (0..carousel.core.slide_count())
        .map(|slide| {
            view! {
                <button
                    on:click=move |_| go_to.call(slide)
                    class=move || {
                        if index.get() == slide {
                            "h-2 w-8 rounded-full bg-gray-900 transition-all"
                        } else {
                            "h-2 w-2 rounded-full bg-gray-300 hover:bg-gray-400 transition-all"
                        }
                    }
                    aria-label=format!("Go to slide {}", slide + 1)
                />
            }
        })
        .collect_view();

    view! {
        <section class="my-12 py-8">
            <div class="container mx-auto px-4">
                <div class="mb-6">
                    <h2 class="text-2xl md:text-3xl font-semibold text-gray-900">"Pre-launch"</h2>
                </div>

                <div class="relative">
                    <Show when=move || controls>
                        <button
                            on:click=move |_| prev.call(())
                            class="absolute left-0 top-1/2 -translate-y-1/2 -translate-x-4 z-20 bg-white border border-gray-300 rounded-full p-2 shadow-lg hover:shadow-xl hover:scale-110 transition-all"
                            aria-label="Previous properties"
                        >
                            <ChevronLeftIcon class="h-5 w-5 text-gray-700" />
                        </button>
                        <button
                            on:click=move |_| next.call(())
                            class="absolute right-0 top-1/2 -translate-y-1/2 translate-x-4 z-20 bg-white border border-gray-300 rounded-full p-2 shadow-lg hover:shadow-xl hover:scale-110 transition-all"
                            aria-label="Next properties"
                        >
                            <ChevronRightIcon class="h-5 w-5 text-gray-700" />
                        </button>
                    </Show>

                    <div
                        node_ref=container
                        on:mouseenter=move |_| pause.call(())
                        on:mouseleave=move |_| resume.call(())
                        class="flex gap-4 overflow-x-auto snap-x snap-mandatory scroll-smooth [scrollbar-width:none]"
                    >
                        {properties
                            .into_iter()
                            .map(|property| view! { <PreLaunchCard property=property /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <Show when=move || controls>
                    <div class="flex justify-center gap-2 mt-6">{dots.clone()}</div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PreLaunchCard(property: PreLaunchProperty) -> impl IntoView {
    let PreLaunchProperty { id, img, title, description, location, price, star, reviews } = property;

    let rating = star.map(|star| {
        let review_count = reviews.map(|count| format!("({count})"));
        view! {
            <div class="flex items-center gap-1">
                <StarIcon class="h-4 w-4 text-black" />
                <span class="text-sm font-semibold">{star}</span>
                <span class="text-sm text-gray-500">{review_count}</span>
            </div>
        }
    });

    view! {
        <div class="flex-shrink-0 w-full md:w-[calc(33.333%-11px)] snap-center">
            <A href=format!("/listing/{id}")>
                <div class="bg-white border border-gray-200 rounded-xl overflow-hidden hover:shadow-lg transition-shadow cursor-pointer group">
                    <div class="relative w-full h-48 md:h-56 overflow-hidden">
                        <img
                            src=img
                            alt=title.clone()
                            class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                        />
                        <button
                            on:click=move |ev| ev.prevent_default()
                            class="absolute top-3 right-3 p-2 bg-white rounded-full shadow-md hover:scale-110 transition-transform z-10"
                        >
                            <HeartIcon class="h-5 w-5 text-gray-700" />
                        </button>
                    </div>
                    <div class="p-4">
                        <h3 class="text-base font-semibold text-gray-900 mb-1 truncate">{title}</h3>
                        <p class="text-sm text-gray-600 mb-2 line-clamp-2">{description}</p>
                        <p class="text-sm text-gray-500 mb-3">{location}</p>
                        <div class="flex items-center justify-between">
                            {rating}
                            <div class="text-right">
                                <span class="text-base font-semibold text-gray-900">{price}</span>
                                <span class="text-sm text-gray-500 ml-1">"/month"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </A>
        </div>
    }
}
