//! Auto-advancing guest reviews carousel, one review per slide, two in view
//! on desktop.

use leptos::*;

use crate::carousel::{use_carousel, CarouselCore, Granularity};
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, StarIcon};
use crate::data::guest_reviews;
use crate::model::Review;

const REVIEWS_PER_VIEW: usize = 2;

#[component]
pub fn GuestReviews() -> impl IntoView {
    let reviews = guest_reviews();
    let container: NodeRef<html::Div> = create_node_ref();
    let carousel = use_carousel(
        CarouselCore {
            item_count: reviews.len(),
            per_view: REVIEWS_PER_VIEW,
            granularity: Granularity::Item,
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
                            "h-2.5 w-8 rounded-full bg-gray-900 transition-all"
                        } else {
                            "h-2.5 w-2.5 rounded-full bg-gray-300 hover:bg-gray-400 transition-all"
                        }
                    }
                    aria-label=format!("Go to review {}", slide + 1)
                />
            }
        })
        .collect_view();

    view! {
        <section class="my-16 py-12 bg-white">
            <div class="container mx-auto px-4">
                <div class="mb-12 pb-4 relative">
                    <div class="absolute left-0 bottom-0 w-24 h-1 bg-gray-900"></div>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-gray-900 mb-2">
                        "What our guests say"
                    </h2>
                    <p class="text-lg text-gray-600 mt-2">"Real reviews from real travelers"</p>
                </div>

                <div class="relative">
                    <Show when=move || controls>
                        <button
                            on:click=move |_| prev.call(())
                            class="absolute left-0 top-1/2 -translate-y-1/2 -translate-x-4 md:-translate-x-6 z-20 bg-white border border-gray-300 rounded-full p-3 shadow-lg hover:shadow-xl hover:scale-110 transition-all"
                            aria-label="Previous review"
                        >
                            <ChevronLeftIcon class="h-6 w-6 text-gray-700" />
                        </button>
                        <button
                            on:click=move |_| next.call(())
                            class="absolute right-0 top-1/2 -translate-y-1/2 translate-x-4 md:translate-x-6 z-20 bg-white border border-gray-300 rounded-full p-3 shadow-lg hover:shadow-xl hover:scale-110 transition-all"
                            aria-label="Next review"
                        >
                            <ChevronRightIcon class="h-6 w-6 text-gray-700" />
                        </button>
                    </Show>

                    <div
                        node_ref=container
                        on:mouseenter=move |_| pause.call(())
                        on:mouseleave=move |_| resume.call(())
                        class="flex gap-6 overflow-x-auto snap-x snap-mandatory scroll-smooth px-2 [scrollbar-width:none]"
                    >
                        {reviews
                            .iter()
                            .map(|review| view! { <ReviewCard review=review.clone() /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <Show when=move || controls>
                    <div class="flex justify-center gap-2 mt-8">{dots.clone()}</div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let initial = review.name.chars().next().unwrap_or('?').to_string();
    let stars = (0..5)
        .map(|i| {
            let class = if i < review.rating { "h-5 w-5 text-yellow-400" } else { "h-5 w-5 text-gray-300" };
            view! { <StarIcon class=class /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="flex-shrink-0 w-full md:w-[calc(50%-12px)] snap-center">
            <div class="bg-white border-2 border-gray-200 rounded-2xl p-6 md:p-8 shadow-sm hover:shadow-md transition-shadow h-full">
                <div class="flex items-center gap-1 mb-4">{stars}</div>
                <p class="text-gray-700 text-base leading-relaxed mb-6">{review.text}</p>
                <div class="flex items-center gap-4 pt-4 border-t border-gray-100">
                    <div class="w-12 h-12 rounded-full bg-gray-200 flex items-center justify-center flex-shrink-0">
                        <span class="text-gray-600 font-semibold text-lg">{initial}</span>
                    </div>
                    <div class="flex-1 min-w-0">
                        <h6 class="text-gray-900 font-semibold text-base mb-1">{review.name}</h6>
                        <p class="text-gray-500 text-sm">{format!("{} · {}", review.location, review.date)}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
