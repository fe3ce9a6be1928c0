//! Home page: static sections, the two carousels, and the one remote fetch.

use leptos::*;

use crate::components::banner::Banner;
use crate::components::footer::Footer;
use crate::components::guest_reviews::GuestReviews;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::location_section::LocationSection;
use crate::components::nearby::Nearby;
use crate::components::pre_launch::PreLaunch;
use crate::components::section::Section;
use crate::data;

#[component]
pub fn HomePage() -> impl IntoView {
    let explore_nearby = data::explore_nearby();
    let sections = data::location_listings();
    let pre_launch = data::pre_launch_properties();

    // Decorative remote content; a failed fetch logs and renders nothing.
    let live_anywhere = create_local_resource(
        || (),
        |_| async {
            match data::fetch_live_anywhere().await {
                Ok(destinations) => destinations,
                Err(error) => {
                    log::warn!("live-anywhere fetch failed: {error}");
                    Vec::new()
                }
            }
        },
    );

    view! {
        <Header />
        <main class="mt-[86px]">
            <Hero />

            <Section
                title="Explore Nearby"
                class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 lg:gap-x-4 gap-x-1 gap-y-2"
            >
                {explore_nearby
                    .into_iter()
                    .map(|place| view! { <Nearby data=place /> })
                    .collect::<Vec<_>>()}
            </Section>

            {move || {
                let destinations = live_anywhere.get().unwrap_or_default();
                (!destinations.is_empty())
                    .then(|| {
                        view! {
                            <Section
                                title="Live Anywhere"
                                class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6"
                            >
                                {destinations
                                    .into_iter()
                                    .map(|destination| {
                                        view! {
                                            <div class="cursor-pointer group">
                                                <img
                                                    src=destination.img
                                                    alt=destination.title.clone()
                                                    class="w-full h-72 object-cover rounded-xl group-hover:scale-[1.02] transition-transform duration-300"
                                                />
                                                <h3 class="mt-3 font-semibold text-gray-900">
                                                    {destination.title}
                                                </h3>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </Section>
                        }
                    })
            }}

            <Show when={
                let has_pre_launch = !pre_launch.is_empty();
                move || has_pre_launch
            }>
                <PreLaunch properties=pre_launch.clone() />
            </Show>

            <LocationSection
                title="Available in Chandigarh this weekend"
                listings=sections.chandigarh.clone()
            />
            <LocationSection title="Stay in Gurgaon District" listings=sections.gurgaon.clone() />

            <HowItWorks />
            <GuestReviews />
            <Banner />
        </main>
        <Footer />
    }
}
