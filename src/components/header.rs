//! Sticky page header: wordmark, menu tabs, and the search bar. On the
//! search page the bar starts collapsed behind a summary pill.

use leptos::*;
use leptos_router::A;

use crate::components::icons::SearchIcon;
use crate::components::search_bar::{HeaderMenu, SearchBar};
use crate::context::SearchCtx;
use crate::utils::format::{format_guests, format_range_date};

#[component]
pub fn Header(#[prop(optional)] search_page: bool) -> impl IntoView {
    let ctx = SearchCtx::expect();
    let menu = create_rw_signal(HeaderMenu::PlacesToStay);
    let bar_active = create_rw_signal(!search_page);

    let summary = move || {
        ctx.with(|query| {
            let mut segments = Vec::new();
            if !query.location.is_empty() {
                segments.push(query.location.clone());
            }
            if let Some(dates) = format_range_date(query.check_in, query.check_out) {
                segments.push(dates);
            }
            if let Some(guests) = format_guests(&query.guests, true) {
                segments.push(guests);
            }
            if segments.is_empty() {
                "Start your search".to_owned()
            } else {
                segments.join(" • ")
            }
        })
    };

    let tab_class = move |tab: HeaderMenu| {
        move || {
            if menu.get() == tab {
                "pb-2 border-b-2 border-gray-900 text-gray-900 text-sm"
            } else {
                "pb-2 border-b-2 border-transparent text-gray-500 hover:text-gray-900 text-sm"
            }
        }
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white border-b border-gray-200">
            <div class="container mx-auto px-4 py-3 grid grid-cols-[auto,1fr,auto] items-center gap-4">
                <A href="/" class="text-xl font-bold text-rose-500">
                    "staynest"
                </A>
                <div class="text-center">
                    <Show when=move || !bar_active.get()>
                        <button
                            class="inline-flex items-center gap-3 px-4 py-2 border border-gray-200 rounded-full shadow-sm hover:shadow-md text-sm text-gray-700"
                            on:click=move |_| bar_active.set(true)
                        >
                            <span>{summary}</span>
                            <span class="p-2 bg-rose-500 text-white rounded-full">
                                <SearchIcon class="h-3 w-3" />
                            </span>
                        </button>
                    </Show>
                    <Show when=move || bar_active.get()>
                        <div class="flex justify-center gap-6">
                            <button
                                class=tab_class(HeaderMenu::PlacesToStay)
                                on:click=move |_| menu.set(HeaderMenu::PlacesToStay)
                            >
                                "Places to stay"
                            </button>
                            <button
                                class=tab_class(HeaderMenu::FindExperiences)
                                on:click=move |_| menu.set(HeaderMenu::FindExperiences)
                            >
                                "Find experiences"
                            </button>
                        </div>
                    </Show>
                </div>
                <div class="flex items-center gap-2 justify-end">
                    <button class="px-3 py-2 text-sm rounded-full hover:bg-gray-100 hidden lg:block">
                        "Become a host"
                    </button>
                    <button class="p-2 rounded-full hover:bg-gray-100" aria-label="Language">
                        "🌐"
                    </button>
                    <button
                        class="flex items-center gap-2 px-3 py-2 border border-gray-200 rounded-full hover:shadow-md"
                        aria-label="Profile"
                    >
                        "👤"
                    </button>
                </div>
            </div>
            <SearchBar
                menu=menu
                active=bar_active
                search_page=search_page
                on_close=move |_| {
                    if search_page {
                        bar_active.set(false);
                    }
                }
            />
        </header>
    }
}
