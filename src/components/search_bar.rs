//! Multi-field search bar: one popover open at a time, ownership-token blur
//! dismissal, and submit-as-navigation.

use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsCast;

use crate::components::date_range::DateRange;
use crate::components::icons::ChevronRightIcon;
use crate::components::search_option::{SearchOptionButton, SearchOptionWrapper};
use crate::context::{QueryAction, SearchCtx};
use crate::model::{FURNISHING_OPTIONS, PROPERTY_TYPES};
use crate::utils::format::format_range_date;
use crate::utils::url::build_search_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMenu {
    PlacesToStay,
    FindExperiences,
}

/// The one popover that may be open. `Select` is the third slot in both bar
/// modes: the furnishing menu for stays, the date picker for experiences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveField {
    Location,
    PropertyType,
    Select,
}

/// Whether a blur event kept focus inside the search widget. The popover
/// only stays open when the newly focused element sits under an ownership
/// token; focus moving anywhere else closes it.
fn focus_stayed_inside(ev: &web_sys::FocusEvent) -> bool {
    ev.related_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("[data-search-owner]").ok().flatten())
        .is_some()
}

#[component]
pub fn SearchBar(
    #[prop(into)] menu: Signal<HeaderMenu>,
    #[prop(into)] active: Signal<bool>,
    #[prop(optional)] search_page: bool,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = SearchCtx::expect();
    let active_field = create_rw_signal(None::<ActiveField>);
    let navigate = use_navigate();

    let handle_blur = move |ev: Option<web_sys::FocusEvent>| {
        let keep = ev.as_ref().map(focus_stayed_inside).unwrap_or(false);
        if !keep {
            active_field.set(None);
        }
    };

    let is_active = move |field: ActiveField| {
        Signal::derive(move || active_field.get() == Some(field))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = ctx.snapshot();
        match build_search_url(&query) {
            // Submission is blocked until a location is present.
            None => active_field.set(Some(ActiveField::Location)),
            Some(url) => {
                if search_page {
                    if let Some(on_close) = on_close {
                        on_close.call(());
                    }
                }
                active_field.set(None);
                navigate(&url, Default::default());
            }
        }
    };

    let location_field = move || {
        let value = ctx.location();
        view! {
            <SearchOptionButton
                title="Location"
                placeholder="Where are you going?"
                value=value
                active=is_active(ActiveField::Location)
                owner="location"
                separator=true
                text_input=true
                on_input=move |location: String| ctx.dispatch(QueryAction::SetLocation(location))
                on_focus=move |_| active_field.set(Some(ActiveField::Location))
                on_blur=move |ev| handle_blur(Some(ev))
                on_clear=move |_| {
                    ctx.dispatch(QueryAction::SetLocation(String::new()));
                    handle_blur(None);
                }
            >
                <SearchOptionWrapper class="left-0">
                    <div class="py-4">
                        <h2 class="mb-4 text-xs font-bold">"GO ANYWHERE, ANYTIME"</h2>
                        <button
                            type="button"
                            class="flex justify-between w-[436px] px-6 py-4 border border-gray-200 rounded-full shadow-md text-rose-500"
                        >
                            <span class="font-bold">"I'm flexible"</span>
                            <ChevronRightIcon class="h-6 w-6" />
                        </button>
                    </div>
                </SearchOptionWrapper>
            </SearchOptionButton>
        }
    };

    let option_menu = move |options: &'static [&'static str],
                           selected: Signal<String>,
                           commit: Callback<String>| {
        options
            .iter()
            .map(|option| {
                let option = *option;
                view! {
                    <button
                        type="button"
                        on:click=move |_| commit.call(option.to_owned())
                        class=move || {
                            if selected.get() == option {
                                "w-full text-left px-4 py-3 bg-gray-100 font-semibold rounded-lg transition-colors"
                            } else {
                                "w-full text-left px-4 py-3 hover:bg-gray-100 rounded-lg transition-colors"
                            }
                        }
                    >
                        {option}
                    </button>
                }
            })
            .collect_view()
    };

    let places_fields = move || {
        let property_type = ctx.property_type();
        let furnishing = ctx.furnishing();
        let commit_property = Callback::new(move |option: String| {
            ctx.dispatch(QueryAction::SetPropertyType(option));
            handle_blur(None);
        });
        let commit_furnishing = Callback::new(move |option: String| {
            ctx.dispatch(QueryAction::SetFurnishing(option));
            handle_blur(None);
        });
        view! {
            <SearchOptionButton
                title="Property Type"
                placeholder="Select property type"
                value=property_type
                active=is_active(ActiveField::PropertyType)
                owner="property-type"
                separator=true
                on_focus=move |_| active_field.set(Some(ActiveField::PropertyType))
                on_blur=move |ev| handle_blur(Some(ev))
                on_clear=move |_| {
                    ctx.dispatch(QueryAction::SetPropertyType(String::new()));
                    handle_blur(None);
                }
            >
                <SearchOptionWrapper class="left-0 w-64">
                    <div class="py-2">{option_menu(&PROPERTY_TYPES, property_type, commit_property)}</div>
                </SearchOptionWrapper>
            </SearchOptionButton>
            <SearchOptionButton
                title="Select"
                placeholder="Select furnishing"
                value=furnishing
                active=is_active(ActiveField::Select)
                owner="select"
                with_search=true
                on_focus=move |_| active_field.set(Some(ActiveField::Select))
                on_blur=move |ev| handle_blur(Some(ev))
                on_clear=move |_| {
                    ctx.dispatch(QueryAction::SetFurnishing(String::new()));
                    handle_blur(None);
                }
            >
                <SearchOptionWrapper class="right-0 w-64">
                    <div class="py-2">{option_menu(&FURNISHING_OPTIONS, furnishing, commit_furnishing)}</div>
                </SearchOptionWrapper>
            </SearchOptionButton>
        }
        .into_view()
    };

    let experience_fields = move || {
        let dates = ctx.dates();
        let date_label = Signal::derive(move || {
            let (check_in, check_out) = dates.get();
            format_range_date(check_in, check_out).unwrap_or_default()
        });
        view! {
            <SearchOptionButton
                title="Date"
                placeholder="Add when you want to go"
                value=date_label
                active=is_active(ActiveField::Select)
                owner="select"
                with_search=true
                on_focus=move |_| active_field.set(Some(ActiveField::Select))
                on_blur=move |ev| handle_blur(Some(ev))
                on_clear=move |_| {
                    ctx.dispatch(QueryAction::ResetDates);
                    handle_blur(None);
                }
            >
                <SearchOptionWrapper class="left-4 right-4 md:left-auto md:right-1/2 md:translate-x-1/2 md:w-[680px]">
                    <Show when=move || active_field.get() == Some(ActiveField::Select)>
                        <DateRange />
                    </Show>
                </SearchOptionWrapper>
            </SearchOptionButton>
        }
        .into_view()
    };

    view! {
        <div class=move || if active.get() { "visible px-4" } else { "invisible px-4" }>
            <div class="max-w-[850px] mx-auto mt-2 rounded-full bg-white border border-gray-200 duration-300 hidden md:flex">
                <form
                    action="/search"
                    class=move || match menu.get() {
                        HeaderMenu::PlacesToStay => "grid flex-grow grid-cols-[1fr,0.8fr,0.8fr]",
                        HeaderMenu::FindExperiences => "grid flex-grow grid-cols-2",
                    }
                    on:submit=on_submit
                >
                    {location_field}
                    {move || match menu.get() {
                        HeaderMenu::PlacesToStay => places_fields(),
                        HeaderMenu::FindExperiences => experience_fields(),
                    }}
                </form>
            </div>
        </div>
    }
}
