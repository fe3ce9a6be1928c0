//! Horizontally scrollable row of place cards with directional buttons
//! whose enabled state tracks the scroll position.

use leptos::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::place_card::PlaceCard;
use crate::model::Listing;

const SCROLL_STEP: f64 = 400.0;
/// Tolerance for sub-pixel rounding at the right edge.
const EDGE_EPSILON: f64 = 10.0;

/// Derived button availability for a scroll container.
pub fn scroll_button_state(offset: f64, scroll_width: f64, client_width: f64) -> (bool, bool) {
    let can_left = offset > 0.0;
    let can_right = offset < scroll_width - client_width - EDGE_EPSILON;
    (can_left, can_right)
}

#[component]
pub fn LocationSection(#[prop(into)] title: String, listings: Vec<Listing>) -> impl IntoView {
    let container: NodeRef<html::Div> = create_node_ref();
    let can_left = create_rw_signal(false);
    let can_right = create_rw_signal(true);

    let derive_state = move || {
        if let Some(el) = container.get_untracked() {
            let (left, right) = scroll_button_state(
                el.scroll_left() as f64,
                el.scroll_width() as f64,
                el.client_width() as f64,
            );
            can_left.set(left);
            can_right.set(right);
        }
    };

    // Final button state lands on the element's scrollend notification,
    // after any smooth-scroll animation has finished.
    let scrollend_listener = store_value(None::<Closure<dyn FnMut()>>);
    let attached = store_value(false);
    create_effect(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        if attached.get_value() {
            return;
        }
        attached.set_value(true);
        let closure = Closure::wrap(Box::new(derive_state) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("scrollend", closure.as_ref().unchecked_ref());
        scrollend_listener.set_value(Some(closure));
    });
    on_cleanup(move || {
        scrollend_listener.update_value(|listener| {
            if let Some(closure) = listener.take() {
                if let Some(el) = container.get_untracked() {
                    let _ = el.remove_event_listener_with_callback(
                        "scrollend",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    });

    let scroll_by = move |direction: f64| {
        if let Some(el) = container.get_untracked() {
            let options = ScrollToOptions::new();
            options.set_left(el.scroll_left() as f64 + direction * SCROLL_STEP);
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_to_with_scroll_to_options(&options);
        }
    };

    let button_class = |enabled: bool| {
        if enabled {
            "p-2 rounded-full border border-gray-300 transition-all hover:border-gray-900 hover:shadow-md cursor-pointer"
        } else {
            "p-2 rounded-full border border-gray-300 transition-all opacity-30 cursor-not-allowed"
        }
    };

    view! {
        <section class="my-12">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl md:text-3xl font-semibold text-gray-900">{title}</h2>
                    <div class="flex items-center gap-2">
                        <button
                            on:click=move |_| scroll_by(-1.0)
                            disabled=move || !can_left.get()
                            class=move || button_class(can_left.get())
                            aria-label="Scroll left"
                        >
                            <ChevronLeftIcon class="h-5 w-5 text-gray-700" />
                        </button>
                        <button
                            on:click=move |_| scroll_by(1.0)
                            disabled=move || !can_right.get()
                            class=move || button_class(can_right.get())
                            aria-label="Scroll right"
                        >
                            <ChevronRightIcon class="h-5 w-5 text-gray-700" />
                        </button>
                    </div>
                </div>

                <div
                    node_ref=container
                    on:scroll=move |_| derive_state()
                    class="flex gap-6 overflow-x-auto scroll-smooth pb-4 [scrollbar-width:none]"
                >
                    {listings
                        .into_iter()
                        .map(|listing| {
                            view! {
                                <div class="flex-shrink-0 w-[300px] md:w-[350px]">
                                    <PlaceCard data=listing />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_origin_only_right_is_available() {
        assert_eq!(scroll_button_state(0.0, 1000.0, 400.0), (false, true));
    }

    #[test]
    fn near_the_max_offset_right_disables_within_tolerance() {
        // Max offset is 600; 610 sits inside the 10 px epsilon.
        let (left, right) = scroll_button_state(610.0, 1000.0, 400.0);
        assert!(left);
        assert!(!right);
    }

    #[test]
    fn mid_scroll_enables_both() {
        assert_eq!(scroll_button_state(300.0, 1000.0, 400.0), (true, true));
    }

    #[test]
    fn unscrollable_container_disables_both() {
        assert_eq!(scroll_button_state(0.0, 400.0, 400.0), (false, false));
    }
}
