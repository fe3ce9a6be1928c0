//! Popover field building blocks for the search bar.
//!
//! Every focusable surface of a field sits under an element carrying a
//! `data-search-owner` token; the bar's blur handling uses that token to
//! decide whether focus left the widget.

use leptos::*;

use crate::components::icons::SearchIcon;

/// A search-bar field: a focusable control that opens an anchored popover
/// while the field is the active one.
#[component]
pub fn SearchOptionButton(
    #[prop(into)] title: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] active: Signal<bool>,
    /// Opaque ownership token shared by the control and its popover.
    owner: &'static str,
    #[prop(into)] on_focus: Callback<()>,
    #[prop(into)] on_blur: Callback<web_sys::FocusEvent>,
    #[prop(into)] on_clear: Callback<()>,
    /// Render the field as a free-text input instead of a display button.
    #[prop(optional)]
    text_input: bool,
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Render the bar's submit button at the trailing edge of this field.
    #[prop(optional)]
    with_search: bool,
    #[prop(optional)] separator: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title_for_input = title.clone();
    let placeholder_for_input = placeholder.clone();

    let field = if text_input {
        view! {
            <label class="block flex-grow cursor-pointer text-left">
                <span class="block text-xs font-bold text-gray-900">{title_for_input}</span>
                <input
                    type="text"
                    class="w-full bg-transparent text-sm text-gray-700 placeholder-gray-400 outline-none truncate"
                    placeholder=placeholder_for_input
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        if let Some(on_input) = on_input {
                            on_input.call(event_target_value(&ev));
                        }
                    }
                    on:focus=move |_| on_focus.call(())
                    on:blur=move |ev| on_blur.call(ev)
                />
            </label>
        }
        .into_view()
    } else {
        view! {
            <button
                type="button"
                class="flex-grow text-left"
                on:focus=move |_| on_focus.call(())
                on:blur=move |ev| on_blur.call(ev)
            >
                <span class="block text-xs font-bold text-gray-900">{title.clone()}</span>
                <span class=move || {
                    if value.with(String::is_empty) {
                        "block text-sm text-gray-400 truncate"
                    } else {
                        "block text-sm text-gray-700 truncate"
                    }
                }>
                    {move || {
                        let current = value.get();
                        if current.is_empty() {
                            placeholder.clone()
                        } else {
                            current
                        }
                    }}
                </span>
            </button>
        }
        .into_view()
    };

    view! {
        <div class="relative flex-grow" data-search-owner=owner>
            <div class=move || {
                if active.get() {
                    "flex items-center gap-2 h-full px-6 py-3 rounded-full bg-gray-50 shadow-md"
                } else {
                    "flex items-center gap-2 h-full px-6 py-3 rounded-full hover:bg-gray-100"
                }
            }>
                {field}
                <Show when=move || active.get() && !value.with(String::is_empty)>
                    <button
                        type="button"
                        class="p-1 rounded-full hover:bg-gray-200 text-gray-500 text-sm leading-none"
                        aria-label="Clear value"
                        on:click=move |_| on_clear.call(())
                    >
                        "✕"
                    </button>
                </Show>
                <Show when=move || with_search>
                    <button
                        type="submit"
                        class="flex items-center gap-2 px-3 py-3 bg-rose-500 hover:bg-rose-600 text-white rounded-full"
                        aria-label="Search"
                    >
                        <SearchIcon class="h-4 w-4" />
                    </button>
                </Show>
            </div>
            <Show when=move || active.get()>{children()}</Show>
            <Show when=move || separator>
                <div class="absolute right-0 top-1/4 h-1/2 border-r border-gray-200"></div>
            </Show>
        </div>
    }
}

/// Anchored popover panel under a search field.
#[component]
pub fn SearchOptionWrapper(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let class = format!("absolute top-full mt-3 bg-white rounded-3xl shadow-xl z-40 px-8 py-4 {class}");
    view! { <div class=class>{children()}</div> }
}
