use leptos::*;

/// Stepper for one guest category, lower bound 0.
#[component]
pub fn Counter(
    #[prop(into)] label: String,
    #[prop(into)] sub: String,
    #[prop(into)] value: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-4">
            <div>
                <div class="font-semibold text-gray-900">{label}</div>
                <div class="text-sm text-gray-500">{sub}</div>
            </div>
            <div class="flex items-center gap-3">
                <button
                    type="button"
                    class=move || {
                        if value.get() == 0 {
                            "w-8 h-8 rounded-full border border-gray-200 text-gray-300 cursor-not-allowed"
                        } else {
                            "w-8 h-8 rounded-full border border-gray-400 text-gray-600 hover:border-gray-900"
                        }
                    }
                    disabled=move || value.get() == 0
                    on:click=move |_| on_change.call(value.get_untracked().saturating_sub(1))
                    aria-label="Decrease"
                >
                    "−"
                </button>
                <span class="w-6 text-center">{move || value.get()}</span>
                <button
                    type="button"
                    class="w-8 h-8 rounded-full border border-gray-400 text-gray-600 hover:border-gray-900"
                    on:click=move |_| on_change.call(value.get_untracked() + 1)
                    aria-label="Increase"
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
