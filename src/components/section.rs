use leptos::*;

/// Titled page section with a configurable content grid.
#[component]
pub fn Section(
    #[prop(into)] title: String,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 my-12">
            <h2 class="text-2xl md:text-3xl font-semibold text-gray-900 mb-6">{title}</h2>
            <div class=class>{children()}</div>
        </section>
    }
}
