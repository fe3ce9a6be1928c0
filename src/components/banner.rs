use leptos::*;

#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <section class="relative h-[300px] md:h-[400px] my-16">
            <img
                src="/assets/banner.jpg"
                alt="Hosting"
                class="absolute inset-0 w-full h-full object-cover"
            />
            <div class="absolute inset-0 bg-gradient-to-r from-black/60 to-transparent flex items-center">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-2">
                        "Questions about hosting?"
                    </h2>
                    <p class="text-white/90 mb-6">"Ask a Superhost."</p>
                    <button class="px-6 py-3 bg-white rounded-lg font-semibold hover:bg-gray-100">
                        "Ask a Superhost"
                    </button>
                </div>
            </div>
        </section>
    }
}
