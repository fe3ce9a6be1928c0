use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative h-[420px] md:h-[560px] bg-gray-200">
            <img
                src="/assets/hero.jpg"
                alt="A stay in the hills"
                class="absolute inset-0 w-full h-full object-cover"
            />
            <div class="absolute inset-0 flex flex-col items-center justify-center text-center px-4">
                <h1 class="text-3xl md:text-5xl font-bold text-white drop-shadow-lg mb-6">
                    "Not sure where to go? Perfect."
                </h1>
                <a
                    href="/search?location=Chandigarh"
                    class="px-8 py-3 bg-white rounded-full font-semibold text-purple-700 shadow-lg hover:scale-105 transition-transform"
                >
                    "I'm flexible"
                </a>
            </div>
        </section>
    }
}
