use leptos::*;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Search",
        description: "Find the perfect property in your desired location with our smart search",
    },
    Step {
        number: "02",
        title: "Book",
        description: "Select your dates and complete the booking in just a few clicks",
    },
    Step {
        number: "03",
        title: "Confirm",
        description: "Receive instant confirmation and detailed property information",
    },
    Step {
        number: "04",
        title: "Enjoy",
        description: "Check in and enjoy your comfortable stay with peace of mind",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="my-16 py-12 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-4">"How it works"</h2>
                    <p class="text-lg text-gray-600">"Book your perfect stay in four simple steps"</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="text-center">
                                    <div class="mb-6">
                                        <span class="text-6xl md:text-7xl font-bold text-gray-200">
                                            {step.number}
                                        </span>
                                    </div>
                                    <h3 class="text-xl md:text-2xl font-semibold mb-3 text-gray-900">
                                        {step.title}
                                    </h3>
                                    <p class="text-gray-600 leading-relaxed">{step.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
