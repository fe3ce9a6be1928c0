//! Root application component with routing.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::context::SearchCtx;
use crate::pages::{home::HomePage, listing::ListingPage, search::SearchPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // The one piece of state shared across sibling components.
    SearchCtx::provide();

    view! {
        <Title text="Staynest – Holiday homes & stays"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>
        <Meta name="description" content="Find rooms, flats and holiday homes around Chandigarh"/>

        <Router>
            <main class="min-h-screen bg-white text-gray-900">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/listing/:id" view=ListingPage/>
                </Routes>
            </main>
        </Router>
    }
}
