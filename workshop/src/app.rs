use leptos::*;
use leptos_router::*;

use crate::pages::workshop::WorkshopPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="mx-auto max-w-4xl p-8">
                <Routes>
                    <Route path="/" view=WorkshopPage />
                </Routes>
            </main>
        </Router>
    }
}
