//! App Root Component
//!
//! Routing and the session provider.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Dashboard, Profile};
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 sm:px-6 lg:px-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/profile" view=Profile />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2 text-gray-900 dark:text-white">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
