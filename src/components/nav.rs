//! Navigation Component
//!
//! Header bar with brand, page links and sign-out.

use leptos::*;
use leptos_router::*;

use crate::routes::AppRoute;
use crate::state::session::use_session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let signed_in = move || session.session.with(|s| s.token.is_some());

    view! {
        <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎟️"</span>
                        <span class="text-xl font-bold text-gray-900 dark:text-white">"EventHub"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink route=AppRoute::Dashboard label="Dashboard" />
                        <NavLink route=AppRoute::Profile label="Profile" />
                        <Show when=signed_in>
                            <button
                                on:click=move |_| session.sign_out()
                                class="px-4 py-2 rounded-lg text-gray-500 hover:text-red-500 transition-colors"
                            >
                                "Sign out"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(route: AppRoute, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=route.path()
            class="px-4 py-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
            active_class="bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white"
        >
            {label}
        </A>
    }
}
