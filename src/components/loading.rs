//! Loading Component
//!
//! Skeleton placeholders shown while data loads.

use leptos::*;

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 dark:bg-gray-700 rounded-lg h-16" />
            }).collect_view()}
        </div>
    }
}
