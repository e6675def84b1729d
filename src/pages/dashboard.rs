//! Dashboard Page
//!
//! Registered events, stat counts and quick actions for the signed-in user.

use leptos::*;

use crate::api::{ApiClient, RegistrationStatus, RegistrationWithEvent};
use crate::components::{Accent, ListSkeleton, StatCard};
use crate::format;
use crate::routes::{use_route_navigator, AppRoute};
use crate::state::dashboard::{refresh_dashboard, DashboardState};
use crate::state::session::{use_session, Role, Session};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session().session;
    let dashboard = create_rw_signal(DashboardState::default());
    let (retry, set_retry) = create_signal(0u32);

    // Only token and endpoint changes trigger a reload
    let load_request = create_memo(move |_| session.with(Session::load_request));

    create_effect(move |_| {
        let request = load_request.get();
        let attempt = retry.get();
        tracing::trace!(attempt, has_token = request.is_some(), "dashboard load triggered");

        spawn_local(async move {
            let client = ApiClient::new();
            refresh_dashboard(&dashboard, &client, request).await;
        });
    });

    let stats = create_memo(move |_| dashboard.with(DashboardState::stats));

    let first_name = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.first_name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "User".to_string())
        })
    };

    view! {
        <div class="max-w-7xl mx-auto py-8 space-y-8">
            <div>
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">
                    "Welcome back, "
                    <span class="capitalize">{first_name}</span>
                    "!"
                </h1>
                <p class="text-gray-600 dark:text-gray-400 text-lg mt-1">
                    "Ready to discover amazing events? Let's make it happen ✨"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    label="Registered Events"
                    icon="📅"
                    accent=Accent::Blue
                    value=Signal::derive(move || stats.get().registered)
                />
                <StatCard
                    label="Upcoming Events"
                    icon="⏰"
                    accent=Accent::Green
                    value=Signal::derive(move || stats.get().upcoming)
                />
                <StatCard
                    label="Attended Events"
                    icon="⭐"
                    accent=Accent::Orange
                    value=Signal::derive(move || stats.get().attended)
                />
            </div>

            <LoadErrorNotice dashboard=dashboard retry=set_retry />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section class="bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700">
                    <h2 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">"My Registered Events"</h2>
                    <RegisteredEvents dashboard=dashboard />
                </section>

                <section class="bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700">
                    <h2 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">"Quick Actions"</h2>
                    <div class="grid grid-cols-1 gap-4">
                        {move || {
                            quick_actions(session.with(Session::role))
                                .into_iter()
                                .map(|action| view! { <QuickActionButton action=action /> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Shown when the latest load failed; the list below keeps its last content
#[component]
fn LoadErrorNotice(dashboard: RwSignal<DashboardState>, retry: WriteSignal<u32>) -> impl IntoView {
    move || {
        dashboard.with(|s| s.error().cloned()).map(|err| {
            let message = if err.is_auth_failure() {
                "Your session may have expired. Sign in again to see your events."
            } else {
                "We couldn't refresh your events."
            };
            view! {
                <div class="flex items-center justify-between bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded-lg px-4 py-3">
                    <span class="text-sm" title=err.to_string()>{message}</span>
                    <button
                        on:click=move |_| retry.update(|n| *n += 1)
                        class="text-sm font-medium underline hover:no-underline"
                    >
                        "Retry"
                    </button>
                </div>
            }
        })
    }
}

#[component]
fn RegisteredEvents(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    move || {
        dashboard.with(|state| {
            if state.is_loading() && state.snapshot().is_none() {
                view! { <ListSkeleton count=3 /> }.into_view()
            } else if state.is_empty() {
                view! { <EmptyRegistrations /> }.into_view()
            } else {
                state
                    .registrations()
                    .iter()
                    .cloned()
                    .map(|pair| view! { <RegistrationRow pair=pair /> })
                    .collect_view()
            }
        })
    }
}

#[component]
fn EmptyRegistrations() -> impl IntoView {
    let navigate = use_route_navigator();

    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <div class="text-6xl mb-6 text-gray-300">"📅"</div>
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">"No events yet"</h3>
            <p class="text-gray-500 dark:text-gray-400 mb-6 max-w-sm">
                "Discover amazing events happening around you and start your journey!"
            </p>
            <button
                on:click=move |_| navigate(AppRoute::Events)
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Browse Events →"
            </button>
        </div>
    }
}

#[component]
fn RegistrationRow(pair: RegistrationWithEvent) -> impl IntoView {
    let navigate = use_route_navigator();
    let RegistrationWithEvent { registration, event } = pair;
    let starts = format::event_start(event.start_date_time.as_deref());
    let registered = format::registered_at(&registration.registration_date);
    let event_id = event.id;

    view! {
        <div class="group p-4 mb-4 bg-gray-50 dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 hover:shadow-md transition">
            <div class="flex items-center justify-between">
                <div class="flex-1">
                    <div class="flex items-center space-x-2">
                        <h4 class="font-semibold text-gray-900 dark:text-white">{event.title}</h4>
                        <StatusBadge status=registration.status />
                    </div>
                    <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                        {starts}
                    </p>
                    <p class="text-xs text-gray-400 mt-1">
                        "Registered: "
                        {registered}
                    </p>
                </div>
                <button
                    on:click=move |_| navigate(AppRoute::Event(event_id.clone()))
                    class="px-3 py-2 rounded-lg opacity-0 group-hover:opacity-100 transition-opacity"
                    title="View event"
                >
                    "→"
                </button>
            </div>
        </div>
    }
}

#[component]
fn StatusBadge(status: RegistrationStatus) -> impl IntoView {
    let color = match status {
        RegistrationStatus::Confirmed => "bg-green-100 text-green-700",
        RegistrationStatus::Waitlisted => "bg-yellow-100 text-yellow-700",
        RegistrationStatus::Cancelled => "bg-red-100 text-red-700",
        RegistrationStatus::Unknown => "bg-gray-100 text-gray-600",
    };

    view! {
        <span class=format!("text-xs px-2 py-0.5 rounded-full font-medium {}", color)>
            {status.label()}
        </span>
    }
}

/// A shortcut on the dashboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub route: AppRoute,
}

/// Shortcuts available to a role; only organizers and admins can create events
pub fn quick_actions(role: Option<Role>) -> Vec<QuickAction> {
    let mut actions = vec![
        QuickAction {
            title: "Browse Events",
            description: "Discover new events happening around you",
            icon: "📅",
            route: AppRoute::Events,
        },
        QuickAction {
            title: "View Calendar",
            description: "See all your events in calendar view",
            icon: "🗓️",
            route: AppRoute::Calendar,
        },
    ];

    if role.is_some_and(Role::can_create_events) {
        actions.push(QuickAction {
            title: "Create Event",
            description: "Organize your own amazing event",
            icon: "✨",
            route: AppRoute::CreateEvent,
        });
    }

    actions
}

#[component]
fn QuickActionButton(action: QuickAction) -> impl IntoView {
    let navigate = use_route_navigator();
    let route = action.route.clone();

    view! {
        <button
            on:click=move |_| navigate(route.clone())
            class="group p-4 text-left bg-gray-50 dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 hover:shadow-md transition"
        >
            <div class="flex items-center space-x-3">
                <span class="text-2xl">{action.icon}</span>
                <div class="flex-1">
                    <h4 class="font-semibold text-gray-900 dark:text-white">{action.title}</h4>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{action.description}</p>
                </div>
                <span class="text-gray-400 group-hover:translate-x-1 transition">"→"</span>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(role: Option<Role>) -> Vec<&'static str> {
        quick_actions(role).into_iter().map(|a| a.title).collect()
    }

    #[test]
    fn test_quick_actions_by_role() {
        assert_eq!(titles(Some(Role::Attendee)), ["Browse Events", "View Calendar"]);
        assert_eq!(titles(None), ["Browse Events", "View Calendar"]);
        assert_eq!(titles(Some(Role::Unknown)), ["Browse Events", "View Calendar"]);
        assert_eq!(
            titles(Some(Role::Organizer)),
            ["Browse Events", "View Calendar", "Create Event"]
        );
        assert_eq!(titles(Some(Role::Admin)).last(), Some(&"Create Event"));
    }

    #[test]
    fn test_create_event_routes_to_form() {
        let actions = quick_actions(Some(Role::Admin));
        assert_eq!(actions[2].route, AppRoute::CreateEvent);
        assert_eq!(actions[0].route.path(), "/events");
    }
}
