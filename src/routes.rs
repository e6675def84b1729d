//! Navigation targets.

use leptos_router::{use_navigate, NavigateOptions};

/// Every path the screens navigate to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Profile,
    Events,
    Event(String),
    Calendar,
    CreateEvent,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/dashboard".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Events => "/events".to_string(),
            Self::Event(id) => format!("/events/{}", id),
            Self::Calendar => "/calendar".to_string(),
            Self::CreateEvent => "/create-event".to_string(),
        }
    }
}

/// Returns a closure that navigates to a route
pub fn use_route_navigator() -> impl Fn(AppRoute) + Clone {
    let navigate = use_navigate();
    move |route: AppRoute| navigate(&route.path(), NavigateOptions::default())
}
