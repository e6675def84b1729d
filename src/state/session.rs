//! Session Context
//!
//! Holds the bearer token and user record issued by the sign-in flow.
//! Screens only read it; the credentials are restored from local storage
//! at startup and cleared on sign-out.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::DashboardEndpoint;

/// Local storage key for the bearer token
pub const TOKEN_STORAGE_KEY: &str = "eventhub_token";

/// Local storage key for the JSON-encoded user record
pub const USER_STORAGE_KEY: &str = "eventhub_user";

/// Account role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Organizer,
    Attendee,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Organizers and admins may create events
    pub fn can_create_events(self) -> bool {
        matches!(self, Self::Admin | Self::Organizer)
    }
}

/// Signed-in user as returned by the auth endpoints
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// What a dashboard load needs from the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub token: String,
    pub endpoint: DashboardEndpoint,
}

/// Current credentials; `token == None` means not signed in
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    #[cfg(test)]
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self { token: Some(token.into()), user: Some(user) }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn endpoint(&self) -> DashboardEndpoint {
        DashboardEndpoint::for_role(self.role())
    }

    /// The dashboard request to issue, or `None` while unauthenticated
    pub fn load_request(&self) -> Option<LoadRequest> {
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        Some(LoadRequest {
            token: token.to_string(),
            endpoint: self.endpoint(),
        })
    }

    /// Restore credentials saved by the sign-in flow
    pub fn restore() -> Self {
        let Some(storage) = local_storage() else {
            return Self::default();
        };

        let token = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten();
        let user = storage
            .get_item(USER_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| parse_stored_user(&raw));

        Self { token, user }
    }
}

fn parse_stored_user(raw: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed stored user record");
            None
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Session handle provided to the component tree
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
}

impl SessionContext {
    /// Drop the credentials from memory and storage
    pub fn sign_out(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            let _ = storage.remove_item(USER_STORAGE_KEY);
        }
        self.session.set(Session::default());
        tracing::info!("signed out");
    }
}

/// Provide the restored session to the component tree
pub fn provide_session() {
    let session = Session::restore();
    tracing::debug!(authenticated = session.token.is_some(), "session restored");
    provide_context(SessionContext { session: create_rw_signal(session) });
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found")
}
