//! Wire Types
//!
//! JSON shapes returned by the EventHub backend (camelCase fields).

use serde::{Deserialize, Deserializer, Serialize};

/// Registration lifecycle status as reported by the backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Confirmed,
    Waitlisted,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RegistrationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Waitlisted => "Waitlisted",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Pending",
        }
    }
}

/// A user's registration for one event
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RegistrationStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registration_date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub attended: bool,
}

/// The subset of an event the dashboard displays
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub start_date_time: Option<String>,
}

/// Missing or `null` fields take the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Registration joined with the event it points at
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RegistrationWithEvent {
    pub registration: Registration,
    pub event: EventSummary,
}

impl RegistrationWithEvent {
    /// Whether the embedded event is the one the registration references
    pub fn is_consistent(&self) -> bool {
        self.registration.event_id == self.event.id
    }
}

/// Body of `GET /dashboard/{role}`
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub registrations: Option<Vec<RegistrationWithEvent>>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Error body the backend sends with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}
