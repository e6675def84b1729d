//! HTTP API Client
//!
//! Authenticated requests against the EventHub REST API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::types::{DashboardResponse, ErrorBody};
use crate::config;
use crate::error::ApiError;
use crate::state::dashboard::{DashboardSnapshot, DashboardSource};
use crate::state::session::{LoadRequest, Role};

/// Dashboard endpoint for each kind of user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DashboardEndpoint {
    Admin,
    Organizer,
    Attendee,
}

impl DashboardEndpoint {
    /// ADMIN and ORGANIZER get their own views; everyone else is an attendee.
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Admin) => Self::Admin,
            Some(Role::Organizer) => Self::Organizer,
            Some(Role::Attendee) | Some(Role::Unknown) | None => Self::Attendee,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Admin => "/dashboard/admin",
            Self::Organizer => "/dashboard/organizer",
            Self::Attendee => "/dashboard/attendee",
        }
    }
}

/// Client for the EventHub API
///
/// Without a pinned base URL the base is looked up from configuration on
/// every request.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    base: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client bound to a fixed base URL
    #[cfg(test)]
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: Some(base.into().trim_end_matches('/').to_string()) }
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        let base = self.base.clone().unwrap_or_else(config::api_base);
        format!("{}{}", base, path)
    }

    /// GET a JSON document with a bearer token
    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(&response).await);
        }

        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl DashboardSource for ApiClient {
    async fn fetch_dashboard(&self, request: &LoadRequest) -> Result<DashboardSnapshot, ApiError> {
        let body: DashboardResponse = self.get_json(request.endpoint.path(), &request.token).await?;
        Ok(DashboardSnapshot::from(body))
    }
}

/// Authorization header value
fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn error_from_response(response: &Response) -> ApiError {
    let status = response.status();
    let fallback = match response.status_text() {
        text if text.is_empty() => "Unknown error".to_string(),
        text => text,
    };

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or(fallback);

    ApiError::status(status, message)
}
