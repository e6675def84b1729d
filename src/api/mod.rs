//! API Layer
//!
//! HTTP client and wire types for the EventHub backend.

pub mod client;
pub mod types;

pub use client::{ApiClient, DashboardEndpoint};
pub use types::{RegistrationStatus, RegistrationWithEvent};
