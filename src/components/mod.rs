//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;
pub mod stat_card;

pub use loading::ListSkeleton;
pub use nav::Nav;
pub use stat_card::{Accent, StatCard, StatTile};
