//! State Management
//!
//! Session context plus the dashboard and profile state machines.

use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};

pub mod dashboard;
pub mod profile;
pub mod session;

/// Somewhere a piece of state can be mutated in place.
///
/// The async drivers only touch state between awaits, through this trait,
/// so they run the same against a reactive signal and a plain `RefCell`.
pub trait StateCell<T> {
    /// Apply `f` to the state; `None` if the state no longer exists
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: 'static> StateCell<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}
