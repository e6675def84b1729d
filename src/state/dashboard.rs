//! Dashboard State
//!
//! Loads the signed-in user's registrations and derives the stat counts.
//! Each load is tagged with a generation; only the newest load may replace
//! the snapshot, so a slow response for an old token cannot win.

use async_trait::async_trait;

use super::session::LoadRequest;
use super::StateCell;
use crate::api::types::{DashboardResponse, RegistrationWithEvent};
use crate::error::ApiError;

/// Source of dashboard snapshots
#[async_trait(?Send)]
pub trait DashboardSource {
    async fn fetch_dashboard(&self, request: &LoadRequest) -> Result<DashboardSnapshot, ApiError>;
}

/// Registrations returned by the last successful fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub registrations: Vec<RegistrationWithEvent>,
    pub count: Option<u64>,
}

impl From<DashboardResponse> for DashboardSnapshot {
    fn from(response: DashboardResponse) -> Self {
        let registrations = response.registrations.unwrap_or_default();
        let orphans = registrations.iter().filter(|r| !r.is_consistent()).count();
        if orphans > 0 {
            tracing::warn!(orphans, "registrations reference a different event than embedded");
        }
        Self { registrations, count: response.count }
    }
}

/// Counts shown on the stat cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub registered: u64,
    /// Not tracked by the backend yet
    pub upcoming: u64,
    /// Not tracked by the backend yet
    pub attended: u64,
}

/// Progress of the most recent load
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(ApiError),
}

/// A load that has been started and awaits its response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub request: LoadRequest,
}

/// What happened to a completed load
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// No token, nothing requested
    Skipped,
    /// Snapshot replaced
    Applied,
    /// Request failed; previous snapshot kept
    Retained(ApiError),
    /// A newer load started meanwhile; response dropped
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    snapshot: Option<DashboardSnapshot>,
    status: LoadStatus,
    generation: u64,
}

impl DashboardState {
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    #[cfg(test)]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn registrations(&self) -> &[RegistrationWithEvent] {
        self.snapshot.as_ref().map_or(&[], |s| s.registrations.as_slice())
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            registered: self.snapshot.as_ref().and_then(|s| s.count).unwrap_or(0),
            upcoming: 0,
            attended: 0,
        }
    }

    /// The list shows its empty state whenever the registered count is zero
    pub fn is_empty(&self) -> bool {
        self.stats().registered == 0
    }

    /// Start a load. Without a request nothing is fetched, any load in
    /// flight is invalidated and the previous snapshot is dropped.
    pub fn begin(&mut self, request: Option<LoadRequest>) -> Option<LoadTicket> {
        self.generation += 1;
        match request {
            Some(request) => {
                self.status = LoadStatus::Loading;
                Some(LoadTicket { generation: self.generation, request })
            }
            None => {
                self.snapshot = None;
                self.status = LoadStatus::Idle;
                None
            }
        }
    }

    /// Apply the result of a load started with `begin`
    pub fn complete(
        &mut self,
        ticket: &LoadTicket,
        result: Result<DashboardSnapshot, ApiError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            return LoadOutcome::Stale;
        }

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.status = LoadStatus::Ready;
                LoadOutcome::Applied
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e.clone());
                LoadOutcome::Retained(e)
            }
        }
    }
}

/// Run one dashboard load against `source`, storing the result in `state`.
///
/// Never fails: errors are recorded in the state and reported in the outcome.
pub async fn refresh_dashboard<C, S>(
    state: &C,
    source: &S,
    request: Option<LoadRequest>,
) -> LoadOutcome
where
    C: StateCell<DashboardState> + ?Sized,
    S: DashboardSource + ?Sized,
{
    let Some(ticket) = state.modify(|s| s.begin(request)).flatten() else {
        return LoadOutcome::Skipped;
    };

    tracing::debug!(
        generation = ticket.generation,
        endpoint = ticket.request.endpoint.path(),
        "loading dashboard"
    );

    let result = source.fetch_dashboard(&ticket.request).await;

    let outcome = state
        .modify(|s| s.complete(&ticket, result))
        .unwrap_or(LoadOutcome::Stale);

    match &outcome {
        LoadOutcome::Applied => tracing::debug!(generation = ticket.generation, "dashboard loaded"),
        LoadOutcome::Retained(e) => tracing::warn!(error = %e, "dashboard load failed"),
        LoadOutcome::Stale => tracing::debug!(generation = ticket.generation, "dropping stale dashboard response"),
        LoadOutcome::Skipped => {}
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EventSummary, Registration, RegistrationStatus};
    use crate::api::DashboardEndpoint;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn pair(id: &str, title: &str, start: Option<&str>) -> RegistrationWithEvent {
        RegistrationWithEvent {
            registration: Registration {
                id: format!("r-{}", id),
                event_id: id.to_string(),
                user_id: "u1".to_string(),
                status: RegistrationStatus::Confirmed,
                registration_date: "2024-03-01T09:00:00".to_string(),
                notes: None,
                attended: false,
            },
            event: EventSummary {
                id: id.to_string(),
                title: title.to_string(),
                start_date_time: start.map(str::to_string),
            },
        }
    }

    fn snapshot(pairs: Vec<RegistrationWithEvent>) -> DashboardSnapshot {
        let count = pairs.len() as u64;
        DashboardSnapshot { registrations: pairs, count: Some(count) }
    }

    fn request(token: &str) -> LoadRequest {
        LoadRequest { token: token.to_string(), endpoint: DashboardEndpoint::Attendee }
    }

    /// Replays canned results and records every request it sees
    #[derive(Default)]
    struct ScriptedSource {
        results: RefCell<VecDeque<Result<DashboardSnapshot, ApiError>>>,
        seen: RefCell<Vec<LoadRequest>>,
    }

    impl ScriptedSource {
        fn with(results: Vec<Result<DashboardSnapshot, ApiError>>) -> Self {
            Self { results: RefCell::new(results.into()), seen: RefCell::default() }
        }
    }

    #[async_trait(?Send)]
    impl DashboardSource for ScriptedSource {
        async fn fetch_dashboard(&self, request: &LoadRequest) -> Result<DashboardSnapshot, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            self.results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
        }
    }

    /// Holds each request open until the test sends its result
    #[derive(Default)]
    struct GatedSource {
        gates: RefCell<VecDeque<oneshot::Receiver<Result<DashboardSnapshot, ApiError>>>>,
    }

    #[async_trait(?Send)]
    impl DashboardSource for GatedSource {
        async fn fetch_dashboard(&self, _request: &LoadRequest) -> Result<DashboardSnapshot, ApiError> {
            let gate = self.gates.borrow_mut().pop_front().expect("no gate queued");
            gate.await.unwrap_or_else(|_| Err(ApiError::Network("gate dropped".into())))
        }
    }

    #[tokio::test]
    async fn test_no_token_issues_no_request() {
        let state = RefCell::new(DashboardState::default());
        let source = ScriptedSource::default();

        let outcome = refresh_dashboard(&state, &source, None).await;

        assert_eq!(outcome, LoadOutcome::Skipped);
        assert!(source.seen.borrow().is_empty());
        let state = state.borrow();
        assert_eq!(state.stats(), DashboardStats::default());
        assert!(state.is_empty());
        assert!(state.registrations().is_empty());
    }

    #[tokio::test]
    async fn test_success_replaces_snapshot() {
        let state = RefCell::new(DashboardState::default());
        let source = ScriptedSource::with(vec![
            Ok(snapshot(vec![pair("e1", "Meetup", None), pair("e2", "Talk", None)])),
            Ok(snapshot(vec![pair("e3", "Hackathon", Some("2024-05-01T10:00:00"))])),
        ]);

        assert_eq!(refresh_dashboard(&state, &source, Some(request("t"))).await, LoadOutcome::Applied);
        assert_eq!(state.borrow().stats().registered, 2);

        assert_eq!(refresh_dashboard(&state, &source, Some(request("t"))).await, LoadOutcome::Applied);
        let state = state.borrow();
        assert_eq!(state.registrations().len(), 1);
        assert_eq!(state.registrations()[0].event.title, "Hackathon");
        assert_eq!(state.status(), &LoadStatus::Ready);
        assert_eq!(source.seen.borrow()[0], request("t"));
    }

    #[tokio::test]
    async fn test_empty_response_shows_empty_state() {
        let state = RefCell::new(DashboardState::default());
        let source = ScriptedSource::with(vec![Ok(DashboardSnapshot { registrations: vec![], count: Some(0) })]);

        refresh_dashboard(&state, &source, Some(request("t"))).await;

        let state = state.borrow();
        assert!(state.snapshot().is_some());
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_snapshot() {
        let state = RefCell::new(DashboardState::default());
        let first = snapshot(vec![pair("e1", "Meetup", None)]);
        let source = ScriptedSource::with(vec![
            Ok(first.clone()),
            Err(ApiError::status(500, "Internal Server Error")),
        ]);

        refresh_dashboard(&state, &source, Some(request("t"))).await;
        let outcome = refresh_dashboard(&state, &source, Some(request("t"))).await;

        assert_eq!(outcome, LoadOutcome::Retained(ApiError::status(500, "Internal Server Error")));
        let state = state.borrow();
        assert_eq!(state.snapshot(), Some(&first));
        assert_eq!(state.error(), Some(&ApiError::status(500, "Internal Server Error")));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_failure_without_prior_snapshot_stays_empty() {
        let state = RefCell::new(DashboardState::default());
        let source = ScriptedSource::with(vec![Err(ApiError::Network("offline".into()))]);

        refresh_dashboard(&state, &source, Some(request("t"))).await;

        let state = state.borrow();
        assert!(state.snapshot().is_none());
        assert_eq!(state.stats().registered, 0);
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_slow_older_response_is_dropped() {
        let state = RefCell::new(DashboardState::default());
        let source = GatedSource::default();
        let (old_tx, old_rx) = oneshot::channel();
        let (new_tx, new_rx) = oneshot::channel();
        source.gates.borrow_mut().extend([old_rx, new_rx]);

        let mut old_load = Box::pin(refresh_dashboard(&state, &source, Some(request("old"))));
        assert!(futures::poll!(old_load.as_mut()).is_pending());
        assert!(state.borrow().is_loading());

        let mut new_load = Box::pin(refresh_dashboard(&state, &source, Some(request("new"))));
        assert!(futures::poll!(new_load.as_mut()).is_pending());

        new_tx.send(Ok(snapshot(vec![pair("e2", "Newer", None)]))).unwrap();
        assert_eq!(new_load.await, LoadOutcome::Applied);

        old_tx.send(Ok(snapshot(vec![pair("e1", "Older", None)]))).unwrap();
        assert_eq!(old_load.await, LoadOutcome::Stale);

        assert_eq!(state.borrow().registrations()[0].event.title, "Newer");
    }

    #[tokio::test]
    async fn test_losing_token_invalidates_in_flight_load() {
        let state = RefCell::new(DashboardState::default());
        let source = GatedSource::default();
        let (tx, rx) = oneshot::channel();
        source.gates.borrow_mut().push_back(rx);

        let mut load = Box::pin(refresh_dashboard(&state, &source, Some(request("t"))));
        assert!(futures::poll!(load.as_mut()).is_pending());

        assert_eq!(refresh_dashboard(&state, &source, None).await, LoadOutcome::Skipped);

        tx.send(Ok(snapshot(vec![pair("e1", "Meetup", None)]))).unwrap();
        assert_eq!(load.await, LoadOutcome::Stale);
        assert!(state.borrow().snapshot().is_none());
        assert_eq!(state.borrow().status(), &LoadStatus::Idle);
    }

    #[tokio::test]
    async fn test_signing_out_clears_previous_registrations() {
        let state = RefCell::new(DashboardState::default());
        let source =
            ScriptedSource::with(vec![Ok(snapshot(vec![pair("e1", "Previous user's event", None)]))]);

        assert_eq!(
            refresh_dashboard(&state, &source, Some(request("t"))).await,
            LoadOutcome::Applied
        );
        assert!(!state.borrow().is_empty());

        assert_eq!(refresh_dashboard(&state, &source, None).await, LoadOutcome::Skipped);
        let state = state.borrow();
        assert!(state.is_empty());
        assert!(state.registrations().is_empty());
        assert!(state.snapshot().is_none());
        assert_eq!(source.seen.borrow().len(), 1);
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let mut state = DashboardState::default();
        let ticket = state.begin(Some(request("t"))).unwrap();
        let snap = DashboardSnapshot { registrations: vec![pair("e1", "Meetup", None)], count: None };

        assert_eq!(state.complete(&ticket, Ok(snap)), LoadOutcome::Applied);
        assert_eq!(state.stats(), DashboardStats { registered: 0, upcoming: 0, attended: 0 });
    }

    #[test]
    fn test_snapshot_from_response_without_registrations() {
        let snap = DashboardSnapshot::from(DashboardResponse { registrations: None, count: Some(3) });
        assert!(snap.registrations.is_empty());
        assert_eq!(snap.count, Some(3));
    }
}
