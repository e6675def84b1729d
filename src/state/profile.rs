//! Profile Form State
//!
//! Editable draft of the signed-in user's details and the submission
//! lifecycle around a pluggable saver.

use std::time::Duration;

use async_trait::async_trait;

use super::session::User;
use super::StateCell;
use crate::config::SIMULATED_SAVE_DELAY;
use crate::error::{SaveError, SubmitError};

/// Fields the user may edit. Email is deliberately absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Phone,
    Address,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [Self::FirstName, Self::LastName, Self::Phone, Self::Address];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName)
    }
}

/// Local copy of the profile being edited
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    /// Shown but never edited
    pub email: String,
}

impl ProfileDraft {
    pub fn from_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            address: user.address.clone().unwrap_or_default(),
            email: user.email.clone(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Phone => &self.phone,
            ProfileField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Required fields that are blank
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(SubmitError),
}

/// Draft plus where its submission stands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    draft: ProfileDraft,
    status: SubmitStatus,
}

impl ProfileForm {
    pub fn from_user(user: Option<&User>) -> Self {
        Self { draft: ProfileDraft::from_user(user), status: SubmitStatus::Idle }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_saving(&self) -> bool {
        self.status == SubmitStatus::Saving
    }

    #[cfg(test)]
    pub fn succeeded(&self) -> bool {
        self.status == SubmitStatus::Saved
    }

    #[cfg(test)]
    pub fn failure(&self) -> Option<&SubmitError> {
        match &self.status {
            SubmitStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate and enter the saving state, handing back the draft to save
    pub fn begin_submit(&mut self) -> Result<ProfileDraft, SubmitError> {
        if self.is_saving() {
            return Err(SubmitError::InFlight);
        }

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let err = SubmitError::Validation { fields: missing };
            self.status = SubmitStatus::Failed(err.clone());
            return Err(err);
        }

        self.status = SubmitStatus::Saving;
        Ok(self.draft.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), SaveError>) -> Result<(), SubmitError> {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Saved;
                Ok(())
            }
            Err(e) => {
                let err = SubmitError::from(e);
                self.status = SubmitStatus::Failed(err.clone());
                Err(err)
            }
        }
    }
}

/// Persists a profile draft
#[async_trait(?Send)]
pub trait ProfileSaver {
    async fn save(&self, draft: &ProfileDraft) -> Result<(), SaveError>;
}

/// Stand-in for the profile update endpoint: waits, then reports success
/// without sending anything.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSaver {
    delay: Duration,
}

impl SimulatedSaver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSaver {
    fn default() -> Self {
        Self::new(SIMULATED_SAVE_DELAY)
    }
}

#[async_trait(?Send)]
impl ProfileSaver for SimulatedSaver {
    async fn save(&self, _draft: &ProfileDraft) -> Result<(), SaveError> {
        gloo_timers::future::sleep(self.delay).await;
        Ok(())
    }
}

/// Submit the form held in `form` through `saver`.
///
/// Only one submission runs at a time; a second call while saving returns
/// `SubmitError::InFlight` without reaching the saver.
pub async fn submit_profile<C, S>(form: &C, saver: &S) -> Result<(), SubmitError>
where
    C: StateCell<ProfileForm> + ?Sized,
    S: ProfileSaver + ?Sized,
{
    let draft = form
        .modify(ProfileForm::begin_submit)
        .ok_or(SubmitError::Detached)??;

    let result = saver.save(&draft).await;

    let outcome = form
        .modify(|f| f.finish_submit(result))
        .ok_or(SubmitError::Detached)?;

    match &outcome {
        Ok(()) => tracing::info!("profile saved"),
        Err(e) => tracing::warn!(error = %e, "profile save failed"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;
    use futures::channel::oneshot;
    use std::cell::{Cell, RefCell};

    fn user() -> User {
        User {
            id: "u1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+44 20 7946 0000".to_string()),
            address: None,
            role: Role::Attendee,
            created_at: Some("2023-01-05T12:00:00".to_string()),
        }
    }

    /// Resolves each save with whatever the test sends
    struct GatedSaver {
        gate: RefCell<Option<oneshot::Receiver<Result<(), SaveError>>>>,
        calls: Cell<usize>,
    }

    impl GatedSaver {
        fn new(gate: oneshot::Receiver<Result<(), SaveError>>) -> Self {
            Self { gate: RefCell::new(Some(gate)), calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl ProfileSaver for GatedSaver {
        async fn save(&self, _draft: &ProfileDraft) -> Result<(), SaveError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take().expect("saver called twice");
            gate.await.unwrap_or_else(|_| Err(SaveError::Network("gate dropped".into())))
        }
    }

    /// Records the draft it was given and succeeds immediately
    #[derive(Default)]
    struct RecordingSaver {
        saved: RefCell<Vec<ProfileDraft>>,
    }

    #[async_trait(?Send)]
    impl ProfileSaver for RecordingSaver {
        async fn save(&self, draft: &ProfileDraft) -> Result<(), SaveError> {
            self.saved.borrow_mut().push(draft.clone());
            Ok(())
        }
    }

    #[test]
    fn test_draft_seeded_from_user() {
        let form = ProfileForm::from_user(Some(&user()));
        let draft = form.draft();
        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.phone, "+44 20 7946 0000");
        assert_eq!(draft.address, "");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(form.status(), &SubmitStatus::Idle);

        assert_eq!(ProfileForm::from_user(None).draft(), &ProfileDraft::default());
    }

    #[test]
    fn test_edit_touches_only_one_field() {
        let mut form = ProfileForm::from_user(Some(&user()));
        let before = form.draft().clone();

        form.edit(ProfileField::Phone, "555-0199");

        let after = form.draft();
        assert_eq!(after.phone, "555-0199");
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.last_name, before.last_name);
        assert_eq!(after.address, before.address);
        assert_eq!(after.email, before.email);
    }

    #[tokio::test]
    async fn test_submit_disables_until_save_resolves() {
        let form = RefCell::new(ProfileForm::from_user(Some(&user())));
        let (tx, rx) = oneshot::channel();
        let saver = GatedSaver::new(rx);

        let mut submit = Box::pin(submit_profile(&form, &saver));
        assert!(futures::poll!(submit.as_mut()).is_pending());
        assert!(form.borrow().is_saving());
        assert!(!form.borrow().succeeded());

        tx.send(Ok(())).unwrap();
        assert_eq!(submit.await, Ok(()));

        let form = form.borrow();
        assert!(!form.is_saving());
        assert!(form.succeeded());
        assert_eq!(saver.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_second_submit_while_saving_is_rejected() {
        let form = RefCell::new(ProfileForm::from_user(Some(&user())));
        let (tx, rx) = oneshot::channel();
        let saver = GatedSaver::new(rx);

        let mut first = Box::pin(submit_profile(&form, &saver));
        assert!(futures::poll!(first.as_mut()).is_pending());

        assert_eq!(submit_profile(&form, &saver).await, Err(SubmitError::InFlight));
        assert!(form.borrow().is_saving());
        assert_eq!(saver.calls.get(), 1);

        tx.send(Ok(())).unwrap();
        assert_eq!(first.await, Ok(()));
    }

    #[tokio::test]
    async fn test_blank_names_fail_validation() {
        let form = RefCell::new(ProfileForm::from_user(Some(&user())));
        form.borrow_mut().edit(ProfileField::FirstName, "   ");
        form.borrow_mut().edit(ProfileField::LastName, "");
        let saver = RecordingSaver::default();

        let result = submit_profile(&form, &saver).await;

        let expected = SubmitError::Validation {
            fields: vec![ProfileField::FirstName, ProfileField::LastName],
        };
        assert_eq!(result, Err(expected.clone()));
        assert_eq!(form.borrow().failure(), Some(&expected));
        assert!(saver.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_reports_failure() {
        let form = RefCell::new(ProfileForm::from_user(Some(&user())));
        let (tx, rx) = oneshot::channel();
        let saver = GatedSaver::new(rx);
        tx.send(Err(SaveError::Rejected("phone number invalid".into()))).unwrap();

        let result = submit_profile(&form, &saver).await;

        let expected = SubmitError::Save(SaveError::Rejected("phone number invalid".into()));
        assert_eq!(result, Err(expected.clone()));
        let form = form.borrow();
        assert!(!form.is_saving());
        assert!(!form.succeeded());
        assert_eq!(form.failure(), Some(&expected));
    }

    #[tokio::test]
    async fn test_saver_receives_whole_draft() {
        let form = RefCell::new(ProfileForm::from_user(Some(&user())));
        form.borrow_mut().edit(ProfileField::Address, "12 Analytical Row");
        let saver = RecordingSaver::default();

        submit_profile(&form, &saver).await.unwrap();

        let saved = saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].address, "12 Analytical Row");
        assert_eq!(saved[0].first_name, "Ada");
    }

    #[tokio::test]
    async fn test_resubmit_after_success_clears_indicator() {
        let form = RefCell::new(ProfileForm::from_user(Some(&user())));
        let saver = RecordingSaver::default();
        submit_profile(&form, &saver).await.unwrap();
        assert!(form.borrow().succeeded());

        let (_tx, rx) = oneshot::channel();
        let gated = GatedSaver::new(rx);
        let mut again = Box::pin(submit_profile(&form, &gated));
        assert!(futures::poll!(again.as_mut()).is_pending());
        assert!(!form.borrow().succeeded());
        assert!(form.borrow().is_saving());
    }
}
