//! The wizard session: step navigation, gating, and submission.
//!
//! A session owns a [`DraftStore`] and a 1-based current step. Forward
//! navigation is gated on the current step's rules; backward navigation
//! is always permitted. Submission sweeps every step, requires an
//! authenticated user, and hands the payload to the submission
//! collaborator exactly once per attempt.

use serde::{Deserialize, Serialize};

use vitrine_core::availability::{self, Weekday};
use vitrine_core::completion;
use vitrine_core::draft::{AdDraft, DraftPatch, PendingUpload};
use vitrine_core::error::CoreError;
use vitrine_core::steps::{self, WizardStep, MAX_STEP, MIN_STEP};
use vitrine_core::types::AdId;

use crate::error::{WizardError, WizardResult};
use crate::media::{self, MediaUploadService};
use crate::store::DraftStore;
use crate::submission::{AdSubmission, IdentityContext, StoredAd, SubmissionService};

// ---------------------------------------------------------------------------
// Session status
// ---------------------------------------------------------------------------

/// Valid session status strings.
pub const SESSION_IN_PROGRESS: &str = "in_progress";
pub const SESSION_COMPLETED: &str = "completed";
pub const SESSION_ABANDONED: &str = "abandoned";

/// Lifecycle of a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl SessionStatus {
    /// Parse a status from its stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            SESSION_IN_PROGRESS => Ok(Self::InProgress),
            SESSION_COMPLETED => Ok(Self::Completed),
            SESSION_ABANDONED => Ok(Self::Abandoned),
            _ => Err(CoreError::Validation(format!(
                "Invalid session status '{s}'. Must be one of: \
                 {SESSION_IN_PROGRESS}, {SESSION_COMPLETED}, {SESSION_ABANDONED}"
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => SESSION_IN_PROGRESS,
            Self::Completed => SESSION_COMPLETED,
            Self::Abandoned => SESSION_ABANDONED,
        }
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Whether the session creates a new ad or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit { ad_id: AdId },
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Which media slot an upload resolves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Image,
    Video,
}

impl MediaSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// The ad creation wizard's session state.
#[derive(Debug)]
pub struct WizardSession {
    store: DraftStore,
    current_step: u8,
    status: SessionStatus,
    mode: WizardMode,
    submitting: bool,
}

impl WizardSession {
    /// Start a session over an empty draft.
    pub fn new() -> Self {
        Self {
            store: DraftStore::new(),
            current_step: MIN_STEP,
            status: SessionStatus::InProgress,
            mode: WizardMode::Create,
            submitting: false,
        }
    }

    /// Start a session seeded from an existing ad's fields (edit flow).
    pub fn edit(ad_id: AdId, existing: AdDraft) -> Self {
        Self {
            store: DraftStore::from_draft(existing),
            current_step: MIN_STEP,
            status: SessionStatus::InProgress,
            mode: WizardMode::Edit { ad_id },
            submitting: false,
        }
    }

    // -- read access ---------------------------------------------------------

    pub fn draft(&self) -> &AdDraft {
        self.store.draft()
    }

    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// The current step as its enum value. Infallible: the session never
    /// leaves the valid range.
    pub fn step(&self) -> WizardStep {
        WizardStep::from_number(self.current_step).expect("current step is always in range")
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    /// Whether a submission is awaiting the collaborator. UI should
    /// disable the submit trigger while this is set.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the current step's gate would let "next" through.
    pub fn can_advance(&self) -> bool {
        steps::is_step_valid(self.current_step, self.store.draft())
    }

    /// Required fields the current step is still missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        steps::missing_step_fields(self.step(), self.store.draft())
    }

    /// Progress over the required-for-submission checklist, 0-100.
    pub fn completion(&self) -> u8 {
        completion::completion_percentage(self.store.draft())
    }

    /// Days whose hour entries survived after the day was deselected.
    ///
    /// Deselecting a day does not prune its hours; this surfaces the
    /// leftovers so the UI can offer a cleanup.
    pub fn stale_availability(&self) -> Vec<Weekday> {
        let draft = self.store.draft();
        availability::stale_hour_days(&draft.availability_days, &draft.availability_hours)
    }

    // -- mutation ------------------------------------------------------------

    /// Shallow-merge a patch into the draft.
    pub fn patch(&mut self, patch: DraftPatch) -> WizardResult<()> {
        self.ensure_in_progress("update")?;
        self.store.patch(patch);

        tracing::debug!(
            step = self.current_step,
            revision = self.store.revision(),
            completion = self.completion(),
            "Draft patched"
        );
        Ok(())
    }

    /// Advance to the next step.
    ///
    /// Fails (leaving the step unchanged) if the current step's required
    /// fields are incomplete; the error names the missing fields.
    pub fn advance(&mut self) -> WizardResult<u8> {
        self.ensure_in_progress("advance")?;

        let current = self.current_step;
        let next = current + 1;
        steps::validate_step_transition(current, next)?;
        steps::validate_step(current, self.store.draft())?;

        self.current_step = next;
        tracing::info!(from_step = current, to_step = next, "Wizard advanced");
        Ok(next)
    }

    /// Go back one step. Always permitted regardless of validity; a
    /// session already on the first step stays there.
    pub fn back(&mut self) -> WizardResult<u8> {
        self.ensure_in_progress("navigate")?;

        if self.current_step <= MIN_STEP {
            return Ok(self.current_step);
        }

        let current = self.current_step;
        let prev = current - 1;
        steps::validate_step_transition(current, prev)?;

        self.current_step = prev;
        tracing::info!(from_step = current, to_step = prev, "Wizard went back");
        Ok(prev)
    }

    /// Discard the session without submitting.
    pub fn abandon(&mut self) -> WizardResult<()> {
        if self.status != SessionStatus::InProgress {
            return Err(CoreError::Validation(format!(
                "Cannot abandon session with status '{}'. \
                 Only '{SESSION_IN_PROGRESS}' sessions can be abandoned.",
                self.status.as_str()
            ))
            .into());
        }

        self.status = SessionStatus::Abandoned;
        tracing::info!(step = self.current_step, "Wizard session abandoned");
        Ok(())
    }

    /// Upload a pending file and patch the resolved URL into the draft.
    pub async fn attach_media(
        &mut self,
        slot: MediaSlot,
        file: PendingUpload,
        uploader: &dyn MediaUploadService,
    ) -> WizardResult<String> {
        self.ensure_in_progress("upload media for")?;

        let constraints = match slot {
            MediaSlot::Image => media::image_constraints(),
            MediaSlot::Video => media::video_constraints(),
        };
        media::validate_upload(&file, &constraints)?;

        let url = uploader.upload(&file, &constraints).await?;

        let patch = match slot {
            MediaSlot::Image => DraftPatch {
                image_url: Some(Some(url.clone())),
                ..Default::default()
            },
            MediaSlot::Video => DraftPatch {
                video_url: Some(Some(url.clone())),
                ..Default::default()
            },
        };
        self.store.patch(patch);

        tracing::info!(slot = slot.as_str(), url = %url, "Media attached");
        Ok(url)
    }

    /// Submit the draft to the backend.
    ///
    /// Guards, in order: the session is in progress, no submission is
    /// already in flight, a user is signed in, the wizard is on the final
    /// step, every step's gate passes, and the payload's field
    /// constraints hold. The collaborator is then awaited exactly once.
    /// Success completes the session; failure preserves the draft and the
    /// current step so the user can retry.
    pub async fn submit(
        &mut self,
        identity: &dyn IdentityContext,
        service: &dyn SubmissionService,
    ) -> WizardResult<StoredAd> {
        self.ensure_in_progress("submit")?;

        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }

        let user_id = identity.current_user().ok_or_else(|| {
            CoreError::Unauthorized("Sign in before publishing an ad".to_string())
        })?;

        if self.current_step != MAX_STEP {
            return Err(CoreError::Validation(format!(
                "Submission is only available on step {MAX_STEP}, currently on step {}",
                self.current_step
            ))
            .into());
        }

        if let Some(step) = steps::first_invalid_step(self.store.draft()) {
            steps::validate_step(step, self.store.draft())?;
        }

        let payload = AdSubmission::new(self.store.snapshot(), user_id);
        payload.validate()?;

        self.submitting = true;
        let result = match self.mode {
            WizardMode::Create => service.create_ad(&payload).await,
            WizardMode::Edit { ad_id } => service.update_ad(ad_id, &payload).await,
        };
        self.submitting = false;

        match result {
            Ok(stored) => {
                self.status = SessionStatus::Completed;
                tracing::info!(
                    ad_id = %stored.id,
                    user_id = %user_id,
                    status = stored.status.as_str(),
                    "Ad submitted"
                );
                Ok(stored)
            }
            Err(err) => {
                tracing::warn!(
                    step = self.current_step,
                    error = %err,
                    "Submission failed; draft preserved for retry"
                );
                Err(err.into())
            }
        }
    }

    // -- helpers -------------------------------------------------------------

    fn ensure_in_progress(&self, action: &str) -> WizardResult<()> {
        if self.status != SessionStatus::InProgress {
            return Err(CoreError::Validation(format!(
                "Cannot {action} a session that is not in progress"
            ))
            .into());
        }
        Ok(())
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn identity_patch() -> DraftPatch {
        DraftPatch {
            presentation_name: Some("Ana".to_string()),
            age: Some(Some(25)),
            gender: Some("feminino".to_string()),
            title: Some("Relaxing massage".to_string()),
            ..Default::default()
        }
    }

    // -- SessionStatus --

    #[test]
    fn status_round_trip() {
        for status in [
            SessionStatus::InProgress,
            SessionStatus::Completed,
            SessionStatus::Abandoned,
        ] {
            assert_eq!(
                SessionStatus::from_str_value(status.as_str()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn status_invalid_rejected() {
        assert!(SessionStatus::from_str_value("paused").is_err());
        assert!(SessionStatus::from_str_value("").is_err());
    }

    // -- construction --

    #[test]
    fn new_session_starts_at_step_one_in_progress() {
        let session = WizardSession::new();
        assert_eq!(session.current_step(), MIN_STEP);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.mode(), WizardMode::Create);
        assert!(!session.is_submitting());
        assert_eq!(session.completion(), 0);
    }

    #[test]
    fn edit_session_is_seeded_with_existing_fields() {
        let ad_id = uuid::Uuid::new_v4();
        let existing = AdDraft {
            title: "Existing".to_string(),
            price: 120.0,
            ..Default::default()
        };
        let session = WizardSession::edit(ad_id, existing);

        assert_eq!(session.mode(), WizardMode::Edit { ad_id });
        assert_eq!(session.draft().title, "Existing");
        assert_eq!(session.current_step(), MIN_STEP);
    }

    // -- navigation --

    #[test]
    fn advance_blocked_while_step_incomplete() {
        let mut session = WizardSession::new();
        assert!(!session.can_advance());

        let err = session.advance().unwrap_err();
        assert_matches!(err, WizardError::Core(CoreError::Validation(_)));
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn advance_moves_once_step_is_complete() {
        let mut session = WizardSession::new();
        session.patch(identity_patch()).unwrap();

        assert!(session.can_advance());
        assert_eq!(session.advance().unwrap(), 2);
        assert_eq!(session.step(), WizardStep::Services);
    }

    #[test]
    fn advance_error_names_missing_fields() {
        let mut session = WizardSession::new();
        let err = session.advance().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("presentation_name"), "got: {message}");
    }

    #[test]
    fn back_is_always_permitted_and_floors_at_one() {
        let mut session = WizardSession::new();
        // On step 1, back stays on step 1.
        assert_eq!(session.back().unwrap(), 1);

        session.patch(identity_patch()).unwrap();
        session.advance().unwrap();
        assert_eq!(session.current_step(), 2);

        // Step 2 is incomplete, but back is not gated.
        assert!(!session.can_advance());
        assert_eq!(session.back().unwrap(), 1);
    }

    #[test]
    fn missing_fields_reports_current_step() {
        let session = WizardSession::new();
        assert_eq!(
            session.missing_fields(),
            vec!["presentation_name", "age", "gender", "title"]
        );
    }

    // -- lifecycle guards --

    #[test]
    fn abandoned_session_rejects_mutation() {
        let mut session = WizardSession::new();
        session.abandon().unwrap();
        assert_eq!(session.status(), SessionStatus::Abandoned);

        assert_matches!(
            session.patch(identity_patch()),
            Err(WizardError::Core(CoreError::Validation(_)))
        );
        assert_matches!(
            session.advance(),
            Err(WizardError::Core(CoreError::Validation(_)))
        );
        assert_matches!(
            session.back(),
            Err(WizardError::Core(CoreError::Validation(_)))
        );
    }

    #[test]
    fn abandon_twice_is_rejected() {
        let mut session = WizardSession::new();
        session.abandon().unwrap();
        let err = session.abandon().unwrap_err();
        assert!(err.to_string().contains("abandoned"));
    }

    #[test]
    fn draft_survives_abandon_for_inspection() {
        let mut session = WizardSession::new();
        session.patch(identity_patch()).unwrap();
        session.abandon().unwrap();
        assert_eq!(session.draft().presentation_name, "Ana");
    }

    // -- availability diagnostics --

    #[test]
    fn deselecting_a_day_leaves_stale_hours_behind() {
        use chrono::NaiveTime;
        use vitrine_core::availability::{HourRange, HoursByDay};

        let mut session = WizardSession::new();
        let mut hours = HoursByDay::new();
        hours.insert(
            Weekday::Monday,
            HourRange {
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            },
        );
        session
            .patch(DraftPatch {
                availability_days: Some(vec![Weekday::Monday]),
                availability_hours: Some(hours),
                ..Default::default()
            })
            .unwrap();
        assert!(session.stale_availability().is_empty());

        // Deselect Monday without touching the hours map.
        session
            .patch(DraftPatch {
                availability_days: Some(vec![]),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(session.stale_availability(), vec![Weekday::Monday]);
        assert!(session
            .draft()
            .availability_hours
            .contains_key(&Weekday::Monday));
    }
}
