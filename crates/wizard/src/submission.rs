//! Submission payload and the hosted-backend collaborator traits.
//!
//! The wizard never talks to the backend directly; it builds an
//! [`AdSubmission`] and hands it to whatever implements
//! [`SubmissionService`]. Errors from the collaborator are opaque: the
//! wizard only distinguishes success from failure and leaves retry to
//! the user.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use vitrine_core::catalog::AdStatus;
use vitrine_core::draft::AdDraft;
use vitrine_core::error::CoreError;
use vitrine_core::masking;
use vitrine_core::types::{AdId, Timestamp, UserId};

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The payload handed to the submission collaborator: the full draft plus
/// the authenticated owner and the unconditional initial status.
#[derive(Debug, Clone, Serialize)]
pub struct AdSubmission {
    pub user_id: UserId,
    pub status: AdStatus,
    #[serde(flatten)]
    pub draft: AdDraft,
}

impl AdSubmission {
    /// Build a submission payload. Every submission (create or resubmitted
    /// edit) enters moderation as `pending_approval`.
    pub fn new(draft: AdDraft, user_id: UserId) -> Self {
        Self {
            user_id,
            status: AdStatus::PendingApproval,
            draft,
        }
    }

    /// Check the payload's field constraints: length caps, a non-negative
    /// price, and fully masked contact formats where a value is present.
    ///
    /// Required-ness is not checked here; that is the step gates' job.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.draft
            .validate()
            .map_err(|errors| CoreError::Validation(format!("Invalid ad fields: {errors}")))?;

        if !self.draft.whatsapp.is_empty() && !masking::is_complete_whatsapp(&self.draft.whatsapp)
        {
            return Err(CoreError::Validation(format!(
                "WhatsApp number '{}' is incomplete. Expected format: (NN) NNNNN-NNNN",
                self.draft.whatsapp
            )));
        }
        if !self.draft.postal_code.is_empty()
            && !masking::is_complete_postal_code(&self.draft.postal_code)
        {
            return Err(CoreError::Validation(format!(
                "Postal code '{}' is incomplete. Expected format: NNNNN-NNN",
                self.draft.postal_code
            )));
        }

        Ok(())
    }
}

/// The stored record the collaborator returns on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAd {
    pub id: AdId,
    pub user_id: UserId,
    pub status: AdStatus,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Collaborator errors
// ---------------------------------------------------------------------------

/// An opaque failure reported by a backend collaborator.
///
/// The wizard does not interpret the message beyond displaying it; there
/// is no retry or classification at this layer.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Submission failed: {message}")]
pub struct SubmissionError {
    pub message: String,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// The hosted backend's ad persistence surface.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Create a new ad from a submission payload.
    async fn create_ad(&self, submission: &AdSubmission) -> Result<StoredAd, SubmissionError>;

    /// Replace an existing ad's fields from a submission payload.
    async fn update_ad(
        &self,
        ad_id: AdId,
        submission: &AdSubmission,
    ) -> Result<StoredAd, SubmissionError>;
}

/// Supplies the authenticated user, if any. Submission is blocked
/// entirely when no user is signed in.
pub trait IdentityContext: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
