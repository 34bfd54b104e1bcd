//! Wizard-layer error type.

use vitrine_core::error::CoreError;

use crate::submission::SubmissionError;

/// Errors surfaced by wizard session operations.
///
/// Wraps [`CoreError`] for domain guard failures and adds the outcomes
/// only this layer can produce: a rejected remote submission and the
/// re-entrancy guard on the submit boundary.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// A domain-level guard or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The submission collaborator reported a failure. The draft and the
    /// current step are preserved; the user may retry.
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// A submission is already awaiting the collaborator.
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

/// Convenience alias for wizard operation results.
pub type WizardResult<T> = Result<T, WizardError>;
