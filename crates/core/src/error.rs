//! Domain-level error type shared across the workspace.

/// Errors produced by domain validation and guard checks.
///
/// All wizard gating logic fails closed (returns `false` or an empty
/// result) rather than erroring; `CoreError` is reserved for operations
/// that must explain *why* they refused, so the message is always safe to
/// surface to the user.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated; the message names the offending fields.
    #[error("{0}")]
    Validation(String),

    /// The operation requires an authenticated user.
    #[error("{0}")]
    Unauthorized(String),

    /// An invariant the caller cannot recover from was broken.
    #[error("{0}")]
    Internal(String),
}
