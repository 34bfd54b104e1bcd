//! Media upload collaborator surface and client-side pre-checks.
//!
//! Files are uploaded by an external storage service; the wizard only
//! ever stores the resolved public URL. Size and content-type limits are
//! checked locally before the collaborator is invoked so an oversized
//! file never leaves the client.

use async_trait::async_trait;

use vitrine_core::draft::PendingUpload;
use vitrine_core::error::CoreError;

use crate::submission::SubmissionError;

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Maximum image upload size in megabytes.
pub const MAX_IMAGE_SIZE_MB: u64 = 5;

/// Maximum video upload size in megabytes.
pub const MAX_VIDEO_SIZE_MB: u64 = 50;

/// Limits handed to the upload collaborator alongside the file.
#[derive(Debug, Clone)]
pub struct UploadConstraints {
    pub max_size_mb: u64,
    pub allowed_types: Vec<String>,
}

/// Constraints for ad photos.
pub fn image_constraints() -> UploadConstraints {
    UploadConstraints {
        max_size_mb: MAX_IMAGE_SIZE_MB,
        allowed_types: vec![
            "image/jpeg".to_string(),
            "image/png".to_string(),
            "image/webp".to_string(),
        ],
    }
}

/// Constraints for ad videos.
pub fn video_constraints() -> UploadConstraints {
    UploadConstraints {
        max_size_mb: MAX_VIDEO_SIZE_MB,
        allowed_types: vec!["video/mp4".to_string(), "video/webm".to_string()],
    }
}

/// Check a pending file against upload constraints.
pub fn validate_upload(file: &PendingUpload, constraints: &UploadConstraints) -> Result<(), CoreError> {
    let max_bytes = constraints.max_size_mb * 1024 * 1024;
    if file.size_bytes > max_bytes {
        return Err(CoreError::Validation(format!(
            "File '{}' is {} bytes; the limit is {} MB",
            file.file_name, file.size_bytes, constraints.max_size_mb
        )));
    }
    if !constraints
        .allowed_types
        .iter()
        .any(|t| t == &file.content_type)
    {
        return Err(CoreError::Validation(format!(
            "File type '{}' is not allowed. Must be one of: {}",
            file.content_type,
            constraints.allowed_types.join(", ")
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Collaborator trait
// ---------------------------------------------------------------------------

/// The hosted backend's file storage surface. Returns the public URL of
/// the stored file on success.
#[async_trait]
pub trait MediaUploadService: Send + Sync {
    async fn upload(
        &self,
        file: &PendingUpload,
        constraints: &UploadConstraints,
    ) -> Result<String, SubmissionError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
