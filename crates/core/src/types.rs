/// Record identifiers issued by the hosted backend are UUIDs.
pub type AdId = uuid::Uuid;

/// Authenticated user identifier, also backend-issued.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
