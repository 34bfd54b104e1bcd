//! The in-progress ad draft and its patch type.
//!
//! An [`AdDraft`] exists only in memory while the wizard is open. Every
//! field is independently optional at the storage level; required-ness is
//! enforced by the step rules ([`crate::steps`]) and the submission gate,
//! never by the shape of the draft itself. Mutation happens exclusively
//! through [`AdDraft::apply`], a field-wise shallow merge.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::availability::{HoursByDay, Weekday};
use crate::catalog::{Category, HighlightPackage};

// ---------------------------------------------------------------------------
// Field length limits
// ---------------------------------------------------------------------------

/// Maximum title length.
pub const MAX_TITLE_LENGTH: u64 = 100;

/// Maximum description length.
pub const MAX_DESCRIPTION_LENGTH: u64 = 2000;

/// Maximum highlight phrase length.
pub const MAX_HIGHLIGHT_PHRASE_LENGTH: u64 = 80;

/// Maximum length for the restrictions and personal rules free-text fields.
pub const MAX_RULES_LENGTH: u64 = 1000;

// ---------------------------------------------------------------------------
// Pending media
// ---------------------------------------------------------------------------

/// A file the user selected but that has not been uploaded yet.
///
/// Only descriptive metadata is held here; the bytes stay with the UI
/// layer until the upload collaborator is invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// The in-progress ad record.
///
/// Strings default to empty (unfilled), collections to empty, booleans to
/// `false`, and nullable scalars to `None`. The `validator` constraints
/// are checked once at the submission gate, not on every patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AdDraft {
    // Identity / presentation
    pub presentation_name: String,
    pub age: Option<u32>,
    pub gender: String,
    #[validate(length(max = 100))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(max = 80))]
    pub highlight_phrase: String,

    // Service classification
    pub category: Option<Category>,
    pub services_offered: Vec<String>,
    pub target_audience: Vec<String>,
    pub service_locations: Vec<String>,

    // Availability
    pub availability_days: Vec<Weekday>,
    pub availability_hours: HoursByDay,
    pub appointment_only: bool,

    // Location
    pub location: String,
    pub neighborhood: String,
    pub postal_code: String,
    pub accepts_travel: bool,

    // Commercial
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub hourly_rate: Option<f64>,
    pub packages: serde_json::Map<String, serde_json::Value>,
    pub payment_methods: Vec<String>,
    pub highlight_package: HighlightPackage,

    // Media. The URL fields are populated after upload; the pending
    // handles never leave the client.
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(skip)]
    pub photos: Vec<PendingUpload>,
    #[serde(skip)]
    pub videos: Vec<PendingUpload>,

    // Contact
    pub whatsapp: String,
    pub contact_telegram: String,
    pub contact_instagram: String,
    pub contact_email: String,
    pub contact_other: String,

    // Consent / legal
    pub terms_accepted: bool,
    pub age_confirmed: bool,
    pub image_consent: bool,

    // Preferences
    pub accepts_last_minute: bool,
    #[validate(length(max = 1000))]
    pub restrictions: String,
    #[validate(length(max = 1000))]
    pub personal_rules: String,

    // Personal extras
    pub favorite_fragrance: String,
    pub favorite_drink: String,
    pub preferred_gifts: String,
    pub favorite_music: String,
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// A partial update to an [`AdDraft`].
///
/// Every field is optional: `None` leaves the draft field untouched, and
/// `Some` fully replaces it. Nullable scalars are doubly wrapped so a
/// patch can distinguish "leave alone" (`None`) from "clear" (`Some(None)`).
/// Construct with struct-update syntax:
///
/// ```
/// use vitrine_core::draft::DraftPatch;
///
/// let patch = DraftPatch {
///     title: Some("Relaxing massage downtown".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub presentation_name: Option<String>,
    pub age: Option<Option<u32>>,
    pub gender: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub highlight_phrase: Option<String>,

    pub category: Option<Option<Category>>,
    pub services_offered: Option<Vec<String>>,
    pub target_audience: Option<Vec<String>>,
    pub service_locations: Option<Vec<String>>,

    pub availability_days: Option<Vec<Weekday>>,
    pub availability_hours: Option<HoursByDay>,
    pub appointment_only: Option<bool>,

    pub location: Option<String>,
    pub neighborhood: Option<String>,
    pub postal_code: Option<String>,
    pub accepts_travel: Option<bool>,

    pub price: Option<f64>,
    pub hourly_rate: Option<Option<f64>>,
    pub packages: Option<serde_json::Map<String, serde_json::Value>>,
    pub payment_methods: Option<Vec<String>>,
    pub highlight_package: Option<HighlightPackage>,

    pub image_url: Option<Option<String>>,
    pub video_url: Option<Option<String>>,
    pub photos: Option<Vec<PendingUpload>>,
    pub videos: Option<Vec<PendingUpload>>,

    pub whatsapp: Option<String>,
    pub contact_telegram: Option<String>,
    pub contact_instagram: Option<String>,
    pub contact_email: Option<String>,
    pub contact_other: Option<String>,

    pub terms_accepted: Option<bool>,
    pub age_confirmed: Option<bool>,
    pub image_consent: Option<bool>,

    pub accepts_last_minute: Option<bool>,
    pub restrictions: Option<String>,
    pub personal_rules: Option<String>,

    pub favorite_fragrance: Option<String>,
    pub favorite_drink: Option<String>,
    pub preferred_gifts: Option<String>,
    pub favorite_music: Option<String>,
}

impl AdDraft {
    /// Shallow-merge a patch into the draft.
    ///
    /// Each `Some` field in the patch fully replaces the corresponding
    /// draft field; `None` fields are untouched. Nested maps
    /// (`availability_hours`, `packages`) are replaced wholesale, never
    /// deep-merged: a caller updating one day's hours must compose the
    /// full map before patching. An empty patch leaves the draft
    /// unchanged. No validation happens here.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(v) = patch.presentation_name {
            self.presentation_name = v;
        }
        if let Some(v) = patch.age {
            self.age = v;
        }
        if let Some(v) = patch.gender {
            self.gender = v;
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.highlight_phrase {
            self.highlight_phrase = v;
        }

        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.services_offered {
            self.services_offered = v;
        }
        if let Some(v) = patch.target_audience {
            self.target_audience = v;
        }
        if let Some(v) = patch.service_locations {
            self.service_locations = v;
        }

        if let Some(v) = patch.availability_days {
            self.availability_days = v;
        }
        if let Some(v) = patch.availability_hours {
            self.availability_hours = v;
        }
        if let Some(v) = patch.appointment_only {
            self.appointment_only = v;
        }

        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.neighborhood {
            self.neighborhood = v;
        }
        if let Some(v) = patch.postal_code {
            self.postal_code = v;
        }
        if let Some(v) = patch.accepts_travel {
            self.accepts_travel = v;
        }

        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.hourly_rate {
            self.hourly_rate = v;
        }
        if let Some(v) = patch.packages {
            self.packages = v;
        }
        if let Some(v) = patch.payment_methods {
            self.payment_methods = v;
        }
        if let Some(v) = patch.highlight_package {
            self.highlight_package = v;
        }

        if let Some(v) = patch.image_url {
            self.image_url = v;
        }
        if let Some(v) = patch.video_url {
            self.video_url = v;
        }
        if let Some(v) = patch.photos {
            self.photos = v;
        }
        if let Some(v) = patch.videos {
            self.videos = v;
        }

        if let Some(v) = patch.whatsapp {
            self.whatsapp = v;
        }
        if let Some(v) = patch.contact_telegram {
            self.contact_telegram = v;
        }
        if let Some(v) = patch.contact_instagram {
            self.contact_instagram = v;
        }
        if let Some(v) = patch.contact_email {
            self.contact_email = v;
        }
        if let Some(v) = patch.contact_other {
            self.contact_other = v;
        }

        if let Some(v) = patch.terms_accepted {
            self.terms_accepted = v;
        }
        if let Some(v) = patch.age_confirmed {
            self.age_confirmed = v;
        }
        if let Some(v) = patch.image_consent {
            self.image_consent = v;
        }

        if let Some(v) = patch.accepts_last_minute {
            self.accepts_last_minute = v;
        }
        if let Some(v) = patch.restrictions {
            self.restrictions = v;
        }
        if let Some(v) = patch.personal_rules {
            self.personal_rules = v;
        }

        if let Some(v) = patch.favorite_fragrance {
            self.favorite_fragrance = v;
        }
        if let Some(v) = patch.favorite_drink {
            self.favorite_drink = v;
        }
        if let Some(v) = patch.preferred_gifts {
            self.preferred_gifts = v;
        }
        if let Some(v) = patch.favorite_music {
            self.favorite_music = v;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
