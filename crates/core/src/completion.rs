//! Draft completion scoring for the wizard progress indicator.
//!
//! Scores a draft against a fixed checklist of twelve
//! required-for-submission fields and reports an integer percentage.
//! This checklist is intentionally NOT the same list the step gates use:
//! `description` is scored here but gates no step, and the two lists have
//! no shared source of truth. The divergence is inherited behavior; do
//! not unify them without revisiting every progress UI.

use crate::draft::AdDraft;

// ---------------------------------------------------------------------------
// Required-field names
// ---------------------------------------------------------------------------

pub const FIELD_PRESENTATION_NAME: &str = "presentation_name";
pub const FIELD_AGE: &str = "age";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_SERVICES_OFFERED: &str = "services_offered";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_WHATSAPP: &str = "whatsapp";
pub const FIELD_TERMS_ACCEPTED: &str = "terms_accepted";
pub const FIELD_AGE_CONFIRMED: &str = "age_confirmed";
pub const FIELD_IMAGE_CONSENT: &str = "image_consent";

/// The fixed required-for-submission checklist, in display order.
pub const REQUIRED_SUBMISSION_FIELDS: &[&str] = &[
    FIELD_PRESENTATION_NAME,
    FIELD_AGE,
    FIELD_GENDER,
    FIELD_TITLE,
    FIELD_DESCRIPTION,
    FIELD_SERVICES_OFFERED,
    FIELD_LOCATION,
    FIELD_PRICE,
    FIELD_WHATSAPP,
    FIELD_TERMS_ACCEPTED,
    FIELD_AGE_CONFIRMED,
    FIELD_IMAGE_CONSENT,
];

// ---------------------------------------------------------------------------
// Populated predicates
// ---------------------------------------------------------------------------

// A uniform notion of "populated" regardless of a field's semantic type:
// booleans count only when true (all three are consent gates, where false
// means "not done"), numerics only when non-null and non-zero, sequences
// only when non-empty, strings only when non-empty. Strings are NOT
// trimmed first, so a whitespace-only value counts as populated. That is
// inherited behavior and a candidate defect; fixing it would lower live
// completion scores, so it stays until the progress UI owners decide.

fn string_populated(value: &str) -> bool {
    !value.is_empty()
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// List the required-for-submission fields the draft has not populated,
/// in checklist order.
pub fn missing_required_fields(draft: &AdDraft) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if !string_populated(&draft.presentation_name) {
        missing.push(FIELD_PRESENTATION_NAME);
    }
    if draft.age.map_or(true, |a| a == 0) {
        missing.push(FIELD_AGE);
    }
    if !string_populated(&draft.gender) {
        missing.push(FIELD_GENDER);
    }
    if !string_populated(&draft.title) {
        missing.push(FIELD_TITLE);
    }
    if !string_populated(&draft.description) {
        missing.push(FIELD_DESCRIPTION);
    }
    if draft.services_offered.is_empty() {
        missing.push(FIELD_SERVICES_OFFERED);
    }
    if !string_populated(&draft.location) {
        missing.push(FIELD_LOCATION);
    }
    if draft.price == 0.0 {
        missing.push(FIELD_PRICE);
    }
    if !string_populated(&draft.whatsapp) {
        missing.push(FIELD_WHATSAPP);
    }
    if !draft.terms_accepted {
        missing.push(FIELD_TERMS_ACCEPTED);
    }
    if !draft.age_confirmed {
        missing.push(FIELD_AGE_CONFIRMED);
    }
    if !draft.image_consent {
        missing.push(FIELD_IMAGE_CONSENT);
    }

    missing
}

/// Percentage of the required-for-submission checklist the draft has
/// populated, rounded half-up to an integer in `[0, 100]`.
pub fn completion_percentage(draft: &AdDraft) -> u8 {
    let total = REQUIRED_SUBMISSION_FIELDS.len();
    let met = total - missing_required_fields(draft).len();
    let pct = (met as f64 / total as f64 * 100.0).round() as u8;
    pct.min(100)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
