//! Wizard step definitions and per-step validation gating.
//!
//! The wizard has six fixed steps. Each step gates forward navigation on
//! a small set of required fields; backward navigation is never gated.
//! All checks here are pure functions of the draft and fail closed: an
//! unrecognized step number is never valid.

use serde::{Deserialize, Serialize};

use crate::completion;
use crate::draft::AdDraft;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The six steps in the ad creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Services,
    Pricing,
    Media,
    Contact,
    Consent,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 6;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 6;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Identity),
            2 => Ok(Self::Services),
            3 => Ok(Self::Pricing),
            4 => Ok(Self::Media),
            5 => Ok(Self::Contact),
            6 => Ok(Self::Consent),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Services => 2,
            Self::Pricing => 3,
            Self::Media => 4,
            Self::Contact => 5,
            Self::Consent => 6,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "About You",
            Self::Services => "Services & Location",
            Self::Pricing => "Pricing",
            Self::Media => "Photos & Videos",
            Self::Contact => "Contact",
            Self::Consent => "Review & Consent",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-step rules
// ---------------------------------------------------------------------------

/// List the required fields a step is still missing.
///
/// Field names match the completion-scorer constants so UI messaging can
/// key on one vocabulary. An empty result means the step may be advanced
/// past. The media step has no gate and is always complete.
///
/// Note: this table and the completion scorer's required-field list are
/// deliberately separate and do not agree (`description` is scored for
/// completion but gates no step here). See [`crate::completion`].
pub fn missing_step_fields(step: WizardStep, draft: &AdDraft) -> Vec<&'static str> {
    let mut missing = Vec::new();

    match step {
        WizardStep::Identity => {
            if draft.presentation_name.is_empty() {
                missing.push(completion::FIELD_PRESENTATION_NAME);
            }
            if draft.age.map_or(true, |a| a == 0) {
                missing.push(completion::FIELD_AGE);
            }
            if draft.gender.is_empty() {
                missing.push(completion::FIELD_GENDER);
            }
            if draft.title.is_empty() {
                missing.push(completion::FIELD_TITLE);
            }
        }
        WizardStep::Services => {
            if draft.services_offered.is_empty() {
                missing.push(completion::FIELD_SERVICES_OFFERED);
            }
            if draft.location.is_empty() {
                missing.push(completion::FIELD_LOCATION);
            }
        }
        WizardStep::Pricing => {
            if draft.price <= 0.0 {
                missing.push(completion::FIELD_PRICE);
            }
        }
        WizardStep::Media => {}
        WizardStep::Contact => {
            if draft.whatsapp.is_empty() {
                missing.push(completion::FIELD_WHATSAPP);
            }
        }
        WizardStep::Consent => {
            if !draft.terms_accepted {
                missing.push(completion::FIELD_TERMS_ACCEPTED);
            }
            if !draft.age_confirmed {
                missing.push(completion::FIELD_AGE_CONFIRMED);
            }
            if !draft.image_consent {
                missing.push(completion::FIELD_IMAGE_CONSENT);
            }
        }
    }

    missing
}

/// Check whether the wizard may advance past the given step.
///
/// An out-of-range step number is never valid: the wizard must not
/// silently advance past a step it does not recognize.
pub fn is_step_valid(step: u8, draft: &AdDraft) -> bool {
    match WizardStep::from_number(step) {
        Ok(s) => missing_step_fields(s, draft).is_empty(),
        Err(_) => false,
    }
}

/// Validate a step, naming the missing fields on failure.
pub fn validate_step(step: u8, draft: &AdDraft) -> Result<(), CoreError> {
    let s = WizardStep::from_number(step)?;
    let missing = missing_step_fields(s, draft);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Step {step} ({}) is incomplete. Missing: {}",
            s.label(),
            missing.join(", ")
        )))
    }
}

/// Find the first step the draft does not satisfy, if any.
///
/// The submission gate sweeps every step, not just the terminal one: a
/// draft with `price = 0` is blocked here even though the consent step
/// on its own would pass.
pub fn first_invalid_step(draft: &AdDraft) -> Option<u8> {
    (MIN_STEP..=MAX_STEP).find(|&n| !is_step_valid(n, draft))
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Validate a step transition.
///
/// A transition is valid if the next step is exactly one step forward or
/// one step backward from the current step. Jumping more than one step
/// in either direction is not allowed.
pub fn validate_step_transition(current: u8, next: u8) -> Result<(), CoreError> {
    if current < MIN_STEP || current > MAX_STEP {
        return Err(CoreError::Validation(format!(
            "Current step {current} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    if next < MIN_STEP || next > MAX_STEP {
        return Err(CoreError::Validation(format!(
            "Next step {next} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }

    let diff = (next as i16) - (current as i16);
    if diff != 1 && diff != -1 {
        return Err(CoreError::Validation(format!(
            "Cannot transition from step {current} to step {next}. \
             Must advance or go back exactly one step."
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn step1_complete() -> AdDraft {
        AdDraft {
            presentation_name: "Ana".to_string(),
            age: Some(25),
            gender: "feminino".to_string(),
            title: "X".to_string(),
            ..Default::default()
        }
    }

    fn all_steps_complete() -> AdDraft {
        AdDraft {
            services_offered: vec!["relaxing".to_string()],
            location: "São Paulo".to_string(),
            price: 150.0,
            whatsapp: "(11) 99999-8888".to_string(),
            terms_accepted: true,
            age_confirmed: true,
            image_consent: true,
            ..step1_complete()
        }
    }

    // -- WizardStep --

    #[test]
    fn step_from_number_valid() {
        assert_eq!(WizardStep::from_number(1).unwrap(), WizardStep::Identity);
        assert_eq!(WizardStep::from_number(6).unwrap(), WizardStep::Consent);
    }

    #[test]
    fn step_from_number_invalid() {
        assert!(WizardStep::from_number(0).is_err());
        assert!(WizardStep::from_number(7).is_err());
        assert!(WizardStep::from_number(255).is_err());
    }

    #[test]
    fn step_to_number_roundtrip() {
        for n in MIN_STEP..=MAX_STEP {
            let step = WizardStep::from_number(n).unwrap();
            assert_eq!(step.to_number(), n);
        }
    }

    #[test]
    fn step_labels_are_nonempty() {
        for n in MIN_STEP..=MAX_STEP {
            let step = WizardStep::from_number(n).unwrap();
            assert!(!step.label().is_empty());
        }
    }

    // -- is_step_valid: fail closed --

    #[test]
    fn out_of_range_steps_are_never_valid() {
        let empty = AdDraft::default();
        let full = all_steps_complete();
        for step in [0u8, 7, 100, 255] {
            assert!(!is_step_valid(step, &empty));
            assert!(!is_step_valid(step, &full));
        }
    }

    // -- step 1: identity --

    #[test]
    fn step1_valid_when_identity_fields_filled() {
        assert!(is_step_valid(1, &step1_complete()));
    }

    #[test]
    fn step1_invalid_on_empty_draft() {
        let missing = missing_step_fields(WizardStep::Identity, &AdDraft::default());
        assert_eq!(
            missing,
            vec!["presentation_name", "age", "gender", "title"]
        );
    }

    #[test]
    fn step1_requires_positive_age() {
        let draft = AdDraft {
            age: Some(0),
            ..step1_complete()
        };
        assert!(!is_step_valid(1, &draft));

        let draft = AdDraft {
            age: None,
            ..step1_complete()
        };
        assert!(!is_step_valid(1, &draft));
    }

    // -- step 2: services & location --

    #[test]
    fn step2_requires_service_and_location() {
        assert!(!is_step_valid(2, &step1_complete()));

        let draft = AdDraft {
            services_offered: vec!["relaxing".to_string()],
            location: "São Paulo".to_string(),
            ..Default::default()
        };
        assert!(is_step_valid(2, &draft));
    }

    #[test]
    fn step2_invalid_with_location_only() {
        let draft = AdDraft {
            location: "São Paulo".to_string(),
            ..Default::default()
        };
        assert_eq!(
            missing_step_fields(WizardStep::Services, &draft),
            vec!["services_offered"]
        );
    }

    // -- step 3: pricing --

    #[test]
    fn step3_requires_positive_price() {
        let mut draft = AdDraft::default();
        assert!(!is_step_valid(3, &draft));

        draft.price = 150.0;
        assert!(is_step_valid(3, &draft));
    }

    #[test]
    fn step3_zero_price_is_invalid() {
        let draft = AdDraft {
            price: 0.0,
            ..all_steps_complete()
        };
        assert!(!is_step_valid(3, &draft));
    }

    // -- step 4: media --

    #[test]
    fn step4_always_valid() {
        assert!(is_step_valid(4, &AdDraft::default()));
        assert!(is_step_valid(4, &all_steps_complete()));
    }

    // -- step 5: contact --

    #[test]
    fn step5_requires_whatsapp() {
        let mut draft = AdDraft::default();
        assert!(!is_step_valid(5, &draft));

        draft.whatsapp = "(11) 99999-8888".to_string();
        assert!(is_step_valid(5, &draft));
    }

    // -- step 6: consent --

    #[test]
    fn step6_valid_on_consents_alone_regardless_of_other_fields() {
        // Nothing else filled, only the three consent booleans.
        let draft = AdDraft {
            terms_accepted: true,
            age_confirmed: true,
            image_consent: true,
            ..Default::default()
        };
        assert!(is_step_valid(6, &draft));
    }

    #[test]
    fn step6_requires_all_three_consents() {
        let draft = AdDraft {
            terms_accepted: true,
            age_confirmed: true,
            image_consent: false,
            ..Default::default()
        };
        assert_eq!(
            missing_step_fields(WizardStep::Consent, &draft),
            vec!["image_consent"]
        );
    }

    // -- cross-step: step 1 filled, nothing else --

    #[test]
    fn identity_only_draft_passes_step1_fails_step2() {
        let draft = step1_complete();
        assert!(is_step_valid(1, &draft));
        assert!(!is_step_valid(2, &draft));
    }

    // -- validate_step --

    #[test]
    fn validate_step_names_missing_fields() {
        let err = validate_step(5, &AdDraft::default()).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        let message = err.to_string();
        assert!(message.contains("whatsapp"), "got: {message}");
    }

    #[test]
    fn validate_step_ok_when_complete() {
        assert!(validate_step(1, &step1_complete()).is_ok());
    }

    // -- first_invalid_step --

    #[test]
    fn first_invalid_step_none_when_all_complete() {
        assert_eq!(first_invalid_step(&all_steps_complete()), None);
    }

    #[test]
    fn first_invalid_step_finds_zero_price() {
        let draft = AdDraft {
            price: 0.0,
            ..all_steps_complete()
        };
        assert_eq!(first_invalid_step(&draft), Some(3));
    }

    #[test]
    fn first_invalid_step_on_empty_draft_is_step_1() {
        assert_eq!(first_invalid_step(&AdDraft::default()), Some(1));
    }

    // -- validate_step_transition --

    #[test]
    fn transition_forward_by_one_is_valid() {
        for current in MIN_STEP..MAX_STEP {
            assert!(validate_step_transition(current, current + 1).is_ok());
        }
    }

    #[test]
    fn transition_backward_by_one_is_valid() {
        for current in (MIN_STEP + 1)..=MAX_STEP {
            assert!(validate_step_transition(current, current - 1).is_ok());
        }
    }

    #[test]
    fn transition_same_step_is_invalid() {
        for step in MIN_STEP..=MAX_STEP {
            assert!(validate_step_transition(step, step).is_err());
        }
    }

    #[test]
    fn transition_skip_step_is_invalid() {
        assert!(validate_step_transition(1, 3).is_err());
        assert!(validate_step_transition(4, 6).is_err());
        assert!(validate_step_transition(6, 4).is_err());
    }

    #[test]
    fn transition_out_of_range_is_invalid() {
        assert!(validate_step_transition(0, 1).is_err());
        assert!(validate_step_transition(6, 7).is_err());
    }
}
