//! Listing taxonomy: service categories, highlight packages, ad statuses.
//!
//! Closed string enumerations shared by the draft model, the submission
//! payload, and the moderation side of the backend.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Service category
// ---------------------------------------------------------------------------

/// Valid category strings.
pub const CATEGORY_MASSAGE: &str = "massage";
pub const CATEGORY_BEAUTY: &str = "beauty";
pub const CATEGORY_WELLNESS: &str = "wellness";
pub const CATEGORY_EVENTS: &str = "events";
pub const CATEGORY_CLASSES: &str = "classes";
pub const CATEGORY_OTHER: &str = "other";

/// All valid category strings.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_MASSAGE,
    CATEGORY_BEAUTY,
    CATEGORY_WELLNESS,
    CATEGORY_EVENTS,
    CATEGORY_CLASSES,
    CATEGORY_OTHER,
];

/// The fixed, closed set of service categories an ad can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Massage,
    Beauty,
    Wellness,
    Events,
    Classes,
    Other,
}

impl Category {
    /// Parse a category from its stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            CATEGORY_MASSAGE => Ok(Self::Massage),
            CATEGORY_BEAUTY => Ok(Self::Beauty),
            CATEGORY_WELLNESS => Ok(Self::Wellness),
            CATEGORY_EVENTS => Ok(Self::Events),
            CATEGORY_CLASSES => Ok(Self::Classes),
            CATEGORY_OTHER => Ok(Self::Other),
            _ => Err(CoreError::Validation(format!(
                "Invalid category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Massage => CATEGORY_MASSAGE,
            Self::Beauty => CATEGORY_BEAUTY,
            Self::Wellness => CATEGORY_WELLNESS,
            Self::Events => CATEGORY_EVENTS,
            Self::Classes => CATEGORY_CLASSES,
            Self::Other => CATEGORY_OTHER,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Massage => "Massage",
            Self::Beauty => "Beauty",
            Self::Wellness => "Wellness",
            Self::Events => "Events",
            Self::Classes => "Classes",
            Self::Other => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// Highlight package
// ---------------------------------------------------------------------------

/// Valid highlight package strings.
pub const HIGHLIGHT_BASIC: &str = "basic";
pub const HIGHLIGHT_FEATURED: &str = "featured";
pub const HIGHLIGHT_PREMIUM: &str = "premium";

/// All valid highlight package strings.
pub const VALID_HIGHLIGHT_PACKAGES: &[&str] =
    &[HIGHLIGHT_BASIC, HIGHLIGHT_FEATURED, HIGHLIGHT_PREMIUM];

/// Paid placement tier for an ad. New drafts start on `Basic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightPackage {
    #[default]
    Basic,
    Featured,
    Premium,
}

impl HighlightPackage {
    /// Parse a highlight package from its stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            HIGHLIGHT_BASIC => Ok(Self::Basic),
            HIGHLIGHT_FEATURED => Ok(Self::Featured),
            HIGHLIGHT_PREMIUM => Ok(Self::Premium),
            _ => Err(CoreError::Validation(format!(
                "Invalid highlight package '{s}'. Must be one of: {}",
                VALID_HIGHLIGHT_PACKAGES.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => HIGHLIGHT_BASIC,
            Self::Featured => HIGHLIGHT_FEATURED,
            Self::Premium => HIGHLIGHT_PREMIUM,
        }
    }
}

// ---------------------------------------------------------------------------
// Ad status
// ---------------------------------------------------------------------------

/// Valid ad status strings.
pub const STATUS_PENDING_APPROVAL: &str = "pending_approval";
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_REJECTED: &str = "rejected";

/// All valid ad status strings.
pub const VALID_AD_STATUSES: &[&str] =
    &[STATUS_PENDING_APPROVAL, STATUS_ACTIVE, STATUS_REJECTED];

/// Moderation status of a stored ad.
///
/// Every submission enters the moderation queue as `PendingApproval`;
/// the remaining states are owned by the moderation dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdStatus {
    PendingApproval,
    Active,
    Rejected,
}

impl AdStatus {
    /// Parse a status from its stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_PENDING_APPROVAL => Ok(Self::PendingApproval),
            STATUS_ACTIVE => Ok(Self::Active),
            STATUS_REJECTED => Ok(Self::Rejected),
            _ => Err(CoreError::Validation(format!(
                "Invalid ad status '{s}'. Must be one of: {}",
                VALID_AD_STATUSES.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => STATUS_PENDING_APPROVAL,
            Self::Active => STATUS_ACTIVE,
            Self::Rejected => STATUS_REJECTED,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
