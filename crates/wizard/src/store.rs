//! The draft store: single source of truth for the in-progress ad.

use vitrine_core::draft::{AdDraft, DraftPatch};

/// Owns the in-progress [`AdDraft`] and funnels every mutation through
/// one patch entry point.
///
/// The store is deliberately dumb: it accepts any patch without
/// validation (gating belongs to the step rules) and keeps a revision
/// counter so observers can cheaply detect change. Validity and
/// completion are recomputed lazily by reading the latest draft; both
/// are pure functions, so no cache lives here.
#[derive(Debug, Default)]
pub struct DraftStore {
    draft: AdDraft,
    revision: u64,
}

impl DraftStore {
    /// Create a store holding an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from an existing record (edit flow).
    pub fn from_draft(draft: AdDraft) -> Self {
        Self { draft, revision: 0 }
    }

    /// Borrow the current draft.
    pub fn draft(&self) -> &AdDraft {
        &self.draft
    }

    /// Clone the current draft (e.g. to build a submission payload).
    pub fn snapshot(&self) -> AdDraft {
        self.draft.clone()
    }

    /// Number of patches applied since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shallow-merge a patch into the draft.
    pub fn patch(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
        self.revision += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
