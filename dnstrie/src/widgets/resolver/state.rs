use super::model::{
    LookupHistory, LookupHistoryEntry, LookupResponse, Note,
};

/// Runtime state of the resolution controller.
#[derive(Debug, Default)]
pub(crate) struct ResolverState {
    input: String,
    address: Option<String>,
    note: Option<Note>,
    is_loading: bool,
    history: LookupHistory,
    snapshot_requested: u64,
    snapshot_applied: u64,
}

impl ResolverState {
    // --- Read access ---

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub(crate) fn note(&self) -> Option<Note> {
        self.note
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn history(&self) -> &LookupHistory {
        &self.history
    }

    /// Return whether the resolve action is currently actionable.
    pub(crate) fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    // --- Write access ---

    pub(super) fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Enter the loading state and return the domain to resolve.
    ///
    /// Returns `None` without touching state when submission is not allowed.
    pub(super) fn begin_lookup(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.address = None;
        self.note = None;
        self.is_loading = true;
        Some(self.input.trim().to_string())
    }

    /// Store a successful answer and record it in the history.
    pub(super) fn complete_lookup(
        &mut self,
        domain: String,
        response: LookupResponse,
        timestamp: String,
    ) {
        self.note = response.is_new.then_some(Note::NewMapping);
        self.history.push_front(LookupHistoryEntry {
            domain,
            address: response.address.clone(),
            timestamp,
        });
        self.address = Some(response.address);
        self.is_loading = false;
    }

    /// Allocate the generation of a new snapshot request.
    pub(super) fn next_snapshot_generation(&mut self) -> u64 {
        self.snapshot_requested += 1;
        self.snapshot_requested
    }

    /// Mark the snapshot of `generation` as displayed.
    ///
    /// Returns `false` when a snapshot from the same or a later request was
    /// already applied; the caller must then drop it.
    pub(super) fn accept_snapshot(&mut self, generation: u64) -> bool {
        if generation <= self.snapshot_applied {
            return false;
        }

        self.snapshot_applied = generation;
        true
    }

    /// Surface a failed lookup.
    pub(super) fn fail_lookup(&mut self) {
        self.address = None;
        self.note = Some(Note::ServerError);
        self.is_loading = false;
    }
}
