pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::TrieEvent;
use state::TrieState;

/// Trie widget: holds the rendered snapshot with per-node collapse state
/// and the hovered row.
pub(crate) struct TrieWidget {
    state: TrieState,
}

impl TrieWidget {
    /// Create a widget with no snapshot loaded.
    pub(crate) fn new() -> Self {
        Self {
            state: TrieState::default(),
        }
    }

    /// Reduce an event into state updates.
    pub(crate) fn reduce(&mut self, event: TrieEvent) -> bool {
        reducer::reduce(&mut self.state, event)
    }

    /// Return a view model for the trie panel.
    pub(crate) fn vm(&self) -> model::TrieViewModel<'_> {
        model::TrieViewModel {
            root: self.state.root(),
            hovered_path: self.state.hovered_path(),
            stats: self.state.stats(),
        }
    }
}
