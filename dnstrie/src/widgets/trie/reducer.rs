use super::event::TrieEvent;
use super::state::TrieState;

/// Reduce a trie event into state updates.
///
/// Returns `true` when the rendered output may have changed.
pub(crate) fn reduce(state: &mut TrieState, event: TrieEvent) -> bool {
    match event {
        TrieEvent::NodePressed { path } => state.toggle_node(&path),
        TrieEvent::NodeHovered { path } => {
            state.set_hovered_path(path);
            true
        },
        TrieEvent::NodeLeft { path } => state.clear_hovered_path(&path),
        TrieEvent::SnapshotReplaced { root } => {
            log::debug!("trie snapshot replaced: root={}", root.name);
            state.replace_snapshot(root);
            true
        },
    }
}
