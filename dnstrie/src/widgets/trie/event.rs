use dnstrie_ui_tree::TreePath;

use super::model::TrieNode;

/// UI and data events handled by the trie renderer.
#[derive(Debug, Clone)]
pub(crate) enum TrieEvent {
    /// A row was pressed.
    NodePressed { path: TreePath },
    /// The cursor entered a row.
    NodeHovered { path: TreePath },
    /// The cursor left a row.
    NodeLeft { path: TreePath },
    /// A freshly fetched snapshot replaces the displayed tree.
    SnapshotReplaced { root: TrieNode },
}
