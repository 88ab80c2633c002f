use dnstrie_ui_tree::TreePath;

use super::model::{RenderNode, SnapshotStats, TrieNode};

/// Runtime state for the trie renderer.
#[derive(Debug, Default)]
pub(crate) struct TrieState {
    root: Option<RenderNode>,
    stats: SnapshotStats,
    hovered: Option<TreePath>,
}

impl TrieState {
    // --- Read access ---

    /// Return the render tree of the current snapshot, if any.
    pub(crate) fn root(&self) -> Option<&RenderNode> {
        self.root.as_ref()
    }

    /// Return the size summary of the current snapshot.
    pub(crate) fn stats(&self) -> SnapshotStats {
        self.stats
    }

    /// Return hovered tree path.
    pub(crate) fn hovered_path(&self) -> Option<&TreePath> {
        self.hovered.as_ref()
    }

    // --- Write access ---

    /// Update hovered tree path.
    pub(super) fn set_hovered_path(&mut self, path: TreePath) {
        self.hovered = Some(path);
    }

    /// Clear the hovered path if it still points at `path`.
    ///
    /// Returns `true` when the hover was cleared.
    pub(super) fn clear_hovered_path(&mut self, path: &[usize]) -> bool {
        if self.hovered.as_deref() != Some(path) {
            return false;
        }

        self.hovered = None;
        true
    }

    /// Replace the displayed tree wholesale.
    ///
    /// Every node of the new tree starts expanded.
    pub(super) fn replace_snapshot(&mut self, snapshot: TrieNode) {
        self.stats = snapshot.stats();
        self.root = Some(RenderNode::from(snapshot));
        self.hovered = None;
    }

    /// Toggle the node at `path`.
    ///
    /// Returns `false` for unknown paths and leaves.
    pub(super) fn toggle_node(&mut self, path: &[usize]) -> bool {
        let Some(root) = self.root.as_mut() else {
            return false;
        };

        find_node_mut(root, path).is_some_and(RenderNode::toggle)
    }
}

fn find_node_mut<'a>(
    node: &'a mut RenderNode,
    path: &[usize],
) -> Option<&'a mut RenderNode> {
    let Some((head, tail)) = path.split_first() else {
        return Some(node);
    };

    let child = node.children.get_mut(*head)?;
    find_node_mut(child, tail)
}
