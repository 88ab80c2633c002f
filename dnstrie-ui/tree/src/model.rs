/// Positional path of a node: child indices walked from the root.
///
/// The root itself has an empty path. Paths are index based, so siblings
/// sharing the same title still resolve to distinct rows.
pub type TreePath = Vec<usize>;

/// Trait implemented by tree node types consumable by this crate.
pub trait TreeNode {
    /// Label rendered for the node.
    fn title(&self) -> &str;
    /// Ordered children. Order is rendering order.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
    /// Whether the node currently shows its children.
    fn expanded(&self) -> bool;

    /// Whether the node can be expanded or collapsed.
    fn has_children(&self) -> bool
    where
        Self: Sized,
    {
        !self.children().is_empty()
    }
}

/// Glyph drawn in front of a row label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// The top node: nothing is drawn.
    None,
    /// A child followed by more siblings.
    Branch,
    /// The last child of its parent.
    Last,
}

impl Connector {
    fn for_child(index: usize, siblings: usize) -> Self {
        if index + 1 == siblings {
            Connector::Last
        } else {
            Connector::Branch
        }
    }

    /// Text glyph for the connector (empty for [`Connector::None`]).
    pub fn glyph(self) -> &'static str {
        match self {
            Connector::None => "",
            Connector::Branch => "├─",
            Connector::Last => "└─",
        }
    }
}

/// Flattened representation of a visible tree node.
pub struct FlattenedNode<'a, T: TreeNode> {
    /// Zero-based tree depth (`0` for the top node).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a T,
    /// Index path from the top node to this row.
    pub path: TreePath,
    /// Connector glyph for this row.
    pub connector: Connector,
}

/// Flatten a tree into a depth-first list of visible rows.
///
/// Children are emitted in their stored order and only when their parent is
/// expanded. A collapsed node keeps its own row.
pub fn flatten_tree<T: TreeNode>(root: &T) -> Vec<FlattenedNode<'_, T>> {
    let mut entries = Vec::new();
    let mut path = Vec::new();
    push_node(root, 0, Connector::None, &mut path, &mut entries);
    entries
}

fn push_node<'a, T: TreeNode>(
    node: &'a T,
    depth: usize,
    connector: Connector,
    path: &mut Vec<usize>,
    entries: &mut Vec<FlattenedNode<'a, T>>,
) {
    entries.push(FlattenedNode {
        depth,
        node,
        path: path.clone(),
        connector,
    });

    if !node.expanded() {
        return;
    }

    let children = node.children();
    for (index, child) in children.iter().enumerate() {
        path.push(index);
        push_node(
            child,
            depth + 1,
            Connector::for_child(index, children.len()),
            path,
            entries,
        );
        path.pop();
    }
}

/// Find the node addressed by `path`, starting at `root`.
pub fn node_at<'a, T: TreeNode>(root: &'a T, path: &[usize]) -> Option<&'a T> {
    let Some((head, tail)) = path.split_first() else {
        return Some(root);
    };

    let child = root.children().get(*head)?;
    node_at(child, tail)
}
