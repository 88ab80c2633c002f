use dnstrie_ui_tree::{FlattenedNode, TreeNode, TreePath};
use serde::{Deserialize, Deserializer};

/// Node of the server-side domain trie as delivered by the snapshot endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct TrieNode {
    pub(crate) name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) children: Vec<TrieNode>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) attributes: TrieAttributes,
}

/// Optional decoration attached to a trie node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct TrieAttributes {
    #[serde(default, alias = "ip")]
    pub(crate) address: Option<String>,
    #[serde(
        default,
        rename = "isTerminal",
        alias = "isEnd",
        deserialize_with = "null_as_default"
    )]
    pub(crate) is_terminal: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Size summary of a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SnapshotStats {
    pub(crate) nodes: usize,
    pub(crate) domains: usize,
}

impl TrieNode {
    /// Count nodes and stored domains below (and including) this node.
    pub(crate) fn stats(&self) -> SnapshotStats {
        let mut stats = SnapshotStats::default();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            stats.nodes += 1;
            if node.attributes.address.is_some() || node.attributes.is_terminal
            {
                stats.domains += 1;
            }
            pending.extend(node.children.iter());
        }

        stats
    }
}

/// Trie node wrapped with its own collapse flag.
///
/// Built once per fetched snapshot and discarded when the next one arrives.
#[derive(Debug, Clone)]
pub(crate) struct RenderNode {
    pub(super) name: String,
    pub(super) attributes: TrieAttributes,
    pub(super) collapsed: bool,
    pub(super) children: Vec<RenderNode>,
}

impl From<TrieNode> for RenderNode {
    fn from(node: TrieNode) -> Self {
        Self {
            name: node.name,
            attributes: node.attributes,
            collapsed: false,
            children: node.children.into_iter().map(RenderNode::from).collect(),
        }
    }
}

impl RenderNode {
    /// Return the label segment.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Return whether the subtree is hidden.
    pub(crate) fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip the collapse flag. Leaves never change.
    ///
    /// Returns `true` when the flag changed.
    pub(super) fn toggle(&mut self) -> bool {
        if self.children.is_empty() {
            return false;
        }

        self.collapsed = !self.collapsed;
        true
    }

    /// Badge shown after the label, if any.
    pub(crate) fn badge(&self) -> Option<Badge> {
        if let Some(address) = &self.attributes.address {
            return Some(Badge::Address(address.clone()));
        }

        self.attributes.is_terminal.then_some(Badge::End)
    }
}

impl TreeNode for RenderNode {
    fn title(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn expanded(&self) -> bool {
        !self.collapsed
    }
}

/// Expand/collapse indicator of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indicator {
    Expanded,
    Collapsed,
    /// Blank placeholder of the same width.
    Leaf,
}

impl Indicator {
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            Indicator::Expanded => "▼",
            Indicator::Collapsed => "▶",
            Indicator::Leaf => "",
        }
    }
}

/// Inline badge after a row label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Badge {
    /// The node completes a domain that resolves to this address.
    Address(String),
    /// The node completes a domain but carries no address.
    End,
}

impl Badge {
    pub(crate) fn label(&self) -> &str {
        match self {
            Badge::Address(address) => address,
            Badge::End => "end",
        }
    }
}

/// Decoration of one outline row on top of its position and connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrieRow {
    pub(crate) indicator: Indicator,
    pub(crate) label: String,
    pub(crate) badge: Option<Badge>,
    pub(crate) is_root: bool,
}

impl TrieRow {
    pub(crate) fn from_entry(entry: &FlattenedNode<'_, RenderNode>) -> Self {
        let node = entry.node;
        let indicator = if !node.has_children() {
            Indicator::Leaf
        } else if node.is_collapsed() {
            Indicator::Collapsed
        } else {
            Indicator::Expanded
        };

        Self {
            indicator,
            label: node.name().to_string(),
            badge: node.badge(),
            is_root: entry.depth == 0,
        }
    }
}

/// Read-only view model for the trie panel.
#[derive(Debug, Clone)]
pub(crate) struct TrieViewModel<'a> {
    pub(crate) root: Option<&'a RenderNode>,
    pub(crate) hovered_path: Option<&'a TreePath>,
    pub(crate) stats: SnapshotStats,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Badge, RenderNode, SnapshotStats, TrieAttributes, TrieNode};

    fn node_with(attributes: TrieAttributes) -> RenderNode {
        RenderNode::from(TrieNode {
            name: String::from("example"),
            children: Vec::new(),
            attributes,
        })
    }

    #[test]
    fn given_original_backend_payload_when_decoded_then_aliases_are_accepted() {
        let payload = json!({
            "name": "root",
            "attributes": {},
            "children": [{
                "name": "com",
                "attributes": {},
                "children": [{
                    "name": "example",
                    "attributes": { "ip": "93.184.216.34", "isEnd": true }
                }]
            }]
        });

        let root: TrieNode =
            serde_json::from_value(payload).expect("payload should decode");

        let leaf = &root.children[0].children[0];
        assert_eq!(leaf.name, "example");
        assert_eq!(leaf.attributes.address.as_deref(), Some("93.184.216.34"));
        assert!(leaf.attributes.is_terminal);
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn given_canonical_field_names_when_decoded_then_attributes_are_read() {
        let payload = json!({
            "name": "net",
            "attributes": { "address": "10.0.0.1", "isTerminal": true }
        });

        let node: TrieNode =
            serde_json::from_value(payload).expect("payload should decode");

        assert_eq!(node.attributes.address.as_deref(), Some("10.0.0.1"));
        assert!(node.attributes.is_terminal);
    }

    #[test]
    fn given_null_children_and_attributes_when_decoded_then_defaults_apply() {
        let payload = json!({
            "name": "root",
            "attributes": null,
            "children": null
        });

        let node: TrieNode =
            serde_json::from_value(payload).expect("payload should decode");

        assert!(node.children.is_empty());
        assert_eq!(node.attributes, TrieAttributes::default());
    }

    #[test]
    fn given_node_without_name_when_decoded_then_decoding_fails() {
        let payload = json!({ "children": [] });

        assert!(serde_json::from_value::<TrieNode>(payload).is_err());
    }

    #[test]
    fn given_address_attribute_when_badge_requested_then_address_badge_is_used()
    {
        let node = node_with(TrieAttributes {
            address: Some(String::from("93.184.216.34")),
            is_terminal: false,
        });

        assert_eq!(
            node.badge(),
            Some(Badge::Address(String::from("93.184.216.34")))
        );
    }

    #[test]
    fn given_terminal_flag_only_when_badge_requested_then_end_badge_is_used() {
        let node = node_with(TrieAttributes {
            address: None,
            is_terminal: true,
        });

        assert_eq!(node.badge(), Some(Badge::End));
    }

    #[test]
    fn given_empty_attributes_when_badge_requested_then_no_badge_is_used() {
        let node = node_with(TrieAttributes::default());

        assert_eq!(node.badge(), None);
    }

    #[test]
    fn given_leaf_when_toggled_then_flag_is_unchanged() {
        let mut node = node_with(TrieAttributes::default());

        assert!(!node.toggle());
        assert!(!node.is_collapsed());
    }

    #[test]
    fn given_snapshot_when_stats_requested_then_nodes_and_domains_are_counted()
    {
        let payload = json!({
            "name": "root",
            "children": [
                {
                    "name": "com",
                    "children": [
                        { "name": "example", "attributes": { "ip": "1.1.1.1" } },
                        { "name": "test", "attributes": { "isEnd": true } }
                    ]
                },
                { "name": "org" }
            ]
        });
        let root: TrieNode =
            serde_json::from_value(payload).expect("payload should decode");

        assert_eq!(
            root.stats(),
            SnapshotStats {
                nodes: 5,
                domains: 2
            }
        );
    }
}
