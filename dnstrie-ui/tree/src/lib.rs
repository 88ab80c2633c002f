//! Outline tree helpers and a lightweight [`iced`] tree widget.
//!
//! This crate is split into two layers:
//! - model helpers ([`TreeNode`], [`flatten_tree`], [`node_at`]) that are
//!   UI-agnostic;
//! - view helpers ([`TreeView`], [`TreeRowContext`]) that render rows in
//!   `iced`.
//!
//! The tree is always rooted at a single node. Expansion state lives on the
//! nodes themselves, so the caller owns it and flips it in response to
//! [`TreeView::on_press`].
//!
//! See `examples/outline.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::text;
//! use iced::Element;
//! use dnstrie_ui_tree::{TreeNode, TreePath, TreeView};
//!
//! struct Node {
//!     title: String,
//!     expanded: bool,
//!     children: Vec<Node>,
//! }
//!
//! impl TreeNode for Node {
//!     fn title(&self) -> &str {
//!         &self.title
//!     }
//!
//!     fn children(&self) -> &[Self] {
//!         &self.children
//!     }
//!
//!     fn expanded(&self) -> bool {
//!         self.expanded
//!     }
//! }
//!
//! #[derive(Clone)]
//! enum Message {
//!     RowPressed(TreePath),
//! }
//!
//! fn view(root: &Node) -> Element<'_, Message> {
//!     TreeView::new(root, |ctx| text(ctx.entry.node.title()).into())
//!         .indent_width(20.0)
//!         .connector_width(24.0)
//!         .on_press(Message::RowPressed)
//!         .view()
//! }
//! ```

mod model;
mod view;

pub use model::{
    Connector, FlattenedNode, TreeNode, TreePath, flatten_tree, node_at,
};
pub use view::{TreeRow, TreeRowContext, TreeView};
