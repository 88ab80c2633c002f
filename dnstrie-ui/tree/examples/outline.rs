use dnstrie_ui_tree::{TreeNode, TreePath, TreeRowContext, TreeView};
use iced::widget::{Space, container, text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone)]
enum Message {
    Press(TreePath),
    Hover(TreePath),
    Leave(TreePath),
}

struct Node {
    title: String,
    expanded: bool,
    children: Vec<Node>,
}

impl Node {
    fn new(title: &str, children: Vec<Node>) -> Self {
        Self {
            title: String::from(title),
            expanded: true,
            children,
        }
    }

    fn toggle_at(&mut self, path: &[usize]) {
        match path.split_first() {
            None => {
                if !self.children.is_empty() {
                    self.expanded = !self.expanded;
                }
            },
            Some((head, tail)) => {
                if let Some(child) = self.children.get_mut(*head) {
                    child.toggle_at(tail);
                }
            },
        }
    }
}

impl TreeNode for Node {
    fn title(&self) -> &str {
        &self.title
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn expanded(&self) -> bool {
        self.expanded
    }
}

struct AppState {
    root: Node,
    hovered: Option<TreePath>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            root: Node::new(
                "root",
                vec![
                    Node::new(
                        "com",
                        vec![
                            Node::new("example", vec![]),
                            Node::new(
                                "google",
                                vec![Node::new("mail", vec![])],
                            ),
                        ],
                    ),
                    Node::new("org", vec![Node::new("rust-lang", vec![])]),
                ],
            ),
            hovered: None,
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Press(path) => state.root.toggle_at(&path),
        Message::Hover(path) => state.hovered = Some(path),
        Message::Leave(path) => {
            if state.hovered.as_ref() == Some(&path) {
                state.hovered = None;
            }
        },
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    TreeView::new(&state.root, render_row)
        .hovered(state.hovered.as_ref())
        .on_press(Message::Press)
        .on_hover(Message::Hover)
        .on_leave(Message::Leave)
        .row_style(row_style)
        .toggle_content(toggle_icon)
        .toggle_width(16.0)
        .connector_width(22.0)
        .indent_width(20.0)
        .view()
}

fn render_row<'a>(context: &TreeRowContext<'a, Node>) -> Element<'a, Message> {
    container(text(context.entry.node.title()))
        .padding([4, 6])
        .width(Length::Fill)
        .into()
}

fn row_style(context: &TreeRowContext<'_, Node>) -> container::Style {
    let background = if context.is_hovered {
        Some(Color::from_rgb(0.18, 0.18, 0.18).into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(Color::from_rgb(0.9, 0.9, 0.9)),
        ..Default::default()
    }
}

fn toggle_icon<'a>(context: &TreeRowContext<'a, Node>) -> Element<'a, Message> {
    if !context.entry.node.has_children() {
        return Space::new().width(Length::Fixed(16.0)).into();
    }

    if context.entry.node.expanded() {
        text("▼").into()
    } else {
        text("▶").into()
    }
}

fn main() -> iced::Result {
    iced::run(update, view)
}
