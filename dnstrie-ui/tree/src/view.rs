use iced::alignment;
use iced::widget::{Column, Row, Space, container, mouse_area, text};
use iced::{Element, Length, mouse};

use crate::model::{Connector, FlattenedNode, TreeNode, TreePath, flatten_tree};

/// Flattened tree row used by [`TreeView`] render callbacks.
pub type TreeRow<'a, T> = FlattenedNode<'a, T>;

/// Rendering context passed to row callbacks.
pub struct TreeRowContext<'a, T: TreeNode> {
    pub entry: TreeRow<'a, T>,
    pub is_hovered: bool,
}

type RowRenderer<'a, T, Message> =
    dyn Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowStyle<'a, T> = dyn Fn(&TreeRowContext<'a, T>) -> container::Style + 'a;
type ToggleContent<'a, T, Message> =
    dyn Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowAction<'a, Message> = dyn Fn(TreePath) -> Message + 'a;

/// Outline view over a single rooted tree.
///
/// Each visible node becomes one row laid out as
/// `[indent][connector][toggle][content]`. Rows are siblings in a column, so
/// a press on a row only ever reports that row's own path.
pub struct TreeView<'a, T: TreeNode, Message: Clone + 'a> {
    root: &'a T,
    hovered: Option<&'a TreePath>,
    on_press: Option<Box<RowAction<'a, Message>>>,
    on_hover: Option<Box<RowAction<'a, Message>>>,
    on_leave: Option<Box<RowAction<'a, Message>>>,
    render_row: Box<RowRenderer<'a, T, Message>>,
    row_style: Option<Box<RowStyle<'a, T>>>,
    toggle_content: Option<Box<ToggleContent<'a, T, Message>>>,
    spacing: f32,
    indent_width: f32,
    connector_width: f32,
    toggle_width: f32,
}

impl<'a, T, Message> TreeView<'a, T, Message>
where
    T: TreeNode + 'a,
    Message: Clone + 'a,
{
    /// Create a tree view that renders each row using `render_row`.
    pub fn new(
        root: &'a T,
        render_row: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        Self {
            root,
            hovered: None,
            on_press: None,
            on_hover: None,
            on_leave: None,
            render_row: Box::new(render_row),
            row_style: None,
            toggle_content: None,
            spacing: 0.0,
            indent_width: 0.0,
            connector_width: 0.0,
            toggle_width: 0.0,
        }
    }

    /// Provide the currently hovered path to inform row rendering.
    pub fn hovered(mut self, path: Option<&'a TreePath>) -> Self {
        self.hovered = path;
        self
    }

    /// Emit a message when a row receives a left press.
    pub fn on_press(
        mut self,
        on_press: impl Fn(TreePath) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Emit a message when the pointer enters a row.
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(TreePath) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Emit a message when the pointer leaves a row.
    ///
    /// The message carries the path of the row being left. Exit events of
    /// adjacent rows may arrive after the enter event of the next row, so
    /// consumers should only clear hover state that still matches this path.
    pub fn on_leave(
        mut self,
        on_leave: impl Fn(TreePath) -> Message + 'a,
    ) -> Self {
        self.on_leave = Some(Box::new(on_leave));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&TreeRowContext<'a, T>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Provide content to render inside the toggle area.
    pub fn toggle_content(
        mut self,
        toggle_content: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        self.toggle_content = Some(Box::new(toggle_content));
        self
    }

    /// Set indentation width per tree depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the connector glyph of non-root rows.
    pub fn connector_width(mut self, width: f32) -> Self {
        self.connector_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the toggle area.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the tree view.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        for entry in flatten_tree(self.root) {
            let is_hovered = self
                .hovered
                .map(|path| path == &entry.path)
                .unwrap_or(false);
            let path = entry.path.clone();
            let context = TreeRowContext { entry, is_hovered };

            let mut row = Row::new()
                .spacing(0.0)
                .align_y(alignment::Vertical::Center);

            let indent = context.entry.depth as f32 * self.indent_width;
            if indent > 0.0 {
                row = row.push(Space::new().width(Length::Fixed(indent)));
            }

            if context.entry.connector != Connector::None
                && self.connector_width > 0.0
            {
                row = row.push(connector_slot(
                    context.entry.connector,
                    self.connector_width,
                ));
            }

            if self.toggle_width > 0.0 || self.toggle_content.is_some() {
                row = row.push(self.toggle_slot(&context));
            }

            row = row.push((self.render_row)(&context));

            let mut row_element: Element<'a, Message> = row.into();

            if let Some(ref row_style) = self.row_style {
                let style = row_style(&context);
                row_element = container(row_element)
                    .width(Length::Fill)
                    .style(move |_| style)
                    .into();
            }

            column = column.push(wrap_mouse_area(
                row_element,
                RowActions {
                    on_press: self.on_press.as_deref(),
                    on_hover: self.on_hover.as_deref(),
                    on_leave: self.on_leave.as_deref(),
                },
                &path,
            ));
        }

        column.into()
    }

    fn toggle_slot(
        &self,
        context: &TreeRowContext<'a, T>,
    ) -> Element<'a, Message> {
        let content = self
            .toggle_content
            .as_ref()
            .map(|toggle| toggle(context))
            .unwrap_or_else(|| Space::new().into());

        container(content)
            .width(Length::Fixed(self.toggle_width))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

fn connector_slot<'a, Message: 'a>(
    connector: Connector,
    width: f32,
) -> Element<'a, Message> {
    container(text(connector.glyph()))
        .width(Length::Fixed(width))
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center)
        .into()
}

struct RowActions<'s, 'a, Message> {
    on_press: Option<&'s RowAction<'a, Message>>,
    on_hover: Option<&'s RowAction<'a, Message>>,
    on_leave: Option<&'s RowAction<'a, Message>>,
}

fn wrap_mouse_area<'a, Message: Clone + 'a>(
    element: Element<'a, Message>,
    actions: RowActions<'_, 'a, Message>,
    path: &TreePath,
) -> Element<'a, Message> {
    if actions.on_press.is_none()
        && actions.on_hover.is_none()
        && actions.on_leave.is_none()
    {
        return element;
    }

    let mut area = mouse_area(element);

    if let Some(on_press) = actions.on_press {
        area = area.on_press(on_press(path.clone()));
    }

    if let Some(on_hover) = actions.on_hover {
        area = area.on_enter(on_hover(path.clone()));
    }

    if let Some(on_leave) = actions.on_leave {
        area = area.on_exit(on_leave(path.clone()));
    }

    area.interaction(mouse::Interaction::Pointer).into()
}
