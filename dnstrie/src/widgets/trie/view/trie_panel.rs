use dnstrie_ui_tree::{TreeRowContext, TreeView};
use iced::widget::text::Wrapping;
use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Element, Font, Length, Theme, alignment, font};

use crate::style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::trie::event::TrieEvent;
use crate::widgets::trie::model::{
    Badge, Indicator, RenderNode, TrieRow, TrieViewModel,
};

const HEADER_FONT_SIZE: f32 = 12.0;
const HEADER_SPACING: f32 = 2.0;

const TREE_ROW_HEIGHT: f32 = 22.0;
const TREE_FONT_SIZE: f32 = 13.0;
const TREE_INDENT: f32 = 20.0;
const TREE_CONNECTOR_WIDTH: f32 = 22.0;
const TREE_TOGGLE_WIDTH: f32 = 16.0;
const TREE_ROW_PADDING_X: f32 = 4.0;

const BADGE_FONT_SIZE: f32 = 11.0;
const BADGE_PADDING_X: f32 = 6.0;
const BADGE_SPACING: f32 = 8.0;
const BADGE_ALPHA: f32 = 0.25;

const PANEL_PADDING: f32 = 10.0;
const PANEL_SPACING: f32 = 8.0;

const ROOT_FONT: Font = Font {
    weight: font::Weight::Bold,
    ..Font::MONOSPACE
};

/// Props for the trie panel view.
pub(crate) struct TriePanelProps<'a> {
    pub(crate) vm: TrieViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the trie panel: hint, summary and the collapsible outline.
pub(crate) fn view(
    props: TriePanelProps<'_>,
) -> Element<'_, TrieEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let Some(root) = props.vm.root else {
        return placeholder(palette);
    };

    let hint = text("Click on nodes with children to expand/collapse")
        .size(HEADER_FONT_SIZE)
        .color(palette.dim_foreground);
    let summary = text(format!(
        "{} nodes, {} domains",
        props.vm.stats.nodes, props.vm.stats.domains
    ))
    .size(HEADER_FONT_SIZE)
    .color(palette.dim_foreground);
    let header = column![hint, summary].spacing(HEADER_SPACING);

    let tree = TreeView::new(root, move |context| render_row(context, palette))
        .hovered(props.vm.hovered_path)
        .on_press(|path| TrieEvent::NodePressed { path })
        .on_hover(|path| TrieEvent::NodeHovered { path })
        .on_leave(|path| TrieEvent::NodeLeft { path })
        .row_style(move |context| {
            style::hover_row_style(palette, context.is_hovered)
        })
        .toggle_content(move |context| toggle_indicator(context, palette))
        .indent_width(TREE_INDENT)
        .connector_width(TREE_CONNECTOR_WIDTH)
        .toggle_width(TREE_TOGGLE_WIDTH)
        .spacing(0.0)
        .view();

    let scrollable = scrollable::Scrollable::new(tree)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        ))
        .style(style::thin_scroll_style(palette.clone()));

    container(column![header, scrollable].spacing(PANEL_SPACING))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PANEL_PADDING)
        .style(style::panel_style(palette))
        .into()
}

fn placeholder(
    palette: &IcedColorPalette,
) -> Element<'_, TrieEvent, Theme, iced::Renderer> {
    let message = text("No trie data available")
        .size(HEADER_FONT_SIZE)
        .color(palette.dim_foreground);

    container(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PANEL_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(style::panel_style(palette))
        .into()
}

/// Render one outline row: label plus optional badge.
fn render_row<'a>(
    context: &TreeRowContext<'a, RenderNode>,
    palette: &'a IcedColorPalette,
) -> Element<'a, TrieEvent, Theme, iced::Renderer> {
    let entry = TrieRow::from_entry(&context.entry);

    let (font, color) = if entry.is_root {
        (ROOT_FONT, palette.magenta)
    } else {
        (Font::MONOSPACE, palette.foreground)
    };

    let label = text(entry.label)
        .font(font)
        .size(TREE_FONT_SIZE)
        .color(color)
        .wrapping(Wrapping::None);

    let mut content = row![label]
        .spacing(BADGE_SPACING)
        .align_y(alignment::Vertical::Center);

    if let Some(badge) = &entry.badge {
        content = content.push(badge_view(badge, palette));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TREE_ROW_HEIGHT))
        .padding([0.0, TREE_ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn badge_view<'a>(
    badge: &Badge,
    palette: &'a IcedColorPalette,
) -> Element<'a, TrieEvent, Theme, iced::Renderer> {
    let accent = match badge {
        Badge::Address(_) => palette.green,
        Badge::End => palette.yellow,
    };
    let mut background = accent;
    background.a = BADGE_ALPHA;

    container(
        text(badge.label().to_string())
            .font(Font::MONOSPACE)
            .size(BADGE_FONT_SIZE)
            .wrapping(Wrapping::None),
    )
    .padding([0.0, BADGE_PADDING_X])
    .style(move |_| container::Style {
        background: Some(background.into()),
        text_color: Some(accent),
        border: iced::Border {
            radius: 3.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

fn toggle_indicator<'a>(
    context: &TreeRowContext<'a, RenderNode>,
    palette: &'a IcedColorPalette,
) -> Element<'a, TrieEvent, Theme, iced::Renderer> {
    let indicator = TrieRow::from_entry(&context.entry).indicator;

    if indicator == Indicator::Leaf {
        return Space::new()
            .width(Length::Fixed(TREE_TOGGLE_WIDTH))
            .into();
    }

    text(indicator.glyph())
        .size(TREE_FONT_SIZE)
        .color(palette.dim_foreground)
        .into()
}
