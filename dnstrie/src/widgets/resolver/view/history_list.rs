use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Element, Font, Length, Theme, alignment};

use crate::style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::resolver::event::ResolverEvent;
use crate::widgets::resolver::model::{
    HISTORY_CAPACITY, LookupHistoryEntry, ResolverViewModel,
};

const TITLE_FONT_SIZE: f32 = 12.0;
const ENTRY_FONT_SIZE: f32 = 13.0;
const TIMESTAMP_FONT_SIZE: f32 = 11.0;
const ENTRY_PADDING_X: f32 = 8.0;
const ENTRY_PADDING_Y: f32 = 3.0;
const ENTRY_SPACING: f32 = 10.0;
const PANEL_PADDING: f32 = 10.0;
const PANEL_SPACING: f32 = 4.0;

/// Props for the lookup history list.
pub(crate) struct HistoryListProps<'a> {
    pub(crate) vm: ResolverViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render recent lookups; pressing an entry resolves it again.
pub(crate) fn view(
    props: HistoryListProps<'_>,
) -> Element<'_, ResolverEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    if props.vm.history.is_empty() {
        return Space::new().height(Length::Shrink).into();
    }

    let title = text(format!(
        "Recent Lookups ({}/{HISTORY_CAPACITY})",
        props.vm.history.len()
    ))
    .size(TITLE_FONT_SIZE)
    .color(palette.dim_foreground);

    let entries = props.vm.history.iter().enumerate().fold(
        Column::new().spacing(PANEL_SPACING / 2.0),
        |entries, (index, entry)| {
            entries.push(history_entry(
                index,
                entry,
                !props.vm.is_loading,
                palette,
            ))
        },
    );

    container(column![title, entries].spacing(PANEL_SPACING))
        .width(Length::Fill)
        .padding(PANEL_PADDING)
        .style(style::panel_style(palette))
        .into()
}

fn history_entry<'a>(
    index: usize,
    entry: &'a LookupHistoryEntry,
    enabled: bool,
    palette: &'a IcedColorPalette,
) -> Element<'a, ResolverEvent, Theme, iced::Renderer> {
    let domain = text(entry.domain.as_str())
        .size(ENTRY_FONT_SIZE)
        .wrapping(Wrapping::None);
    let address = text(entry.address.as_str())
        .font(Font::MONOSPACE)
        .size(ENTRY_FONT_SIZE)
        .color(palette.green)
        .wrapping(Wrapping::None);
    let timestamp = text(entry.timestamp.as_str())
        .size(TIMESTAMP_FONT_SIZE)
        .color(palette.dim_foreground)
        .wrapping(Wrapping::None);

    let content =
        row![domain, address, Space::new().width(Length::Fill), timestamp]
            .spacing(ENTRY_SPACING)
            .align_y(alignment::Vertical::Center);

    let mut entry_button = button(content)
        .width(Length::Fill)
        .padding([ENTRY_PADDING_Y, ENTRY_PADDING_X])
        .style(move |_, status| entry_style(palette, status));

    if enabled {
        entry_button =
            entry_button.on_press(ResolverEvent::HistorySelected { index });
    }

    entry_button.into()
}

fn entry_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            let mut color = palette.dim_blue;
            color.a = 0.5;
            Some(color.into())
        },
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.foreground,
        ..Default::default()
    }
}
