use iced::widget::{Column, Space, container, row, text};
use iced::{Element, Font, Length, Theme, alignment};

use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::resolver::event::ResolverEvent;
use crate::widgets::resolver::model::ResolverViewModel;

const LABEL_FONT_SIZE: f32 = 13.0;
const ADDRESS_FONT_SIZE: f32 = 18.0;
const NOTE_FONT_SIZE: f32 = 13.0;
const PANEL_PADDING: f32 = 10.0;
const PANEL_SPACING: f32 = 6.0;
const LABEL_SPACING: f32 = 8.0;

/// Props for the result and note panel.
pub(crate) struct ResultPanelProps<'a> {
    pub(crate) vm: ResolverViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the resolved address and the note, if any.
pub(crate) fn view(
    props: ResultPanelProps<'_>,
) -> Element<'_, ResolverEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    if props.vm.address.is_none() && props.vm.note.is_none() {
        return Space::new().height(Length::Shrink).into();
    }

    let mut content = Column::new().spacing(PANEL_SPACING);

    if let Some(address) = props.vm.address {
        let label = text("IP Address:")
            .size(LABEL_FONT_SIZE)
            .color(palette.dim_foreground);
        let value = text(address)
            .font(Font::MONOSPACE)
            .size(ADDRESS_FONT_SIZE)
            .color(palette.green);
        content = content.push(
            row![label, value]
                .spacing(LABEL_SPACING)
                .align_y(alignment::Vertical::Center),
        );
    }

    if let Some(note) = props.vm.note {
        let color = if note.is_error() {
            palette.red
        } else {
            palette.yellow
        };
        content = content
            .push(text(note.message()).size(NOTE_FONT_SIZE).color(color));
    }

    container(content)
        .width(Length::Fill)
        .padding(PANEL_PADDING)
        .style(style::panel_style(palette))
        .into()
}
