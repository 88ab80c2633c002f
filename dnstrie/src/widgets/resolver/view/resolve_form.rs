use iced::widget::{button, container, row, text, text_input};
use iced::{Element, Length, Theme, alignment};

use crate::style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::resolver::event::ResolverEvent;
use crate::widgets::resolver::model::ResolverViewModel;

const INPUT_PLACEHOLDER: &str = "Enter domain (e.g., google.com)";
const INPUT_FONT_SIZE: f32 = 14.0;
const INPUT_PADDING_X: f32 = 10.0;
const INPUT_PADDING_Y: f32 = 6.0;

const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_MIN_WIDTH: f32 = 96.0;
const BUTTON_PADDING_X: f32 = 14.0;
const BUTTON_FONT_SIZE: f32 = 14.0;

const ROW_SPACING: f32 = 8.0;

/// Props for the domain input row.
pub(crate) struct ResolveFormProps<'a> {
    pub(crate) vm: ResolverViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the input field with the Resolve and Refresh actions.
pub(crate) fn view(
    props: ResolveFormProps<'_>,
) -> Element<'_, ResolverEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let input = text_input(INPUT_PLACEHOLDER, props.vm.input)
        .on_input(|value| ResolverEvent::InputChanged { value })
        .on_submit(ResolverEvent::Submit)
        .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
        .size(INPUT_FONT_SIZE)
        .width(Length::Fill)
        .style(style::text_input_style(props.theme));

    let resolve_label = if props.vm.is_loading {
        "Loading..."
    } else {
        "Resolve"
    };
    let resolve = action_button(
        resolve_label,
        props.vm.can_submit,
        ResolverEvent::Submit,
        palette,
    );
    let refresh = action_button(
        "Refresh",
        true,
        ResolverEvent::RefreshSnapshot,
        palette,
    );

    row![input, resolve, refresh]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    enabled: bool,
    event: ResolverEvent,
    palette: &IcedColorPalette,
) -> Element<'a, ResolverEvent, Theme, iced::Renderer> {
    let palette = palette.clone();
    let content = container(
        text(label)
            .size(BUTTON_FONT_SIZE)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let mut button = button(content)
        .padding([0.0, BUTTON_PADDING_X])
        .width(Length::Fixed(BUTTON_MIN_WIDTH))
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(move |_, status| style::button_style(&palette, status, enabled));

    if enabled {
        button = button.on_press(event);
    }

    button.into()
}
