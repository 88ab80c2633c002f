use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Theme};

use crate::theme::{IcedColorPalette, ThemeProps};

/// Return a scrollbar style closure with thin rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Return a container style for rows with a hover highlight.
pub(crate) fn hover_row_style(
    palette: &IcedColorPalette,
    is_hovered: bool,
) -> container::Style {
    let background = if is_hovered {
        let mut color = palette.overlay;
        color.a = 0.8;
        Some(color.into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

/// Return a panel container style on the overlay color.
pub(crate) fn panel_style(
    palette: &IcedColorPalette,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let background = palette.overlay;
    let foreground = palette.foreground;

    move |_| container::Style {
        background: Some(background.into()),
        text_color: Some(foreground),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Return a flat button style that dims when disabled.
pub(crate) fn button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    enabled: bool,
) -> button::Style {
    let base_color = if enabled {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => palette.blue,
            _ => palette.dim_blue,
        }
    } else {
        let mut color = palette.overlay;
        color.a = 0.4;
        color
    };

    let text_color = if enabled {
        palette.foreground
    } else {
        palette.dim_foreground
    };

    button::Style {
        background: Some(base_color.into()),
        text_color,
        border: Border {
            width: 0.0,
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Return a text input style with the palette selection color.
pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.selection = palette.dim_blue;
        style
    }
}
