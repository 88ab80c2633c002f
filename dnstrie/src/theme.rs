use iced::theme::Palette;
use iced::{Color, Theme};

/// Hex color palette for the application chrome.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) overlay: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) magenta: String,
    pub(crate) dim_foreground: String,
    pub(crate) dim_blue: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            overlay: String::from("#232530"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            magenta: String::from("#C678DD"),
            dim_foreground: String::from("#6B7280"),
            dim_blue: String::from("#2F638F"),
        }
    }
}

/// Palette converted to `iced` colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) overlay: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) magenta: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) dim_blue: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            overlay: parse_hex_color(&p.overlay),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            magenta: parse_hex_color(&p.magenta),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            dim_blue: parse_hex_color(&p.dim_blue),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();

        Self {
            id: String::from("default"),
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.dim_blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Parse `#RRGGBB` into a color, falling back to white.
fn parse_hex_color(value: &str) -> Color {
    let hex = value.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };

    match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::from_rgb8(r, g, b),
        _ => {
            log::warn!("invalid palette color {value}");
            Color::WHITE
        },
    }
}
