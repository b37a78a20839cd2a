//! Color palette (Catppuccin Mocha).

use ratatui::style::Color;

use crate::notify::ToastKind;

/// Application color palette.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Background behind modals.
    pub mantle: Color,
    /// Darkest shade; text on highlighted rows.
    pub crust: Color,
    /// Panel borders.
    pub surface2: Color,
    /// Muted labels and titles.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text.
    pub subtext0: Color,
    /// Focus accent.
    pub sapphire: Color,
    /// Headings.
    pub mauve: Color,
    /// Success.
    pub green: Color,
    /// Warning.
    pub yellow: Color,
    /// Error.
    pub red: Color,
    /// Selection.
    pub lavender: Color,
}

const MOCHA: Theme = Theme {
    base: Color::Rgb(30, 30, 46),        // #1e1e2e
    mantle: Color::Rgb(24, 24, 37),      // #181825
    crust: Color::Rgb(17, 17, 27),       // #11111b
    surface2: Color::Rgb(88, 91, 112),   // #585b70
    overlay1: Color::Rgb(127, 132, 156), // #7f849c
    text: Color::Rgb(205, 214, 244),     // #cdd6f4
    subtext0: Color::Rgb(166, 173, 200), // #a6adc8
    sapphire: Color::Rgb(116, 199, 236), // #74c7ec
    mauve: Color::Rgb(203, 166, 247),    // #cba6f7
    green: Color::Rgb(166, 227, 161),    // #a6e3a1
    yellow: Color::Rgb(249, 226, 175),   // #f9e2af
    red: Color::Rgb(243, 139, 168),      // #f38ba8
    lavender: Color::Rgb(180, 190, 254), // #b4befe
};

/// Active palette.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}

impl Theme {
    /// Accent color for a toast of `kind`.
    #[must_use]
    pub const fn toast_color(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => self.green,
            ToastKind::Error => self.red,
            ToastKind::Info => self.sapphire,
            ToastKind::Warning => self.yellow,
        }
    }
}
