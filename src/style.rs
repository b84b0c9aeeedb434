//! Style definitions for the view.
//!
//! A small fluent [`Style`] value (attributes, colors, fixed-width centering)
//! and the [`Styles`] bundle the view renders with. Padding is computed from
//! display width, not byte length, so wide glyphs center correctly.

use colored::{Color, ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

/// Accent green used by the banner and the ceiling state.
pub const GREEN: Color = Color::TrueColor {
    r: 49,
    g: 196,
    b: 141,
};

/// Muted grey for chrome text.
pub const LIGHT_GREY: Color = Color::TrueColor {
    r: 156,
    g: 163,
    b: 174,
};

/// Green of the add control.
pub const ADD_GREEN: Color = Color::TrueColor { r: 5, g: 218, b: 9 };

/// Red of the subtract control.
pub const SUBTRACT_RED: Color = Color::TrueColor {
    r: 251,
    g: 44,
    b: 44,
};

/// A terminal style: attributes, colors, and an optional fixed width the
/// rendered text is centered within.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    bold: bool,
    faint: bool,
    italic: bool,
    fg: Option<Color>,
    bg: Option<Color>,
    width: usize,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the text bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Renders the text faint.
    #[must_use]
    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Renders the text italic.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Centers the rendered text within a fixed width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Applies the style to the given text.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut styled = ColoredString::from(text);
        if let Some(fg) = self.fg {
            styled = styled.color(fg);
        }
        if let Some(bg) = self.bg {
            styled = styled.on_color(bg);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.faint {
            styled = styled.dimmed();
        }
        if self.italic {
            styled = styled.italic();
        }

        let text_width = UnicodeWidthStr::width(text);
        if self.width <= text_width {
            return styled.to_string();
        }

        let pad = self.width - text_width;
        let left = pad / 2;
        let right = pad - left;
        format!("{}{}{}", " ".repeat(left), styled, " ".repeat(right))
    }
}

/// Width the tally value and controls row are centered within.
const CONTENT_WIDTH: usize = 26;

/// All styles used by the view, in one place.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    /// Header title.
    pub title: Style,
    /// Status line under the title.
    pub status: Style,
    /// Tally value between the bounds.
    pub value: Style,
    /// Tally value at the ceiling.
    pub value_at_max: Style,
    /// Tally value at the floor.
    pub value_at_min: Style,
    /// The add control.
    pub button_add: Style,
    /// The subtract control.
    pub button_subtract: Style,
    /// The reset control.
    pub button_reset: Style,
    /// Any control that is currently unavailable.
    pub button_disabled: Style,
    /// The reset confirmation banner.
    pub banner: Style,
    /// The help line.
    pub help: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new().bold().foreground(LIGHT_GREY),
            status: Style::new().foreground(LIGHT_GREY),
            value: Style::new().bold().width(CONTENT_WIDTH),
            value_at_max: Style::new()
                .bold()
                .foreground(ADD_GREEN)
                .width(CONTENT_WIDTH),
            value_at_min: Style::new()
                .bold()
                .foreground(SUBTRACT_RED)
                .width(CONTENT_WIDTH),
            button_add: Style::new().foreground(ADD_GREEN),
            button_subtract: Style::new().foreground(SUBTRACT_RED),
            button_reset: Style::new(),
            button_disabled: Style::new().faint(),
            banner: Style::new().foreground(Color::Black).background(GREEN),
            help: Style::new().faint().italic(),
        }
    }
}
