//! Theme system for TUI colors and styles
//!
//! Colors line up with the CLI output in `display`: names cyan, namespaces
//! dimmed, errors red.

use iocraft::prelude::Color;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Listing colors
    pub name: Color,
    pub namespace: Color,
    pub age: Color,

    // Status colors
    pub error: Color,
    pub success: Color,
    pub refreshing: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub selected_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: Color::Cyan,
            namespace: GREY,
            age: GREY,

            error: Color::Red,
            success: Color::Green,
            refreshing: Color::Yellow,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            selected_background: Color::Rgb {
                r: 40,
                g: 50,
                b: 80,
            },
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
