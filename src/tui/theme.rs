//! Theme system for TUI colors and styles
//!
//! Two palettes, light and dark. The active one is a process-wide switch
//! flipped by the dark mode preference; components read it through
//! [`theme()`] on every render.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub bar: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selection: Color,
    pub price: Color,
    pub rating: Color,
    pub liked: Color,
    pub search_match: Color,
}

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Reset,
            bar: Color::Rgb {
                r: 210,
                g: 220,
                b: 240,
            },
            text: Color::Black,
            text_dimmed: GREY,
            border: GREY,
            border_focused: Color::Blue,
            highlight: Color::Blue,
            selection: Color::Rgb {
                r: 225,
                g: 232,
                b: 245,
            },
            price: Color::DarkGreen,
            rating: Color::DarkYellow,
            liked: Color::DarkGreen,
            search_match: Color::DarkYellow,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb {
                r: 24,
                g: 24,
                b: 28,
            },
            bar: Color::Rgb {
                r: 45,
                g: 50,
                b: 70,
            },
            text: Color::White,
            text_dimmed: GREY,
            border: GREY,
            border_focused: Color::Cyan,
            highlight: Color::Cyan,
            selection: Color::Rgb {
                r: 50,
                g: 55,
                b: 75,
            },
            price: Color::Green,
            rating: Color::Yellow,
            liked: Color::Green,
            search_match: Color::Yellow,
        }
    }
}

static DARK_MODE: AtomicBool = AtomicBool::new(false);
static LIGHT_THEME: LazyLock<Theme> = LazyLock::new(Theme::light);
static DARK_THEME: LazyLock<Theme> = LazyLock::new(Theme::dark);

/// Switch the global palette
pub fn set_dark_mode(dark: bool) {
    DARK_MODE.store(dark, Ordering::Relaxed);
}

pub fn is_dark_mode() -> bool {
    DARK_MODE.load(Ordering::Relaxed)
}

/// Get a reference to the active theme
pub fn theme() -> &'static Theme {
    if is_dark_mode() {
        &DARK_THEME
    } else {
        &LIGHT_THEME
    }
}

/// Label of the header button that switches to the other palette
pub fn toggle_label(dark: bool) -> &'static str {
    if dark { "☀ Light" } else { "☾ Dark" }
}
