//! Dark brokerage theme tokens for the mock-trading TUI
//!
//! # Color Palette
//! - **Background**: Deep navy-charcoal (base layer)
//! - **Accent**: Brand blue (focus, active tab, brand)
//! - **Up**: Red (price rising, Korean market convention)
//! - **Down**: Blue (price falling)
//! - **Warning**: Amber (unavailable features, search misses)
//! - **Muted**: Slate gray (codes, hints, placeholders)

use ratatui::style::{Color, Modifier, Style};

use mocktrade_core::Direction;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    /// Active row / focused input background
    pub highlight: Color,
    pub accent: Color,
    pub up: Color,
    pub down: Color,
    pub warning: Color,
    pub muted: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::brokerage_dark()
    }
}

impl Theme {
    pub const fn brokerage_dark() -> Self {
        Self {
            background: Color::Rgb(23, 23, 28),
            highlight: Color::Rgb(44, 46, 56),
            accent: Color::Rgb(49, 130, 246),
            up: Color::Rgb(240, 68, 82),
            down: Color::Rgb(66, 133, 244),
            warning: Color::Rgb(255, 176, 32),
            muted: Color::Rgb(120, 126, 140),
            border: Color::Rgb(62, 64, 76),
            text_primary: Color::White,
            text_secondary: Color::Rgb(176, 180, 190),
        }
    }

    /// Color for a change figure; flat changes use secondary text.
    pub fn direction_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Flat => self.text_secondary,
        }
    }
}

pub const PALETTE: Theme = Theme::brokerage_dark();

/// Base layer painted under every pane.
pub fn base() -> Style {
    Style::default().bg(PALETTE.background)
}

pub fn text() -> Style {
    Style::default().fg(PALETTE.text_primary)
}

pub fn secondary() -> Style {
    Style::default().fg(PALETTE.text_secondary)
}

pub fn muted() -> Style {
    Style::default().fg(PALETTE.muted)
}

pub fn accent() -> Style {
    Style::default().fg(PALETTE.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(PALETTE.warning)
}

pub fn direction(direction: Direction) -> Style {
    Style::default().fg(PALETTE.direction_color(direction))
}

/// Background for the selected watchlist row.
pub fn active_row() -> Style {
    Style::default().bg(PALETTE.highlight)
}

pub fn panel_border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        Style::default().fg(PALETTE.border)
    }
}

pub fn panel_title(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        secondary().add_modifier(Modifier::BOLD)
    }
}

pub fn tab(active: bool) -> Style {
    if active {
        accent_bold().add_modifier(Modifier::UNDERLINED)
    } else {
        muted()
    }
}

pub fn button(kind: ButtonKind) -> Style {
    match kind {
        ButtonKind::Outline => secondary(),
        ButtonKind::Buy => Style::default()
            .fg(PALETTE.text_primary)
            .bg(PALETTE.up)
            .add_modifier(Modifier::BOLD),
        ButtonKind::Sell => Style::default()
            .fg(PALETTE.text_primary)
            .bg(PALETTE.down)
            .add_modifier(Modifier::BOLD),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Outline,
    Buy,
    Sell,
}
