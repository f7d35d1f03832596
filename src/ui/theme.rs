//! Theme system for the star rating widget and demo
//! Supports both dark and light modes, plus the star palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Font weight for section titles
pub const BOLD_WEIGHT: Weight = Weight::Bold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf5f5f5);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background color - works on both dark and light backgrounds
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Error text color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xff6b6b)
    } else {
        color!(0xd32f2f)
    }
}

// ============================================================================
// Star Palette
// ============================================================================

/// Filled and half star color
pub const STAR_COLOR: Color = color!(0xfaca43);

/// Blank star color
pub const EMPTY_COLOR: Color = color!(0xbebebe);

/// Details caption text color
pub const DETAIL_COLOR: Color = color!(0x999999);

/// Colors used to draw one star widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPalette {
    pub star: Color,
    pub empty: Color,
    pub detail: Color,
}

impl Default for StarPalette {
    fn default() -> Self {
        Self {
            star: STAR_COLOR,
            empty: EMPTY_COLOR,
            detail: DETAIL_COLOR,
        }
    }
}

impl StarPalette {
    /// Same palette with a different star color
    pub fn with_star(self, star: Color) -> Self {
        Self { star, ..self }
    }

    /// Star color while a rating is being previewed on hover
    ///
    /// `progress` runs from 0 (resting) to 1 (fully highlighted).
    pub fn preview_star(&self, progress: f32) -> Color {
        mix(self.empty, self.star, 0.4 + 0.6 * progress.clamp(0.0, 1.0))
    }
}

/// Linear blend between two colors
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

/// Parse a `#rrggbb` or `rrggbb` hex color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::from_rgb8(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Demo section card
pub fn section_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Circular star button, transparent until hovered
pub fn star_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            ..base
        },
        _ => base,
    }
}

/// Text-only button
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => text_primary(theme),
        _ => text_secondary(theme),
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
