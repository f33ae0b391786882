//! Theme system for the chart bar application
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Radians, Theme};

/// Weight used for chart button labels
pub const BUTTON_WEIGHT: Weight = Weight::Black;

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
    pub const BACKGROUND: Color = color!(0x1e1e1e);
    pub const SURFACE: Color = color!(0x2a2a2a);
    pub const BORDER: Color = color!(0x3a3a3a);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_PRIMARY: Color = color!(0xf0f0f0);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf2f2f2);
    pub const BORDER: Color = color!(0xcccccc);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Selection accent
pub const ACCENT: Color = color!(0x3b82c4);

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

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
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

/// Hover background with variable alpha
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha * 0.7)
    }
}

// ============================================================================
// Chart Bar
// ============================================================================

/// Grey `shade` at `alpha` composited over an opaque base
fn shade_over(base: u8, shade: u8, alpha: u8) -> Color {
    let a = alpha as f32 / 255.0;
    let v = (shade as f32 * a + base as f32 * (1.0 - a)) / 255.0;
    Color::from_rgb(v, v, v)
}

/// Gradient shade for the bar, darker while the window has focus
fn bar_shade(theme: &Theme, focused: bool) -> (u8, u8) {
    match (is_dark(theme), focused) {
        (false, true) => (255, 200),
        (false, false) => (255, 250),
        (true, true) => (30, 70),
        (true, false) => (30, 45),
    }
}

/// Vertical gradient behind the chart bar
///
/// The shade ramps through alpha 100, 180 and 255 from top to bottom.
pub fn chart_bar_background(theme: &Theme, focused: bool) -> Background {
    let (base, shade) = bar_shade(theme, focused);
    Background::Gradient(iced::Gradient::Linear(
        iced::gradient::Linear::new(Radians(std::f32::consts::PI)) // Top to Bottom
            .add_stop(0.0, shade_over(base, shade, 100))
            .add_stop(0.5, shade_over(base, shade, 180))
            .add_stop(1.0, shade_over(base, shade, 255)),
    ))
}

/// Top hairline of the chart bar
pub fn chart_bar_top_line(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x505050)
    } else {
        color!(0xe6e6e6)
    }
}

/// Bottom hairline of the chart bar
pub fn chart_bar_bottom_line(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba8(0, 0, 0, 0.8)
    } else {
        Color::from_rgba8(100, 100, 100, 200.0 / 255.0)
    }
}

/// Solid one-pixel line
pub fn hairline(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Chart button; `hover_progress` fades the hover highlight in and out
pub fn chart_button(
    theme: &Theme,
    status: button::Status,
    checked: bool,
    hover_progress: f32,
) -> button::Style {
    let background = if checked {
        Some(Background::Color(Color { a: 0.85, ..ACCENT }))
    } else {
        let alpha = match status {
            button::Status::Pressed => 0.2,
            _ => 0.12 * hover_progress,
        };
        Some(Background::Color(hover_bg_alpha(theme, alpha)))
    };

    button::Style {
        background,
        text_color: if checked {
            Color::WHITE
        } else {
            text_primary(theme)
        },
        border: Border {
            radius: 4.0.into(),
            width: if checked { 0.0 } else { 1.0 },
            color: if checked {
                Color::TRANSPARENT
            } else {
                Color {
                    a: 0.25 + 0.35 * hover_progress,
                    ..border_color(theme)
                }
            },
        },
        ..Default::default()
    }
}

/// Borderless scroller arrow
pub fn scroller_button(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => text_primary(theme),
        _ => text_muted(theme),
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

// ============================================================================
// Host Window
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Panel for the editing controls
pub fn controls_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(color!(0x4a95da))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color { a: 0.4, ..ACCENT })),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            ..base
        },
        _ => base,
    }
}
