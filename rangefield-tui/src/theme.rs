//! Parrot/neon theme tokens for range fields.
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (active track, focus)
//! - **Track**: Slate (inactive track)
//! - **Negative**: Hot pink (validation errors)
//! - **Warning**: Neon orange (status warnings)
//! - **Muted**: Steel blue (disabled, helper text)

use ratatui::style::{Color, Modifier, Style};
use rangefield_core::Rgb;

/// Parrot/neon theme for range fields
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (active track, focus border)
    pub accent: Color,
    /// Slate (inactive track)
    pub track: Color,
    /// Thumb color when the field is not focused
    pub thumb: Color,
    /// Neon green (successful save)
    pub positive: Color,
    /// Hot pink (validation errors)
    pub negative: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Steel blue (disabled, helper text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (label row)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    /// Create the default Parrot/neon theme
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            track: Color::Rgb(70, 78, 92),
            thumb: Color::Rgb(230, 230, 230),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    pub fn color(rgb: Rgb) -> Color {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }

    /// Track color between the thumbs; configured color wins while enabled.
    pub fn active_track(&self, configured: Option<Rgb>, enabled: bool) -> Color {
        if !enabled {
            return self.muted;
        }
        configured.map(Self::color).unwrap_or(self.accent)
    }

    /// Track color outside the thumbs.
    pub fn inactive_track(&self, configured: Option<Rgb>, enabled: bool) -> Color {
        if !enabled {
            return self.track;
        }
        configured.map(Self::color).unwrap_or(self.track)
    }

    pub fn thumb_color(&self, highlighted: bool, enabled: bool) -> Color {
        match (enabled, highlighted) {
            (false, _) => self.muted,
            (true, true) => self.accent,
            (true, false) => self.thumb,
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.track)
        }
    }

    pub fn title(&self, focused: bool, enabled: bool) -> Style {
        match (enabled, focused) {
            (false, _) => Style::default().fg(self.muted),
            (true, true) => Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.text_primary),
        }
    }

    /// Default style for the min/current/max labels.
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn positive() -> Style {
    Style::default().fg(Theme::default().positive)
}
