//! Dual-thumb horizontal slider widget.
//!
//! Layout within its area: the bottom row is the track; the row above it,
//! when present, carries the value-indicator labels during a drag.
//!
//! ```text
//!      from      to
//! ───●━━━━━━━━━━●──────
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use rangefield_core::{RangeValue, SliderConfig, Thumb};

use crate::theme::Theme;

const TRACK_INACTIVE: &str = "─";
const TRACK_ACTIVE: &str = "━";
const TICK_INACTIVE: &str = "┼";
const TICK_ACTIVE: &str = "╋";
const THUMB: &str = "●";
const THUMB_SELECTED: &str = "◆";

/// Column offset of `value` on a track `width` cells wide.
pub fn thumb_column(config: &SliderConfig, value: f64, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    (config.fraction(value) * f64::from(width - 1)).round() as u16
}

/// Raw value under an absolute terminal `column` on `track`.
pub fn value_at_column(config: &SliderConfig, track: Rect, column: u16) -> f64 {
    if track.width <= 1 {
        return config.value_at(0.0);
    }
    let offset = column.saturating_sub(track.x).min(track.width - 1);
    config.value_at(f64::from(offset) / f64::from(track.width - 1))
}

/// The row the track is drawn on.
pub fn track_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    }
}

pub struct RangeSlider<'a> {
    config: &'a SliderConfig,
    value: RangeValue,
    theme: &'a Theme,
    enabled: bool,
    selected: Option<Thumb>,
    indicator: Option<(&'a str, &'a str)>,
}

impl<'a> RangeSlider<'a> {
    pub fn new(config: &'a SliderConfig, value: RangeValue, theme: &'a Theme) -> Self {
        Self {
            config,
            value,
            theme,
            enabled: true,
            selected: None,
            indicator: None,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Thumb drawn as the keyboard target.
    pub fn selected(mut self, thumb: Option<Thumb>) -> Self {
        self.selected = thumb;
        self
    }

    pub fn indicator(mut self, labels: Option<(&'a str, &'a str)>) -> Self {
        self.indicator = labels;
        self
    }

    fn tick_columns(&self, width: u16) -> Vec<u16> {
        match self.config.effective_divisions() {
            // Ticks only when every one gets its own cell.
            Some(d) if u32::from(width) > d && !self.config.is_inert() => (0..=d)
                .map(|i| {
                    let v = self.config.min + (self.config.max - self.config.min) * f64::from(i) / f64::from(d);
                    thumb_column(self.config, v, width)
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl<'a> Widget for RangeSlider<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let track = track_area(area);
        let width = track.width;
        let start = thumb_column(self.config, self.value.start, width);
        let end = thumb_column(self.config, self.value.end, width);

        let active = self.theme.active_track(self.config.active_color, self.enabled);
        let inactive = self.theme.inactive_track(self.config.inactive_color, self.enabled);
        let ticks = self.tick_columns(width);

        for i in 0..width {
            let between = i >= start && i <= end;
            let is_tick = ticks.contains(&i);
            let (symbol, color) = match (between, is_tick) {
                (true, true) => (TICK_ACTIVE, active),
                (true, false) => (TRACK_ACTIVE, active),
                (false, true) => (TICK_INACTIVE, inactive),
                (false, false) => (TRACK_INACTIVE, inactive),
            };
            if let Some(cell) = buf.cell_mut((track.x + i, track.y)) {
                cell.set_symbol(symbol).set_fg(color);
            }
        }

        for (thumb, column) in [(Thumb::Start, start), (Thumb::End, end)] {
            let selected = self.selected == Some(thumb);
            let symbol = if selected { THUMB_SELECTED } else { THUMB };
            let color = self.theme.thumb_color(selected, self.enabled);
            if let Some(cell) = buf.cell_mut((track.x + column, track.y)) {
                cell.set_symbol(symbol).set_fg(color);
            }
        }

        if let Some((start_label, end_label)) = self.indicator {
            if area.height < 2 {
                return;
            }
            let row = track.y - 1;
            let style = Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD);
            for (label, column) in [(start_label, start), (end_label, end)] {
                let len = (label.chars().count() as u16).min(width);
                let x = column.saturating_sub(len / 2).min(width - len);
                buf.set_stringn(track.x + x, row, label, usize::from(len), style);
            }
        }
    }
}
