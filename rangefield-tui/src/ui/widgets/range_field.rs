//! Full range field: bordered decoration, slider, label row, helper/error line.
//!
//! ```text
//! ┌ Price * ─────────────────────────┐
//! │      from          to            │
//! │────●━━━━━━━━━━━━━━●──────────────│
//! │0         500 - 2.5K           5K │
//! │Drag or use h/l                   │
//! └──────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use rangefield_core::{FieldHost, FormFieldState, RangeField};

use crate::theme::Theme;
use crate::ui::widgets::label_row::{LabelRow, TextStyles, ValueWidgets};
use crate::ui::widgets::slider::{track_area, RangeSlider};

/// Per-field terminal presentation: slot styles and slot overrides.
#[derive(Default)]
pub struct FieldPresentation {
    pub styles: Option<TextStyles>,
    pub widgets: ValueWidgets,
}

/// Sub-areas of one rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAreas {
    pub outer: Rect,
    /// Indicator row plus track.
    pub slider: Rect,
    pub track: Rect,
    pub labels: Option<Rect>,
    pub footer: Option<Rect>,
}

fn footer_text<'a>(field: &'a RangeField, state: &'a FormFieldState) -> Option<&'a str> {
    state
        .error_text()
        .or(field.decoration().helper_text.as_deref())
}

/// Rows the field needs, borders included.
pub fn field_height(field: &RangeField, state: &FormFieldState) -> u16 {
    let labels = u16::from(!field.display_values().slots().is_empty());
    let footer = u16::from(footer_text(field, state).is_some());
    2 + 2 + labels + footer
}

pub fn field_areas(field: &RangeField, state: &FormFieldState, area: Rect) -> FieldAreas {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let mut rows = (inner.y..inner.bottom()).map(|y| Rect::new(inner.x, y, inner.width, 1));

    let indicator = rows.next();
    let track_row = rows.next();
    let slider = match (indicator, track_row) {
        (Some(top), Some(bottom)) => top.union(bottom),
        (Some(only), None) => only,
        _ => Rect::new(inner.x, inner.y, inner.width, 0),
    };
    let labels = if field.display_values().slots().is_empty() {
        None
    } else {
        rows.next()
    };
    let footer = footer_text(field, state).and_then(|_| rows.next());

    FieldAreas {
        outer: area,
        slider,
        track: track_area(slider),
        labels,
        footer,
    }
}

pub struct RangeFieldView<'a> {
    field: &'a RangeField,
    state: &'a FormFieldState,
    theme: &'a Theme,
    presentation: Option<&'a FieldPresentation>,
}

impl<'a> RangeFieldView<'a> {
    pub fn new(field: &'a RangeField, state: &'a FormFieldState, theme: &'a Theme) -> Self {
        Self {
            field,
            state,
            theme,
            presentation: None,
        }
    }

    pub fn presentation(mut self, presentation: Option<&'a FieldPresentation>) -> Self {
        self.presentation = presentation;
        self
    }

    fn title(&self) -> Line<'static> {
        let name = self
            .field
            .decoration()
            .label
            .clone()
            .unwrap_or_else(|| self.field.name().to_string());
        let style = self.theme.title(self.state.has_focus(), self.state.is_enabled());
        let mut spans = vec![Span::styled(format!(" {name} "), style)];
        if self.state.is_dirty() {
            spans.push(Span::styled("* ", Style::default().fg(self.theme.warning)));
        }
        if !self.state.is_enabled() {
            spans.push(Span::styled("(disabled) ", Style::default().fg(self.theme.muted)));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for RangeFieldView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let areas = field_areas(self.field, self.state, area);
        let focused = self.state.has_focus();
        let enabled = self.state.is_enabled();

        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(focused))
            .title(self.title())
            .style(Style::default().bg(self.theme.background))
            .render(area, buf);

        let value = self.field.value(self.state);
        RangeSlider::new(self.field.slider(), value, self.theme)
            .enabled(enabled)
            .selected(focused.then_some(self.field.active_thumb()))
            .indicator(self.field.value_indicator())
            .render(areas.slider, buf);

        if let Some(labels_area) = areas.labels {
            let slots = self.field.label_slots(value);
            let default_widgets = ValueWidgets::default();
            let (styles, widgets) = match self.presentation {
                Some(p) => (
                    p.styles.unwrap_or_else(|| TextStyles::new(self.theme.label_style())),
                    &p.widgets,
                ),
                None => (TextStyles::new(self.theme.label_style()), &default_widgets),
            };
            LabelRow::new(&slots, widgets, &styles).render(labels_area, buf);
        }

        if let Some(footer_area) = areas.footer {
            let (text, style) = match self.state.error_text() {
                Some(err) => (err, Style::default().fg(self.theme.negative)),
                None => (
                    footer_text(self.field, self.state).unwrap_or_default(),
                    Style::default().fg(self.theme.muted),
                ),
            };
            buf.set_stringn(
                footer_area.x,
                footer_area.y,
                text,
                usize::from(footer_area.width),
                style,
            );
        }
    }
}
