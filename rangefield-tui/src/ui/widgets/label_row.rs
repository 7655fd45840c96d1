//! Min / current / max label row beneath the slider.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Widget,
};
use rangefield_core::{DisplaySlot, SlotLabel};

/// Replaces the default text of one slot. Receives the slot's override
/// argument (a formatted string) and returns what to draw.
pub type ValueWidget = Box<dyn Fn(&str) -> Span<'static>>;

/// Optional per-slot overrides.
#[derive(Default)]
pub struct ValueWidgets {
    pub min: Option<ValueWidget>,
    pub value: Option<ValueWidget>,
    pub max: Option<ValueWidget>,
}

impl ValueWidgets {
    pub fn for_slot(&self, slot: DisplaySlot) -> Option<&ValueWidget> {
        match slot {
            DisplaySlot::Min => self.min.as_ref(),
            DisplaySlot::Current => self.value.as_ref(),
            DisplaySlot::Max => self.max.as_ref(),
        }
    }
}

/// Slot text styles. Min and max fall back to `text`; current always uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyles {
    pub min: Option<Style>,
    pub text: Style,
    pub max: Option<Style>,
}

impl TextStyles {
    pub fn new(text: Style) -> Self {
        Self {
            min: None,
            text,
            max: None,
        }
    }

    pub fn for_slot(&self, slot: DisplaySlot) -> Style {
        match slot {
            DisplaySlot::Min => self.min.unwrap_or(self.text),
            DisplaySlot::Current => self.text,
            DisplaySlot::Max => self.max.unwrap_or(self.text),
        }
    }
}

/// What one slot draws: the override's span, or the styled default text.
pub fn slot_span(label: &SlotLabel, widgets: &ValueWidgets, styles: &TextStyles) -> Span<'static> {
    match widgets.for_slot(label.slot) {
        Some(widget) => widget(&label.override_arg),
        None => Span::styled(label.text.clone(), styles.for_slot(label.slot)),
    }
}

/// Shrink `span` to `width` cells, marking the cut with an ellipsis.
/// `None` when nothing legible fits.
fn fit(span: Span<'static>, width: u16) -> Option<Span<'static>> {
    let width = usize::from(width);
    if span.width() <= width {
        return Some(span);
    }
    if width < 2 {
        return None;
    }
    let kept: String = span.content.chars().take(width - 1).collect();
    Some(Span::styled(format!("{kept}…"), span.style))
}

/// Min hugs the left edge, max the right edge, current sits centered
/// between them. Neighbouring slots keep at least one blank cell apart;
/// current is truncated, and max dropped, before anything overlaps.
pub struct LabelRow<'a> {
    slots: &'a [SlotLabel],
    widgets: &'a ValueWidgets,
    styles: &'a TextStyles,
}

impl<'a> LabelRow<'a> {
    pub fn new(slots: &'a [SlotLabel], widgets: &'a ValueWidgets, styles: &'a TextStyles) -> Self {
        Self {
            slots,
            widgets,
            styles,
        }
    }

    fn span_for(&self, slot: DisplaySlot) -> Option<Span<'static>> {
        self.slots
            .iter()
            .find(|label| label.slot == slot)
            .map(|label| slot_span(label, self.widgets, self.styles))
    }
}

impl<'a> Widget for LabelRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        // Free columns are [left, right), relative to area.x.
        let mut left = 0;
        let mut right = area.width;

        if let Some(span) = self.span_for(DisplaySlot::Min) {
            let width = (span.width() as u16).min(area.width);
            if width > 0 {
                buf.set_span(area.x, area.y, &span, width);
                left = width + 1;
            }
        }

        if let Some(span) = self.span_for(DisplaySlot::Max) {
            let width = span.width() as u16;
            if width > 0 && left + width <= right {
                let x = right - width;
                buf.set_span(area.x + x, area.y, &span, width);
                right = x.saturating_sub(1);
            }
        }

        if right <= left {
            return;
        }
        if let Some(span) = self
            .span_for(DisplaySlot::Current)
            .and_then(|span| fit(span, right - left))
        {
            let width = span.width() as u16;
            let x = ((area.width - width) / 2).clamp(left, right - width);
            buf.set_span(area.x + x, area.y, &span, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::row_text;
    use ratatui::style::Color;

    fn label(slot: DisplaySlot, text: &str, arg: &str) -> SlotLabel {
        SlotLabel {
            slot,
            text: text.into(),
            override_arg: arg.into(),
        }
    }

    fn render(slots: &[SlotLabel], widgets: &ValueWidgets, styles: &TextStyles, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        LabelRow::new(slots, widgets, styles).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_positions_for_all_slots() {
        let slots = vec![
            label(DisplaySlot::Min, "0", "0"),
            label(DisplaySlot::Current, "0 - 0", "0"),
            label(DisplaySlot::Max, "1", "1"),
        ];
        let buf = render(&slots, &ValueWidgets::default(), &TextStyles::default(), 15);
        assert_eq!(row_text(&buf, 0), "0    0 - 0    1");
    }

    #[test]
    fn test_current_only_is_centered() {
        let slots = vec![label(DisplaySlot::Current, "2 - 4", "1")];
        let buf = render(&slots, &ValueWidgets::default(), &TextStyles::default(), 9);
        assert_eq!(row_text(&buf, 0), "  2 - 4  ");
    }

    #[test]
    fn test_style_fallback() {
        let text = Style::default().fg(Color::Green);
        let max = Style::default().fg(Color::Red);
        let styles = TextStyles {
            min: None,
            text,
            max: Some(max),
        };
        assert_eq!(styles.for_slot(DisplaySlot::Min), text);
        assert_eq!(styles.for_slot(DisplaySlot::Current), text);
        assert_eq!(styles.for_slot(DisplaySlot::Max), max);
    }

    #[test]
    fn test_override_receives_override_arg() {
        let widgets = ValueWidgets {
            value: Some(Box::new(|s: &str| Span::raw(format!("<{s}>")))),
            ..ValueWidgets::default()
        };
        let current = label(DisplaySlot::Current, "20 - 30", "10");
        let span = slot_span(&current, &widgets, &TextStyles::default());
        assert_eq!(span.content, "<10>");

        let min = label(DisplaySlot::Min, "10", "10");
        let span = slot_span(&min, &widgets, &TextStyles::default());
        assert_eq!(span.content, "10");
    }

    #[test]
    fn test_narrow_row_truncates_current_between_bounds() {
        let slots = vec![
            label(DisplaySlot::Min, "10.00", "10.00"),
            label(DisplaySlot::Current, "20.00 - 30.00", "10.00"),
            label(DisplaySlot::Max, "100.00", "100.00"),
        ];
        let buf = render(&slots, &ValueWidgets::default(), &TextStyles::default(), 20);
        assert_eq!(row_text(&buf, 0), "10.00 20.00 … 100.00");
    }

    #[test]
    fn test_current_dropped_when_no_room() {
        let slots = vec![
            label(DisplaySlot::Min, "10", "10"),
            label(DisplaySlot::Current, "20 - 30", "10"),
            label(DisplaySlot::Max, "100", "100"),
        ];
        let buf = render(&slots, &ValueWidgets::default(), &TextStyles::default(), 7);
        assert_eq!(row_text(&buf, 0), "10  100");
    }

    #[test]
    fn test_max_dropped_rather_than_overlapping_min() {
        let slots = vec![
            label(DisplaySlot::Min, "10.00", "10.00"),
            label(DisplaySlot::Max, "100.00", "100.00"),
        ];
        let buf = render(&slots, &ValueWidgets::default(), &TextStyles::default(), 8);
        assert_eq!(row_text(&buf, 0), "10.00   ");
    }

    #[test]
    fn test_empty_slots_draw_nothing() {
        let buf = render(&[], &ValueWidgets::default(), &TextStyles::default(), 5);
        assert_eq!(row_text(&buf, 0), "     ");
    }
}
