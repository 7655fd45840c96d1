//! Top-level UI layout: form title, stacked range fields, status bar.

pub mod widgets;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use rangefield_core::Form;

use crate::app::{AppState, StatusLevel};
use crate::theme;
use crate::ui::widgets::{field_height, RangeFieldView};

const HINTS: &str = " Tab:next h/l:step H/L:x10 Space:thumb v:values s:save r:reset e/d:enable q:quit";

/// Where each part of the screen goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    /// One rect per registered field, in registration order. Fields that do
    /// not fit get an empty rect.
    pub fields: Vec<Rect>,
    pub status: Rect,
}

pub fn form_layout(area: Rect, form: &Form) -> FormLayout {
    let title = Rect::new(area.x, area.y, area.width, area.height.min(1));
    let status = Rect::new(
        area.x,
        area.bottom().saturating_sub(1).max(title.bottom()),
        area.width,
        area.height.saturating_sub(1).min(1),
    );

    let mut y = title.bottom();
    let fields = form
        .entries()
        .iter()
        .map(|entry| {
            let height = field_height(&entry.field, &entry.state);
            if y + height > status.y {
                return Rect::new(area.x, y, area.width, 0);
            }
            let rect = Rect::new(area.x, y, area.width, height);
            y += height;
            rect
        })
        .collect();

    FormLayout {
        title,
        fields,
        status,
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let layout = form_layout(f.area(), &app.form);

    let mut title = vec![Span::styled(format!(" {} ", app.title), theme::accent())];
    if app.form.is_dirty() {
        title.push(Span::styled("(modified)", theme::warning()));
    }
    if !app.form.is_enabled() {
        title.push(Span::styled(" (form disabled)", theme::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(title)), layout.title);

    for (entry, rect) in app.form.entries().iter().zip(&layout.fields) {
        if rect.is_empty() {
            continue;
        }
        let view = RangeFieldView::new(&entry.field, &entry.state, &app.theme)
            .presentation(app.presentations.get(entry.field.name()));
        f.render_widget(view, *rect);
    }

    render_status(f, layout.status, app);
}

fn render_status(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(HINTS, theme::muted())];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Success => theme::positive(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
