//! Application state: single-owner, main-thread only.

use std::collections::HashMap;
use std::path::PathBuf;

use ratatui::layout::Rect;
use rangefield_core::{FieldHost, Form, FormConfig, FormError};

use crate::persistence;
use crate::theme::Theme;
use crate::ui::widgets::FieldPresentation;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Pointer gesture in progress: which field and the track it started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    pub index: usize,
    pub track: Rect,
}

pub struct AppState {
    pub form: Form,
    pub title: String,
    /// Per-field slot styles and overrides, keyed by field name.
    pub presentations: HashMap<String, FieldPresentation>,
    pub theme: Theme,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
    /// Last drawn frame area; pointer hit-testing uses it.
    pub viewport: Rect,
    pub drag: Option<ActiveDrag>,
    /// Where saved values go. `None` keeps them in memory only.
    pub state_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(form: Form, title: impl Into<String>) -> Self {
        Self {
            form,
            title: title.into(),
            presentations: HashMap::new(),
            theme: Theme::default(),
            running: true,
            status_message: None,
            viewport: Rect::default(),
            drag: None,
            state_path: None,
        }
    }

    pub fn from_config(config: &FormConfig) -> Result<Self, FormError> {
        let form = Form::from_config(config)?;
        let title = config.title.clone().unwrap_or_else(|| "Range fields".into());
        let mut app = Self::new(form, title);
        app.form.initialize();
        app.form.focus_next();
        Ok(app)
    }

    pub fn with_state_path(mut self, path: PathBuf) -> Self {
        self.state_path = Some(path);
        self
    }

    pub fn with_presentation(mut self, name: impl Into<String>, presentation: FieldPresentation) -> Self {
        self.presentations.insert(name.into(), presentation);
        self
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Success));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        log::error!("{msg}");
        self.status_message = Some((msg, StatusLevel::Error));
    }

    /// Nudge the focused field's active thumb.
    pub fn step_focused(&mut self, steps: i32) {
        let Some(index) = self.form.focused() else {
            return;
        };
        let changed = self
            .form
            .with_entry(index, |field, state| field.step(state, steps))
            .unwrap_or(false);
        if !changed && !self.focused_enabled() {
            self.set_warning("Field is disabled");
        }
    }

    pub fn toggle_thumb(&mut self) {
        if let Some(index) = self.form.focused() {
            self.form.with_entry(index, |field, _| field.toggle_thumb());
        }
    }

    /// Cycle the focused field's label policy.
    pub fn cycle_display(&mut self) {
        let Some(index) = self.form.focused() else {
            return;
        };
        if let Some(policy) = self.form.with_entry(index, |field, _| {
            let next = field.display_values().cycle();
            field.set_display_values(next);
            next
        }) {
            self.set_status(format!("Values: {policy:?}"));
        }
    }

    pub fn toggle_form_enabled(&mut self) {
        let enabled = !self.form.is_enabled();
        self.form.set_enabled(enabled);
        self.set_status(if enabled { "Form enabled" } else { "Form disabled" });
    }

    pub fn toggle_field_enabled(&mut self) {
        let Some(index) = self.form.focused() else {
            return;
        };
        if let Some((name, enabled)) = self.form.with_entry(index, |field, state| {
            let enabled = !state.field_enabled();
            state.set_enabled(enabled);
            (field.name().to_string(), enabled)
        }) {
            let verb = if enabled { "enabled" } else { "disabled" };
            self.set_status(format!("{name} {verb}"));
        }
    }

    fn focused_enabled(&self) -> bool {
        self.form
            .focused()
            .and_then(|i| self.form.entry(i))
            .is_some_and(|e| e.state.is_enabled())
    }

    /// Validate, save, and persist the raw values.
    pub fn save(&mut self) {
        let Some(saved) = self.form.save_and_validate() else {
            self.set_error("Fix the highlighted fields before saving");
            return;
        };
        let Some(path) = self.state_path.clone() else {
            self.set_success(format!("Saved {} field(s)", saved.len()));
            return;
        };
        let persisted = persistence::extract(&self.form);
        match persistence::save(&path, &persisted) {
            Ok(()) => self.set_success(format!("Saved {} field(s) to {}", saved.len(), path.display())),
            Err(err) => self.set_error(format!("Save failed: {err:#}")),
        }
    }

    /// Write the current raw values without validating. Returns false when
    /// nothing was written.
    pub fn persist_on_exit(&self) -> bool {
        let Some(path) = &self.state_path else {
            return false;
        };
        match persistence::save(path, &persistence::extract(&self.form)) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("could not write {} on exit: {err:#}", path.display());
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.drag = None;
        self.set_status("Form reset");
    }
}
