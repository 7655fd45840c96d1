//! Host-form contract and an in-memory host.
//!
//! A [`crate::RangeField`] never owns its value. It reads and writes it
//! through [`FieldHost`], the small capability surface a form framework
//! provides for each registered field. [`FormFieldState`] is the host used
//! by [`crate::Form`] and the terminal front end.

use serde::{Deserialize, Serialize};

use crate::value::RangeValue;

/// Value tracking, enablement and focus, as seen by a field.
pub trait FieldHost {
    /// Current tracked value. `None` until the field initializes it.
    fn value(&self) -> Option<RangeValue>;

    /// Force-set the value without marking the field dirty or notifying
    /// listeners. Used for initialization and programmatic resets.
    fn set_value(&mut self, value: Option<RangeValue>);

    /// Set the value from user interaction: marks dirty and notifies.
    fn did_change(&mut self, value: Option<RangeValue>);

    /// Effective enablement (field flag combined with any form flag).
    fn is_enabled(&self) -> bool;

    fn request_focus(&mut self);
}

/// When validation re-runs on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutovalidateMode {
    /// Only on explicit `validate()`.
    #[default]
    Disabled,
    /// After every value update, including programmatic ones.
    Always,
    /// After user-driven changes only.
    OnUserInteraction,
}

/// Returns an error message when the value is not acceptable.
pub type Validator = Box<dyn Fn(Option<RangeValue>) -> Option<String>>;
/// Maps the value to what `save()` reports.
pub type ValueTransformer = Box<dyn Fn(Option<RangeValue>) -> serde_json::Value>;
pub type SavedHook = Box<dyn FnMut(&serde_json::Value)>;
pub type ResetHook = Box<dyn FnMut()>;
pub type ChangedHook = Box<dyn FnMut(Option<RangeValue>)>;

/// Per-field state a form keeps for one registered range field.
pub struct FormFieldState {
    name: String,
    value: Option<RangeValue>,
    initial_value: Option<RangeValue>,
    enabled: bool,
    form_enabled: bool,
    dirty: bool,
    has_focus: bool,
    error_text: Option<String>,
    autovalidate_mode: AutovalidateMode,
    validator: Option<Validator>,
    value_transformer: Option<ValueTransformer>,
    on_saved: Option<SavedHook>,
    on_reset: Option<ResetHook>,
    on_changed: Option<ChangedHook>,
}

impl std::fmt::Debug for FormFieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldState")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("initial_value", &self.initial_value)
            .field("enabled", &self.is_enabled())
            .field("dirty", &self.dirty)
            .field("has_focus", &self.has_focus)
            .field("error_text", &self.error_text)
            .finish_non_exhaustive()
    }
}

impl FormFieldState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            initial_value: None,
            enabled: true,
            form_enabled: true,
            dirty: false,
            has_focus: false,
            error_text: None,
            autovalidate_mode: AutovalidateMode::Disabled,
            validator: None,
            value_transformer: None,
            on_saved: None,
            on_reset: None,
            on_changed: None,
        }
    }

    /// Starting value; also what `reset()` restores.
    pub fn with_initial_value(mut self, value: Option<RangeValue>) -> Self {
        self.initial_value = value;
        self.value = value;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_autovalidate_mode(mut self, mode: AutovalidateMode) -> Self {
        self.autovalidate_mode = mode;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_value_transformer(mut self, transformer: ValueTransformer) -> Self {
        self.value_transformer = Some(transformer);
        self
    }

    pub fn on_saved(mut self, hook: SavedHook) -> Self {
        self.on_saved = Some(hook);
        self
    }

    pub fn on_reset(mut self, hook: ResetHook) -> Self {
        self.on_reset = Some(hook);
        self
    }

    pub fn on_changed(mut self, hook: ChangedHook) -> Self {
        self.on_changed = Some(hook);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_value(&self) -> Option<RangeValue> {
        self.initial_value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error_text.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error_text.is_some()
    }

    pub fn autovalidate_mode(&self) -> AutovalidateMode {
        self.autovalidate_mode
    }

    /// Field-level flag only; see [`FieldHost::is_enabled`] for the effective one.
    pub fn field_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_form_enabled(&mut self, enabled: bool) {
        self.form_enabled = enabled;
    }

    pub fn blur(&mut self) {
        self.has_focus = false;
    }

    /// Run the validator and store its message. Returns true when valid.
    pub fn validate(&mut self) -> bool {
        self.error_text = self.validator.as_ref().and_then(|v| v(self.value));
        if let Some(err) = &self.error_text {
            log::debug!("field {:?} invalid: {err}", self.name);
        }
        self.error_text.is_none()
    }

    /// Transformed value, after notifying `on_saved`.
    pub fn save(&mut self) -> serde_json::Value {
        let saved = match &self.value_transformer {
            Some(transform) => transform(self.value),
            None => serde_json::to_value(self.value).unwrap_or(serde_json::Value::Null),
        };
        if let Some(hook) = self.on_saved.as_mut() {
            hook(&saved);
        }
        saved
    }

    /// Restore the initial value and clear dirty/error state.
    pub fn reset(&mut self) {
        self.value = self.initial_value;
        self.error_text = None;
        self.dirty = false;
        if let Some(hook) = self.on_reset.as_mut() {
            hook();
        }
    }
}

impl FieldHost for FormFieldState {
    fn value(&self) -> Option<RangeValue> {
        self.value
    }

    fn set_value(&mut self, value: Option<RangeValue>) {
        self.value = value;
        if self.autovalidate_mode == AutovalidateMode::Always {
            self.validate();
        }
    }

    fn did_change(&mut self, value: Option<RangeValue>) {
        self.value = value;
        self.dirty = true;
        if let Some(hook) = self.on_changed.as_mut() {
            hook(value);
        }
        if self.autovalidate_mode != AutovalidateMode::Disabled {
            self.validate();
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled && self.form_enabled
    }

    fn request_focus(&mut self) {
        self.has_focus = true;
    }
}
