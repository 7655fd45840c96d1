//! A minimal form container: range fields registered by unique name,
//! with bulk save/validate/reset, a form-level enable flag and single focus.

use std::collections::BTreeMap;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::field::RangeField;
use crate::host::{FieldHost, FormFieldState};
use crate::value::RangeValue;

/// A registered field and the host state tracking its value.
#[derive(Debug)]
pub struct FormEntry {
    pub field: RangeField,
    pub state: FormFieldState,
}

#[derive(Debug)]
pub struct Form {
    entries: Vec<FormEntry>,
    enabled: bool,
    focused: Option<usize>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            enabled: true,
            focused: None,
        }
    }

    pub fn from_config(config: &FormConfig) -> Result<Self, FormError> {
        let mut form = Self::new();
        for field_config in &config.fields {
            form.register(RangeField::from_config(field_config))?;
        }
        Ok(form)
    }

    /// Add a field; its state is created from the field's host options.
    pub fn register(&mut self, mut field: RangeField) -> Result<usize, FormError> {
        if self.index_of(field.name()).is_some() {
            return Err(FormError::DuplicateField(field.name().to_string()));
        }
        let mut state = field.create_state();
        state.set_form_enabled(self.enabled);
        self.entries.push(FormEntry { field, state });
        Ok(self.entries.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&FormEntry> {
        self.entries.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.field.name() == name)
    }

    pub fn get(&self, name: &str) -> Result<&FormEntry, FormError> {
        self.index_of(name)
            .map(|i| &self.entries[i])
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        for entry in &mut self.entries {
            entry.state.set_form_enabled(enabled);
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Give focus to one field, taking it from whichever had it.
    pub fn focus(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        if let Some(prev) = self.focused.filter(|p| *p != index) {
            self.entries[prev].state.blur();
        }
        self.entries[index].state.request_focus();
        self.focused = Some(index);
    }

    pub fn focus_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = self.focused.map_or(0, |i| (i + 1) % self.entries.len());
        self.focus(next);
    }

    pub fn focus_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        let prev = self.focused.map_or(len - 1, |i| (i + len - 1) % len);
        self.focus(prev);
    }

    /// Run `f` against one field and its state, then settle focus if the
    /// field claimed it.
    pub fn with_entry<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut RangeField, &mut FormFieldState) -> R,
    ) -> Option<R> {
        let entry = self.entries.get_mut(index)?;
        let out = f(&mut entry.field, &mut entry.state);
        if self.entries[index].state.has_focus() && self.focused != Some(index) {
            self.focus(index);
        }
        Some(out)
    }

    /// First-render initialization for every field.
    pub fn initialize(&mut self) {
        for entry in &mut self.entries {
            entry.field.initialize(&mut entry.state);
        }
    }

    pub fn value(&self, name: &str) -> Result<Option<RangeValue>, FormError> {
        Ok(self.get(name)?.state.value())
    }

    /// Programmatic update; clamped by the field, does not mark dirty.
    pub fn set_value(&mut self, name: &str, value: Option<RangeValue>) -> Result<(), FormError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let entry = &mut self.entries[index];
        entry.field.set_value(&mut entry.state, value);
        Ok(())
    }

    /// Validate every field; true when all pass.
    pub fn validate(&mut self) -> bool {
        // No short-circuit: every field gets its error text refreshed.
        self.entries
            .iter_mut()
            .fold(true, |ok, entry| entry.state.validate() && ok)
    }

    /// Saved (transformed) value of every field, keyed by name.
    pub fn save(&mut self) -> BTreeMap<String, serde_json::Value> {
        let saved: BTreeMap<_, _> = self
            .entries
            .iter_mut()
            .map(|entry| (entry.field.name().to_string(), entry.state.save()))
            .collect();
        log::info!("saved {} field(s)", saved.len());
        saved
    }

    /// Save only when every field validates.
    pub fn save_and_validate(&mut self) -> Option<BTreeMap<String, serde_json::Value>> {
        if self.validate() {
            Some(self.save())
        } else {
            log::info!("save skipped: form has invalid fields");
            None
        }
    }

    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.state.reset();
            entry.field.initialize(&mut entry.state);
        }
        log::info!("form reset");
    }

    pub fn is_dirty(&self) -> bool {
        self.entries.iter().any(|e| e.state.is_dirty())
    }

    /// Current raw values, keyed by name.
    pub fn values(&self) -> BTreeMap<String, RangeValue> {
        self.entries
            .iter()
            .filter_map(|e| e.state.value().map(|v| (e.field.name().to_string(), v)))
            .collect()
    }
}
