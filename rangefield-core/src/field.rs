//! The range field: binds a dual-thumb slider to a host-tracked value.
//!
//! The field holds configuration and interaction state only. The value
//! lives in the host ([`FieldHost`]); every user-driven change goes through
//! [`RangeField::handle_change`], which is the single path that requests
//! focus (optionally) and notifies the host.
//!
//! Interaction order for one gesture:
//! `on_change_start(pre-value)` → `handle_change(..)`* → `on_change_end(final)`.

use crate::config::{CurrentOverrideArg, FieldConfig, SliderConfig};
use crate::display::{DisplayPolicy, DisplaySlot};
use crate::format::{CompactFormat, FixedFormat, NumberFormat};
use crate::host::{
    AutovalidateMode, FieldHost, FormFieldState, Validator, ValueTransformer,
};
use crate::slider::Thumb;
use crate::value::RangeValue;

/// Accessibility description for one thumb value.
pub type SemanticFormatter = Box<dyn Fn(f64) -> String>;
/// Fired at gesture start (pre-interaction value) and end (final value).
pub type InteractionCallback = Box<dyn FnMut(RangeValue)>;

/// Label and helper text drawn around the slider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub label: Option<String>,
    pub helper_text: Option<String>,
}

/// Text for one rendered display slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLabel {
    pub slot: DisplaySlot,
    /// Default text for the slot.
    pub text: String,
    /// What a slot override callback receives.
    pub override_arg: String,
}

/// Host-side options handed to the [`FormFieldState`] created for this field.
#[derive(Default)]
struct HostOptions {
    enabled: bool,
    autovalidate_mode: AutovalidateMode,
    validator: Option<Validator>,
    value_transformer: Option<ValueTransformer>,
}

pub struct RangeField {
    name: String,
    slider: SliderConfig,
    initial_value: Option<RangeValue>,
    display_values: DisplayPolicy,
    should_request_focus: bool,
    current_override_arg: CurrentOverrideArg,
    number_format: Box<dyn NumberFormat>,
    semantic_formatter: Option<SemanticFormatter>,
    on_change_start: Option<InteractionCallback>,
    on_change_end: Option<InteractionCallback>,
    decoration: Decoration,
    host_options: HostOptions,
    active_thumb: Thumb,
    dragging: Option<Thumb>,
}

impl std::fmt::Debug for RangeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeField")
            .field("name", &self.name)
            .field("slider", &self.slider)
            .field("initial_value", &self.initial_value)
            .field("display_values", &self.display_values)
            .field("should_request_focus", &self.should_request_focus)
            .field("active_thumb", &self.active_thumb)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

impl RangeField {
    pub fn new(name: impl Into<String>, slider: SliderConfig) -> Self {
        let name = name.into();
        slider.warn_if_malformed(&name);
        Self {
            name,
            slider,
            initial_value: None,
            display_values: DisplayPolicy::All,
            should_request_focus: false,
            current_override_arg: CurrentOverrideArg::default(),
            // Built once here and reused for every render.
            number_format: Box::new(CompactFormat::default()),
            semantic_formatter: None,
            on_change_start: None,
            on_change_end: None,
            decoration: Decoration::default(),
            host_options: HostOptions {
                enabled: true,
                ..HostOptions::default()
            },
            active_thumb: Thumb::Start,
            dragging: None,
        }
    }

    /// Build a field from its serialized description.
    pub fn from_config(config: &FieldConfig) -> Self {
        let mut field = Self::new(config.name.clone(), config.slider.clone())
            .with_display_values(config.display_values)
            .with_should_request_focus(config.should_request_focus)
            .with_current_override_arg(config.current_override_arg)
            .with_enabled(config.enabled)
            .with_autovalidate_mode(config.autovalidate_mode)
            .with_decoration(Decoration {
                label: config.label.clone(),
                helper_text: config.helper_text.clone(),
            });
        field.initial_value = config.initial_value;
        if let Some(decimals) = config.decimals {
            field = field.with_number_format(FixedFormat::new(decimals));
        }
        if let Some(min_span) = config.min_span {
            field = field.with_validator(min_span_validator(min_span));
        }
        field
    }

    pub fn with_initial_value(mut self, value: RangeValue) -> Self {
        self.initial_value = Some(value);
        self
    }

    pub fn with_display_values(mut self, policy: DisplayPolicy) -> Self {
        self.display_values = policy;
        self
    }

    pub fn with_should_request_focus(mut self, request: bool) -> Self {
        self.should_request_focus = request;
        self
    }

    pub fn with_current_override_arg(mut self, arg: CurrentOverrideArg) -> Self {
        self.current_override_arg = arg;
        self
    }

    pub fn with_number_format(mut self, format: impl NumberFormat + 'static) -> Self {
        self.number_format = Box::new(format);
        self
    }

    pub fn with_semantic_formatter(mut self, formatter: SemanticFormatter) -> Self {
        self.semantic_formatter = Some(formatter);
        self
    }

    pub fn on_change_start(mut self, callback: InteractionCallback) -> Self {
        self.on_change_start = Some(callback);
        self
    }

    pub fn on_change_end(mut self, callback: InteractionCallback) -> Self {
        self.on_change_end = Some(callback);
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.host_options.enabled = enabled;
        self
    }

    pub fn with_autovalidate_mode(mut self, mode: AutovalidateMode) -> Self {
        self.host_options.autovalidate_mode = mode;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.host_options.validator = Some(validator);
        self
    }

    pub fn with_value_transformer(mut self, transformer: ValueTransformer) -> Self {
        self.host_options.value_transformer = Some(transformer);
        self
    }

    /// Host state for registering this field with a form.
    ///
    /// Moves the validator and value transformer into the state; calling
    /// it twice yields a second state without them.
    pub fn create_state(&mut self) -> FormFieldState {
        let mut state = FormFieldState::new(self.name.clone())
            .with_initial_value(self.initial_value())
            .with_enabled(self.host_options.enabled)
            .with_autovalidate_mode(self.host_options.autovalidate_mode);
        if let Some(validator) = self.host_options.validator.take() {
            state = state.with_validator(validator);
        }
        if let Some(transformer) = self.host_options.value_transformer.take() {
            state = state.with_value_transformer(transformer);
        }
        state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slider(&self) -> &SliderConfig {
        &self.slider
    }

    pub fn display_values(&self) -> DisplayPolicy {
        self.display_values
    }

    pub fn set_display_values(&mut self, policy: DisplayPolicy) {
        self.display_values = policy;
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    pub fn should_request_focus(&self) -> bool {
        self.should_request_focus
    }

    pub fn current_override_arg(&self) -> CurrentOverrideArg {
        self.current_override_arg
    }

    pub fn active_thumb(&self) -> Thumb {
        self.active_thumb
    }

    pub fn dragging(&self) -> Option<Thumb> {
        self.dragging
    }

    /// Configured initial value, clamped into the slider bounds.
    pub fn initial_value(&self) -> Option<RangeValue> {
        self.initial_value.map(|v| self.slider.normalize(v))
    }

    /// Value used when nothing was supplied: both thumbs on `min`.
    pub fn default_value(&self) -> RangeValue {
        RangeValue::collapsed(self.slider.min)
    }

    /// First-render step: give the host a value if it has none.
    pub fn initialize<H: FieldHost + ?Sized>(&self, host: &mut H) {
        if host.value().is_none() {
            let value = self.default_value();
            log::debug!("field {:?} initialized to {value}", self.name);
            host.set_value(Some(value));
        }
    }

    /// Effective value for rendering.
    pub fn value<H: FieldHost + ?Sized>(&self, host: &H) -> RangeValue {
        host.value().unwrap_or_else(|| self.default_value())
    }

    /// Intermediate change from the slider. Returns false when the field
    /// is disabled and nothing was notified.
    pub fn handle_change<H: FieldHost + ?Sized>(&self, host: &mut H, value: RangeValue) -> bool {
        if !host.is_enabled() {
            return false;
        }
        if self.should_request_focus {
            host.request_focus();
        }
        host.did_change(Some(value));
        true
    }

    /// Start a gesture on `thumb`. Supersedes any gesture in progress.
    pub fn begin_interaction<H: FieldHost + ?Sized>(&mut self, host: &mut H, thumb: Thumb) -> bool {
        if !host.is_enabled() {
            return false;
        }
        let value = self.value(host);
        log::debug!("field {:?}: {thumb:?} drag start at {value}", self.name);
        self.active_thumb = thumb;
        self.dragging = Some(thumb);
        if let Some(cb) = self.on_change_start.as_mut() {
            cb(value);
        }
        true
    }

    /// Drag the grabbed thumb toward `target`. Returns true when the value
    /// changed and the host was notified.
    pub fn update_interaction<H: FieldHost + ?Sized>(&mut self, host: &mut H, target: f64) -> bool {
        let Some(thumb) = self.dragging else {
            return false;
        };
        let current = self.value(host);
        let next = self.slider.move_thumb(current, thumb, target);
        if next == current {
            return false;
        }
        self.handle_change(host, next)
    }

    /// Finish the gesture in progress, if any.
    pub fn end_interaction<H: FieldHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.dragging.take().is_none() {
            return false;
        }
        let value = self.value(host);
        log::debug!("field {:?}: drag end at {value}", self.name);
        if let Some(cb) = self.on_change_end.as_mut() {
            cb(value);
        }
        true
    }

    /// Pointer down at `target`: grab the nearest thumb and move it there.
    pub fn press<H: FieldHost + ?Sized>(&mut self, host: &mut H, target: f64) -> bool {
        let thumb = self.slider.nearest_thumb(self.value(host), target);
        if !self.begin_interaction(host, thumb) {
            return false;
        }
        self.update_interaction(host, target);
        true
    }

    /// Keyboard nudge of the active thumb by `steps` slider steps, as one
    /// complete gesture. Returns true when the value changed.
    pub fn step<H: FieldHost + ?Sized>(&mut self, host: &mut H, steps: i32) -> bool {
        let thumb = self.active_thumb;
        if !self.begin_interaction(host, thumb) {
            return false;
        }
        let target = thumb.of(self.value(host)) + steps as f64 * self.slider.step();
        let changed = self.update_interaction(host, target);
        self.end_interaction(host);
        changed
    }

    /// Switch which thumb keyboard steps move.
    pub fn toggle_thumb(&mut self) {
        self.active_thumb = self.active_thumb.other();
    }

    /// Programmatic set through the host: clamped, never marks dirty.
    pub fn set_value<H: FieldHost + ?Sized>(&self, host: &mut H, value: Option<RangeValue>) {
        host.set_value(value.map(|v| self.slider.normalize(v)));
    }

    pub fn format(&self, value: f64) -> String {
        self.number_format.format(value)
    }

    /// `"{start} - {end}"` using the field's formatter.
    pub fn format_range(&self, value: RangeValue) -> String {
        format!("{} - {}", self.format(value.start), self.format(value.end))
    }

    /// Rendered label slots for `value`, left to right.
    pub fn label_slots(&self, value: RangeValue) -> Vec<SlotLabel> {
        let min_text = self.format(self.slider.min);
        self.display_values
            .slots()
            .into_iter()
            .map(|slot| match slot {
                DisplaySlot::Min => SlotLabel {
                    slot,
                    text: min_text.clone(),
                    override_arg: min_text.clone(),
                },
                DisplaySlot::Current => {
                    let text = self.format_range(value);
                    let override_arg = match self.current_override_arg {
                        CurrentOverrideArg::FormattedMin => min_text.clone(),
                        CurrentOverrideArg::FormattedRange => text.clone(),
                    };
                    SlotLabel {
                        slot,
                        text,
                        override_arg,
                    }
                }
                DisplaySlot::Max => {
                    let text = self.format(self.slider.max);
                    SlotLabel {
                        slot,
                        override_arg: text.clone(),
                        text,
                    }
                }
            })
            .collect()
    }

    /// Accessibility descriptions for the start and end thumbs.
    pub fn semantics(&self, value: RangeValue) -> [String; 2] {
        let describe = |v: f64| match &self.semantic_formatter {
            Some(f) => f(v),
            None => self.slider.percent_label(v),
        };
        [describe(value.start), describe(value.end)]
    }

    /// Thumb labels while a gesture is in progress.
    pub fn value_indicator(&self) -> Option<(&str, &str)> {
        self.dragging?;
        self.slider
            .labels
            .as_ref()
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }
}

fn min_span_validator(min_span: f64) -> Validator {
    Box::new(move |value| match value {
        Some(v) if v.span() >= min_span => None,
        _ => Some(format!("Range must span at least {min_span}")),
    })
}
