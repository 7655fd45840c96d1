//! Serializable field and form descriptions, loadable from TOML.
//!
//! ```toml
//! title = "Filters"
//!
//! [[field]]
//! name = "price"
//! label = "Price"
//! min = 0
//! max = 1000
//! divisions = 20
//! initial_value = [100, 750]
//! display_values = "all"
//! active_color = "#00ffff"
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display::DisplayPolicy;
use crate::error::ConfigError;
use crate::host::AutovalidateMode;
use crate::value::RangeValue;

/// 24-bit color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ConfigError::InvalidColor(s.clone()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ConfigError::InvalidColor(s.clone()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Bounds, discretization and pass-through visuals of the slider.
///
/// Fixed once the field is built. `min > max` and `divisions = 0` are not
/// rejected; see [`SliderConfig::is_inert`] and
/// [`SliderConfig::effective_divisions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisions: Option<u32>,
    /// Value-indicator text for the start and end thumbs, shown while dragging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_color: Option<Rgb>,
}

impl SliderConfig {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            divisions: None,
            labels: None,
            active_color: None,
            inactive_color: None,
        }
    }

    pub fn with_divisions(mut self, divisions: u32) -> Self {
        self.divisions = Some(divisions);
        self
    }

    pub fn with_labels(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.labels = Some((start.into(), end.into()));
        self
    }

    pub fn with_colors(mut self, active: Option<Rgb>, inactive: Option<Rgb>) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }
}

/// What the current-slot override receives.
///
/// The long-standing behavior hands it the formatted *minimum*, not the
/// selected range. Kept as the default so existing overrides render the
/// same; `FormattedRange` passes the `"{start} - {end}"` text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentOverrideArg {
    #[default]
    FormattedMin,
    FormattedRange,
}

fn default_true() -> bool {
    true
}

/// One range field of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(flatten)]
    pub slider: SliderConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<RangeValue>,
    #[serde(default)]
    pub display_values: DisplayPolicy,
    #[serde(default)]
    pub should_request_focus: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Fixed decimal places for labels; compact formatting when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<usize>,
    #[serde(default)]
    pub autovalidate_mode: AutovalidateMode,
    /// Smallest accepted `end - start`; checked by the field's validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_span: Option<f64>,
    #[serde(default)]
    pub current_override_arg: CurrentOverrideArg,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, slider: SliderConfig) -> Self {
        Self {
            name: name.into(),
            label: None,
            helper_text: None,
            slider,
            initial_value: None,
            display_values: DisplayPolicy::default(),
            should_request_focus: false,
            enabled: true,
            decimals: None,
            autovalidate_mode: AutovalidateMode::default(),
            min_span: None,
            current_override_arg: CurrentOverrideArg::default(),
        }
    }
}

/// A titled list of range fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldConfig>,
}

impl FormConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Form used when no config file is given.
    pub fn sample() -> Self {
        let mut price = FieldConfig::new(
            "price",
            SliderConfig::new(0.0, 5000.0)
                .with_divisions(50)
                .with_labels("from", "to"),
        );
        price.label = Some("Price".into());
        price.helper_text = Some("Drag or use h/l".into());
        price.initial_value = Some(RangeValue::new(500.0, 2500.0));
        price.min_span = Some(200.0);
        price.autovalidate_mode = AutovalidateMode::OnUserInteraction;

        let mut ratio = FieldConfig::new("ratio", SliderConfig::new(0.0, 1.0));
        ratio.label = Some("Ratio".into());
        ratio.should_request_focus = true;

        let mut rating = FieldConfig::new(
            "rating",
            SliderConfig::new(1.0, 5.0)
                .with_divisions(4)
                .with_colors(Some(Rgb(255, 140, 0)), None),
        );
        rating.label = Some("Rating".into());
        rating.initial_value = Some(RangeValue::new(2.0, 4.0));
        rating.display_values = DisplayPolicy::MinMax;
        rating.decimals = Some(0);

        Self {
            title: Some("Range filters".into()),
            fields: vec![price, ratio, rating],
        }
    }
}
