//! rangefield core: a dual-thumb range slider bound to a form field.
//!
//! This crate is UI-agnostic:
//! - `RangeValue` and the slider semantics (clamping, divisions, thumb ordering)
//! - `RangeField`: value lifecycle, change propagation, display-slot text
//! - `FieldHost`: the capability surface a form framework provides per field
//! - `FormFieldState` / `Form`: an in-memory host and field container
//! - TOML-loadable field and form descriptions
//!
//! Rendering lives in `rangefield-tui`.

pub mod config;
pub mod display;
pub mod error;
pub mod field;
pub mod form;
pub mod format;
pub mod host;
pub mod slider;
pub mod value;

pub use config::{CurrentOverrideArg, FieldConfig, FormConfig, Rgb, SliderConfig};
pub use display::{DisplayPolicy, DisplaySlot};
pub use error::{ConfigError, FormError};
pub use field::{Decoration, InteractionCallback, RangeField, SemanticFormatter, SlotLabel};
pub use form::{Form, FormEntry};
pub use format::{CompactFormat, FixedFormat, NumberFormat};
pub use host::{AutovalidateMode, FieldHost, FormFieldState, Validator, ValueTransformer};
pub use slider::Thumb;
pub use value::RangeValue;

#[cfg(test)]
mod tests {
    use super::*;

    /// Value types cross thread boundaries freely; field and host state
    /// hold boxed callbacks and stay on the UI thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<RangeValue>();
        require_sync::<RangeValue>();
        require_send::<SliderConfig>();
        require_sync::<SliderConfig>();
        require_send::<FormConfig>();
        require_sync::<FormConfig>();
        require_send::<DisplayPolicy>();
        require_sync::<DisplayPolicy>();
    }

    /// Any host implementation can drive a field through a trait object.
    #[test]
    fn field_host_is_object_safe() {
        let field = RangeField::new("r", SliderConfig::new(0.0, 1.0));
        let mut state = FormFieldState::new("r");
        let host: &mut dyn FieldHost = &mut state;
        field.initialize(host);
        assert_eq!(host.value(), Some(RangeValue::collapsed(0.0)));
    }
}
