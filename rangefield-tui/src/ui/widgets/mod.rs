//! Reusable range-field widgets.

pub mod label_row;
pub mod range_field;
pub mod slider;

pub use label_row::{slot_span, LabelRow, TextStyles, ValueWidget, ValueWidgets};
pub use range_field::{field_areas, field_height, FieldAreas, FieldPresentation, RangeFieldView};
pub use slider::{thumb_column, track_area, value_at_column, RangeSlider};
