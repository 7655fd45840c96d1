//! Terminal rendering and input handling for range fields.
//!
//! - `ui::widgets` draws a [`rangefield_core::RangeField`] with ratatui
//! - `input` maps crossterm key and mouse events onto field interactions
//! - `persistence` keeps saved values across restarts

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::{AppState, StatusLevel};
pub use theme::Theme;
pub use ui::widgets::{FieldPresentation, RangeFieldView, TextStyles, ValueWidgets};

#[cfg(test)]
mod test_helpers;
