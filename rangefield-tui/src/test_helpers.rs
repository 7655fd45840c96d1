//! Shared helpers for widget and app tests.

use ratatui::buffer::Buffer;
use rangefield_core::FormConfig;

use crate::app::AppState;

/// Symbols of one buffer row, concatenated.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(buf.area.x + x, buf.area.y + y)].symbol())
        .collect()
}

/// App over the sample form, initialized and focused on the first field.
pub fn sample_app() -> AppState {
    AppState::from_config(&FormConfig::sample()).unwrap()
}
