//! Saved field values: JSON save/load across restarts.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rangefield_core::{Form, FormConfig, RangeValue};

/// Raw field values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub values: BTreeMap<String, RangeValue>,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return PersistedState::default(),
    };
    serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("ignoring unreadable state file {}: {err}", path.display());
        PersistedState::default()
    })
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    log::info!("wrote {} value(s) to {}", state.values.len(), path.display());
    Ok(())
}

pub fn extract(form: &Form) -> PersistedState {
    PersistedState {
        values: form.values(),
    }
}

/// Use saved values as initial values. Names with no matching field are
/// dropped; the field clamps anything out of range.
pub fn apply(config: &mut FormConfig, state: &PersistedState) {
    for field in &mut config.fields {
        if let Some(value) = state.values.get(&field.name) {
            field.initial_value = Some(*value);
        }
    }
}
