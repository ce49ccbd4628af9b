use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted session state (written to .state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionState {
    /// Which trip is selected (trip ID)
    #[serde(default)]
    pub active_trip: Option<String>,
}

/// Read .state.json from the voyage directory
pub fn read_session(data_dir: &Path) -> Option<SessionState> {
    let path = data_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the voyage directory
pub fn write_session(data_dir: &Path, state: &SessionState) -> Result<(), std::io::Error> {
    let path = data_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

/// Write .state.json, logging instead of failing: the selection is a
/// convenience and losing it must not abort a command.
pub fn save_session(data_dir: &Path, state: &SessionState) {
    if let Err(e) = write_session(data_dir, state) {
        eprintln!("warning: could not save session state: {}", e);
    }
}
