use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::model::seed::starter_trips;
use crate::model::trip::Trip;

/// File holding the serialized trip collection
pub const TRIPS_FILE: &str = "trips.json";

/// Read trips.json from the voyage directory. Absent, unreadable, or
/// malformed content all read as `None`.
pub fn read_trips(data_dir: &Path) -> Option<Vec<Trip>> {
    let path = data_dir.join(TRIPS_FILE);
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Read trips.json, substituting the starter trips when nothing usable
/// is stored. A stored empty list is usable and loads as empty.
pub fn load_trips(data_dir: &Path) -> Vec<Trip> {
    read_trips(data_dir).unwrap_or_else(starter_trips)
}

/// Write trips.json. Goes through a temp file in the same directory so a
/// crashed write never leaves a truncated collection behind.
pub fn write_trips(data_dir: &Path, trips: &[Trip]) -> io::Result<()> {
    let path = data_dir.join(TRIPS_FILE);
    let content = serde_json::to_string_pretty(trips)?;
    atomic_write(&path, content.as_bytes())
}

/// Write trips.json, logging instead of failing. The in-memory state stays
/// authoritative for the session when persistence is unavailable.
pub fn save_trips(data_dir: &Path, trips: &[Trip]) {
    if let Err(e) = write_trips(data_dir, trips) {
        eprintln!("warning: could not save trips: {}", e);
    }
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
