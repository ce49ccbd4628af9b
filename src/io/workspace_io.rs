use std::fs;
use std::path::{Path, PathBuf};

use crate::io::store;
use crate::model::config::PlannerConfig;
use crate::model::workspace::Workspace;

/// Error type for planner directory I/O
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("not a planner directory: no voyage/ directory found")]
    NotAWorkspace,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the planner by walking up from the given directory, looking
/// for a `voyage/` subdirectory.
pub fn discover_workspace(start: &Path) -> Result<PathBuf, WorkspaceError> {
    let mut current = start.to_path_buf();
    loop {
        let data_dir = current.join("voyage");
        if data_dir.is_dir() && data_dir.join("config.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(WorkspaceError::NotAWorkspace);
        }
    }
}

/// Load a complete workspace from the given root directory.
pub fn load_workspace(root: &Path) -> Result<Workspace, WorkspaceError> {
    let data_dir = root.join("voyage");
    if !data_dir.is_dir() {
        return Err(WorkspaceError::NotAWorkspace);
    }

    // config.toml is read strictly: a workspace with unreadable config
    // is an error, unlike trip data which substitutes its default.
    let config_path = data_dir.join("config.toml");
    let config_text = fs::read_to_string(&config_path).map_err(|e| WorkspaceError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: PlannerConfig = toml::from_str(&config_text)?;

    let trips = store::load_trips(&data_dir);

    Ok(Workspace {
        root: root.to_path_buf(),
        data_dir,
        config,
        trips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::starter_trips;
    use tempfile::TempDir;

    fn create_test_planner(dir: &Path) {
        let data_dir = dir.join("voyage");
        fs::create_dir_all(&data_dir).unwrap();

        fs::write(
            data_dir.join("config.toml"),
            r#"
[planner]
name = "test"

[defaults]
currency = "EUR"
"#,
        )
        .unwrap();

        fs::write(
            data_dir.join("trips.json"),
            r#"[{
  "id": "t1",
  "destination": "Lisbon",
  "cover_image": "img",
  "start_date": "2026-04-01",
  "end_date": "2026-04-05",
  "currency": "EUR",
  "activities": []
}]"#,
        )
        .unwrap();
    }

    #[test]
    fn test_discover_workspace() {
        let tmp = TempDir::new().unwrap();
        create_test_planner(tmp.path());

        // Discover from root
        let root = discover_workspace(tmp.path()).unwrap();
        assert_eq!(root, tmp.path());

        // Discover from subdirectory
        let sub = tmp.path().join("voyage");
        let root = discover_workspace(&sub).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn test_discover_workspace_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(discover_workspace(tmp.path()).is_err());
    }

    #[test]
    fn test_load_workspace() {
        let tmp = TempDir::new().unwrap();
        create_test_planner(tmp.path());

        let ws = load_workspace(tmp.path()).unwrap();
        assert_eq!(ws.config.planner.name, "test");
        assert_eq!(ws.config.defaults.currency, "EUR");
        assert_eq!(ws.trips.len(), 1);
        assert_eq!(ws.trips[0].destination, "Lisbon");
    }

    #[test]
    fn test_load_workspace_missing_trips_seeds() {
        let tmp = TempDir::new().unwrap();
        create_test_planner(tmp.path());
        fs::remove_file(tmp.path().join("voyage/trips.json")).unwrap();

        let ws = load_workspace(tmp.path()).unwrap();
        assert_eq!(ws.trips, starter_trips());
    }

    #[test]
    fn test_load_workspace_bad_config_errors() {
        let tmp = TempDir::new().unwrap();
        create_test_planner(tmp.path());
        fs::write(tmp.path().join("voyage/config.toml"), "not toml [[[").unwrap();

        assert!(load_workspace(tmp.path()).is_err());
    }
}
