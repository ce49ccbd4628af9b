use std::path::PathBuf;

use super::config::PlannerConfig;
use super::trip::Trip;

/// A fully loaded planner directory
#[derive(Debug)]
pub struct Workspace {
    /// Root directory of the planner (parent of `voyage/`)
    pub root: PathBuf,
    /// Path to the `voyage/` directory
    pub data_dir: PathBuf,
    /// Parsed config.toml
    pub config: PlannerConfig,
    /// Loaded trips, in stored order
    pub trips: Vec<Trip>,
}
