//! Grid configuration
//!
//! Stored as RON in the platform config directory. Missing fields fall back
//! to the defaults, which match the note grid's original feel.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Application directory name under the platform config/data dirs
pub const APP_DIR: &str = "notegrid";

/// Tunables for layout, gesture and animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Hold time before a press turns into a drag (milliseconds)
    pub long_press_ms: u64,
    /// Movement allowed during the hold before the press becomes a scroll (pixels)
    pub touch_slop: f32,
    /// Card height
    pub cell_height: f32,
    /// Horizontal gap between the two columns
    pub gap: f32,
    /// Gap between rows
    pub vertical_gap: f32,
    /// Left/right padding of the grid
    pub side_padding: f32,
    /// Extra scroll room below the last row
    pub footer_padding: f32,
    /// Scale of a lifted card
    pub lift_scale: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            long_press_ms: 250,
            touch_slop: 10.0,
            cell_height: 180.0,
            gap: 8.0,
            vertical_gap: 12.0,
            side_padding: 16.0,
            footer_padding: 100.0,
            lift_scale: 1.05,
            spring_stiffness: 200.0,
            spring_damping: 20.0,
        }
    }
}

impl GridConfig {
    /// Long-press delay in seconds
    pub fn long_press_secs(&self) -> f64 {
        self.long_press_ms as f64 / 1000.0
    }

    /// Default config file location (`<config_dir>/notegrid/grid.ron`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("grid.ron"))
    }

    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path)?;
        let config = ron::from_str(&contents)?;
        Ok(config)
    }

    /// Save as pretty RON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let pretty = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Load from `path`, falling back to defaults when the file is missing or broken
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded grid config");
                config
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid grid config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_timings_and_layout() {
        let config = GridConfig::default();
        assert_eq!(config.long_press_ms, 250);
        assert!((config.long_press_secs() - 0.25).abs() < 1e-9);
        assert!((config.cell_height - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("grid.ron");

        let config = GridConfig { long_press_ms: 400, gap: 4.0, ..Default::default() };
        config.save(&path).unwrap();

        assert_eq!(GridConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grid.ron");
        fs::write(&path, "(long_press_ms: 500)").unwrap();

        let config = GridConfig::load(&path).unwrap();
        assert_eq!(config.long_press_ms, 500);
        assert!((config.vertical_gap - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_load_or_default_fallbacks() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("missing.ron");
        assert_eq!(GridConfig::load_or_default(Some(&missing)), GridConfig::default());

        let broken = dir.path().join("broken.ron");
        fs::write(&broken, "(long_press_ms: \"soon\"").unwrap();
        assert_eq!(GridConfig::load_or_default(Some(&broken)), GridConfig::default());

        assert_eq!(GridConfig::load_or_default(None), GridConfig::default());
    }
}
