//! Figure export as JSON
//!
//! Writes the collected curves so they can be re-plotted elsewhere without
//! re-reading every run folder.

use anyhow::{Context, Result};
use std::path::Path;

use super::Figure;

/// Save a figure to `path` as pretty-printed JSON
///
/// Creates parent directories if they don't exist.
pub fn save_figure(figure: &Figure, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let json = serde_json::to_string_pretty(figure).context("Failed to serialize figure")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write figure to {:?}", path))?;

    Ok(())
}

/// Load a figure previously written by [`save_figure`]
pub fn load_figure(path: &Path) -> Result<Figure> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read figure from {:?}", path))?;
    serde_json::from_str(&json).context("Failed to deserialize figure")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::XAxis;
    use tempfile::TempDir;

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plots/nested/rewards.json");

        let mut figure = Figure::new(XAxis::GamesPlayed);
        figure.push("Run 4", vec![(0.0, 0.25), (50.0, 0.75)]);
        save_figure(&figure, &path).unwrap();

        assert!(path.exists());
        let loaded = load_figure(&path).unwrap();
        assert_eq!(loaded.x_label, "# Games Played");
        assert_eq!(loaded.series[0].label, "Run 4");
        assert_eq!(loaded.series[0].points.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(load_figure(&temp.path().join("missing.json")).is_err());
    }
}
