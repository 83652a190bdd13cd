// src/persist.rs
use chrono::Local;
use log::info;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Default output directory, relative to the working directory.
pub const RESULTS_DIR: &str = "litmus_test_results";

/// Writes the two result artifacts as sibling files sharing one
/// timestamp-derived stem. The directory is created if absent. The two
/// writes are independent; a crash in between leaves only the JSON file.
pub fn save_results(dir: &Path, json: &Value, html: &str) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;

    let stem = format!(
        "litmus_test_results_{}",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let json_path = dir.join(format!("{stem}.json"));
    fs::write(&json_path, serde_json::to_string_pretty(json)?)?;

    let html_path = dir.join(format!("{stem}.html"));
    fs::write(&html_path, html)?;

    info!(
        "Test results saved to {} and {}",
        json_path.display(),
        html_path.display()
    );

    Ok((json_path, html_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artifacts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let payload = json!({"score": 1});

        let (json_path, html_path) =
            save_results(dir.path(), &payload, "<p>ok</p>").unwrap();

        let written: Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(written, payload);
        assert_eq!(fs::read_to_string(&html_path).unwrap(), "<p>ok</p>");
    }

    #[test]
    fn test_sibling_files_share_a_stem() {
        let dir = tempfile::tempdir().unwrap();

        let (json_path, html_path) =
            save_results(dir.path(), &json!({}), "").unwrap();

        assert_eq!(json_path.file_stem(), html_path.file_stem());
        assert_eq!(json_path.extension().unwrap(), "json");
        assert_eq!(html_path.extension().unwrap(), "html");
        let name = json_path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("litmus_test_results_"), "{name}");
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");

        save_results(&nested, &json!({"ok": true}), "x").unwrap();

        assert!(nested.is_dir());
    }
}
