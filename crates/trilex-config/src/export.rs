use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from("export")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for CSV and JSON files, created on demand
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        let dir = crate::env_string("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_dir);

        Self { dir }
    }
}
