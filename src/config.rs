use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::layout::{DatasetLayout, MAIN_FOLDER, SUB_DATA_FOLDER};
use crate::error::{HarError, Result};

/// On-disk location of the dataset, as read from a JSON config file.
///
/// ```json
/// { "root": "/data/har", "subfolder": "UCI HAR Dataset" }
/// ```
/// Missing keys fall back to `dataset` / `UCI HAR Dataset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub root: PathBuf,
    pub subfolder: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(MAIN_FOLDER),
            subfolder: SUB_DATA_FOLDER.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| HarError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn layout(&self) -> DatasetLayout {
        DatasetLayout::new(self.root.clone(), self.subfolder.clone())
    }
}
