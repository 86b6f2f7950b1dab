use std::path::PathBuf;

use super::model::{Channel, Split};

/// Directory holding the extracted dataset, relative to the working dir.
pub const MAIN_FOLDER: &str = "dataset";
/// Folder name of the UCI archive inside [`MAIN_FOLDER`].
pub const SUB_DATA_FOLDER: &str = "UCI HAR Dataset";
/// Per-split folder containing the raw channel files.
pub const SIGNALS_FOLDER: &str = "Inertial Signals";

/// Where a dataset tree lives on disk.
///
/// ```text
/// <root>/<subfolder>/<split>/Inertial Signals/<channel>_<split>.txt
/// <root>/<subfolder>/<split>/y_<split>.txt
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    pub root: PathBuf,
    pub subfolder: String,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from(MAIN_FOLDER),
            subfolder: SUB_DATA_FOLDER.to_string(),
        }
    }
}

impl DatasetLayout {
    pub fn new(root: impl Into<PathBuf>, subfolder: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            subfolder: subfolder.into(),
        }
    }

    /// Layout rooted at `root` with the standard archive folder name.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(root, SUB_DATA_FOLDER)
    }

    /// `<root>/<subfolder>/<split>`
    pub fn split_dir(&self, split: Split) -> PathBuf {
        self.root.join(&self.subfolder).join(split.name())
    }

    /// Path of a channel file, or of the label file when `channel` is `None`.
    /// Pure string construction; the file is not required to exist.
    pub fn resolve_path(&self, channel: Option<Channel>, split: Split) -> PathBuf {
        let dir = self.split_dir(split);
        match channel {
            Some(ch) => dir
                .join(SIGNALS_FOLDER)
                .join(format!("{}_{}.txt", ch.name(), split.name())),
            None => dir.join(format!("y_{}.txt", split.name())),
        }
    }
}
