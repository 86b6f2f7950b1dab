use std::path::PathBuf;

use log::info;
use ndarray::{stack, Array1, Array2, Array3, ArrayView2, Axis};

use super::encoding::{one_hot, one_hot_with_vocabulary, ClassVocabulary};
use super::layout::DatasetLayout;
use super::model::{Channel, HarData, OneHotLabels, Split, CHANNELS};
use super::reader::{read_label_column, read_matrix};
use crate::error::{HarError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Feature tensor of a split under the default layout.
pub fn get_features(is_train: bool) -> Result<Array3<f64>> {
    DatasetLoader::default().load_features(Split::from_is_train(is_train))
}

/// One-hot labels of a split under the default layout.
pub fn get_labels(is_train: bool) -> Result<OneHotLabels> {
    DatasetLoader::default().load_labels(Split::from_is_train(is_train))
}

/// Features and labels of a split under the default layout.
pub fn get_data(is_train: bool) -> Result<HarData> {
    DatasetLoader::default().load_split(Split::from_is_train(is_train))
}

// ---------------------------------------------------------------------------
// DatasetLoader
// ---------------------------------------------------------------------------

/// Reads splits of a HAR dataset tree. Every call goes back to disk; nothing
/// is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    layout: DatasetLayout,
}

impl DatasetLoader {
    pub fn new(layout: DatasetLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DatasetLayout {
        &self.layout
    }

    /// See [`DatasetLayout::resolve_path`].
    pub fn resolve_path(&self, channel: Option<Channel>, split: Split) -> PathBuf {
        self.layout.resolve_path(channel, split)
    }

    /// Stack the nine channel files of `split` into a
    /// `(windows, timesteps, channels)` tensor.
    ///
    /// All channel files are read before anything is returned; the first
    /// missing, malformed or mis-shaped file aborts the load.
    pub fn load_features(&self, split: Split) -> Result<Array3<f64>> {
        let matrices = CHANNELS
            .iter()
            .map(|&ch| read_matrix(&self.resolve_path(Some(ch), split)))
            .collect::<Result<Vec<Array2<f64>>>>()?;

        let expected = matrices[0].dim();
        for (&channel, matrix) in CHANNELS.iter().zip(&matrices) {
            if matrix.dim() != expected {
                return Err(HarError::ShapeMismatch {
                    channel,
                    expected,
                    found: matrix.dim(),
                });
            }
        }

        let views: Vec<ArrayView2<f64>> = matrices.iter().map(|m| m.view()).collect();
        let features = stack(Axis(2), &views)?;
        info!("loaded {split} features {:?}", features.dim());
        Ok(features)
    }

    /// Raw class ids of `split`, one per window.
    pub fn read_label_vector(&self, split: Split) -> Result<Array1<i64>> {
        read_label_column(&self.resolve_path(None, split))
    }

    /// One-hot labels of `split`. Columns are the classes present in this
    /// split only, ascending.
    pub fn load_labels(&self, split: Split) -> Result<OneHotLabels> {
        let labels = one_hot(&self.read_label_vector(split)?);
        info!(
            "loaded {split} labels: {} windows, {} classes",
            labels.len(),
            labels.num_classes()
        );
        Ok(labels)
    }

    /// One-hot labels of `split` with columns fixed by `vocabulary`.
    pub fn load_labels_with_vocabulary(
        &self,
        split: Split,
        vocabulary: &ClassVocabulary,
    ) -> Result<OneHotLabels> {
        one_hot_with_vocabulary(&self.read_label_vector(split)?, vocabulary)
    }

    pub fn load_split(&self, split: Split) -> Result<HarData> {
        Ok(HarData {
            features: self.load_features(split)?,
            labels: self.load_labels(split)?,
        })
    }

    /// Like [`load_split`](Self::load_split) with a fixed label vocabulary.
    pub fn load_split_with_vocabulary(
        &self,
        split: Split,
        vocabulary: &ClassVocabulary,
    ) -> Result<HarData> {
        Ok(HarData {
            features: self.load_features(split)?,
            labels: self.load_labels_with_vocabulary(split, vocabulary)?,
        })
    }

    /// Vocabulary covering the labels of both splits.
    pub fn shared_vocabulary(&self) -> Result<ClassVocabulary> {
        let train = self.read_label_vector(Split::Train)?;
        let test = self.read_label_vector(Split::Test)?;
        Ok(ClassVocabulary::from_labels([&train, &test]))
    }
}
