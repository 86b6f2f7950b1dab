//! Loader for the UCI Human Activity Recognition inertial-signal dataset.
//!
//! ```no_run
//! use har_loader::{DatasetLoader, Split};
//!
//! let loader = DatasetLoader::default();
//! let train = loader.load_split(Split::Train)?;
//! assert_eq!(train.features.dim().2, 9);
//! # Ok::<(), har_loader::HarError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod export;

pub use config::LoaderConfig;
pub use data::encoding::{one_hot, one_hot_with_vocabulary, ClassVocabulary};
pub use data::layout::DatasetLayout;
pub use data::loader::{get_data, get_features, get_labels, DatasetLoader};
pub use data::model::{Channel, HarData, OneHotLabels, Split, CHANNELS};
pub use error::{HarError, Result};
