use std::collections::BTreeSet;

use ndarray::{Array1, Array2};

use super::model::OneHotLabels;
use crate::error::{HarError, Result};

/// Ordered set of class ids that fixes the column layout of a one-hot
/// matrix, so encodings of different splits line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassVocabulary {
    classes: Vec<i64>,
}

impl ClassVocabulary {
    /// Duplicates are dropped; first occurrence wins.
    pub fn new(classes: impl IntoIterator<Item = i64>) -> Self {
        let mut seen = BTreeSet::new();
        let classes = classes.into_iter().filter(|c| seen.insert(*c)).collect();
        Self { classes }
    }

    /// Sorted union of every value in `label_sets`.
    pub fn from_labels<'a>(label_sets: impl IntoIterator<Item = &'a Array1<i64>>) -> Self {
        let union: BTreeSet<i64> = label_sets
            .into_iter()
            .flat_map(|labels| labels.iter().copied())
            .collect();
        Self {
            classes: union.into_iter().collect(),
        }
    }

    /// The six activities of the UCI HAR archive (`activity_labels.txt`).
    pub fn uci_har() -> Self {
        Self::new(1..=6)
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// One-hot encode using the distinct values of `labels`, ascending.
///
/// The width depends on which classes occur in this particular vector.
pub fn one_hot(labels: &Array1<i64>) -> OneHotLabels {
    let vocabulary = ClassVocabulary::from_labels([labels]);
    encode(labels, vocabulary.classes)
}

/// One-hot encode against a fixed vocabulary. Fails on the first label the
/// vocabulary does not contain.
pub fn one_hot_with_vocabulary(
    labels: &Array1<i64>,
    vocabulary: &ClassVocabulary,
) -> Result<OneHotLabels> {
    if let Some(&label) = labels.iter().find(|l| !vocabulary.classes.contains(l)) {
        return Err(HarError::UnknownLabel { label });
    }
    Ok(encode(labels, vocabulary.classes.clone()))
}

fn encode(labels: &Array1<i64>, classes: Vec<i64>) -> OneHotLabels {
    let matrix = Array2::from_shape_fn((labels.len(), classes.len()), |(i, j)| {
        u8::from(labels[i] == classes[j])
    });
    OneHotLabels { classes, matrix }
}
