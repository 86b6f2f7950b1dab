use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, Array3};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Split – train or test partition
// ---------------------------------------------------------------------------

/// Dataset partition. Selects both the split directory and the file-name
/// suffix (`train/y_train.txt`, `test/y_test.txt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    /// Bridge for the boolean entry points.
    pub fn from_is_train(is_train: bool) -> Self {
        if is_train {
            Split::Train
        } else {
            Split::Test
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Split {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "test" => Ok(Split::Test),
            other => Err(format!("unknown split '{other}' (expected 'train' or 'test')")),
        }
    }
}

// ---------------------------------------------------------------------------
// Channel – one sensor axis
// ---------------------------------------------------------------------------

/// One of the nine inertial signal streams recorded per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    BodyAccX,
    BodyAccY,
    BodyAccZ,
    BodyGyroX,
    BodyGyroY,
    BodyGyroZ,
    TotalAccX,
    TotalAccY,
    TotalAccZ,
}

/// Channels in the order they are stacked into the feature tensor.
pub const CHANNELS: [Channel; 9] = [
    Channel::BodyAccX,
    Channel::BodyAccY,
    Channel::BodyAccZ,
    Channel::BodyGyroX,
    Channel::BodyGyroY,
    Channel::BodyGyroZ,
    Channel::TotalAccX,
    Channel::TotalAccY,
    Channel::TotalAccZ,
];

impl Channel {
    /// File stem used on disk, e.g. `body_acc_x`.
    pub fn name(self) -> &'static str {
        match self {
            Channel::BodyAccX => "body_acc_x",
            Channel::BodyAccY => "body_acc_y",
            Channel::BodyAccZ => "body_acc_z",
            Channel::BodyGyroX => "body_gyro_x",
            Channel::BodyGyroY => "body_gyro_y",
            Channel::BodyGyroZ => "body_gyro_z",
            Channel::TotalAccX => "total_acc_x",
            Channel::TotalAccY => "total_acc_y",
            Channel::TotalAccZ => "total_acc_z",
        }
    }

    /// Position along the trailing axis of the feature tensor.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// OneHotLabels – encoded label matrix
// ---------------------------------------------------------------------------

/// One-hot label matrix together with the class id behind each column.
///
/// `matrix[[i, j]] == 1` exactly when window `i` has label `classes[j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneHotLabels {
    pub classes: Vec<i64>,
    pub matrix: Array2<u8>,
}

impl OneHotLabels {
    /// Number of encoded windows (rows).
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Map every row back to its class id.
    pub fn decode(&self) -> Array1<i64> {
        self.matrix
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .position(|&v| v == 1)
                    .map(|j| self.classes[j])
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Windows per class, in column order.
    pub fn class_counts(&self) -> Vec<(i64, usize)> {
        self.classes
            .iter()
            .zip(self.matrix.columns())
            .map(|(&class, col)| (class, col.iter().filter(|&&v| v == 1).count()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// HarData – one loaded split
// ---------------------------------------------------------------------------

/// Features and labels of a single split.
#[derive(Debug, Clone, PartialEq)]
pub struct HarData {
    /// `(windows, timesteps, channels)`.
    pub features: Array3<f64>,
    pub labels: OneHotLabels,
}

impl HarData {
    pub fn num_windows(&self) -> usize {
        self.features.dim().0
    }

    pub fn num_timesteps(&self) -> usize {
        self.features.dim().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn split_parses_and_displays() {
        assert_eq!("train".parse::<Split>().unwrap(), Split::Train);
        assert_eq!("TEST".parse::<Split>().unwrap(), Split::Test);
        assert!("validation".parse::<Split>().is_err());
        assert_eq!(Split::Train.to_string(), "train");
        assert_eq!(Split::from_is_train(false), Split::Test);
    }

    #[test]
    fn channel_order_matches_indices() {
        for (i, channel) in CHANNELS.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
        assert_eq!(CHANNELS[3].name(), "body_gyro_x");
        assert_eq!(CHANNELS[8].to_string(), "total_acc_z");
    }

    #[test]
    fn decode_and_count() {
        let labels = OneHotLabels {
            classes: vec![2, 5],
            matrix: array![[1, 0], [0, 1], [0, 1]],
        };
        assert_eq!(labels.decode(), array![2, 5, 5]);
        assert_eq!(labels.class_counts(), vec![(2, 1), (5, 2)]);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.num_classes(), 2);
    }
}
