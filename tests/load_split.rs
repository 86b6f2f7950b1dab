use std::fs;
use std::path::Path;

use har_loader::{
    Channel, ClassVocabulary, DatasetLayout, DatasetLoader, HarError, Split, CHANNELS,
};
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Writes `labels.len()` windows of `timesteps` samples for `split`.
/// Window `w` of every channel is filled with `w + channel / 10`.
fn write_split(loader: &DatasetLoader, split: Split, labels: &[i64], timesteps: usize) {
    for ch in CHANNELS {
        let text: String = (0..labels.len())
            .map(|w| {
                let v = w as f64 + ch.index() as f64 / 10.0;
                let row = vec![format!("{v:.7e}"); timesteps].join(" ");
                format!(" {row}\n")
            })
            .collect();
        write(&loader.resolve_path(Some(ch), split), &text);
    }
    let text: String = labels.iter().map(|l| format!("{l}\n")).collect();
    write(&loader.resolve_path(None, split), &text);
}

fn dataset() -> (TempDir, DatasetLoader) {
    let dir = tempfile::tempdir().unwrap();
    let loader = DatasetLoader::new(DatasetLayout::with_root(dir.path()));
    write_split(&loader, Split::Train, &[1, 2, 2, 1], 5);
    write_split(&loader, Split::Test, &[3, 1, 2], 5);
    (dir, loader)
}

#[test]
fn two_by_three_files_give_2_3_9() {
    let dir = tempfile::tempdir().unwrap();
    let loader = DatasetLoader::new(DatasetLayout::with_root(dir.path()));
    write_split(&loader, Split::Train, &[1, 2], 3);

    let features = loader.load_features(Split::Train).unwrap();
    assert_eq!(features.shape(), &[2, 3, 9]);
}

#[test]
fn feature_rows_follow_label_rows() {
    let (_dir, loader) = dataset();
    let data = loader.load_split(Split::Train).unwrap();

    assert_eq!(data.num_windows(), data.labels.len());
    for w in 0..data.num_windows() {
        assert_eq!(data.features[[w, 0, 0]], w as f64);
        assert!((data.features[[w, 4, Channel::TotalAccZ.index()]] - (w as f64 + 0.8)).abs() < 1e-9);
    }
    assert_eq!(data.labels.decode().to_vec(), vec![1, 2, 2, 1]);
}

#[test]
fn label_width_is_per_split() {
    let (_dir, loader) = dataset();
    let train = loader.load_labels(Split::Train).unwrap();
    let test = loader.load_labels(Split::Test).unwrap();

    assert_eq!(train.classes, vec![1, 2]);
    assert_eq!(test.classes, vec![1, 2, 3]);
    assert_eq!(train.matrix.dim(), (4, 2));
    assert_eq!(test.matrix.dim(), (3, 3));
    assert_eq!(test.matrix.row(0).to_vec(), vec![0, 0, 1]);
}

#[test]
fn shared_vocabulary_aligns_splits() {
    let (_dir, loader) = dataset();
    let vocab = loader.shared_vocabulary().unwrap();
    assert_eq!(vocab.classes(), &[1, 2, 3]);

    let train = loader.load_split_with_vocabulary(Split::Train, &vocab).unwrap();
    let test = loader.load_split_with_vocabulary(Split::Test, &vocab).unwrap();
    assert_eq!(train.labels.num_classes(), test.labels.num_classes());

    let err = loader
        .load_labels_with_vocabulary(Split::Test, &ClassVocabulary::new([1, 2]))
        .unwrap_err();
    assert!(matches!(err, HarError::UnknownLabel { label: 3 }));
}

#[test]
fn repeated_loads_are_identical() {
    let (_dir, loader) = dataset();
    let first = loader.load_split(Split::Test).unwrap();
    let second = loader.load_split(Split::Test).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_channel_fails_whole_load() {
    let (_dir, loader) = dataset();
    let missing = loader.resolve_path(Some(Channel::BodyGyroZ), Split::Test);
    fs::remove_file(&missing).unwrap();

    match loader.load_split(Split::Test).unwrap_err() {
        HarError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
    assert!(loader.load_features(Split::Train).is_ok());
}

#[test]
fn malformed_channel_reports_path() {
    let (_dir, loader) = dataset();
    let path = loader.resolve_path(Some(Channel::BodyAccY), Split::Train);
    write(&path, "1 2 3 4 5\n1 2 x 4 5\n");

    let err = loader.load_features(Split::Train).unwrap_err();
    assert!(matches!(err, HarError::Parse { line: 2, column: 2, .. }));
    assert!(err.to_string().contains("body_acc_y_train.txt"));
}
