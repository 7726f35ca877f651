mod common;

use common::image_from_rows;
use runblob_core::error::RunblobError;
use runblob_core::frame::ClassifiedImage;
use runblob_core::io::{load_label_image, save_label_image};

#[test]
fn test_label_png_roundtrip() {
    let img = image_from_rows(&[
        "0123", //
        "4567", //
        "89..",
    ]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.png");

    save_label_image(&img, &path).unwrap();
    let loaded = load_label_image(&path).unwrap();

    assert_eq!(loaded.width(), 4);
    assert_eq!(loaded.height(), 3);
    assert_eq!(loaded.labels, img.labels);
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_label_image(&dir.path().join("missing.png"));
    assert!(result.is_err());
}

#[test]
fn test_from_raw_checks_length() {
    let err = ClassifiedImage::from_raw(3, 2, vec![0; 5]).unwrap_err();
    assert!(matches!(
        err,
        RunblobError::InvalidDimensions {
            width: 3,
            height: 2,
            len: 5
        }
    ));
}

#[test]
fn test_histogram_counts_labels() {
    let img = image_from_rows(&["0011", "1222"]);
    let hist = img.histogram();
    assert_eq!(hist[0], 2);
    assert_eq!(hist[1], 3);
    assert_eq!(hist[2], 3);
    assert_eq!(hist.iter().sum::<usize>(), 8);
}
