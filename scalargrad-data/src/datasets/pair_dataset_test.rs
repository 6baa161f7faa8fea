// scalargrad-data/src/datasets/pair_dataset_test.rs

use super::*;
use scalargrad_core::ScalarGradError;
use std::path::PathBuf;

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scalargrad_pairs_{}_{}.txt", tag, std::process::id()))
}

#[test]
fn test_pair_dataset_new_and_len() {
    let dataset = PairDataset::new(vec![(1.0, 2.0), (3.0, 4.0)]);
    assert_eq!(dataset.len(), 2);
    assert!(!dataset.is_empty());
    assert!(PairDataset::default().is_empty());
}

#[test]
fn test_pair_dataset_get_in_bounds() {
    let dataset = PairDataset::new(vec![(1.0, 2.0), (3.0, 4.0)]);
    assert_eq!(dataset.get(0).unwrap(), (1.0, 2.0));
    assert_eq!(dataset.get(1).unwrap(), (3.0, 4.0));
}

#[test]
fn test_pair_dataset_get_out_of_bounds() {
    let dataset = PairDataset::new(vec![(1.0, 2.0)]);
    assert_eq!(
        dataset.get(5),
        Err(ScalarGradError::IndexOutOfBounds { index: 5, len: 1 })
    );
}

#[test]
fn test_from_text_file_parses_pairs_and_skips_blank_lines() {
    let path = temp_path("ok");
    std::fs::write(&path, "1.0 3.5\n\n-2.25 0.0\n   \n4 -1e2\n").unwrap();
    let dataset = PairDataset::from_text_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.get(0).unwrap(), (1.0, 3.5));
    assert_eq!(dataset.get(1).unwrap(), (-2.25, 0.0));
    assert_eq!(dataset.get(2).unwrap(), (4.0, -100.0));
}

#[test]
fn test_from_text_file_reports_wrong_column_count() {
    let path = temp_path("columns");
    std::fs::write(&path, "1.0 2.0\n3.0 4.0 5.0\n").unwrap();
    let err = PairDataset::from_text_file(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    match err {
        ScalarGradError::DataLoad { message, .. } => {
            assert!(message.contains("line 2"), "unexpected message: {}", message);
        }
        other => panic!("expected DataLoad, got {:?}", other),
    }
}

#[test]
fn test_from_text_file_reports_invalid_float() {
    let path = temp_path("float");
    std::fs::write(&path, "1.0 abc\n").unwrap();
    let err = PairDataset::from_text_file(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    match err {
        ScalarGradError::DataLoad { message, .. } => {
            assert!(message.contains("invalid float"), "unexpected message: {}", message);
        }
        other => panic!("expected DataLoad, got {:?}", other),
    }
}

#[test]
fn test_from_text_file_reports_missing_file() {
    let err = PairDataset::from_text_file("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, ScalarGradError::DataLoad { .. }));
}
