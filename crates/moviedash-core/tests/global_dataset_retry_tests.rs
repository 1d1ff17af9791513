//! The process-wide dataset is a single static, so this file holds the only
//! test that drives it through a failed first load.

use std::path::PathBuf;
use std::sync::Arc;

use moviedash_core::{dataset, Error};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/movie_ratings.csv")
}

#[test]
fn test_global_dataset_retries_after_failed_load() {
    // Arrange & Act
    let missing = dataset::global("/definitely/missing/movie_ratings.csv");
    let loaded = dataset::global(sample_path()).expect("valid path loads after a failure");
    let cached = dataset::global("/definitely/missing/movie_ratings.csv").expect("cached");

    // Assert
    assert!(matches!(missing, Err(Error::DatasetNotFound(_))));
    assert_eq!(loaded.len(), 32);
    assert!(Arc::ptr_eq(&loaded, &cached));
}
