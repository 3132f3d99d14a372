use std::fs;
use std::path::PathBuf;

use tpc_transform::{Geometry, GeometryConfig, TransformError, CONFIG_FILE_NAME};

fn config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tpc_transform_it_loading_{}", name));
    fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

/// A full 159-row file with radii and pad counts unlike the defaults.
fn custom_file() -> (String, Vec<f64>, Vec<usize>) {
    let radii: Vec<f64> = (0..159).map(|i| 80.0 + 1.1 * i as f64).collect();
    let pads: Vec<usize> = (0..159).map(|i| 60 + i / 2).collect();
    let mut text = String::from("fNRow = 159 ;\nfNRowLow = 63 ;\nfZLength = 245.5 ;\n");
    for (i, r) in radii.iter().enumerate() {
        text.push_str(&format!("fX[{}] = {} ;\n", i, r));
    }
    for (i, p) in pads.iter().enumerate() {
        text.push_str(&format!("fNPads[{}] = {} ;\n", i, p));
    }
    (text, radii, pads)
}

#[test]
fn test_full_file_reproduces_tables() {
    let dir = config_dir("full");
    let (text, radii, pads) = custom_file();
    fs::write(dir.join(CONFIG_FILE_NAME), text).unwrap();

    let mut config = GeometryConfig::new();
    assert!(config.init(&dir, None), "Loading a complete file should succeed");
    assert_eq!(config.version(), 1);

    let transform = config.transform();
    for (row, r) in radii.iter().enumerate() {
        assert_eq!(transform.row_to_radius(row), *r);
        assert_eq!(transform.geometry().n_pads(row), Some(pads[row]));
    }
    assert_eq!(transform.geometry().z_length, 245.5);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_truncated_arrays_fail_and_keep_previous_geometry() {
    let dir = config_dir("truncated");
    let (text, _, _) = custom_file();
    // drop the last pad count
    let truncated = text.replace("fNPads[158] = 139 ;\n", "");
    assert_ne!(truncated, text);
    fs::write(dir.join(CONFIG_FILE_NAME), &truncated).unwrap();

    let mut config = GeometryConfig::new();
    let before = config.geometry();
    let err = config.try_init(&dir, None).unwrap_err();
    match err {
        TransformError::MissingArrayEntry { field, index } => {
            assert_eq!(field, "fNPads");
            assert_eq!(index, 158);
        }
        other => panic!("Expected a missing array entry, got {}", other),
    }
    assert_eq!(*config.geometry(), *before);
    assert_eq!(config.version(), 0);

    // the boolean form reports the same failure
    assert!(!config.init(&dir, None));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_nonexistent_path_leaves_geometry_unchanged() {
    let mut config = GeometryConfig::new();
    let snapshot: Geometry = (*config.geometry()).clone();

    assert!(!config.init("/definitely/not/a/tpc/config/dir", None));
    assert_eq!(*config.geometry(), snapshot);

    let err = config.try_init("/definitely/not/a/tpc/config/dir", None).unwrap_err();
    assert!(matches!(err, TransformError::ConfigUnavailable { .. }));
}

#[test]
fn test_failed_reload_keeps_loaded_geometry() {
    let dir = config_dir("reload");
    fs::write(dir.join(CONFIG_FILE_NAME), "fZOffset = 0.5 ;").unwrap();

    let mut config = GeometryConfig::new();
    assert!(config.init(&dir, None));
    let loaded = config.geometry();

    fs::write(dir.join(CONFIG_FILE_NAME), "fZOffset = broken ;").unwrap();
    assert!(!config.init(&dir, None));
    assert_eq!(config.version(), 1);
    assert_eq!(config.geometry().z_offset, 0.5);
    assert_eq!(*config.geometry(), *loaded);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_partial_file_keeps_other_fields() {
    let dir = config_dir("partial");
    fs::write(
        dir.join(CONFIG_FILE_NAME),
        "// hand edited\nfPadPitchWidthUp = 0.55 ;\nfSomethingNew = 12 ;\nfBFieldFactor = 2 ;\n",
    )
    .unwrap();

    let mut config = GeometryConfig::new();
    assert!(config.init(&dir, None));
    let g = config.geometry();
    let reference = Geometry::default();
    assert_eq!(g.pad_pitch_outer, 0.55);
    assert_eq!(g.b_field_factor, 2);
    assert!((g.b_field() - 0.4).abs() < 1e-12);
    assert_eq!(g.pad_pitch_inner, reference.pad_pitch_inner);
    assert_eq!(g.row_radius, reference.row_radius);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_structural_mismatch_is_not_rejected() {
    let dir = config_dir("mismatch");
    let mut text = String::from("fNRowLow = 62 ;\nfNRow = 4 ;\n");
    for i in 0..4 {
        text.push_str(&format!("fX[{}] = {} ;\n", i, 90 + i));
    }
    fs::write(dir.join(CONFIG_FILE_NAME), text).unwrap();

    let mut config = GeometryConfig::new();
    assert!(config.init(&dir, None));
    let g = config.geometry();
    assert_eq!(g.inner_row_count, 62);
    assert_eq!(g.row_count, 4);
    assert_eq!(g.row_radius, vec![90.0, 91.0, 92.0, 93.0]);
    // the pad table was not in the file and no longer matches the row count
    assert!(!g.check_consistency().is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_repeated_init_increments_version() {
    let dir = config_dir("repeat");
    fs::write(dir.join(CONFIG_FILE_NAME), "fNTimeBins = 500 ;").unwrap();

    let mut config = GeometryConfig::new();
    for expected in 1..=3 {
        assert_eq!(config.try_init(&dir, None).unwrap(), expected);
    }
    assert_eq!(config.geometry().n_time_bins, 500);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_overflowing_row_count_loads_without_panicking() {
    let dir = config_dir("overflow");
    fs::write(dir.join(CONFIG_FILE_NAME), "fNRowLow = 18446744073709551615 ;\n").unwrap();

    let mut config = GeometryConfig::new();
    assert!(config.init(&dir, None), "A parseable file should load");
    assert_eq!(config.version(), 1);

    let transform = config.transform();
    assert_eq!(transform.geometry().inner_row_count, usize::MAX);
    assert!(transform.raw_to_global(0, 10, 30.0, 100.0).is_some());
    assert!(transform.raw_to_global(40, 5, 30.0, 100.0).is_none());
    assert!(transform.pad_length(100) > 0.0);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_oversized_row_table_fails_without_panicking() {
    let dir = config_dir("oversized");
    fs::write(
        dir.join(CONFIG_FILE_NAME),
        "fNRow = 2305843009213693952 ; fX[0] = 85.0 ; fX[1] = 86.0 ;",
    )
    .unwrap();

    let mut config = GeometryConfig::new();
    assert!(!config.init(&dir, None), "A short row table must be rejected");
    assert_eq!(config.version(), 0);
    assert_eq!(*config.geometry(), Geometry::default());

    fs::remove_dir_all(&dir).ok();
}
