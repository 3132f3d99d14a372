use std::fs;
use std::path::{Path, PathBuf};

use tpc_transform::{
    format_config, DetectorParameters, Geometry, GeometryConfig, ParameterProvider, Result,
    TransformError, CONFIG_FILE_NAME,
};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tpc_transform_it_provider_{}", name));
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Serves a modified reference detector for one known source.
struct RunFileProvider {
    known: PathBuf,
}

impl ParameterProvider for RunFileProvider {
    fn parameters(&self, source: &Path) -> Result<DetectorParameters> {
        if source != self.known {
            return Err(TransformError::Provider(format!(
                "no detector description in {}",
                source.display()
            )));
        }
        let mut params = DetectorParameters::from(&Geometry::default());
        params.b_field_factor = -1;
        params.z_offset = 0.75;
        params.row_radius[0] = 85.0;
        Ok(params)
    }
}

fn archived_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().into_string().ok())
                .filter(|n| n.starts_with(&format!("{}-", CONFIG_FILE_NAME)))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_provider_and_text_paths_agree() {
    let dir = scratch("agree");
    let provider = RunFileProvider { known: PathBuf::from("run42/alirunfile.root") };

    let mut from_provider = GeometryConfig::new().with_scratch_dir(&dir);
    assert!(from_provider.init("run42/alirunfile.root", Some(&provider)));
    assert_eq!(from_provider.version(), 1);
    let g = from_provider.geometry();
    assert_eq!(g.b_field_factor, -1);
    assert!((g.b_field() + 0.2).abs() < 1e-12);
    assert_eq!(g.z_offset, 0.75);
    assert_eq!(g.row_radius[0], 85.0);

    // writing the same geometry by hand and loading it gives the same table
    let text_dir = scratch("agree_text");
    fs::create_dir_all(&text_dir).unwrap();
    fs::write(text_dir.join(CONFIG_FILE_NAME), format_config(&g)).unwrap();
    let mut from_text = GeometryConfig::new();
    assert!(from_text.init(&text_dir, None));
    assert_eq!(*from_text.geometry(), *g);

    fs::remove_dir_all(&dir).ok();
    fs::remove_dir_all(&text_dir).ok();
}

#[test]
fn test_generated_file_is_archived() {
    let dir = scratch("archive");
    let provider = RunFileProvider { known: PathBuf::from("run7") };

    let mut config = GeometryConfig::new().with_scratch_dir(&dir);
    assert!(config.init("run7", Some(&provider)));

    assert!(!dir.join(CONFIG_FILE_NAME).exists(), "Generated file should be renamed");
    let archived = archived_files(&dir);
    assert_eq!(archived.len(), 1, "Expected one archived file, got {:?}", archived);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_provider_failure_keeps_geometry() {
    let dir = scratch("failure");
    let provider = RunFileProvider { known: PathBuf::from("run1") };

    let mut config = GeometryConfig::new().with_scratch_dir(&dir);
    let before = config.geometry();
    assert!(!config.init("run2", Some(&provider)));
    assert_eq!(config.version(), 0);
    assert_eq!(*config.geometry(), *before);
    assert!(archived_files(&dir).is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_response_function_fails() {
    let dir = scratch("missing_prf");
    let mut params = DetectorParameters::from(&Geometry::default());
    params.prf_sigma_inner = None;

    let mut config = GeometryConfig::new().with_scratch_dir(&dir);
    let err = config.try_init("anything", Some(&params)).unwrap_err();
    assert!(matches!(err, TransformError::Provider(_)));
    assert_eq!(config.version(), 0);

    fs::remove_dir_all(&dir).ok();
}
