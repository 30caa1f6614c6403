//! Unit tests for the catalog loader.

use camino::Utf8PathBuf;
use hostdir_data::{CatalogPaths, DataLoadError, load_catalog, load_raw};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn data_dir(temp: &TempDir) -> Utf8PathBuf {
    let dir = Utf8PathBuf::from_path_buf(temp.path().join("src").join("data")).unwrap();
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(dir: &Utf8PathBuf, providers: &str, plans: &str) {
    fs::write(dir.join("providers.json"), providers).unwrap();
    fs::write(dir.join("plans.json"), plans).unwrap();
}

#[test]
fn default_paths_point_at_src_data() {
    let paths = CatalogPaths::default();
    assert_eq!(paths.providers, Utf8PathBuf::from("src/data/providers.json"));
    assert_eq!(paths.plans, Utf8PathBuf::from("src/data/plans.json"));
}

#[test]
fn loads_raw_records_untouched() {
    let temp = tempfile::tempdir().unwrap();
    let dir = data_dir(&temp);
    write(
        &dir,
        r#"[{"id": "aws", "name": "AWS", "slug": "aws"}]"#,
        r#"[{"id": "aws-1", "provider_id": "aws", "price_eur": "9"}]"#,
    );

    let raw = load_raw(&CatalogPaths::in_dir(&dir)).unwrap();

    assert_eq!(raw.providers.len(), 1);
    assert_eq!(raw.plans[0]["price_eur"], serde_json::json!("9"));
}

#[test]
fn typed_catalog_is_tolerant() {
    let temp = tempfile::tempdir().unwrap();
    let dir = data_dir(&temp);
    write(
        &dir,
        r#"[{"id": "aws", "name": "AWS", "slug": "aws", "region": " EU "}]"#,
        r#"[
            {"id": "aws-1", "provider_id": "aws", "price_eur": "9", "price_usd": 10, "ssl": true},
            "not a record"
        ]"#,
    );

    let catalog = load_catalog(&CatalogPaths::in_dir(&dir)).unwrap();

    assert_eq!(catalog.providers[0].region.as_deref(), Some(" EU "));
    assert_eq!(catalog.plans.len(), 1);
    assert_eq!(catalog.plans[0].price_eur, None);
    assert_eq!(catalog.plans[0].price_usd, Some(10.0));
    assert!(catalog.plans[0].ssl);
}

#[test]
fn missing_file_is_io_error() {
    let temp = tempfile::tempdir().unwrap();
    let dir = data_dir(&temp);

    let err = load_raw(&CatalogPaths::in_dir(&dir)).unwrap_err();

    assert!(matches!(err, DataLoadError::Io { .. }));
    assert!(err.to_string().contains("providers.json"));
}

#[test]
fn malformed_json_is_json_error() {
    let temp = tempfile::tempdir().unwrap();
    let dir = data_dir(&temp);
    write(&dir, "[]", "[{");

    let err = load_raw(&CatalogPaths::in_dir(&dir)).unwrap_err();

    assert!(matches!(err, DataLoadError::Json { ref path, .. } if path.ends_with("plans.json")));
}

#[test]
fn non_array_document_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let dir = data_dir(&temp);
    write(&dir, r#"{"providers": []}"#, "[]");

    let err = load_raw(&CatalogPaths::in_dir(&dir)).unwrap_err();

    assert_eq!(
        err,
        DataLoadError::NotAnArray {
            path: dir.join("providers.json")
        }
    );
}
