use std::fs;

use hadron_catalog::CatalogDef;
use tempfile::tempdir;

#[test]
fn yaml_and_json_files_load_identically() {
    let standard = CatalogDef::standard().unwrap();
    let dir = tempdir().unwrap();

    let yaml_path = dir.path().join("catalog.yaml");
    fs::write(&yaml_path, serde_yaml::to_string(&standard).unwrap()).unwrap();
    let json_path = dir.path().join("catalog.json");
    fs::write(&json_path, serde_json::to_string_pretty(&standard).unwrap()).unwrap();

    assert_eq!(CatalogDef::load(&yaml_path).unwrap(), standard);
    assert_eq!(CatalogDef::load(&json_path).unwrap(), standard);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = CatalogDef::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.info().code, "catalog-read");
}

#[test]
fn malformed_yaml_is_a_serde_error() {
    let err = CatalogDef::from_yaml_str("species: [ { name: 1").unwrap_err();
    assert_eq!(err.info().code, "catalog-yaml");
}
