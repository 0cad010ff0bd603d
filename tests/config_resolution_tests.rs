//! Integration tests for configuration loading and resolution

use nova::config::{resolve, ConfigLocations, ConfigOverrides, Configuration};
use nova::NovaError;
use std::path::Path;
use tempfile::TempDir;

fn locations_in(dir: &Path) -> ConfigLocations {
    ConfigLocations::with_paths(
        dir.join("global").join("config"),
        dir.join("work").join(".nova").join("config"),
    )
}

fn write_config(path: &Path, pairs: &[(&str, &str)]) {
    let mut config = Configuration::new();
    for (key, value) in pairs {
        config.set_core(key, value);
    }
    config.write(path).unwrap();
}

#[test]
fn test_resolution_with_no_files_fails_on_first_required_key() {
    let temp = TempDir::new().unwrap();
    let locations = locations_in(temp.path());

    let err = resolve(&locations, &ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, NovaError::MissingConfigKey { ref key } if key == "remote"));
}

#[test]
fn test_merge_precedence_global_local_override() {
    let temp = TempDir::new().unwrap();
    let locations = locations_in(temp.path());

    write_config(
        locations.global_path(),
        &[("remote", "https://a.example.com"), ("token", "token-a")],
    );
    write_config(locations.local_path(), &[("remote", "https://b.example.com")]);

    let overrides = ConfigOverrides {
        token: Some("token-c".to_string()),
        ..Default::default()
    };

    let effective = resolve(&locations, &overrides).unwrap();
    assert_eq!(effective.get_core("remote"), Some("https://b.example.com"));
    assert_eq!(effective.get_core("token"), Some("token-c"));
}

#[test]
fn test_missing_token_everywhere_names_token() {
    let temp = TempDir::new().unwrap();
    let locations = locations_in(temp.path());

    write_config(
        locations.global_path(),
        &[("remote", "https://a.example.com")],
    );

    let err = resolve(&locations, &ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, NovaError::MissingConfigKey { ref key } if key == "token"));
    assert!(err.to_string().contains("token"));
}

#[test]
fn test_overrides_alone_are_sufficient() {
    let temp = TempDir::new().unwrap();
    let locations = locations_in(temp.path());

    let overrides = ConfigOverrides {
        remote: Some("https://c.example.com".to_string()),
        token: Some("token-c".to_string()),
        ..Default::default()
    };

    let effective = resolve(&locations, &overrides).unwrap();
    assert_eq!(effective.get_core("remote"), Some("https://c.example.com"));
    assert_eq!(effective.get_core("token"), Some("token-c"));
}

#[test]
fn test_local_collection_and_name_survive_merge() {
    let temp = TempDir::new().unwrap();
    let locations = locations_in(temp.path());

    write_config(
        locations.global_path(),
        &[("remote", "https://a.example.com"), ("token", "token-a")],
    );
    write_config(
        locations.local_path(),
        &[("collection", "climate"), ("name", "temps")],
    );

    let effective = resolve(&locations, &ConfigOverrides::default()).unwrap();
    assert_eq!(effective.get_core("collection"), Some("climate"));
    assert_eq!(effective.get_core("name"), Some("temps"));
    assert_eq!(effective.get_core("remote"), Some("https://a.example.com"));
}

#[test]
fn test_resolution_reads_files_fresh_from_disk() {
    let temp = TempDir::new().unwrap();
    let locations = locations_in(temp.path());

    write_config(
        locations.global_path(),
        &[("remote", "https://a.example.com"), ("token", "token-a")],
    );
    let first = resolve(&locations, &ConfigOverrides::default()).unwrap();
    assert_eq!(first.get_core("token"), Some("token-a"));

    write_config(
        locations.global_path(),
        &[("remote", "https://a.example.com"), ("token", "token-b")],
    );
    let second = resolve(&locations, &ConfigOverrides::default()).unwrap();
    assert_eq!(second.get_core("token"), Some("token-b"));
}
