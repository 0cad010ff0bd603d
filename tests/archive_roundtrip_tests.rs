//! Integration tests for the archive round-trip

use nova::archive::{pack, unpack};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Collect every regular file under `root` as relative path → bytes.
fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.unwrap();
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        files.insert(relative, fs::read(entry.path()).unwrap());
    }
    files
}

#[test]
fn test_round_trip_reproduces_tree() {
    let source = TempDir::new().unwrap();
    write_file(source.path(), "README.md", b"# dataset\n");
    write_file(source.path(), "data/2023/january.csv", b"day,value\n1,0.5\n");
    write_file(source.path(), "data/2023/february.csv", b"day,value\n1,0.7\n");
    write_file(source.path(), "data/summary.json", br#"{"rows": 2}"#);
    write_file(source.path(), "binary.dat", &[0u8, 159, 146, 150, 255]);

    let bytes = pack(source.path()).unwrap();

    let dest = TempDir::new().unwrap();
    unpack(&bytes, dest.path()).unwrap();

    assert_eq!(snapshot(source.path()), snapshot(dest.path()));
}

#[test]
fn test_round_trip_drops_only_the_local_config() {
    let source = TempDir::new().unwrap();
    write_file(source.path(), "kept.txt", b"kept");
    write_file(
        source.path(),
        ".nova/config",
        b"[core]\ntoken = \"secret\"\n",
    );

    let bytes = pack(source.path()).unwrap();

    let dest = TempDir::new().unwrap();
    unpack(&bytes, dest.path()).unwrap();

    let mut expected = snapshot(source.path());
    expected.remove(".nova/config");
    assert_eq!(expected, snapshot(dest.path()));

    // The secret must not appear anywhere in the stream either.
    let mut decompressed = Vec::new();
    std::io::copy(
        &mut flate2::read::GzDecoder::new(&bytes[..]),
        &mut decompressed,
    )
    .unwrap();
    assert!(!decompressed
        .windows(b"secret".len())
        .any(|window| window == b"secret"));
}

#[test]
fn test_unpack_into_missing_directory_creates_it() {
    let source = TempDir::new().unwrap();
    write_file(source.path(), "a.txt", b"a");

    let bytes = pack(source.path()).unwrap();

    let dest = TempDir::new().unwrap();
    let target = dest.path().join("fresh").join("clone");
    unpack(&bytes, &target).unwrap();

    assert_eq!(fs::read(target.join("a.txt")).unwrap(), b"a");
}

#[test]
fn test_pack_of_empty_tree_unpacks_to_nothing() {
    let source = TempDir::new().unwrap();
    let bytes = pack(source.path()).unwrap();

    let dest = TempDir::new().unwrap();
    unpack(&bytes, dest.path()).unwrap();

    assert!(snapshot(dest.path()).is_empty());
}
