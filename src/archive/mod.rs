//! Dataset snapshot packing and unpacking
//!
//! A snapshot is a gzip-compressed tar stream of every regular file under a
//! dataset root, each entry addressed by its path relative to that root.
//! The local configuration (`.nova/config`) is never packed: it carries the
//! credentials and dataset linkage for the directory and must not ship
//! inside the payload.

use crate::config::store::local_config_subpath;
use crate::core::error::{NovaError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Component, Path};
use tar::{Archive, Builder};
use tracing::debug;

/// Pack the directory tree rooted at `root` into an in-memory gzip'd tar
/// stream.
///
/// Entries whose relative path has the local configuration subpath as a
/// prefix are excluded. Directories are traversed but not recorded as
/// entries of their own.
pub fn pack(root: &Path) -> Result<Vec<u8>> {
    let excluded = local_config_subpath();
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = Builder::new(encoder);

    let mut packed = 0usize;
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| NovaError::invalid_archive(format!(
                "Path escapes dataset root: {}",
                entry.path().display()
            )))?;

        if relative.starts_with(&excluded) {
            debug!(path = %relative.display(), "excluding local configuration from archive");
            continue;
        }

        let mut file = File::open(entry.path())?;
        builder.append_file(relative, &mut file)?;
        packed += 1;
    }

    let encoder = builder.into_inner()?;
    let bytes = encoder.finish()?;

    debug!(files = packed, bytes = bytes.len(), "packed dataset snapshot");
    Ok(bytes)
}

/// Unpack a gzip'd tar stream into `dest`, recreating the relative
/// directory structure.
///
/// Entry paths are validated before extraction: absolute paths and paths
/// with `..` components are rejected rather than extracted.
pub fn unpack(bytes: &[u8], dest: &Path) -> Result<()> {
    let decoder = GzDecoder::new(Cursor::new(bytes));
    let mut archive = Archive::new(decoder);

    fs::create_dir_all(dest)?;

    let entries = archive
        .entries()
        .map_err(|e| NovaError::invalid_archive(e.to_string()))?;

    let mut unpacked = 0usize;
    for entry in entries {
        let mut entry = entry.map_err(|e| NovaError::invalid_archive(e.to_string()))?;
        let path = entry
            .path()
            .map_err(|e| NovaError::invalid_archive(e.to_string()))?
            .into_owned();

        validate_entry_path(&path)?;

        entry.unpack_in(dest)?;
        unpacked += 1;
    }

    debug!(entries = unpacked, dest = %dest.display(), "unpacked dataset snapshot");
    Ok(())
}

/// Reject archive entry paths that could escape the destination.
fn validate_entry_path(path: &Path) -> Result<()> {
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {},
            _ => {
                return Err(NovaError::UnsafeArchivePath {
                    path: path.to_path_buf(),
                })
            },
        }
    }
    Ok(())
}
