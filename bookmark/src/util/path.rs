// src/util/path.rs
use crate::domain::error::{DomainError, DomainResult};
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument};

/// Expands a leading `~` and resolves to an absolute path, following symlinks
/// for the components that exist and collapsing `.`/`..` for the rest.
/// The target does not need to exist.
pub fn normalize_path(p: &str) -> PathBuf {
    let expanded = shellexpand::tilde(p);
    let path = Path::new(expanded.as_ref());

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(part) => {
                resolved.push(part);
                // once a component is missing nothing below it can exist
                if fs::symlink_metadata(&resolved).is_ok() {
                    if let Ok(canonical) = resolved.canonicalize() {
                        resolved = canonical;
                    }
                }
            }
        }
    }
    resolved
}

/// Opens the bookmark file at `p` for buffered reading.
///
/// The path is normalized like bookmark values; anything that is not a regular
/// file after resolution is rejected.
#[instrument(level = "debug")]
pub fn open_bookmark_file(p: &Path) -> DomainResult<BufReader<File>> {
    let path = normalize_path(&p.to_string_lossy());
    if !path.is_file() {
        return Err(DomainError::NotAFile(path));
    }
    debug!("Reading bookmarks from {}", path.display());
    let file = File::open(&path)?;
    Ok(BufReader::new(file))
}
