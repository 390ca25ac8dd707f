// Evlist Symlink Resolution
// Finds the by-id / by-path alias pointing at a device node

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScanError, ScanResult};

/// Find the entry in `alias_dir` whose symlink target names `target`.
///
/// Only the final path component of the link target is compared against the
/// final component of `target`, so relative links such as `../event3` match
/// `/dev/input/event3`. The first match in directory order wins.
///
/// Returns `Ok(None)` when no alias points at the device. Failing to read
/// `alias_dir` or any link in it, including a missing directory, is an error.
pub fn resolve_alias(target: &Path, alias_dir: &Path) -> ScanResult<Option<PathBuf>> {
    let Some(target_name) = target.file_name() else {
        return Ok(None);
    };

    let entries = fs::read_dir(alias_dir).map_err(|source| ScanError::ReadDir {
        path: alias_dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadDir {
            path: alias_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|source| ScanError::ReadLink {
            path: path.clone(),
            source,
        })?;
        if !file_type.is_symlink() {
            continue;
        }

        let link = fs::read_link(&path).map_err(|source| ScanError::ReadLink {
            path: path.clone(),
            source,
        })?;
        if link.file_name() == Some(target_name) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}
