//! Media file discovery.
//!
//! Walks a directory tree and collects files whose extension is on an
//! allow-list (case-insensitive). Results are sorted so that a batch run
//! visits files in a stable order.

use crate::classification::canonicalize_extension;
use crate::error::{CoreError, CoreResult};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Finds media files under `root`, recursing into subdirectories.
///
/// Extensions may be given with or without a leading dot. Symlinks are not
/// followed. Entries below the root that cannot be read are logged and
/// skipped.
///
/// # Errors
///
/// * `CoreError::PathError` - `root` is not a directory
/// * `CoreError::Walkdir` - the root itself could not be read
/// * `CoreError::NoFilesFound` - nothing matched
///
/// # Examples
///
/// ```rust,no_run
/// use playprobe_core::find_media_files;
/// use std::path::Path;
///
/// let files = find_media_files(Path::new("/srv/media"), &[".avi", "mkv"]).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn find_media_files<S: AsRef<str>>(root: &Path, extensions: &[S]) -> CoreResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CoreError::PathError(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let allowed: BTreeSet<String> = extensions
        .iter()
        .map(|e| canonicalize_extension(e.as_ref()))
        .collect();

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| allowed.contains(&canonicalize_extension(ext)));
        if matches {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }
    files.sort();
    log::debug!("Discovered {} media files under {}", files.len(), root.display());
    Ok(files)
}
