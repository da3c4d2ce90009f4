use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::filter::FileFilter;

const DEFAULT_OUTPUT_EXTENSION: &str = ".txt";

/// Collects the files under `dir` accepted by `filter`, top-down.
///
/// Each directory's own files come before anything from its subdirectories, and both are
/// kept in the order the OS enumerates them. Ignored subdirectories are pruned before they
/// are read. Links to directories are not followed. Directories that can't be read are
/// logged and skipped.
pub fn walk_dir(dir: &Path, filter: &FileFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();
    visit_dir(dir, filter, &mut files);
    files
}

fn visit_dir(dir: &Path, filter: &FileFilter, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Unable to read directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut subdirs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Unable to read entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("Unable to stat {}: {}", path.display(), e);
                continue;
            }
        };
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if file_type.is_dir() {
            if !filter.prunes_dir(&name) {
                subdirs.push(path);
            }
        } else if file_type.is_symlink() && path.is_dir() {
            debug!("Not following directory link {}", path.display());
        } else if filter.accepts_file(&name) {
            files.push(path);
        }
    }

    for subdir in subdirs {
        visit_dir(&subdir, filter, files);
    }
}

/// Picks an output path derived from `base` that does not exist yet.
///
/// `.txt` is appended when `base` has no extension. On collision `_1`, `_2`, ... is inserted
/// before the extension until a free name is found.
pub fn unique_output_path(base: &Path) -> PathBuf {
    let candidate = if split_extension(base).1.is_none() {
        let mut with_ext = base.as_os_str().to_os_string();
        with_ext.push(DEFAULT_OUTPUT_EXTENSION);
        PathBuf::from(with_ext)
    } else {
        base.to_path_buf()
    };

    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = split_extension(&candidate);

    let mut counter: u64 = 1;
    loop {
        let mut name = stem.clone();
        name.push(format!("_{}", counter));
        if let Some(ext) = &ext {
            name.push(".");
            name.push(ext);
        }
        let next = candidate.with_file_name(name);
        if !next.exists() {
            return next;
        }
        debug!("{} already exists", next.display());
        counter += 1;
    }
}

// Splits the final component at its last dot. Leading dots never start an extension, so
// ".bashrc" and "..foo" have none while "out." has an empty one.
fn split_extension(path: &Path) -> (OsString, Option<OsString>) {
    let name = match path.file_name() {
        Some(name) => name,
        None => return (OsString::new(), None),
    };
    let text = match name.to_str() {
        Some(text) => text,
        None => {
            return (
                path.file_stem().map(OsStr::to_os_string).unwrap_or_default(),
                path.extension().map(OsStr::to_os_string),
            )
        }
    };

    let body = text.trim_start_matches('.');
    let lead = text.len() - body.len();
    match body.rfind('.') {
        Some(i) => (
            OsString::from(&text[..lead + i]),
            Some(OsString::from(&text[lead + i + 1..])),
        ),
        None => (OsString::from(text), None),
    }
}
