//! Locale discovery inside a messages directory.
//!
//! A messages directory holds one catalog per locale (`en.json`,
//! `pl.json`, ...). Only files directly inside the directory count;
//! subdirectories and dotfiles are ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::{LoadError, LoadResult};

/// File extension of catalog documents.
pub const CATALOG_EXTENSION: &str = "json";

/// List the catalog files in `dir`, sorted by file name.
pub fn discover_catalogs(dir: &Path) -> LoadResult<Vec<PathBuf>> {
    let meta = fs::metadata(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(LoadError::Io {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || is_hidden(entry.path()) {
            continue;
        }
        if has_catalog_extension(entry.path()) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Report label for a catalog file: its stem, or the whole path if it has
/// none.
pub fn catalog_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn has_catalog_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CATALOG_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn lists_json_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pl.json", "en.json", "de.JSON", "notes.txt", ".draft.json"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("fr.json"), "{}").unwrap();

        let found = discover_catalogs(dir.path()).unwrap();
        assert_eq!(names(&found), vec!["de.JSON", "en.json", "pl.json"]);
    }

    #[test]
    fn empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_catalogs(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_catalogs(&dir.path().join("messages")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("en.json");
        fs::write(&file, "{}").unwrap();
        assert!(matches!(discover_catalogs(&file), Err(LoadError::Io { .. })));
    }

    #[test]
    fn labels_use_file_stem() {
        assert_eq!(catalog_label(Path::new("messages/en.json")), "en");
        assert_eq!(catalog_label(Path::new("pl")), "pl");
    }
}
