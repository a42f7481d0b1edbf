//! PNG asset discovery.
//!
//! Resolves user-supplied paths to the list of PNG files to convert.
//! Directories are scanned recursively and hidden entries are skipped.
//! Only PNG input is understood; a non-PNG file named explicitly is
//! skipped with a warning rather than failing the whole batch.

use std::path::{Path, PathBuf};

use tracing::warn;

use super::error::ConvertError;

/// Resolve input paths to a sorted, deduplicated list of PNG files.
///
/// Each path may be a PNG file or a directory to scan recursively. A
/// nonexistent path is an error; everything else that is not a PNG file is
/// skipped.
pub fn find_png_assets(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ConvertError> {
    let mut assets = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(ConvertError::PathNotFound(path.clone()));
        }
        if path.is_dir() {
            collect_png_files(path, &mut assets)?;
        } else if is_png(path) {
            assets.push(path.clone());
        } else {
            warn!(path = %path.display(), "Skipping non-PNG file");
        }
    }

    assets.sort();
    assets.dedup();
    Ok(assets)
}

/// Check whether a path has a `.png` extension (case-insensitive).
fn is_png(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Recursively collect PNG files under a directory.
fn collect_png_files(dir: &Path, assets: &mut Vec<PathBuf>) -> Result<(), ConvertError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        // Skip hidden files and folders
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            collect_png_files(&path, assets)?;
        } else if is_png(&path) {
            assets.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, b"stub").unwrap();
        path
    }

    #[test]
    fn test_find_explicit_png_file() {
        let temp = TempDir::new().unwrap();
        let png = touch(temp.path(), "tile.png");

        let assets = find_png_assets(&[png.clone()]).unwrap();
        assert_eq!(assets, vec![png]);
    }

    #[test]
    fn test_find_skips_explicit_non_png() {
        let temp = TempDir::new().unwrap();
        let jpg = touch(temp.path(), "photo.jpg");

        let assets = find_png_assets(&[jpg]).unwrap();
        assert!(assets.is_empty());
    }

    #[test]
    fn test_find_nonexistent_path_is_error() {
        let result = find_png_assets(&[PathBuf::from("/nonexistent/tex.png")]);
        assert!(matches!(result, Err(ConvertError::PathNotFound(_))));
    }

    #[test]
    fn test_find_scans_directory_recursively() {
        let temp = TempDir::new().unwrap();
        let a = touch(temp.path(), "a.png");
        let b = touch(temp.path(), "nested/deep/b.png");
        touch(temp.path(), "nested/readme.txt");

        let assets = find_png_assets(&[temp.path().to_path_buf()]).unwrap();
        assert_eq!(assets, vec![a, b]);
    }

    #[test]
    fn test_find_skips_hidden_entries() {
        let temp = TempDir::new().unwrap();
        let visible = touch(temp.path(), "visible.png");
        touch(temp.path(), ".hidden.png");
        touch(temp.path(), ".git/object.png");

        let assets = find_png_assets(&[temp.path().to_path_buf()]).unwrap();
        assert_eq!(assets, vec![visible]);
    }

    #[test]
    fn test_find_case_insensitive_extension() {
        let temp = TempDir::new().unwrap();
        let upper = touch(temp.path(), "LOADING.PNG");

        let assets = find_png_assets(&[temp.path().to_path_buf()]).unwrap();
        assert_eq!(assets, vec![upper]);
    }

    #[test]
    fn test_find_sorted_and_deduplicated() {
        let temp = TempDir::new().unwrap();
        let a = touch(temp.path(), "a.png");
        let b = touch(temp.path(), "b.png");

        // The same file named twice, plus the directory containing both
        let assets =
            find_png_assets(&[b.clone(), a.clone(), temp.path().to_path_buf()]).unwrap();
        assert_eq!(assets, vec![a, b]);
    }
}
