//! Input file enumeration.
//!
//! Expands the `--input` argument into the ordered list of frames. The last
//! path segment is a filename pattern, everything before it is the directory
//! to list:
//!
//! ```text
//! frames/*.png          → files in frames/ matching *.png
//! shot_??.jpg           → files in the current directory matching shot_??.jpg
//! /tmp/render/frame_*   → files in /tmp/render/ matching frame_*
//! ```
//!
//! Only regular files directly inside the directory are considered (no
//! recursion). Results are sorted lexicographically by path, so frame order
//! never depends on the filesystem's listing order.

use glob::Pattern;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Split an input path into `(directory, filename pattern)`.
///
/// The directory is `None` when the input has no directory part. A trailing
/// separator leaves an empty pattern.
pub fn split_input(input: &str) -> (Option<PathBuf>, String) {
    if input.ends_with('/') || input.ends_with(MAIN_SEPARATOR) {
        return (Some(PathBuf::from(input)), String::new());
    }

    let path = Path::new(input);
    let pattern = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf);
    (dir, pattern)
}

/// List the files matching `input`, sorted by path.
///
/// An input without a directory part is resolved against the current working
/// directory. No match is an empty list, not an error.
pub fn enumerate_files(input: &str) -> Result<Vec<PathBuf>, ScanError> {
    let (dir, pattern) = split_input(input);
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    list_matching(&dir, &pattern)
}

/// List regular files directly inside `dir` whose name matches `pattern`.
pub fn list_matching(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let matcher = Pattern::new(pattern)?;

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| matcher.matches(&e.file_name().to_string_lossy()))
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();

    files.sort();
    debug!(dir = %dir.display(), pattern, matched = files.len(), "listed input files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    // =========================================================================
    // split_input
    // =========================================================================

    #[test]
    fn split_dir_and_pattern() {
        let (dir, pattern) = split_input("frames/*.png");
        assert_eq!(dir, Some(PathBuf::from("frames")));
        assert_eq!(pattern, "*.png");
    }

    #[test]
    fn split_bare_pattern_has_no_dir() {
        let (dir, pattern) = split_input("*.png");
        assert_eq!(dir, None);
        assert_eq!(pattern, "*.png");
    }

    #[test]
    fn split_absolute_path() {
        let (dir, pattern) = split_input("/tmp/render/frame_*");
        assert_eq!(dir, Some(PathBuf::from("/tmp/render")));
        assert_eq!(pattern, "frame_*");
    }

    #[test]
    fn split_trailing_separator_is_empty_pattern() {
        let (dir, pattern) = split_input("frames/");
        assert_eq!(dir, Some(PathBuf::from("frames/")));
        assert_eq!(pattern, "");
    }

    // =========================================================================
    // list_matching
    // =========================================================================

    #[test]
    fn matches_pattern_and_sorts() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.png", "a.png", "b.jpg", "b.png", "notes.txt"] {
            touch(tmp.path(), name);
        }

        let files = list_matching(tmp.path(), "*.png").unwrap();
        assert_eq!(names(&files), vec!["a.png", "b.png", "c.png"]);
        assert!(files.iter().all(|p| p.starts_with(tmp.path())));
    }

    #[test]
    fn sort_is_lexicographic_not_numeric() {
        let tmp = TempDir::new().unwrap();
        for name in ["frame10.png", "frame2.png", "frame1.png"] {
            touch(tmp.path(), name);
        }

        let files = list_matching(tmp.path(), "frame*.png").unwrap();
        assert_eq!(
            names(&files),
            vec!["frame1.png", "frame10.png", "frame2.png"]
        );
    }

    #[test]
    fn question_mark_and_class_patterns() {
        let tmp = TempDir::new().unwrap();
        for name in ["f1.png", "f2.png", "f10.png", "g1.png"] {
            touch(tmp.path(), name);
        }

        assert_eq!(
            names(&list_matching(tmp.path(), "f?.png").unwrap()),
            vec!["f1.png", "f2.png"]
        );
        assert_eq!(
            names(&list_matching(tmp.path(), "[fg]1.png").unwrap()),
            vec!["f1.png", "g1.png"]
        );
    }

    #[test]
    fn does_not_recurse_or_return_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.png");
        fs::create_dir(tmp.path().join("dir.png")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "b.png");

        let files = list_matching(tmp.path(), "*.png").unwrap();
        assert_eq!(names(&files), vec!["a.png"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");

        let files = list_matching(tmp.path(), "*.png").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.png");

        assert!(list_matching(tmp.path(), "").unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = list_matching(&tmp.path().join("nope"), "*.png");
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn invalid_pattern_errors() {
        let tmp = TempDir::new().unwrap();
        let result = list_matching(tmp.path(), "frame[.png");
        assert!(matches!(result, Err(ScanError::Pattern(_))));
    }

    // =========================================================================
    // enumerate_files
    // =========================================================================

    #[test]
    fn enumerate_with_directory_part() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b.png");
        touch(tmp.path(), "a.png");

        let input = format!("{}/*.png", tmp.path().display());
        let files = enumerate_files(&input).unwrap();
        assert_eq!(
            files,
            vec![tmp.path().join("a.png"), tmp.path().join("b.png")]
        );
    }
}
