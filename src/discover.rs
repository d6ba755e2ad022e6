//! Source discovery: turn command-line arguments into a list of files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default extension of files searched for inside directories.
pub const DEFAULT_EXTENSION: &str = "java";

/// Expand files, directories and glob patterns into a list of real files.
///
/// - a file is taken as-is, whatever its extension
/// - a directory is walked recursively for files ending in `.<extension>`
/// - anything else is tried as a glob pattern
///
/// The result is sorted and de-duplicated for deterministic processing.
pub fn collect_sources(patterns: &[String], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            files.extend(walk_dir(path, extension)?);
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Recursively collect files with the given extension under `root`.
fn walk_dir(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.with_context(|| format!("failed to scan directory: {}", root.display()))?;
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }
    log::debug!("{}: {} matching file(s)", root.display(), files.len());
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == extension.trim_start_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "class A {}\n").unwrap();
        path
    }

    #[test]
    fn walks_directories_recursively() {
        let dir = TempDir::new().unwrap();
        let a = touch(dir.path(), "A.java");
        let b = touch(dir.path(), "pkg/sub/B.java");
        touch(dir.path(), "pkg/notes.txt");
        touch(dir.path(), "pkg/C.java.backup");

        let files =
            collect_sources(&[dir.path().to_string_lossy().to_string()], DEFAULT_EXTENSION)
                .unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn explicit_files_ignore_extension() {
        let dir = TempDir::new().unwrap();
        let txt = touch(dir.path(), "Snippet.txt");
        let files = collect_sources(&[txt.to_string_lossy().to_string()], "java").unwrap();
        assert_eq!(files, vec![txt]);
    }

    #[test]
    fn glob_patterns_and_dedup() {
        let dir = TempDir::new().unwrap();
        let a = touch(dir.path(), "A.java");
        let pattern = format!("{}/*.java", dir.path().display());
        let files =
            collect_sources(&[pattern, a.to_string_lossy().to_string()], "java").unwrap();
        assert_eq!(files, vec![a]);
    }

    #[test]
    fn custom_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "A.java");
        let g = touch(dir.path(), "B.groovy");
        let files =
            collect_sources(&[dir.path().to_string_lossy().to_string()], ".groovy").unwrap();
        assert_eq!(files, vec![g]);
    }

    #[test]
    fn unmatched_pattern_is_empty() {
        let files =
            collect_sources(&["/nonexistent/javadoc-gen/*.java".to_string()], "java").unwrap();
        assert!(files.is_empty());
    }
}
