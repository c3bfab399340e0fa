//! Recursive file enumeration over repository trees.
//!
//! Both the repository accessors and the normaliser need every file beneath
//! a root in a stable order, independent of filesystem enumeration order.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{BurnishError, Result};

/// Collect every file under `root`, sorted by path.
///
/// A missing root yields an empty list; a root that is itself a file yields
/// that single file, matching how the host tool flattens file trees.
///
/// # Errors
///
/// Returns [`BurnishError::ScanFailed`] when a directory cannot be read or
/// an entry's name is not valid UTF-8.
pub fn files_under(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    if root.is_file() {
        files.push(root.to_path_buf());
        return Ok(files);
    }
    if !root.exists() {
        return Ok(files);
    }
    collect_files(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    let entries = dir.read_dir_utf8().map_err(|source| BurnishError::ScanFailed {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| BurnishError::ScanFailed {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(path, files)?;
        } else {
            files.push(path.to_path_buf());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp.path()).expect("temp dir should be UTF-8")
    }

    #[test]
    fn missing_root_yields_nothing() {
        let files = files_under(Utf8Path::new("/nonexistent/repo")).expect("missing root is fine");
        assert!(files.is_empty());
    }

    #[test]
    fn file_root_yields_itself() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        let file = root.join("gradle-core-8.0.jar");
        std::fs::write(&file, b"jar").expect("write file");

        let files = files_under(&file).expect("file root");
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn nested_files_come_back_sorted() {
        let temp = TempDir::new().expect("temp dir");
        let root = utf8_root(&temp);
        std::fs::create_dir_all(root.join("org/gradle/core/8.0")).expect("create dirs");
        std::fs::write(root.join("org/gradle/core/maven-metadata.xml"), b"m").expect("write");
        std::fs::write(root.join("org/gradle/core/8.0/core-8.0.module"), b"d").expect("write");
        std::fs::write(root.join("org/gradle/core/8.0/core-8.0.jar"), b"j").expect("write");

        let files = files_under(root).expect("walk");
        let names: Vec<&str> = files.iter().map(|path| path.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(files.len(), 3);
    }
}
