//! Archive discovery

use std::path::{Path, PathBuf};

use pkgverify_errors::Error;
use tokio::fs;

/// List regular files in `dir` whose name ends with `suffix`, sorted by name
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub async fn find_archives(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, Error> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(&e, dir))?;

    let mut found = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(&e, dir))?
    {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }
        // follows symlinks, so a link to an archive counts
        if fs::metadata(entry.path()).await.is_ok_and(|m| m.is_file()) {
            found.push(entry.path());
        }
    }

    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b-1.0.0.tgz"), b"x").unwrap();
        std::fs::write(dir.path().join("a-1.0.0.tgz"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("dir.tgz")).unwrap();

        let found = find_archives(dir.path(), ".tgz").await.unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a-1.0.0.tgz", "b-1.0.0.tgz"]);
    }

    #[tokio::test]
    async fn empty_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), b"{}").unwrap();
        assert!(find_archives(dir.path(), ".tgz").await.unwrap().is_empty());
    }
}
