use crate::error::{GenerateError, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

pub const DEFAULT_OUTPUT_DIR: &str = "target/postman";

/// `Family Tree API - Java` -> `family-tree-api-java.postman_collection.json`
pub fn collection_file_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "collection" } else { slug };
    format!("{}.postman_collection.json", slug)
}

pub fn output_path<P: AsRef<Path>>(dir: P, collection_name: &str) -> PathBuf {
    dir.as_ref().join(collection_file_name(collection_name))
}

/// Writes `content` to `path`, replacing any existing file.
///
/// The bytes go to a temporary file next to `path` which is renamed over it
/// once flushed, so `path` never holds a partial document. The temporary is
/// removed if anything fails before the rename.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| GenerateError::DirectoryCreation {
        path: dir.to_path_buf(),
        source,
    })?;
    let write_err = |source| GenerateError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    log::debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("Family Tree API - Java", "family-tree-api-java.postman_collection.json")]
    #[case("  Pets  ", "pets.postman_collection.json")]
    #[case("---", "collection.postman_collection.json")]
    fn file_names(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(collection_file_name(name), expected);
    }

    #[rstest]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("target").join("postman").join("c.json");
        write_file(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[rstest]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.json");
        fs::write(&path, "old content that is longer").unwrap();
        write_file(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[rstest]
    fn leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path().join("c.json"), "{}").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[rstest]
    fn parent_that_is_a_file_fails_directory_creation() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = write_file(blocker.join("out").join("c.json"), "{}").unwrap_err();
        assert!(matches!(err, GenerateError::DirectoryCreation { .. }));
    }

    #[rstest]
    fn target_that_is_a_directory_fails_write() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("c.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();
        let err = write_file(&target, "{}").unwrap_err();
        assert!(matches!(err, GenerateError::FileWrite { .. }));
        assert!(target.join("keep").exists());
    }
}
