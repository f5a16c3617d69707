//! File system collector
//!
//! Supplies raw document text and file names to the pipeline and writes
//! back whatever the pipeline returns. All I/O for the migration lives
//! here; the domain never touches the file system.

use crate::error::{Result, VaultportError};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Image extensions copied verbatim from the vault.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Abstract collector for migration I/O
pub trait FileCollector {
    /// List markdown file names directly inside a directory
    fn list_markdown(&self, dir: &Path) -> Result<Vec<String>>;

    /// List image file names directly inside a directory
    fn list_images(&self, dir: &Path) -> Result<Vec<String>>;

    /// Read one document's raw text
    fn read_document(&self, dir: &Path, name: &str) -> Result<String>;

    /// Write one transformed document
    fn write_document(&self, dir: &Path, name: &str, text: &str) -> Result<()>;

    /// Copy one image file byte-for-byte
    fn copy_image(&self, src_dir: &Path, name: &str, dest_dir: &Path) -> Result<()>;

    /// Create a directory (and parents) if missing
    fn ensure_dir(&self, dir: &Path) -> Result<()>;
}

/// File system implementation of FileCollector
#[derive(Debug, Clone, Default)]
pub struct FsCollector;

impl FsCollector {
    pub fn new() -> Self {
        FsCollector
    }

    fn list_by_extension(&self, dir: &Path, extensions: &[&str]) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Err(VaultportError::MissingSourceDir(dir.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                VaultportError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "walkdir loop")
                }))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let matches = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| extensions.iter().any(|ext| ext.eq_ignore_ascii_case(e)));
            if matches {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }
}

impl FileCollector for FsCollector {
    fn list_markdown(&self, dir: &Path) -> Result<Vec<String>> {
        self.list_by_extension(dir, &["md"])
    }

    fn list_images(&self, dir: &Path) -> Result<Vec<String>> {
        self.list_by_extension(dir, &IMAGE_EXTENSIONS)
    }

    fn read_document(&self, dir: &Path, name: &str) -> Result<String> {
        Ok(fs::read_to_string(dir.join(name))?)
    }

    fn write_document(&self, dir: &Path, name: &str, text: &str) -> Result<()> {
        let path = dir.join(name);
        fs::write(&path, text).map_err(|source| VaultportError::Write { path, source })
    }

    fn copy_image(&self, src_dir: &Path, name: &str, dest_dir: &Path) -> Result<()> {
        let dest = dest_dir.join(name);
        fs::copy(src_dir.join(name), &dest)
            .map(|_| ())
            .map_err(|source| VaultportError::Write { path: dest, source })
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_markdown_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.md"), "b").unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        fs::write(temp.path().join("note.txt"), "no").unwrap();
        fs::create_dir(temp.path().join("sub.md")).unwrap();

        let collector = FsCollector::new();
        let names = collector.list_markdown(temp.path()).unwrap();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_list_images_known_extensions_only() {
        let temp = TempDir::new().unwrap();
        for name in ["a.png", "b.jpg", "c.jpeg", "d.gif", "e.svg", "f.md"] {
            fs::write(temp.path().join(name), "x").unwrap();
        }

        let collector = FsCollector::new();
        let names = collector.list_images(temp.path()).unwrap();
        assert_eq!(names, vec!["a.png", "b.jpg", "c.jpeg", "d.gif"]);
    }

    #[test]
    fn test_missing_dir_is_reported() {
        let temp = TempDir::new().unwrap();
        let collector = FsCollector::new();
        let result = collector.list_markdown(&temp.path().join("absent"));
        match result {
            Err(VaultportError::MissingSourceDir(_)) => {}
            other => panic!("Expected MissingSourceDir, got {:?}", other),
        }
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let collector = FsCollector::new();
        collector
            .write_document(temp.path(), "out.md", "hello")
            .unwrap();
        assert_eq!(
            collector.read_document(temp.path(), "out.md").unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_copy_image() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();
        fs::write(temp.path().join("cat.png"), [1u8, 2, 3]).unwrap();

        let collector = FsCollector::new();
        collector.copy_image(temp.path(), "cat.png", &dest).unwrap();
        assert_eq!(fs::read(dest.join("cat.png")).unwrap(), vec![1u8, 2, 3]);
    }
}
