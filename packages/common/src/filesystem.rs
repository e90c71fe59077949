use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File system abstraction for descriptor loading, module writing and testing
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error>;

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error>;

    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error>;

    /// All files under `dir` (recursively) with the given extension, sorted
    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, std::io::Error>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(path)
    }

    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().and_then(|s| s.to_str()) == Some(extension)
            {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// In-memory file system for testing
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.borrow_mut().insert(parent.to_path_buf());
        }
        self.files.borrow_mut().insert(path, contents.into());
    }

    pub fn get_file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        self.get_file(path).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        self.add_file(path, contents);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, std::io::Error> {
        // BTreeMap keys are already sorted
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| path.starts_with(dir))
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some(extension))
            .cloned()
            .collect())
    }
}
