use std::fs;
use std::path::{Path, PathBuf};

use rslet_core::Repository;

use crate::OnDiskRepo;

/// A `TempRepo` creates a temporary, initialized rslet repository.
/// The directory is deleted when the struct is dropped.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub struct TempRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    path: PathBuf,
}

impl TempRepo {
    pub fn new() -> TempRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().to_path_buf();
        crate::init(&path).unwrap();

        TempRepo { tempdir, path }
    }

    /// Return the working directory.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Open the repository, as a new command invocation would.
    pub fn open(&self) -> Repository<OnDiskRepo> {
        crate::open(&self.path).unwrap()
    }

    /// Write a file into the working directory.
    pub fn write(&self, name: &str, content: &str) -> &Self {
        fs::write(self.path.join(name), content).unwrap();
        self
    }

    /// Read a working-directory file, or `None` if it doesn't exist.
    pub fn read(&self, name: &str) -> Option<String> {
        let path = self.path.join(name);
        if path.exists() {
            Some(fs::read_to_string(path).unwrap())
        } else {
            None
        }
    }

    pub fn delete(&self, name: &str) -> &Self {
        fs::remove_file(self.path.join(name)).unwrap();
        self
    }
}

impl Default for TempRepo {
    fn default() -> Self {
        TempRepo::new()
    }
}
