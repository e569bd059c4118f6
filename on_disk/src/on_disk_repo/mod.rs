use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use rslet_core::object::{Id, Kind, Object};
use rslet_core::path::REPO_DIR_NAME;
use rslet_core::repo::{Error, Repo, Result};
use rslet_core::stage::Index;

use crate::config::{load_config, save_config, Config};

mod objects;
mod refs;
mod work_tree;

/// Implementation of `rslet_core::repo::Repo` that stores content on the
/// local file system, in a `.rslet` directory at the top of the working
/// directory.
#[derive(Debug)]
pub struct OnDiskRepo {
    work_dir: PathBuf,
    repo_dir: PathBuf,
    objects_dir: PathBuf,
    heads_dir: PathBuf,
    config: Config,
}

impl OnDiskRepo {
    /// Open an on-disk rslet repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.rslet`
    /// directory should exist at this path. Use `init` to create an empty
    /// on-disk repository if necessary.
    pub fn new(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.is_dir() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let repo_dir = work_dir.join(REPO_DIR_NAME);
        if !repo_dir.is_dir() {
            return Err(Error::RepoDirDoesntExist(repo_dir));
        }

        let config = load_config(&repo_dir)?;
        Ok(OnDiskRepo::with_dirs(work_dir, repo_dir, config))
    }

    /// Create the directory structure of a new, empty repository.
    ///
    /// This creates no commits or refs; see [`crate::init`] for a repository
    /// that is ready to use.
    pub fn init(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.is_dir() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let repo_dir = work_dir.join(REPO_DIR_NAME);
        if repo_dir.exists() {
            return Err(Error::RepoDirShouldntExist(repo_dir));
        }

        fs::create_dir_all(&repo_dir)?;
        fs::create_dir_all(repo_dir.join("objects"))?;
        fs::create_dir_all(repo_dir.join("refs/heads"))?;

        let config = Config::default();
        save_config(&repo_dir, &config)?;

        debug!(repo_dir = %repo_dir.display(), "created repository directory");
        Ok(OnDiskRepo::with_dirs(work_dir, repo_dir, config))
    }

    fn with_dirs(work_dir: PathBuf, repo_dir: PathBuf, config: Config) -> Self {
        OnDiskRepo {
            objects_dir: repo_dir.join("objects"),
            heads_dir: repo_dir.join("refs/heads"),
            work_dir,
            repo_dir,
            config,
        }
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.rslet` directory.
    pub fn repo_dir(&self) -> &Path {
        self.repo_dir.as_path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the loose object file for `id`, whether or not it exists.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        objects::object_path(&self.objects_dir, id)
    }

    fn index_path(&self) -> PathBuf {
        self.repo_dir.join("index")
    }
}

impl Repo for OnDiskRepo {
    fn put_object(&mut self, object: &Object) -> Result<Id> {
        objects::put_loose_object(&self.objects_dir, object)
    }

    fn has_object(&self, id: &Id) -> Result<bool> {
        Ok(self.object_path(id).is_file())
    }

    fn get_object(&self, id: &Id) -> Result<Object> {
        objects::get_loose_object(&self.objects_dir, id)
    }

    fn find_objects(&self, prefix: &str, kind: Kind) -> Result<Vec<Id>> {
        objects::find_loose_objects(&self.objects_dir, prefix, kind)
    }

    fn head(&self) -> Result<String> {
        refs::read_head(&self.repo_dir)
    }

    fn set_head(&mut self, branch: &str) -> Result<()> {
        refs::write_head(&self.repo_dir, branch)
    }

    fn branch(&self, name: &str) -> Result<Option<Id>> {
        refs::read_branch(&self.heads_dir, name)
    }

    fn set_branch(&mut self, name: &str, id: &Id) -> Result<()> {
        refs::write_branch(&self.heads_dir, name, id)
    }

    fn remove_branch(&mut self, name: &str) -> Result<()> {
        refs::remove_branch(&self.heads_dir, name)
    }

    fn branches(&self) -> Result<Vec<String>> {
        refs::list_branches(&self.heads_dir)
    }

    fn read_index(&self) -> Result<Option<Index>> {
        let data = match fs::read(self.index_path()) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let index = serde_json::from_slice(&data)
            .map_err(|e| Error::CorruptMetadata(format!("index: {}", e)))?;
        Ok(Some(index))
    }

    fn write_index(&mut self, index: &Index) -> Result<()> {
        let data = serde_json::to_vec_pretty(index).map_err(|e| Error::OtherError(Box::new(e)))?;
        write_atomic(&self.index_path(), &data)?;
        debug!(
            added = index.added().len(),
            removed = index.removed().len(),
            "index written"
        );
        Ok(())
    }

    fn work_files(&self) -> Result<Vec<String>> {
        work_tree::list(&self.work_dir)
    }

    fn read_work_file(&self, name: &str) -> Result<Option<Vec<u8>>> {
        work_tree::read(&self.work_dir, name)
    }

    fn write_work_file(&mut self, name: &str, content: &[u8]) -> Result<()> {
        work_tree::write(&self.work_dir, name, content)
    }

    fn remove_work_file(&mut self, name: &str) -> Result<()> {
        work_tree::remove(&self.work_dir, name)
    }
}

/// Replace the file at `path` in one step by writing a sibling temporary
/// file and renaming it over the original.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::CorruptMetadata(format!("bad path {}", path.display())))?;

    write_atomic_in(dir, path, data)
}

/// Like `write_atomic`, but stage the temporary file in `tmp_dir`, which
/// must be on the same file system as `path`.
fn write_atomic_in(tmp_dir: &Path, path: &Path, data: &[u8]) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(tmp_dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests;
