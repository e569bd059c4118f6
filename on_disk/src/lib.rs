//! This crate provides an rslet repository that stores content on the local
//! file system.
//!
//! The repository lives in a `.rslet` directory at the top of the working
//! directory:
//!
//! ```text
//! .rslet/config                     TOML: format version and default branch
//! .rslet/HEAD                       "ref: refs/heads/<branch>"
//! .rslet/refs/heads/<branch>        40-digit commit ID
//! .rslet/index                      JSON: {"added": {...}, "removed": [...]}
//! .rslet/objects/<2 hex>/<38 hex>   zlib("<kind> <len>\0" + payload)
//! ```

use std::path::Path;

use rslet_core::repo::Result;
use rslet_core::Repository;

pub mod config;

mod on_disk_repo;
pub use on_disk_repo::OnDiskRepo;

mod temp_repo;
pub use temp_repo::TempRepo;

/// Create a new repository in `work_dir` with a root commit on the default
/// branch.
pub fn init(work_dir: &Path) -> Result<Repository<OnDiskRepo>> {
    let store = OnDiskRepo::init(work_dir)?;
    let branch = store.config().core.defaultbranch.clone();
    Repository::init(store, &branch)
}

/// Open the repository in `work_dir`.
pub fn open(work_dir: &Path) -> Result<Repository<OnDiskRepo>> {
    Repository::open(OnDiskRepo::new(work_dir)?)
}

#[cfg(test)]
mod tests;
