//! Represents the storage underneath a repository.
//!
//! ## Design Goals
//!
//! Rslet intends to allow repositories to be stored in multiple different mechanisms.
//! The `rslet_on_disk` crate stores them in a directory next to the working tree;
//! `MemoryRepo` keeps everything in memory.

mod error;
pub use error::{Error, ErrorKind, Result};

mod memory;
pub use memory::MemoryRepo;

use crate::object::{is_hex, Blob, Commit, Id, Kind, Object, HEX_LEN};
use crate::stage::Index;

/// Fewest hex digits accepted when looking a commit up by abbreviated ID.
pub const MIN_PREFIX_LEN: usize = 4;

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing a repository.
///
/// The required methods on this trait represent the most primitive operations
/// which must be defined for a given storage architecture: an append-only
/// object store, branch references plus HEAD, the persisted staging index,
/// and a flat working tree.
///
/// The provided methods are the typed lookups built on top of them.
/// Higher-level operations live on [`Repository`](crate::Repository).
pub trait Repo {
    /// Store `object`, returning its ID. Storing an object that already exists is a no-op.
    fn put_object(&mut self, object: &Object) -> Result<Id>;

    /// Returns true if an object with this ID is stored.
    fn has_object(&self, id: &Id) -> Result<bool>;

    /// Read an object back. Fails with `Error::MissingObject` if it was never stored.
    fn get_object(&self, id: &Id) -> Result<Object>;

    /// Return the IDs of all stored objects of `kind` whose hex form starts with `prefix`.
    ///
    /// `prefix` is at least two lowercase hex digits.
    fn find_objects(&self, prefix: &str, kind: Kind) -> Result<Vec<Id>>;

    /// Name of the branch HEAD points to.
    fn head(&self) -> Result<String>;

    fn set_head(&mut self, branch: &str) -> Result<()>;

    /// Commit a branch points to, or `None` if there is no such branch.
    fn branch(&self, name: &str) -> Result<Option<Id>>;

    /// Create or move a branch.
    fn set_branch(&mut self, name: &str, id: &Id) -> Result<()>;

    fn remove_branch(&mut self, name: &str) -> Result<()>;

    /// All branch names, sorted.
    fn branches(&self) -> Result<Vec<String>>;

    /// The persisted staging index, or `None` if none was ever written.
    fn read_index(&self) -> Result<Option<Index>>;

    fn write_index(&mut self, index: &Index) -> Result<()>;

    /// Names of the regular files in the working tree, sorted.
    fn work_files(&self) -> Result<Vec<String>>;

    /// Content of a working-tree file, or `None` if it does not exist.
    fn read_work_file(&self, name: &str) -> Result<Option<Vec<u8>>>;

    fn write_work_file(&mut self, name: &str, content: &[u8]) -> Result<()>;

    /// Delete a working-tree file. Deleting a missing file is not an error.
    fn remove_work_file(&mut self, name: &str) -> Result<()>;

    /// Read a commit. Fails if `id` names a blob.
    fn get_commit(&self, id: &Id) -> Result<Commit> {
        match self.get_object(id)? {
            Object::Commit(commit) => Ok(commit),
            Object::Blob(_) => Err(Error::CorruptObject(
                id.clone(),
                "expected a commit, found a blob".to_string(),
            )),
        }
    }

    /// Read a blob. Fails if `id` names a commit.
    fn get_blob(&self, id: &Id) -> Result<Blob> {
        match self.get_object(id)? {
            Object::Blob(blob) => Ok(blob),
            Object::Commit(_) => Err(Error::CorruptObject(
                id.clone(),
                "expected a blob, found a commit".to_string(),
            )),
        }
    }

    /// Expand a full or abbreviated commit ID.
    ///
    /// Abbreviations need at least `MIN_PREFIX_LEN` digits and must match
    /// exactly one stored commit.
    fn resolve_commit(&self, partial: &str) -> Result<Id> {
        if partial.len() < MIN_PREFIX_LEN {
            return Err(Error::ShortId);
        }

        if partial.len() >= HEX_LEN {
            let id: Id = partial.parse().map_err(|_| Error::CommitNotFound)?;
            return match self.get_object(&id) {
                Ok(Object::Commit(_)) => Ok(id),
                Ok(Object::Blob(_)) | Err(Error::MissingObject(_)) => Err(Error::CommitNotFound),
                Err(err) => Err(err),
            };
        }

        if !is_hex(partial) {
            return Err(Error::CommitNotFound);
        }

        let mut matches = self.find_objects(partial, Kind::Commit)?;
        match matches.len() {
            0 => Err(Error::CommitNotFound),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::AmbiguousId),
        }
    }
}
