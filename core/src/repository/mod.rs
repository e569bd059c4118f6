//! The version-control operations, layered over any `Repo` storage.

use tracing::{debug, info};

use crate::object::{Blob, Commit, Id, Object};
use crate::path;
use crate::repo::{Error, Repo, Result};
use crate::stage::{AddOutcome, Index, StagingArea};

mod checkout;
mod history;
mod merge;
mod status;

pub use status::{Modification, Status};

#[cfg(test)]
mod tests;

/// An open repository: the storage plus the current branch, its HEAD commit,
/// and the staging area, all loaded once when the repository is opened.
///
/// Every mutating operation validates its preconditions before it changes
/// anything, and writes objects before the refs or index that point to them.
#[derive(Debug)]
pub struct Repository<R: Repo> {
    store: R,
    branch: String,
    head: Commit,
    stage: StagingArea,
}

impl<R: Repo> Repository<R> {
    /// Create the root commit, point `default_branch` and HEAD at it, and
    /// write an empty index.
    ///
    /// `store` must be freshly created; storage-level "already initialized"
    /// checks belong to the `Repo` implementation.
    pub fn init(mut store: R, default_branch: &str) -> Result<Self> {
        let branch = branch_name(default_branch)?;

        let root = Commit::initial();
        store.put_object(&Object::from(root.clone()))?;
        store.set_branch(&branch, root.id())?;
        store.set_head(&branch)?;
        store.write_index(&Index::default())?;

        info!(branch = %branch, root = %root.id(), "initialized repository");
        Repository::open(store)
    }

    /// Load HEAD, its commit, and the staging index from `store`.
    pub fn open(store: R) -> Result<Self> {
        let branch = store.head()?;
        let head_id = store.branch(&branch)?.ok_or_else(|| {
            Error::CorruptMetadata(format!("HEAD names missing branch `{}`", branch))
        })?;
        let head = store.get_commit(&head_id)?;
        let index = store.read_index()?.unwrap_or_default();
        let stage = StagingArea::new(index, head.tracked().clone());

        debug!(branch = %branch, head = %head.id(), "opened repository");
        Ok(Repository {
            store,
            branch,
            head,
            stage,
        })
    }

    /// The underlying storage.
    pub fn store(&self) -> &R {
        &self.store
    }

    /// Mutable access to the underlying storage, for editing the working
    /// tree. Refs and the index changed this way are not seen until the
    /// repository is reopened.
    pub fn store_mut(&mut self) -> &mut R {
        &mut self.store
    }

    pub fn into_store(self) -> R {
        self.store
    }

    /// Name of the checked-out branch.
    pub fn current_branch(&self) -> &str {
        &self.branch
    }

    pub fn head_commit(&self) -> &Commit {
        &self.head
    }

    pub fn staging_area(&self) -> &StagingArea {
        &self.stage
    }

    /// Stage the working-tree content of `name`.
    ///
    /// Content identical to HEAD's version is not staged; any pending add or
    /// removal of `name` is cancelled instead.
    pub fn add(&mut self, name: &str) -> Result<AddOutcome> {
        let name = checked_name(name)?;
        let content = self
            .store
            .read_work_file(&name)?
            .ok_or(Error::FileNotFound)?;

        self.stage_content(&name, content)
    }

    /// Record the staged snapshot as a new commit on the current branch.
    pub fn commit(&mut self, message: &str) -> Result<Commit> {
        if message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }
        if self.stage.is_clean() {
            return Err(Error::NothingToCommit);
        }

        self.commit_staged(message, None)
    }

    /// Untrack `name` and delete it from the working tree.
    ///
    /// A file that is only staged for addition is not tracked, so it cannot
    /// be removed; unstage it by restoring HEAD's version instead.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let name = checked_name(name)?;
        if !self.stage.remove(&name) {
            return Err(Error::NothingToRemove);
        }

        self.store.remove_work_file(&name)?;
        self.save_index()
    }

    /// Create branch `name` at the HEAD commit. HEAD stays where it is.
    pub fn branch(&mut self, name: &str) -> Result<()> {
        let name = branch_name(name)?;
        if self.store.branch(&name)?.is_some() {
            return Err(Error::BranchExists);
        }

        self.store.set_branch(&name, self.head.id())?;
        info!(branch = %name, at = %self.head.id(), "created branch");
        Ok(())
    }

    /// Delete branch `name`. Commits it pointed to are kept.
    pub fn remove_branch(&mut self, name: &str) -> Result<()> {
        let (name, _) = self.find_branch(name)?.ok_or(Error::BranchNotFound)?;
        if name == self.branch {
            return Err(Error::RemoveCurrentBranch);
        }

        self.store.remove_branch(&name)?;
        info!(branch = %name, "removed branch");
        Ok(())
    }

    /// Put `content` in the object store and stage it as `name`.
    fn stage_content(&mut self, name: &str, content: Vec<u8>) -> Result<AddOutcome> {
        let blob = Blob::new(name, content);
        let outcome = self.stage.add(name, blob.id().clone());

        match outcome {
            AddOutcome::Staged => {
                self.store.put_object(&Object::from(blob))?;
                self.save_index()?;
            }
            AddOutcome::Unchanged => self.save_index()?,
            AddOutcome::AlreadyStaged => (),
        }

        debug!(file = name, ?outcome, "add");
        Ok(outcome)
    }

    /// Commit whatever is staged, clean or not, and advance the current branch.
    fn commit_staged(&mut self, message: &str, second_parent: Option<Id>) -> Result<Commit> {
        let tracked = self.stage.commit();

        let mut parents = vec![self.head.id().clone()];
        parents.extend(second_parent);

        let commit = Commit::new(message, parents, tracked);
        self.store.put_object(&Object::from(commit.clone()))?;
        self.store.set_branch(&self.branch, commit.id())?;
        self.save_index()?;

        info!(branch = %self.branch, commit = %commit.id(), "committed");
        self.head = commit.clone();
        Ok(commit)
    }

    fn save_index(&mut self) -> Result<()> {
        self.store.write_index(self.stage.index())
    }

    /// Look up a branch by name. Names that could never be stored find nothing.
    fn find_branch(&self, name: &str) -> Result<Option<(String, Id)>> {
        let name = match path::file_name(name) {
            Ok(name) => name,
            Err(_) => return Ok(None),
        };

        Ok(self.store.branch(&name)?.map(|id| (name, id)))
    }
}

fn checked_name(name: &str) -> Result<String> {
    path::file_name(name).map_err(|err| Error::InvalidPath(name.to_string(), err))
}

/// Branch names follow the same rules as file names: each one is a single
/// file under the refs directory.
fn branch_name(name: &str) -> Result<String> {
    path::file_name(name).map_err(|_| Error::InvalidBranchName(name.to_string()))
}
