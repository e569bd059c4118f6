use tracing::info;

use super::{checked_name, Repository};
use crate::object::{Blob, Commit};
use crate::repo::{Error, Repo, Result};

impl<R: Repo> Repository<R> {
    /// Restore `name` in the working tree from the HEAD commit. The staging
    /// area is not touched.
    pub fn checkout_file(&mut self, name: &str) -> Result<()> {
        let name = checked_name(name)?;
        restore_file(&mut self.store, &self.head, &name)
    }

    /// Restore `name` in the working tree from the commit `commit_id`
    /// (full or abbreviated).
    pub fn checkout_file_at(&mut self, commit_id: &str, name: &str) -> Result<()> {
        let name = checked_name(name)?;
        let id = self.store.resolve_commit(commit_id)?;
        let commit = self.store.get_commit(&id)?;
        restore_file(&mut self.store, &commit, &name)
    }

    /// Switch to branch `name`, replacing the working tree with its snapshot
    /// and clearing the staging area.
    pub fn checkout_branch(&mut self, name: &str) -> Result<()> {
        let (name, id) = self.find_branch(name)?.ok_or(Error::NoSuchBranch)?;
        if name == self.branch {
            return Err(Error::AlreadyOnBranch);
        }

        let target = self.store.get_commit(&id)?;
        self.check_overwrite(&target)?;

        self.switch_to(target)?;
        self.store.set_head(&name)?;
        info!(branch = %name, "switched branch");
        self.branch = name;
        Ok(())
    }

    /// Move the current branch to `commit_id` and check that commit out.
    pub fn reset(&mut self, commit_id: &str) -> Result<()> {
        let id = self.store.resolve_commit(commit_id)?;
        let target = self.store.get_commit(&id)?;
        self.check_overwrite(&target)?;

        self.switch_to(target)?;
        self.store.set_branch(&self.branch, &id)?;
        info!(branch = %self.branch, to = %id, "reset");
        Ok(())
    }

    /// Refuse to proceed if replacing the working tree with `target` would
    /// lose work.
    ///
    /// Only files with a pending add or removal are considered. Such a file
    /// is in the way unless `target` records exactly its current content.
    pub(super) fn check_overwrite(&self, target: &Commit) -> Result<()> {
        for name in self.store.work_files()? {
            if !self.stage.added().contains_key(&name) && !self.stage.removed().contains(&name) {
                continue;
            }

            let content = match self.store.read_work_file(&name)? {
                Some(content) => content,
                None => continue,
            };

            if target.tracked().get(&name) != Some(&Blob::id_for(&name, &content)) {
                return Err(Error::UntrackedOverwrite);
            }
        }

        Ok(())
    }

    /// Make `target` the HEAD commit: clear the staging area, delete every
    /// working-tree file, and write out `target`'s snapshot. Refs are left to
    /// the caller.
    pub(super) fn switch_to(&mut self, target: Commit) -> Result<()> {
        self.stage.clear();
        self.stage.set_tracked(target.tracked().clone());
        self.save_index()?;

        for name in self.store.work_files()? {
            self.store.remove_work_file(&name)?;
        }
        for name in target.tracked().keys() {
            restore_file(&mut self.store, &target, name)?;
        }

        self.head = target;
        Ok(())
    }
}

fn restore_file<R: Repo>(store: &mut R, commit: &Commit, name: &str) -> Result<()> {
    let blob_id = commit.tracked().get(name).ok_or(Error::FileNotInCommit)?;
    let blob: Blob = store.get_blob(blob_id)?;
    store.write_work_file(name, blob.content())
}
