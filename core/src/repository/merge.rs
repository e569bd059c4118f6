use std::collections::{BTreeSet, BinaryHeap, HashSet};

use tracing::{debug, info};

use super::history::ByDate;
use super::Repository;
use crate::merge::{conflict_content, resolve, MergeOutcome, Resolution};
use crate::object::{Commit, Id};
use crate::repo::{Error, Repo, Result};

impl<R: Repo> Repository<R> {
    /// Merge branch `name` into the current branch.
    ///
    /// If the current branch is behind, it is fast-forwarded. Otherwise each
    /// file is resolved against the latest common ancestor and the result is
    /// committed with both heads as parents, conflicts included.
    pub fn merge(&mut self, name: &str) -> Result<MergeOutcome> {
        let (name, target_id) = self.find_branch(name)?.ok_or(Error::BranchNotFound)?;
        if name == self.branch {
            return Err(Error::MergeWithSelf);
        }
        if !self.stage.is_clean() {
            return Err(Error::UncommittedChanges);
        }

        let target = self.store.get_commit(&target_id)?;
        self.check_overwrite(&target)?;

        let split = self.latest_common_ancestor(&self.head, &target)?;
        debug!(split = %split.id(), "found split point");

        if split.id() == target.id() {
            return Err(Error::AlreadyAncestor);
        }

        if split.id() == self.head.id() {
            self.switch_to(target)?;
            self.store.set_branch(&self.branch, &target_id)?;
            info!(branch = %self.branch, to = %target_id, "fast-forwarded");
            return Ok(MergeOutcome::FastForward);
        }

        let current = self.head.clone();
        let names: BTreeSet<&String> = split
            .tracked()
            .keys()
            .chain(current.tracked().keys())
            .chain(target.tracked().keys())
            .collect();

        let mut conflict = false;
        for file in names {
            let resolution = resolve(
                split.tracked().get(file),
                current.tracked().get(file),
                target.tracked().get(file),
            );

            match resolution {
                Resolution::KeepCurrent => (),
                Resolution::TakeTarget(id) => {
                    let content = self.store.get_blob(&id)?.into_content();
                    self.store.write_work_file(file, &content)?;
                    self.stage_content(file, content)?;
                }
                Resolution::Remove => {
                    self.stage.remove(file);
                    self.store.remove_work_file(file)?;
                }
                Resolution::Conflict { current, target } => {
                    conflict = true;
                    let content = conflict_content(
                        &self.blob_content(current.as_ref())?,
                        &self.blob_content(target.as_ref())?,
                    );
                    self.store.write_work_file(file, &content)?;
                    self.stage_content(file, content)?;
                    debug!(file = %file, "conflict");
                }
            }
        }
        self.save_index()?;

        let message = format!("Merged {} into {}.", name, self.branch);
        let commit = self.commit_staged(&message, Some(target_id))?;

        Ok(MergeOutcome::Merged {
            commit: commit.id().clone(),
            conflict,
        })
    }

    /// Find the split point of two commits by walking both first-parent
    /// chains newest first. The first commit reached from both sides wins.
    fn latest_common_ancestor(&self, a: &Commit, b: &Commit) -> Result<Commit> {
        if a.id() == b.id() {
            return Ok(a.clone());
        }

        let mut seen: HashSet<Id> = HashSet::new();
        seen.insert(a.id().clone());
        seen.insert(b.id().clone());

        let mut queue: BinaryHeap<ByDate> = BinaryHeap::new();
        queue.push(ByDate(a.clone()));
        queue.push(ByDate(b.clone()));

        while let Some(ByDate(commit)) = queue.pop() {
            let parent_id = match commit.first_parent() {
                Some(id) => id.clone(),
                None => continue,
            };

            let parent = self.store.get_commit(&parent_id)?;
            if !seen.insert(parent_id) {
                return Ok(parent);
            }
            queue.push(ByDate(parent));
        }

        Err(Error::NoCommonAncestor(a.id().clone(), b.id().clone()))
    }

    /// Content of a blob, or nothing for a side that deleted the file.
    fn blob_content(&self, id: Option<&Id>) -> Result<Vec<u8>> {
        match id {
            Some(id) => Ok(self.store.get_blob(id)?.into_content()),
            None => Ok(Vec::new()),
        }
    }
}
