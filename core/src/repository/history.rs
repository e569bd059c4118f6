use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use super::Repository;
use crate::object::{Commit, Id};
use crate::repo::{Error, Repo, Result};

/// Orders commits newest first in a `BinaryHeap`. Equal timestamps fall back
/// to the ID so the order is total.
pub(super) struct ByDate(pub(super) Commit);

impl ByDate {
    fn key(&self) -> (i64, &Id) {
        (self.0.timestamp(), self.0.id())
    }
}

impl PartialEq for ByDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ByDate {}

impl PartialOrd for ByDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<R: Repo> Repository<R> {
    /// The first-parent chain from HEAD back to the root commit.
    pub fn log(&self) -> Result<Vec<Commit>> {
        let mut commits = Vec::new();
        let mut commit = self.head.clone();

        loop {
            let parent = commit.first_parent().cloned();
            commits.push(commit);
            match parent {
                Some(id) => commit = self.store.get_commit(&id)?,
                None => return Ok(commits),
            }
        }
    }

    /// Every commit reachable from any branch through any parent, each
    /// exactly once, newest first.
    pub fn global_log(&self) -> Result<Vec<Commit>> {
        let mut seen: HashSet<Id> = HashSet::new();
        let mut queue: BinaryHeap<ByDate> = BinaryHeap::new();

        for name in self.store.branches()? {
            if let Some(id) = self.store.branch(&name)? {
                if seen.insert(id.clone()) {
                    queue.push(ByDate(self.store.get_commit(&id)?));
                }
            }
        }

        let mut commits = Vec::new();
        while let Some(ByDate(commit)) = queue.pop() {
            for parent in commit.parents() {
                if seen.insert(parent.clone()) {
                    queue.push(ByDate(self.store.get_commit(parent)?));
                }
            }
            commits.push(commit);
        }

        Ok(commits)
    }

    /// IDs of every reachable commit whose message is exactly `message`,
    /// newest first.
    pub fn find(&self, message: &str) -> Result<Vec<Id>> {
        let ids: Vec<Id> = self
            .global_log()?
            .into_iter()
            .filter(|commit| commit.message() == message)
            .map(|commit| commit.id().clone())
            .collect();

        if ids.is_empty() {
            return Err(Error::NoCommitWithMessage);
        }
        Ok(ids)
    }
}
