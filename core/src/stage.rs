//! The staging area: a persisted add/remove delta layered on top of the
//! snapshot of the HEAD commit.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::object::{Id, Snapshot};

/// The persisted part of the staging area.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Index {
    #[serde(default)]
    added: BTreeMap<String, Id>,

    #[serde(default)]
    removed: BTreeSet<String>,
}

impl Index {
    /// Names whose new content is staged, mapped to the staged blob.
    pub fn added(&self) -> &BTreeMap<String, Id> {
        &self.added
    }

    /// Names staged for removal.
    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// What `StagingArea::add` did with a file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddOutcome {
    /// New content was staged; its blob must be in the object store.
    Staged,

    /// The same content was already staged.
    AlreadyStaged,

    /// The content matches HEAD; any pending add or removal was dropped.
    Unchanged,
}

/// The staging area as seen from the current HEAD commit.
///
/// `tracked` is never persisted: it is the HEAD snapshot, supplied again
/// every time the staging area is loaded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StagingArea {
    index: Index,
    tracked: Snapshot,
}

impl StagingArea {
    pub fn new(index: Index, tracked: Snapshot) -> StagingArea {
        StagingArea { index, tracked }
    }

    /// The persisted delta.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// The HEAD snapshot this delta applies to.
    pub fn tracked(&self) -> &Snapshot {
        &self.tracked
    }

    pub fn added(&self) -> &BTreeMap<String, Id> {
        &self.index.added
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.index.removed
    }

    pub fn is_clean(&self) -> bool {
        self.index.is_empty()
    }

    /// Stage `blob_id` as the new content of `name`.
    pub fn add(&mut self, name: &str, blob_id: Id) -> AddOutcome {
        if self.tracked.get(name) == Some(&blob_id) {
            self.index.added.remove(name);
            self.index.removed.remove(name);
            return AddOutcome::Unchanged;
        }

        // Re-adding a file staged for removal brings it back.
        self.index.removed.remove(name);

        match self.index.added.insert(name.to_string(), blob_id.clone()) {
            Some(previous) if previous == blob_id => AddOutcome::AlreadyStaged,
            _ => AddOutcome::Staged,
        }
    }

    /// Stage the removal of `name`.
    ///
    /// Returns false, leaving the staging area untouched, when `name` is not
    /// tracked by HEAD. The caller is responsible for deleting the file
    /// from the working tree.
    pub fn remove(&mut self, name: &str) -> bool {
        if !self.tracked.contains_key(name) {
            return false;
        }

        self.index.added.remove(name);
        self.index.removed.insert(name.to_string());
        true
    }

    /// HEAD's snapshot with the staged delta applied.
    pub fn staged_snapshot(&self) -> Snapshot {
        let mut snapshot = self.tracked.clone();
        snapshot.extend(
            self.index
                .added
                .iter()
                .map(|(name, id)| (name.clone(), id.clone())),
        );
        for name in &self.index.removed {
            snapshot.remove(name);
        }
        snapshot
    }

    /// Fold the staged delta into the tracked snapshot and return it.
    pub fn commit(&mut self) -> Snapshot {
        self.tracked = self.staged_snapshot();
        self.clear();
        self.tracked.clone()
    }

    /// Drop the staged delta without touching the tracked snapshot.
    pub fn clear(&mut self) {
        self.index.added.clear();
        self.index.removed.clear();
    }

    /// Point the staging area at a new HEAD snapshot.
    pub fn set_tracked(&mut self, tracked: Snapshot) {
        self.tracked = tracked;
    }
}
