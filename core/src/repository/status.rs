use std::collections::BTreeMap;
use std::fmt;

use super::Repository;
use crate::object::{Blob, Id};
use crate::repo::{Repo, Result};

/// How a tracked file in the working tree differs from its staged version.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Modification {
    Modified,
    Deleted,
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modification::Modified => write!(f, "modified"),
            Modification::Deleted => write!(f, "deleted"),
        }
    }
}

/// A report of branches, the staging area, and the working tree.
///
/// Every list is sorted by name. `Display` renders the report printed by
/// the `status` command, which lists the current branch first.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Status {
    pub current_branch: String,
    pub branches: Vec<String>,
    pub staged: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<(String, Modification)>,
    pub untracked: Vec<String>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Branches ===")?;
        writeln!(f, "*{}", self.current_branch)?;
        for branch in &self.branches {
            if *branch != self.current_branch {
                writeln!(f, "{}", branch)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for name in &self.staged {
            writeln!(f, "{}", name)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for name in &self.removed {
            writeln!(f, "{}", name)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (name, how) in &self.modified {
            writeln!(f, "{} ({})", name, how)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for name in &self.untracked {
            writeln!(f, "{}", name)?;
        }
        writeln!(f)
    }
}

impl<R: Repo> Repository<R> {
    pub fn status(&self) -> Result<Status> {
        let mut work: BTreeMap<String, Id> = BTreeMap::new();
        for name in self.store.work_files()? {
            if let Some(content) = self.store.read_work_file(&name)? {
                let id = Blob::id_for(&name, &content);
                work.insert(name, id);
            }
        }

        let mut modified = Vec::new();
        for (name, staged_id) in self.stage.staged_snapshot() {
            match work.remove(&name) {
                Some(id) if id != staged_id => modified.push((name, Modification::Modified)),
                Some(_) => (),
                None => modified.push((name, Modification::Deleted)),
            }
        }

        Ok(Status {
            current_branch: self.branch.clone(),
            branches: self.store.branches()?,
            staged: self.stage.added().keys().cloned().collect(),
            removed: self.stage.removed().iter().cloned().collect(),
            modified,
            untracked: work.into_keys().collect(),
        })
    }
}
