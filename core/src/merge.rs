//! Three-way merge decisions for a single file.
//!
//! `resolve` looks only at blob IDs, so it can be tested without any
//! storage. `Repository::merge` applies its verdicts to the working tree.

use std::fmt;

use crate::object::Id;

/// What a three-way merge does with one file name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// Leave the current branch's version (or absence) alone.
    KeepCurrent,

    /// Check out and stage the target branch's blob.
    TakeTarget(Id),

    /// Delete the file and stage its removal.
    Remove,

    /// Both sides changed the file in different ways. `None` marks the side
    /// that deleted it.
    Conflict {
        current: Option<Id>,
        target: Option<Id>,
    },
}

/// Decide the fate of one file given its blob at the split point (`base`),
/// on the current branch, and on the branch being merged in.
pub fn resolve(base: Option<&Id>, current: Option<&Id>, target: Option<&Id>) -> Resolution {
    match (base, current, target) {
        // Both sides agree, whatever they did.
        (_, c, t) if c == t => Resolution::KeepCurrent,

        // Only the current branch touched it.
        (b, _, t) if b == t => Resolution::KeepCurrent,

        // Only the target branch touched it.
        (Some(b), Some(c), None) if b == c => Resolution::Remove,
        (Some(b), Some(c), Some(t)) if b == c => Resolution::TakeTarget(t.clone()),
        (None, None, Some(t)) => Resolution::TakeTarget(t.clone()),

        (_, c, t) => Resolution::Conflict {
            current: c.cloned(),
            target: t.cloned(),
        },
    }
}

/// Build the working-tree content of a conflicted file. A deleted side
/// contributes empty content.
pub fn conflict_content(current: &[u8], target: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(current.len() + target.len() + 32);
    content.extend_from_slice(b"<<<<<<< HEAD\n");
    content.extend_from_slice(current);
    content.extend_from_slice(b"=======\n");
    content.extend_from_slice(target);
    content.extend_from_slice(b">>>>>>>");
    content
}

/// Result of a successful `Repository::merge`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MergeOutcome {
    /// The current branch was behind and now points at the target commit.
    FastForward,

    /// A merge commit was created. `conflict` is true if any file was left
    /// with conflict markers.
    Merged { commit: Id, conflict: bool },
}

impl fmt::Display for MergeOutcome {
    /// The line reported to the user, if any.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::FastForward => write!(f, "Current branch fast-forwarded."),
            MergeOutcome::Merged { conflict: true, .. } => {
                write!(f, "Encountered a merge conflict.")
            }
            MergeOutcome::Merged { conflict: false, .. } => Ok(()),
        }
    }
}
