use std::path::PathBuf;

use thiserror::Error;

use crate::object::Id;
use crate::path::FileNameError;

/// Describes the potential error conditions that might arise from rslet `Repo` operations.
///
/// The `Display` form of each user-facing variant is the exact message shown
/// by the command line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File does not exist.")]
    FileNotFound,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("A branch with that name does not exist.")]
    BranchNotFound,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Given branch is an ancestor of the current branch.")]
    AlreadyAncestor,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedOverwrite,

    #[error("No commit with that id exists.")]
    CommitNotFound,

    #[error("More than 1 commit has the same id prefix.")]
    AmbiguousId,

    #[error("Commit id should contain at least 4 characters.")]
    ShortId,

    #[error("invalid file name `{0}`: {1}")]
    InvalidPath(String, FileNameError),

    #[error("invalid branch name `{0}`")]
    InvalidBranchName(String),

    #[error("object {0} is missing from the object store")]
    MissingObject(Id),

    #[error("object {0} is corrupt: {1}")]
    CorruptObject(Id, String),

    #[error("commits {0} and {1} share no history")]
    NoCommonAncestor(Id, Id),

    #[error("repository metadata is corrupt: {0}")]
    CorruptMetadata(String),

    #[error("working directory {0} does not exist")]
    WorkDirDoesntExist(PathBuf),

    #[error("Not in an initialized rslet directory.")]
    RepoDirDoesntExist(PathBuf),

    #[error("A version-control system already exists in the current directory.")]
    RepoDirShouldntExist(PathBuf),

    #[error("unsupported repository format version {0}")]
    UnsupportedFormat(u32),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    OtherError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Broad classes of `Error`, used to decide how a failure is reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad arguments: unknown files, branches, or commit IDs.
    UserInput,

    /// The repository is in a state that forbids the operation.
    /// Always detected before anything is modified.
    StateConflict,

    /// Broken invariants and I/O failures. Nothing sensible can be done.
    Fatal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound
            | Error::FileNotInCommit
            | Error::EmptyMessage
            | Error::NothingToRemove
            | Error::NoCommitWithMessage
            | Error::NoSuchBranch
            | Error::BranchExists
            | Error::BranchNotFound
            | Error::CommitNotFound
            | Error::AmbiguousId
            | Error::ShortId
            | Error::InvalidPath(..)
            | Error::InvalidBranchName(_)
            | Error::WorkDirDoesntExist(_)
            | Error::RepoDirDoesntExist(_) => ErrorKind::UserInput,

            Error::NothingToCommit
            | Error::AlreadyOnBranch
            | Error::RemoveCurrentBranch
            | Error::MergeWithSelf
            | Error::UncommittedChanges
            | Error::AlreadyAncestor
            | Error::UntrackedOverwrite
            | Error::RepoDirShouldntExist(_) => ErrorKind::StateConflict,

            Error::MissingObject(_)
            | Error::CorruptObject(..)
            | Error::NoCommonAncestor(..)
            | Error::CorruptMetadata(_)
            | Error::UnsupportedFormat(_)
            | Error::IoError(_)
            | Error::OtherError(_) => ErrorKind::Fatal,
        }
    }
}

/// A specialized `Result` type for rslet `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::UntrackedOverwrite.to_string(),
            "There is an untracked file in the way; delete it, or add and commit it first."
        );
        assert_eq!(
            Error::ShortId.to_string(),
            "Commit id should contain at least 4 characters."
        );
        assert_eq!(
            Error::AmbiguousId.to_string(),
            "More than 1 commit has the same id prefix."
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::NoSuchBranch.kind(), ErrorKind::UserInput);
        assert_eq!(Error::UncommittedChanges.kind(), ErrorKind::StateConflict);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(Error::from(io).kind(), ErrorKind::Fatal);
    }
}
