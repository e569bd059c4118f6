//! Represents the objects held in the content-addressed store:
//! file snapshots (blobs) and history nodes (commits), each identified
//! by the SHA-1 hash of its identity-defining content.

mod blob;
pub use blob::Blob;

mod commit;
pub use commit::{Commit, ParseCommitError, Snapshot, INITIAL_MESSAGE};

mod id;
pub use id::{is_hex, Id, ParseIdError, HEX_LEN, SHORT_LEN};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

/// Describes a single object stored (or about to be stored) in a repository.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Object {
    Blob(Blob),
    Commit(Commit),
}

impl Object {
    /// Rebuild an object from the kind, ID, and payload found in an object store.
    ///
    /// Commits are re-hashed; a payload that does not hash to `id` is rejected.
    pub fn from_stored(kind: Kind, id: Id, payload: Vec<u8>) -> Result<Object, String> {
        match kind {
            Kind::Blob => Ok(Object::Blob(Blob::from_stored(id, payload))),
            Kind::Commit => {
                let commit = Commit::parse(&payload).map_err(|e| e.to_string())?;
                if commit.id() != &id {
                    return Err(format!("content hashes to {}", commit.id()));
                }
                Ok(Object::Commit(commit))
            }
        }
    }

    /// Return the ID of the object.
    pub fn id(&self) -> &Id {
        match self {
            Object::Blob(blob) => blob.id(),
            Object::Commit(commit) => commit.id(),
        }
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        match self {
            Object::Blob(_) => Kind::Blob,
            Object::Commit(_) => Kind::Commit,
        }
    }

    /// Returns the bytes an object store should persist for this object.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Object::Blob(blob) => blob.content().to_vec(),
            Object::Commit(commit) => commit.payload(),
        }
    }
}

impl From<Blob> for Object {
    fn from(blob: Blob) -> Object {
        Object::Blob(blob)
    }
}

impl From<Commit> for Object {
    fn from(commit: Commit) -> Object {
        Object::Commit(commit)
    }
}
