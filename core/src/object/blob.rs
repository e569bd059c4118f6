use super::Id;

/// A snapshot of one tracked file's bytes.
///
/// The ID of a blob covers both the file name and its content, so the same
/// bytes stored under two different names are two different blobs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Blob {
    id: Id,
    content: Vec<u8>,
}

impl Blob {
    /// Create a blob for the file `name` holding `content`.
    pub fn new(name: &str, content: Vec<u8>) -> Blob {
        Blob {
            id: Blob::id_for(name, &content),
            content,
        }
    }

    /// Computes the ID a blob would have without copying the content.
    pub fn id_for(name: &str, content: &[u8]) -> Id {
        // Names never contain NUL, so the separator keeps
        // ("ab", "c") and ("a", "bc") apart.
        Id::digest(&[name.as_bytes(), b"\0", content])
    }

    /// Rebuild a blob that was read back from an object store.
    pub(crate) fn from_stored(id: Id, content: Vec<u8>) -> Blob {
        Blob { id, content }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_bytes_same_id() {
        let a = Blob::new("a.txt", b"hello".to_vec());
        let b = Blob::new("a.txt", b"hello".to_vec());
        assert_eq!(a.id(), b.id());
        assert_eq!(a.id(), &Blob::id_for("a.txt", b"hello"));
    }

    #[test]
    fn different_bytes_or_name_differ() {
        let a = Blob::new("a.txt", b"hello".to_vec());
        assert_ne!(a.id(), Blob::new("a.txt", b"hello!".to_vec()).id());
        assert_ne!(a.id(), Blob::new("b.txt", b"hello".to_vec()).id());
        assert_ne!(
            Blob::id_for("ab", b"c"),
            Blob::id_for("a", b"bc"),
        );
    }

    #[test]
    fn into_content() {
        let b = Blob::new("a.txt", b"bytes".to_vec());
        assert_eq!(b.content(), b"bytes");
        assert_eq!(b.into_content(), b"bytes".to_vec());
    }
}
