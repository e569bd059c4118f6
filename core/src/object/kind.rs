use std::fmt::{self, Display, Formatter};

/// Describes the kind of object held in the object store (blob or commit).
///
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Blob,
    Commit,
}

impl Kind {
    /// Parse the kind name found in a stored object's header.
    pub fn parse(name: &[u8]) -> Option<Kind> {
        match name {
            b"blob" => Some(Kind::Blob),
            b"commit" => Some(Kind::Commit),
            _ => None,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Kind::Blob => write!(f, "blob"),
            Kind::Commit => write!(f, "commit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_string() {
        assert_eq!(Kind::Blob.to_string(), "blob");
        assert_eq!(Kind::Commit.to_string(), "commit");
    }

    #[test]
    fn parse() {
        assert_eq!(Kind::parse(b"blob"), Some(Kind::Blob));
        assert_eq!(Kind::parse(b"commit"), Some(Kind::Commit));
        assert_eq!(Kind::parse(b"tree"), None);
    }
}
