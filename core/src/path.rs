//! Rules for the names under which working-tree files are tracked.
//!
//! The working tree is flat: every tracked file lives directly inside the
//! working directory, so a name is always a single path component.

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Name of the directory holding repository metadata inside the working directory.
pub const REPO_DIR_NAME: &str = ".rslet";

/// Reasons why a given string can not be accepted as a tracked file name.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum FileNameError {
    #[error("file name is empty")]
    Empty,

    #[error("file name contains a path separator")]
    Separator,

    #[error("file name contains a control character")]
    ControlCharacter,

    #[error("file name is reserved")]
    Reserved,
}

/// Validate `name` and return the normalized (NFC) form used as a snapshot key.
///
/// Decomposed and precomposed spellings of the same name map to one key,
/// which keeps file systems that rewrite names (HFS+) from producing
/// phantom modifications.
pub fn file_name(name: &str) -> Result<String, FileNameError> {
    let name: String = name.nfc().collect();

    if name.is_empty() {
        Err(FileNameError::Empty)
    } else if name.contains('/') || name.contains('\\') {
        Err(FileNameError::Separator)
    } else if name.contains('\0') || name.contains('\n') || name.contains('\r') {
        Err(FileNameError::ControlCharacter)
    } else if name == "." || name == ".." || name == REPO_DIR_NAME {
        Err(FileNameError::Reserved)
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names() {
        assert_eq!(file_name("a.txt").unwrap(), "a.txt");
        assert_eq!(file_name("with space").unwrap(), "with space");
        assert_eq!(file_name(".hidden").unwrap(), ".hidden");
    }

    #[test]
    fn normalizes_to_nfc() {
        let decomposed = "cafe\u{301}.txt";
        assert_eq!(file_name(decomposed).unwrap(), "caf\u{e9}.txt");
    }

    #[test]
    fn rejects() {
        assert_eq!(file_name("").unwrap_err(), FileNameError::Empty);
        assert_eq!(file_name("dir/a.txt").unwrap_err(), FileNameError::Separator);
        assert_eq!(file_name("a\\b").unwrap_err(), FileNameError::Separator);
        assert_eq!(file_name("a\nb").unwrap_err(), FileNameError::ControlCharacter);
        assert_eq!(file_name("..").unwrap_err(), FileNameError::Reserved);
        assert_eq!(file_name(REPO_DIR_NAME).unwrap_err(), FileNameError::Reserved);
    }
}
