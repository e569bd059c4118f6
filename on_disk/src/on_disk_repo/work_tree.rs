//! The flat working tree: regular files directly inside the working directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rslet_core::path::file_name;
use rslet_core::repo::{Error, Result};

/// Resolve `name` inside `work_dir`, refusing anything that is not a plain
/// file name.
///
/// Names are compared in normalized form, so a file stored on disk under a
/// decomposed spelling is found by its tracked name.
fn work_path(work_dir: &Path, name: &str) -> Result<PathBuf> {
    let name = file_name(name).map_err(|err| Error::InvalidPath(name.to_string(), err))?;

    let path = work_dir.join(&name);
    if path.exists() {
        return Ok(path);
    }

    for entry in fs::read_dir(work_dir)? {
        let entry = entry?;
        if let Ok(found) = entry.file_name().into_string() {
            if matches!(file_name(&found), Ok(normalized) if normalized == name) {
                return Ok(entry.path());
            }
        }
    }

    Ok(path)
}

/// Normalized names of the plain files in `work_dir`.
pub(super) fn list(work_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(work_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        // Names we could never track are invisible.
        if let Ok(name) = entry.file_name().into_string() {
            if let Ok(name) = file_name(&name) {
                names.push(name);
            }
        }
    }

    names.sort();
    names.dedup();
    Ok(names)
}

pub(super) fn read(work_dir: &Path, name: &str) -> Result<Option<Vec<u8>>> {
    let path = work_path(work_dir, name)?;
    if !path.is_file() {
        return Ok(None);
    }

    match fs::read(&path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub(super) fn write(work_dir: &Path, name: &str, content: &[u8]) -> Result<()> {
    let path = work_path(work_dir, name)?;
    fs::write(&path, content)?;
    Ok(())
}

pub(super) fn remove(work_dir: &Path, name: &str) -> Result<()> {
    let path = work_path(work_dir, name)?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
