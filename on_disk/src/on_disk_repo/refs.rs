//! HEAD and the branch files under `refs/heads`.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use rslet_core::object::Id;
use rslet_core::repo::{Error, Result};

use super::{write_atomic, write_atomic_in};

const HEAD_PREFIX: &str = "ref: refs/heads/";

pub(super) fn read_head(repo_dir: &Path) -> Result<String> {
    let head = fs::read_to_string(repo_dir.join("HEAD"))?;

    head.trim_end()
        .strip_prefix(HEAD_PREFIX)
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .ok_or_else(|| Error::CorruptMetadata(format!("HEAD: `{}`", head.trim_end())))
}

pub(super) fn write_head(repo_dir: &Path, branch: &str) -> Result<()> {
    write_atomic(
        &repo_dir.join("HEAD"),
        format!("{}{}\n", HEAD_PREFIX, branch).as_bytes(),
    )?;
    debug!(branch, "HEAD moved");
    Ok(())
}

pub(super) fn read_branch(heads_dir: &Path, name: &str) -> Result<Option<Id>> {
    let text = match fs::read_to_string(heads_dir.join(name)) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let id: Id = text
        .trim_end()
        .parse()
        .map_err(|e| Error::CorruptMetadata(format!("branch {}: {}", name, e)))?;
    Ok(Some(id))
}

pub(super) fn write_branch(heads_dir: &Path, name: &str, id: &Id) -> Result<()> {
    // Every file in `refs/heads` is a branch, so an interrupted write must
    // not leave its temporary file there.
    let tmp_dir = heads_dir.parent().unwrap_or(heads_dir);
    write_atomic_in(
        tmp_dir,
        &heads_dir.join(name),
        format!("{}\n", id).as_bytes(),
    )?;
    debug!(branch = name, id = %id, "branch updated");
    Ok(())
}

pub(super) fn remove_branch(heads_dir: &Path, name: &str) -> Result<()> {
    match fs::remove_file(heads_dir.join(name)) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

pub(super) fn list_branches(heads_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(heads_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
