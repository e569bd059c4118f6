//! Loose objects: one zlib-compressed file per object, sharded by the first
//! two hex digits of its ID.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use tracing::debug;

use rslet_core::object::{is_hex, Id, Kind, Object};
use rslet_core::repo::{Error, Result};

pub(super) fn object_path(objects_dir: &Path, id: &Id) -> PathBuf {
    let hex = id.to_string();
    objects_dir.join(&hex[..2]).join(&hex[2..])
}

/// Write `object` unless a file for its ID is already present.
pub(super) fn put_loose_object(objects_dir: &Path, object: &Object) -> Result<Id> {
    let id = object.id().clone();
    let path = object_path(objects_dir, &id);
    if path.exists() {
        return Ok(id);
    }

    let dir = path
        .parent()
        .ok_or_else(|| Error::CorruptMetadata(format!("bad object path {}", path.display())))?;
    fs::create_dir_all(dir)?;

    let payload = object.payload();
    let mut z = ZlibEncoder::new(Vec::new(), Compression::default());
    z.write_all(format!("{} {}\0", object.kind(), payload.len()).as_bytes())?;
    z.write_all(&payload)?;
    let compressed = z.finish()?;

    // Write beside the final name and rename, so a reader never sees half an object.
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&compressed)?;
    tmp.persist(&path).map_err(|e| e.error)?;

    debug!(id = %id, kind = %object.kind(), size = payload.len(), "wrote object");
    Ok(id)
}

pub(super) fn get_loose_object(objects_dir: &Path, id: &Id) -> Result<Object> {
    let path = object_path(objects_dir, id);
    let file = match fs::File::open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::MissingObject(id.clone()))
        }
        Err(err) => return Err(err.into()),
    };

    let mut data = Vec::new();
    ZlibDecoder::new(file)
        .read_to_end(&mut data)
        .map_err(|e| corrupt(id, format!("zlib: {}", e)))?;

    let (kind, payload) = split_header(&data).map_err(|reason| corrupt(id, reason))?;
    Object::from_stored(kind, id.clone(), payload.to_vec()).map_err(|reason| corrupt(id, reason))
}

/// Decode the `"<kind> <len>\0"` header and check the length against the payload.
fn split_header(data: &[u8]) -> std::result::Result<(Kind, &[u8]), String> {
    let nul = data
        .iter()
        .position(|b| *b == 0)
        .ok_or_else(|| "missing header".to_string())?;
    let (header, payload) = (&data[..nul], &data[nul + 1..]);

    let space = header
        .iter()
        .position(|b| *b == b' ')
        .ok_or_else(|| "malformed header".to_string())?;

    let kind = Kind::parse(&header[..space]).ok_or_else(|| "unknown object kind".to_string())?;
    let len: usize = std::str::from_utf8(&header[space + 1..])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| "malformed length".to_string())?;

    if len != payload.len() {
        return Err(format!(
            "header says {} bytes, found {}",
            len,
            payload.len()
        ));
    }
    Ok((kind, payload))
}

fn corrupt(id: &Id, reason: String) -> Error {
    Error::CorruptObject(id.clone(), reason)
}

/// IDs of the objects of `kind` whose hex form starts with `prefix`.
///
/// Only the shard named by the first two digits is scanned, and only the
/// candidates there are decoded.
pub(super) fn find_loose_objects(objects_dir: &Path, prefix: &str, kind: Kind) -> Result<Vec<Id>> {
    if prefix.len() < 2 {
        return Err(Error::ShortId);
    }
    if !is_hex(prefix) {
        return Ok(Vec::new());
    }

    let shard = objects_dir.join(&prefix[..2]);
    let entries = match fs::read_dir(&shard) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry?;
        let rest = match entry.file_name().into_string() {
            Ok(rest) => rest,
            Err(_) => continue,
        };

        let hex = format!("{}{}", &prefix[..2], rest);
        if !hex.starts_with(prefix) {
            continue;
        }

        // Leftover temporary files and other strays don't parse.
        let id: Id = match hex.parse() {
            Ok(id) => id,
            Err(_) => continue,
        };

        if get_loose_object(objects_dir, &id)?.kind() == kind {
            ids.push(id);
        }
    }

    ids.sort();
    Ok(ids)
}
