use std::collections::BTreeMap;

use super::{Error, Repo, Result};
use crate::object::{Id, Kind, Object};
use crate::stage::Index;

/// Implementation of `Repo` that keeps objects, refs, the index, and the
/// working tree in memory. Nothing outlives the struct.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepo {
    objects: BTreeMap<Id, Object>,
    head: Option<String>,
    branches: BTreeMap<String, Id>,
    index: Option<Index>,
    work_tree: BTreeMap<String, Vec<u8>>,
}

impl MemoryRepo {
    pub fn new() -> MemoryRepo {
        MemoryRepo::default()
    }

    /// Number of stored objects (blobs and commits).
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Repo for MemoryRepo {
    fn put_object(&mut self, object: &Object) -> Result<Id> {
        let id = object.id().clone();
        self.objects
            .entry(id.clone())
            .or_insert_with(|| object.clone());
        Ok(id)
    }

    fn has_object(&self, id: &Id) -> Result<bool> {
        Ok(self.objects.contains_key(id))
    }

    fn get_object(&self, id: &Id) -> Result<Object> {
        self.objects
            .get(id)
            .cloned()
            .ok_or_else(|| Error::MissingObject(id.clone()))
    }

    fn find_objects(&self, prefix: &str, kind: Kind) -> Result<Vec<Id>> {
        Ok(self
            .objects
            .iter()
            .filter(|(id, object)| object.kind() == kind && id.has_prefix(prefix))
            .map(|(id, _)| id.clone())
            .collect())
    }

    fn head(&self) -> Result<String> {
        self.head
            .clone()
            .ok_or_else(|| Error::CorruptMetadata("HEAD is not set".to_string()))
    }

    fn set_head(&mut self, branch: &str) -> Result<()> {
        self.head = Some(branch.to_string());
        Ok(())
    }

    fn branch(&self, name: &str) -> Result<Option<Id>> {
        Ok(self.branches.get(name).cloned())
    }

    fn set_branch(&mut self, name: &str, id: &Id) -> Result<()> {
        self.branches.insert(name.to_string(), id.clone());
        Ok(())
    }

    fn remove_branch(&mut self, name: &str) -> Result<()> {
        self.branches.remove(name);
        Ok(())
    }

    fn branches(&self) -> Result<Vec<String>> {
        Ok(self.branches.keys().cloned().collect())
    }

    fn read_index(&self) -> Result<Option<Index>> {
        Ok(self.index.clone())
    }

    fn write_index(&mut self, index: &Index) -> Result<()> {
        self.index = Some(index.clone());
        Ok(())
    }

    fn work_files(&self) -> Result<Vec<String>> {
        Ok(self.work_tree.keys().cloned().collect())
    }

    fn read_work_file(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.work_tree.get(name).cloned())
    }

    fn write_work_file(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.work_tree.insert(name.to_string(), content.to_vec());
        Ok(())
    }

    fn remove_work_file(&mut self, name: &str) -> Result<()> {
        self.work_tree.remove(name);
        Ok(())
    }
}
