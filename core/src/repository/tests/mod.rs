use super::Repository;
use crate::repo::{MemoryRepo, Repo};

mod branch;

type TestRepo = Repository<MemoryRepo>;

fn new_repo() -> TestRepo {
    Repository::init(MemoryRepo::new(), "master").unwrap()
}

fn write(r: &mut TestRepo, name: &str, content: &str) {
    r.store_mut()
        .write_work_file(name, content.as_bytes())
        .unwrap();
}

fn read(r: &TestRepo, name: &str) -> Option<String> {
    r.store()
        .read_work_file(name)
        .unwrap()
        .map(|c| String::from_utf8(c).unwrap())
}

fn delete(r: &mut TestRepo, name: &str) {
    r.store_mut().remove_work_file(name).unwrap();
}

/// Write, add, and commit a single file.
fn commit_file(r: &mut TestRepo, name: &str, content: &str, message: &str) {
    write(r, name, content);
    r.add(name).unwrap();
    r.commit(message).unwrap();
}

/// Reopen from storage, as a fresh process would.
fn reopen(r: TestRepo) -> TestRepo {
    Repository::open(r.into_store()).unwrap()
}
