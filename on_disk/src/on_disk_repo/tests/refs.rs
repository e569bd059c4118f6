use super::super::*;

use rslet_core::object::Commit;

use crate::TempRepo;

#[test]
fn head_round_trip() {
    let tr = TempRepo::new();
    let mut r = OnDiskRepo::new(tr.path()).unwrap();
    assert_eq!(r.head().unwrap(), "master");

    r.set_head("other").unwrap();
    assert_eq!(
        fs::read_to_string(tr.path().join(".rslet/HEAD")).unwrap(),
        "ref: refs/heads/other\n"
    );
    assert_eq!(r.head().unwrap(), "other");
}

#[test]
fn head_without_trailing_newline() {
    let tr = TempRepo::new();
    let r = OnDiskRepo::new(tr.path()).unwrap();
    fs::write(tr.path().join(".rslet/HEAD"), "ref: refs/heads/dev").unwrap();
    assert_eq!(r.head().unwrap(), "dev");
}

#[test]
fn branches() {
    let tr = TempRepo::new();
    let mut r = OnDiskRepo::new(tr.path()).unwrap();
    let root = Commit::initial().id().clone();

    assert_eq!(r.branch("master").unwrap(), Some(root.clone()));
    assert_eq!(r.branch("zzz").unwrap(), None);

    r.set_branch("zzz", &root).unwrap();
    r.set_branch("aaa", &root).unwrap();
    assert_eq!(
        r.branches().unwrap(),
        vec!["aaa".to_string(), "master".to_string(), "zzz".to_string()]
    );
    assert_eq!(
        fs::read_to_string(tr.path().join(".rslet/refs/heads/aaa")).unwrap(),
        format!("{}\n", root)
    );

    r.remove_branch("zzz").unwrap();
    r.remove_branch("zzz").unwrap();
    assert_eq!(r.branch("zzz").unwrap(), None);
}

#[test]
fn corrupt_branch_file() {
    let tr = TempRepo::new();
    let r = OnDiskRepo::new(tr.path()).unwrap();
    fs::write(tr.path().join(".rslet/refs/heads/master"), "not an id").unwrap();

    match r.branch("master").unwrap_err() {
        Error::CorruptMetadata(_) => (),
        err => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn index_round_trip() {
    let tr = TempRepo::new();
    let mut r = OnDiskRepo::new(tr.path()).unwrap();
    assert_eq!(r.read_index().unwrap(), Some(Index::default()));

    fs::remove_file(tr.path().join(".rslet/index")).unwrap();
    assert_eq!(r.read_index().unwrap(), None);

    let index: Index = serde_json::from_str(
        r#"{"added": {"a.txt": "a9993e364706816aba3e25717850c26c9cd0d89d"}, "removed": ["b.txt"]}"#,
    )
    .unwrap();
    r.write_index(&index).unwrap();
    assert_eq!(r.read_index().unwrap(), Some(index));
}

#[test]
fn corrupt_index() {
    let tr = TempRepo::new();
    let r = OnDiskRepo::new(tr.path()).unwrap();
    fs::write(tr.path().join(".rslet/index"), "{").unwrap();

    match r.read_index().unwrap_err() {
        Error::CorruptMetadata(_) => (),
        err => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn temp_files_stay_out_of_heads_dir() {
    let tr = TempRepo::new();
    let mut r = OnDiskRepo::new(tr.path()).unwrap();
    let root = Commit::initial().id().clone();

    // A write that never got renamed into place.
    let stale = tempfile::NamedTempFile::new_in(tr.path().join(".rslet/refs")).unwrap();
    stale.keep().unwrap();

    r.set_branch("dev", &root).unwrap();
    assert_eq!(
        r.branches().unwrap(),
        vec!["dev".to_string(), "master".to_string()]
    );

    let mut heads: Vec<String> = fs::read_dir(tr.path().join(".rslet/refs/heads"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    heads.sort();
    assert_eq!(heads, vec!["dev".to_string(), "master".to_string()]);
}
