use std::fs;

use rslet_core::object::INITIAL_MESSAGE;
use rslet_core::repo::{Error, Repo};

use crate::{OnDiskRepo, TempRepo};

#[test]
fn happy_path() {
    let tr = TempRepo::new();
    let work_dir = tr.path();
    let r = OnDiskRepo::new(work_dir).unwrap();
    assert_eq!(r.work_dir(), work_dir);
    assert_eq!(r.repo_dir(), work_dir.join(".rslet").as_path());
    assert_eq!(r.config().core.defaultbranch, "master");
}

#[test]
fn error_no_work_dir() {
    let tr = TempRepo::new();
    let work_dir = tr.path().join("bogus");
    let err = OnDiskRepo::new(&work_dir).unwrap_err();
    if let Error::WorkDirDoesntExist(_) = err {
        // expected
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_no_repo_dir() {
    let tempdir = tempfile::tempdir().unwrap();
    let err = crate::open(tempdir.path()).unwrap_err();
    if let Error::RepoDirDoesntExist(_) = err {
        assert_eq!(err.to_string(), "Not in an initialized rslet directory.");
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn err_if_repo_dir_exists() {
    let tempdir = tempfile::tempdir().unwrap();
    fs::create_dir_all(tempdir.path().join(".rslet")).unwrap();

    let err = crate::init(tempdir.path()).unwrap_err();
    if let Error::RepoDirShouldntExist(_) = err {
        assert_eq!(
            err.to_string(),
            "A version-control system already exists in the current directory."
        );
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn init_layout() {
    let tempdir = tempfile::tempdir().unwrap();
    let repo = crate::init(tempdir.path()).unwrap();
    let repo_dir = tempdir.path().join(".rslet");

    assert_eq!(
        fs::read_to_string(repo_dir.join("HEAD")).unwrap(),
        "ref: refs/heads/master\n"
    );

    let master = fs::read_to_string(repo_dir.join("refs/heads/master")).unwrap();
    assert_eq!(master.trim_end(), repo.head_commit().id().to_string());
    assert_eq!(repo.head_commit().message(), INITIAL_MESSAGE);

    let root = repo.head_commit().id();
    assert!(repo.store().object_path(root).is_file());

    let index: serde_json::Value =
        serde_json::from_slice(&fs::read(repo_dir.join("index")).unwrap()).unwrap();
    assert_eq!(index, serde_json::json!({"added": {}, "removed": []}));

    assert!(repo_dir.join("config").is_file());

    // Nothing but the repository directory in the working tree.
    assert!(repo.store().work_files().unwrap().is_empty());
}

#[test]
fn root_commit_is_shared() {
    let a = TempRepo::new();
    let b = TempRepo::new();
    assert_eq!(a.open().head_commit().id(), b.open().head_commit().id());
}

#[test]
fn unsupported_format() {
    let tr = TempRepo::new();
    fs::write(
        tr.path().join(".rslet/config"),
        "[core]\nrepositoryformatversion = 1\n",
    )
    .unwrap();

    match OnDiskRepo::new(tr.path()).unwrap_err() {
        Error::UnsupportedFormat(1) => (),
        err => panic!("wrong error: {:?}", err),
    }
}

#[test]
fn corrupt_head() {
    let tr = TempRepo::new();
    fs::write(tr.path().join(".rslet/HEAD"), "garbage\n").unwrap();

    match crate::open(tr.path()).unwrap_err() {
        Error::CorruptMetadata(_) => (),
        err => panic!("wrong error: {:?}", err),
    }
}
