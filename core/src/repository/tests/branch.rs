use super::*;

use crate::repo::Error;

#[test]
fn branch_points_at_head() {
    let mut r = new_repo();
    commit_file(&mut r, "a.txt", "a", "first");

    r.branch("other").unwrap();
    assert_eq!(
        r.store().branch("other").unwrap().as_ref(),
        Some(r.head_commit().id())
    );
    assert_eq!(r.current_branch(), "master");
    assert_eq!(
        r.store().branches().unwrap(),
        vec!["master".to_string(), "other".to_string()]
    );
}

#[test]
fn branch_exists() {
    let mut r = new_repo();
    r.branch("other").unwrap();
    assert!(matches!(r.branch("other"), Err(Error::BranchExists)));
    assert!(matches!(r.branch("master"), Err(Error::BranchExists)));
}

#[test]
fn branch_bad_name() {
    let mut r = new_repo();
    assert!(matches!(r.branch("a/b"), Err(Error::InvalidBranchName(_))));
    assert!(matches!(r.branch(""), Err(Error::InvalidBranchName(_))));
}

#[test]
fn remove_branch_keeps_commits() {
    let mut r = new_repo();
    r.branch("other").unwrap();
    r.checkout_branch("other").unwrap();
    commit_file(&mut r, "a.txt", "a", "on other");
    let id = r.head_commit().id().clone();
    r.checkout_branch("master").unwrap();

    r.remove_branch("other").unwrap();
    assert_eq!(r.store().branch("other").unwrap(), None);
    assert!(r.store().has_object(&id).unwrap());
}

#[test]
fn remove_branch_errors() {
    let mut r = new_repo();
    assert!(matches!(r.remove_branch("nope"), Err(Error::BranchNotFound)));
    assert!(matches!(r.remove_branch("../HEAD"), Err(Error::BranchNotFound)));
    assert!(matches!(
        r.remove_branch("master"),
        Err(Error::RemoveCurrentBranch)
    ));
}
