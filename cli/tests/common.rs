use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory with an initialized repository in it.
pub fn init_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    rslet(dir.path()).arg("init").assert().success().stdout("");
    dir
}

/// The `rslet` binary, run from `dir`.
pub fn rslet(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rslet").unwrap();
    cmd.current_dir(dir).env_remove("RSLET_LOG");
    cmd
}

#[allow(dead_code)]
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    fs::write(dir.join(name), content).unwrap();
    rslet(dir).args(&["add", name]).assert().success();
    rslet(dir).args(&["commit", message]).assert().success();
}

/// Full ID of the HEAD commit, taken from the first `log` entry.
#[allow(dead_code)]
pub fn head_id(dir: &Path) -> String {
    let out = rslet(dir).arg("log").output().unwrap();
    let log = String::from_utf8(out.stdout).unwrap();
    log.lines()
        .nth(1)
        .and_then(|line| line.strip_prefix("commit "))
        .unwrap()
        .to_string()
}
