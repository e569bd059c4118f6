use clap::{App, Arg, ArgMatches, SubCommand};

use super::find_repo;
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("commit")
        .about("Record the staged files as a new commit")
        .arg(Arg::with_name("message").help("The commit message"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;

    // A missing message is reported the same way as an empty one.
    repo.commit(matches.value_of("message").unwrap_or_default())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rslet_on_disk::TempRepo;

    use crate::App;

    #[test]
    fn records_commit() {
        let tr = TempRepo::new();
        tr.write("a.txt", "hello\n");
        App::run_with_args(tr.path(), vec!["add", "a.txt"]).unwrap();

        let stdout = App::run_with_args(tr.path(), vec!["commit", "first one"]).unwrap();
        assert!(stdout.is_empty());

        let repo = tr.open();
        assert_eq!(repo.head_commit().message(), "first one");
        assert!(repo.staging_area().is_clean());
    }

    #[test]
    fn error_nothing_staged() {
        let tr = TempRepo::new();
        let err = App::run_with_args(tr.path(), vec!["commit", "m"]).unwrap_err();
        assert_eq!(err.to_string(), "No changes added to the commit.");
    }

    #[test]
    fn error_no_message() {
        let tr = TempRepo::new();
        tr.write("a.txt", "hello\n");
        App::run_with_args(tr.path(), vec!["add", "a.txt"]).unwrap();

        for args in [vec!["commit"], vec!["commit", ""]] {
            let err = App::run_with_args(tr.path(), args).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a commit message.");
        }
    }
}
