use clap::{App, Arg, ArgMatches, SubCommand};

use super::{find_repo, required};
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("rm")
        .about("Untrack a file and delete it from the working directory")
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("The file to remove"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;
    repo.remove(required(matches, "file"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rslet_on_disk::TempRepo;

    use crate::App;

    #[test]
    fn removes_tracked_file() {
        let tr = TempRepo::new();
        tr.write("a.txt", "a");
        App::run_with_args(tr.path(), vec!["add", "a.txt"]).unwrap();
        App::run_with_args(tr.path(), vec!["commit", "add a"]).unwrap();

        App::run_with_args(tr.path(), vec!["rm", "a.txt"]).unwrap();
        assert_eq!(tr.read("a.txt"), None);
        assert!(tr.open().staging_area().removed().contains("a.txt"));
    }

    #[test]
    fn error_untracked() {
        let tr = TempRepo::new();
        tr.write("a.txt", "a");
        let err = App::run_with_args(tr.path(), vec!["rm", "a.txt"]).unwrap_err();
        assert_eq!(err.to_string(), "No reason to remove the file.");
        assert_eq!(tr.read("a.txt").as_deref(), Some("a"));
    }
}
