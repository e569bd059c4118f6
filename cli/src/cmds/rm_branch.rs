use clap::{App, Arg, ArgMatches, SubCommand};

use super::{find_repo, required};
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("rm-branch")
        .about("Delete a branch pointer; its commits are kept")
        .arg(
            Arg::with_name("name")
                .required(true)
                .help("The branch to delete"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;
    repo.remove_branch(required(matches, "name"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rslet_on_disk::TempRepo;

    use crate::App;

    #[test]
    fn removes_branch() {
        let tr = TempRepo::new();
        App::run_with_args(tr.path(), vec!["branch", "dev"]).unwrap();
        App::run_with_args(tr.path(), vec!["rm-branch", "dev"]).unwrap();
        assert!(!tr.path().join(".rslet/refs/heads/dev").exists());
    }

    #[test]
    fn errors() {
        let tr = TempRepo::new();

        let err = App::run_with_args(tr.path(), vec!["rm-branch", "dev"]).unwrap_err();
        assert_eq!(err.to_string(), "A branch with that name does not exist.");

        let err = App::run_with_args(tr.path(), vec!["rm-branch", "master"]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot remove the current branch.");
    }
}
