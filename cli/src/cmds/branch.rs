use clap::{App, Arg, ArgMatches, SubCommand};

use super::{find_repo, required};
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("branch")
        .about("Create a branch at the current commit")
        .arg(
            Arg::with_name("name")
                .required(true)
                .help("The new branch name"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;
    repo.branch(required(matches, "name"))?;
    Ok(())
}
