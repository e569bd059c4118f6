use clap::{App, Arg, ArgMatches, SubCommand};

use super::{find_repo, required};
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("reset")
        .about("Check out a commit and move the current branch to it")
        .arg(
            Arg::with_name("commit")
                .required(true)
                .help("A full or abbreviated commit ID"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;
    repo.reset(required(matches, "commit"))?;
    Ok(())
}
