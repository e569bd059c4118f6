use std::io::Write;

use clap::{App, Arg, ArgMatches, SubCommand};

use super::{find_repo, required};
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("merge")
        .about("Merge another branch into the current one")
        .arg(
            Arg::with_name("branch")
                .required(true)
                .help("The branch to merge in"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;
    let outcome = repo.merge(required(matches, "branch"))?;

    let message = outcome.to_string();
    if !message.is_empty() {
        writeln!(app, "{}", message)?;
    }
    Ok(())
}
