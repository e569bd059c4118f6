use std::io::Write;

use clap::{App, Arg, ArgMatches, SubCommand};

use super::{find_repo, required};
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("find")
        .about("Print the IDs of all commits with the given message")
        .arg(
            Arg::with_name("message")
                .required(true)
                .help("The exact commit message"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_path(&app.work_dir)?;

    for id in repo.find(required(matches, "message"))? {
        writeln!(app, "{}", id)?;
    }
    Ok(())
}
