use std::io::Write;

use clap::{App, ArgMatches, SubCommand};

use super::find_repo;
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("global-log").about("Show every commit on every branch")
}

pub(crate) fn run(app: &mut crate::App, _matches: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_path(&app.work_dir)?;

    for commit in repo.global_log()? {
        writeln!(app, "{}", commit.log_entry())?;
    }
    Ok(())
}
