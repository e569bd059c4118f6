use std::io::Write;

use clap::{App, ArgMatches, SubCommand};

use super::find_repo;
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("status").about("Show branches, staged files, and working-tree changes")
}

pub(crate) fn run(app: &mut crate::App, _matches: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_path(&app.work_dir)?;
    let status = repo.status()?;
    write!(app, "{}", status)?;
    Ok(())
}
