use clap::{App, ArgMatches, SubCommand};

use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty repository in the current directory")
}

pub(crate) fn run(app: &mut crate::App, _matches: &ArgMatches) -> Result<()> {
    rslet_on_disk::init(&app.work_dir)?;
    Ok(())
}
