use clap::{App, Arg, ArgMatches, SubCommand};

use super::{find_repo, required};
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("add")
        .about("Stage a file for the next commit")
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("The file to stage"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;
    repo.add(required(matches, "file"))?;
    Ok(())
}
