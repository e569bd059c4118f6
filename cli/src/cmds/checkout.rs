use clap::{App, Arg, ArgMatches, SubCommand};

use super::find_repo;
use crate::{Result, UsageError};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("checkout")
        .about("Restore a file, or switch to another branch")
        .after_help(
            "USAGE FORMS:\n    \
             rslet checkout -- <file>             restore <file> from the current commit\n    \
             rslet checkout <commit> -- <file>    restore <file> from <commit>\n    \
             rslet checkout <branch>              switch to <branch>",
        )
        .arg(
            Arg::with_name("target")
                .index(1)
                .help("A branch name, or a commit ID when followed by -- <file>"),
        )
        .arg(
            Arg::with_name("file")
                .index(2)
                .last(true)
                .help("The file to restore (must follow --)"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let mut repo = find_repo::from_path(&app.work_dir)?;

    match (matches.value_of("target"), matches.value_of("file")) {
        (None, Some(file)) => repo.checkout_file(file)?,
        (Some(commit), Some(file)) => repo.checkout_file_at(commit, file)?,
        (Some(branch), None) => repo.checkout_branch(branch)?,
        (None, None) => return Err(UsageError::IncorrectOperands.into()),
    }
    Ok(())
}
