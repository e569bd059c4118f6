use crate::{App, Result};

mod add;
mod branch;
mod checkout;
mod commit;
mod find;
mod find_repo;
mod global_log;
mod init;
mod log;
mod merge;
mod reset;
mod rm;
mod rm_branch;
mod status;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(init::subcommand())
        .subcommand(add::subcommand())
        .subcommand(commit::subcommand())
        .subcommand(rm::subcommand())
        .subcommand(log::subcommand())
        .subcommand(global_log::subcommand())
        .subcommand(find::subcommand())
        .subcommand(status::subcommand())
        .subcommand(checkout::subcommand())
        .subcommand(branch::subcommand())
        .subcommand(rm_branch::subcommand())
        .subcommand(reset::subcommand())
        .subcommand(merge::subcommand())
}

pub(crate) fn dispatch(app: &mut App) -> Result<()> {
    let matches = app.arg_matches.clone();
    // ^^ Need an independent copy of matches so we can still pass
    // the App struct through to subcommand imps.

    tracing::debug!(command = matches.subcommand_name().unwrap_or_default(), "dispatch");

    match matches.subcommand() {
        ("init", Some(m)) => init::run(app, m),
        ("add", Some(m)) => add::run(app, m),
        ("commit", Some(m)) => commit::run(app, m),
        ("rm", Some(m)) => rm::run(app, m),
        ("log", Some(m)) => log::run(app, m),
        ("global-log", Some(m)) => global_log::run(app, m),
        ("find", Some(m)) => find::run(app, m),
        ("status", Some(m)) => status::run(app, m),
        ("checkout", Some(m)) => checkout::run(app, m),
        ("branch", Some(m)) => branch::run(app, m),
        ("rm-branch", Some(m)) => rm_branch::run(app, m),
        ("reset", Some(m)) => reset::run(app, m),
        ("merge", Some(m)) => merge::run(app, m),
        _ => unreachable!(),
        // unreachable: Should have exited out with appropriate help or
        // error message if no subcommand was given.
    }
}

/// Value of a required argument. clap has already rejected invocations
/// without it.
pub(crate) fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    matches.value_of(name).unwrap_or_default()
}
