use std::env;
use std::error::Error;
use std::io::{self, Write};

use rslet_core::repo::ErrorKind;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
pub(crate) use app::App;

mod cmds;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Errors in how a command was invoked that clap can't express.
#[derive(Debug, thiserror::Error)]
pub(crate) enum UsageError {
    #[error("Incorrect operands.")]
    IncorrectOperands,
}

/// Exit status for a failed command: 1 for mistakes the user can fix,
/// 2 for everything else.
pub(crate) fn exit_code(err: &(dyn Error + 'static)) -> i32 {
    if is_user_error(err) {
        1
    } else {
        2
    }
}

fn is_user_error(err: &(dyn Error + 'static)) -> bool {
    if err.is::<UsageError>() {
        return true;
    }

    match err.downcast_ref::<rslet_core::repo::Error>() {
        Some(err) => err.kind() != ErrorKind::Fatal,
        None => false,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RSLET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

#[allow(unused_must_use)]
#[cfg(not(tarpaulin_include))]
fn main() {
    // Keep this function small; everything else is reachable from tests.

    init_logging();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let work_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(2);
        }
    };

    let mut app = App {
        arg_matches: app::clap_app().get_matches(),
        work_dir,
        stdout: &mut stdout,
    };

    let r = app.run();

    app.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            let code = exit_code(err.as_ref());
            if code == 1 {
                writeln!(app, "{}", err);
                app.flush();
            } else {
                eprintln!("ERROR: {}", err);
            }
            code
        }
    });
}
