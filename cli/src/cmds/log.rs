use std::io::Write;

use clap::{App, ArgMatches, SubCommand};

use super::find_repo;
use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("log").about("Show the history of the current branch")
}

pub(crate) fn run(app: &mut crate::App, _matches: &ArgMatches) -> Result<()> {
    let repo = find_repo::from_path(&app.work_dir)?;

    for commit in repo.log()? {
        writeln!(app, "{}", commit.log_entry())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rslet_on_disk::TempRepo;

    use crate::App;

    #[test]
    fn fresh_repo() {
        let tr = TempRepo::new();
        let root = tr.open().head_commit().id().to_string();

        let stdout = App::run_with_args(tr.path(), vec!["log"]).unwrap();
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            format!(
                "===\ncommit {}\nDate: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n",
                root
            )
        );
    }

    #[test]
    fn newest_first() {
        let tr = TempRepo::new();
        tr.write("a.txt", "1");
        App::run_with_args(tr.path(), vec!["add", "a.txt"]).unwrap();
        App::run_with_args(tr.path(), vec!["commit", "one"]).unwrap();
        tr.write("a.txt", "2");
        App::run_with_args(tr.path(), vec!["add", "a.txt"]).unwrap();
        App::run_with_args(tr.path(), vec!["commit", "two"]).unwrap();

        let stdout = String::from_utf8(App::run_with_args(tr.path(), vec!["log"]).unwrap()).unwrap();
        let messages: Vec<&str> = stdout
            .split("===\n")
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.lines().nth(2).unwrap())
            .collect();
        assert_eq!(messages, vec!["two", "one", "initial commit"]);
    }
}
