// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Replay a script of list operations and print the resolved view.

use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flexi_logger::FlexiLoggerError;
use flexi_logger::Logger;
use log::error;
use log::info;
use rustc_hash::FxHashSet;
use thiserror::Error;

use together_todo::list::ToDoList;
use together_todo::script::ScriptError;
use together_todo::script::parse_script;

#[derive(Parser)]
#[command(name = "together-todo", about = "Replay shared to-do list operations")]
struct Cli {
    /// Script to replay, one operation per line. Use `-` for stdin.
    #[arg(default_value = "-")]
    script: PathBuf,

    /// Log level or filter spec, e.g. `debug` or `together_todo=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the view digest after the entries.
    #[arg(long)]
    digest: bool,

    /// Print only the number of visible entries.
    #[arg(long)]
    count: bool,
}

#[derive(Debug, Error)]
enum ReplayError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("failed to start logger: {0}")]
    Logger(#[from] FlexiLoggerError),
}

fn read_script(path: &Path) -> Result<String, ReplayError> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    return text.map_err(|source| ReplayError::Read { path: path.to_path_buf(), source });
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let _logger = Logger::try_with_env_or_str(&cli.log_level)?.log_to_stderr().start()?;

    let text = read_script(&cli.script)?;
    let log = parse_script(&text)?;
    let writers: FxHashSet<_> = log.iter().map(|op| op.user()).collect();
    let entries: FxHashSet<_> = log.iter().filter_map(|op| op.entry()).collect();
    info!(
        "event=script_loaded path={} ops={} writers={} entries={}",
        cli.script.display(), log.len(), writers.len(), entries.len()
    );

    let mut list = ToDoList::new();
    list.replay(&log);

    if cli.count {
        println!("{}", list.count());
        return Ok(());
    }

    for entry in &list {
        let mark = if entry.done { "x" } else { " " };
        println!("{}\t[{}] {}", entry.id, mark, entry.name);
    }
    if cli.digest {
        println!("digest {}", list.digest());
    }
    return Ok(());
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    return match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=replay_failed error={}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    };
}
