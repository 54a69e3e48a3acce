use std::path::PathBuf;

use clap::Parser;

const APP_DIR: &str = "today-tui";
const LOG_FILE: &str = "today-tui.log";

#[derive(Debug, Parser)]
#[command(name = "today-tui", version, about = "Today's tasks, sorted by priority")]
pub struct Cli {
    /// Directory the task list is stored in
    #[arg(long, env = "TODAY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// File diagnostics are written to
    #[arg(long, env = "TODAY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
        let log_file = cli.log_file.unwrap_or_else(|| data_dir.join(LOG_FILE));
        Self {
            data_dir,
            log_file,
            verbose: cli.verbose,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".today-tui"), |dir| dir.join(APP_DIR))
}
