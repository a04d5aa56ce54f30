use clap::Parser;
use listbox::widget::Overflow;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listbox", about = "Pick an entry from a directory or a line from a file")]
pub struct Cli {
    /// Directory to list, or file whose lines to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file (defaults to <config dir>/listbox/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overflow mode for long items: truncate or wrap
    #[arg(long)]
    pub overflow: Option<Overflow>,

    /// List the lines of PATH even if it is not a regular file
    #[arg(long)]
    pub lines: bool,

    /// Log file (defaults to <cache dir>/listbox/listbox.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
