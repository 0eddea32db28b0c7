use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_PATTERN_PATH: &str = "./example_input/shirt.json";

#[derive(Parser, Debug)]
#[command(
    name = "pattern-stats",
    version,
    about = "Count blocks and entities in a pattern document"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_PATTERN_PATH,
        help = "Pattern document to read (JSON with a top-level pattern_json field)"
    )]
    pub input: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Block count, block entity total and top-level entity count (default)
    Count,
    /// Entity count for every block, sorted by block id
    Blocks,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Count)
    }
}
