use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod services;
mod telemetry;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::aggregate::*;
pub use services::loader::*;
pub use services::output::*;

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();
    handle_commands(&cli)
}
