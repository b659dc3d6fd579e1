use clap::Parser;
use log::debug;
use steg_engine_core::StegError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");
    let options = args.codec_options();

    match args.command {
        Commands::Hide(args) => args.run(options),
        Commands::Unveil(args) => args.run(options),
        Commands::Capacity(args) => args.run(),
        Commands::Algorithms(args) => args.run(),
    }
}
