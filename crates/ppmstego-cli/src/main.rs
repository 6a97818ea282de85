use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = std::result::Result<T, ppmstego_core::StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Hide(cmd) => cmd.run(options),
        Commands::Reveal(cmd) => cmd.run(options),
    }
}
