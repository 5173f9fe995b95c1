//! Entry point for the `dialscope` binary: parse, dispatch, exit.
mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser as _;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Locate { number } => cmd::locate::run(
            number,
            &cli.format,
            cli.quiet,
            cli.verbose,
            cli.no_color,
        ),
        Command::Ip { address, response } => cmd::ip::run(
            address,
            response.as_ref(),
            &cli.format,
            cli.quiet,
            cli.verbose,
            cli.no_color,
            cli.max_file_size,
        ),
        Command::Inspect => cmd::inspect::run(&cli.format),
    };

    if let Err(err) = result {
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}
