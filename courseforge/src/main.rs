//! courseforge — workshop module scaffolder for Docusaurus training sites.

use clap::Parser;

use courseforge::cli::args::Cli;
use courseforge::cli::commands;
use courseforge::error::ExitCode;
use courseforge::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
