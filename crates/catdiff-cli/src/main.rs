use std::io;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;

mod cli;
mod commands;
mod config;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout().lock();
    let result = commands::run_command(cli, &mut stdout);
    if let Err(e) = &result {
        eprintln!("{} {e:#}", "error:".red().bold());
    }
    ExitCode::from(commands::exit_code(&result))
}
