//! Applyspec - apply spec resolver
//!
//! A command line tool that resolves untyped apply spec documents (JSON or
//! YAML) into the typed jobs, packages, and operational properties a host
//! convergence agent acts on.

use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod spec;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
