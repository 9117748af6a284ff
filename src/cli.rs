//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Applyspec - apply spec resolver
///
/// Resolve untyped apply spec documents into the jobs, packages, and
/// properties a convergence agent acts on.
#[derive(Parser, Debug)]
#[command(
    name = "applyspec",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Apply spec resolver for host convergence agents",
    long_about = "Applyspec resolves untyped apply spec documents (JSON or YAML) into typed \
                  jobs, packages, and operational properties, accepting both the legacy \
                  single-job document shape and the modern multi-template shape.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  applyspec show spec.yml\n    \
                  applyspec show spec.json --json\n    \
                  applyspec validate spec.yml\n    \
                  applyspec version"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved contents of a spec document
    Show(ShowArgs),

    /// Check that a spec document resolves
    Validate(ValidateArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a YAML spec:\n    applyspec show spec.yml\n\n\
                  Show a JSON spec:\n    applyspec show spec.json\n\n\
                  Emit the resolved spec as JSON:\n    applyspec show spec.yml --json")]
pub struct ShowArgs {
    /// Spec document to resolve (JSON or YAML)
    pub spec: PathBuf,

    /// Emit the resolved spec as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate a spec:\n    applyspec validate spec.yml\n\n\
                  Validate a JSON spec:\n    applyspec validate spec.json")]
pub struct ValidateArgs {
    /// Spec document to validate (JSON or YAML)
    pub spec: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    applyspec completions --shell bash > ~/.bash_completion.d/applyspec\n\n\
                  Generate zsh completions:\n    applyspec completions --shell zsh > ~/.zfunc/_applyspec\n\n\
                  Generate fish completions:\n    applyspec completions --shell fish > ~/.config/fish/completions/applyspec.fish\n\n\
                  Generate PowerShell completions:\n    applyspec completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
