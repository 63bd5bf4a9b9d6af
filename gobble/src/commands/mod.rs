mod completions;
mod generate;
mod inspect;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;

#[derive(Parser)]
#[command(name = "gobble")]
#[command(version)]
#[command(about = "Generate fluent builders for Go structs")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builder files for FILE:STRUCT targets
    Generate(GenerateCommand),

    /// Print the fields a builder would be generated from, as JSON
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
