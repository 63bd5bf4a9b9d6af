use clap::Args;
use eyre::Result;
use gobble_core::TargetSpec;

use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Targets in the form FILE:STRUCT, e.g. models/user.go:User
    #[arg(required = true, value_name = "FILE:STRUCT")]
    pub targets: Vec<TargetSpec>,

    /// Print generated code instead of writing it to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let report = ops::generate(
            &self.targets,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
