use clap::Args;
use eyre::Result;
use gobble_core::TargetSpec;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Targets in the form FILE:STRUCT, e.g. models/user.go:User
    #[arg(required = true, value_name = "FILE:STRUCT")]
    pub targets: Vec<TargetSpec>,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let report = ops::inspect(&self.targets)?;
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
