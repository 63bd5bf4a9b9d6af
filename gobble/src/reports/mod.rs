//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod inspect;
mod output;

pub use generate::{GenerateReport, UnitOutcome, UnitResult};
pub use inspect::{InspectEntry, InspectReport};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) mod testing {
    use super::output::Output;

    /// Output that records what was rendered, one string per call.
    #[derive(Debug, Default)]
    pub struct RecordingOutput {
        pub stdout: Vec<String>,
        pub stderr: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.stdout.push(format!("{name}:"));
        }

        fn added_item(&mut self, text: &str) {
            self.stdout.push(format!("+ {text}"));
        }

        fn unchanged_item(&mut self, text: &str) {
            self.stdout.push(format!("= {text}"));
        }

        fn error(&mut self, msg: &str) {
            self.stderr.push(msg.to_string());
        }

        fn divider(&mut self, label: &str) {
            self.stdout.push(format!("-- {label} --"));
        }

        fn preformatted(&mut self, text: &str) {
            self.stdout.push(text.to_string());
        }

        fn newline(&mut self) {
            self.stdout.push(String::new());
        }
    }
}
