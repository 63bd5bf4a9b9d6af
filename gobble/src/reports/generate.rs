//! Generate command report data structures.

use std::path::PathBuf;

use gobble_core::{File, TargetSpec, WriteResult};

use super::output::{Output, Report};

/// Report data from builder generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// One outcome per requested target, in request order.
    pub units: Vec<UnitOutcome>,
}

/// What happened to one FILE:TARGET request.
#[derive(Debug)]
pub struct UnitOutcome {
    pub spec: TargetSpec,
    pub result: UnitResult,
}

#[derive(Debug)]
pub enum UnitResult {
    /// Builder file was written (or already up to date).
    Written { path: PathBuf, status: WriteResult },
    /// Dry-run preview.
    Preview(File),
    /// Generation failed; other targets were still attempted.
    Failed(miette::Report),
}

impl GenerateReport {
    pub fn failure_count(&self) -> usize {
        self.units
            .iter()
            .filter(|unit| matches!(unit.result, UnitResult::Failed(_)))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let mut previews = 0;
        for unit in &self.units {
            if let UnitResult::Preview(file) = &unit.result {
                out.divider(&file.path().display().to_string());
                out.preformatted(file.content());
                previews += 1;
            }
        }

        let mut written = self
            .units
            .iter()
            .filter_map(|unit| match &unit.result {
                UnitResult::Written { path, status } => Some((unit, path, *status)),
                _ => None,
            })
            .peekable();
        if written.peek().is_some() {
            out.section("Builders");
            for (unit, path, status) in written {
                let item = format!("{} ({})", path.display(), unit.spec.target);
                match status {
                    WriteResult::Written => out.added_item(&item),
                    WriteResult::Unchanged => out.unchanged_item(&item),
                }
            }
        }

        for unit in &self.units {
            if let UnitResult::Failed(report) = &unit.result {
                out.error(&format!("{report:?}"));
            }
        }

        if previews > 0 {
            out.divider("Summary");
            out.preformatted(&format!("{previews} files would be generated"));
        }

        let failures = self.failure_count();
        if failures > 0 {
            out.newline();
            out.error(&format!(
                "{failures} of {} targets failed",
                self.units.len()
            ));
        }
    }
}
