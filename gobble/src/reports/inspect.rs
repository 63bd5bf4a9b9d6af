//! Inspect command report data structures.

use gobble_core::TargetSpec;

use super::output::{Output, Report};

/// Report data from inspecting targets.
#[derive(Debug)]
pub struct InspectReport {
    pub entries: Vec<InspectEntry>,
}

/// One target and either its generation unit as pretty JSON or the failure.
#[derive(Debug)]
pub struct InspectEntry {
    pub spec: TargetSpec,
    pub result: Result<String, miette::Report>,
}

impl InspectReport {
    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_err()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        let many = self.entries.len() > 1;
        for entry in &self.entries {
            match &entry.result {
                Ok(json) => {
                    if many {
                        out.divider(&entry.spec.to_string());
                    }
                    out.preformatted(json);
                }
                Err(report) => out.error(&format!("{report:?}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::miette;

    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_single_entry_prints_bare_json() {
        let report = InspectReport {
            entries: vec![InspectEntry {
                spec: TargetSpec::new("user.go", "User"),
                result: Ok("{}".to_string()),
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, ["{}"]);
    }

    #[test]
    fn test_multiple_entries_are_labelled() {
        let report = InspectReport {
            entries: vec![
                InspectEntry {
                    spec: TargetSpec::new("user.go", "User"),
                    result: Ok("{}".to_string()),
                },
                InspectEntry {
                    spec: TargetSpec::new("user.go", "Role"),
                    result: Err(miette!("could not find definition of struct Role")),
                },
            ],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, ["-- user.go:User --", "{}"]);
        assert_eq!(out.stderr.len(), 1);
        assert!(report.has_failures());
    }
}
