//! Inspect operation - the generation units behind each target, as JSON.

use eyre::{Context, Result};
use gobble_core::TargetSpec;
use miette::Report;

use super::SourceCache;
use crate::reports::{InspectEntry, InspectReport};

/// Execute the inspect operation.
pub fn inspect(targets: &[TargetSpec]) -> Result<InspectReport> {
    let mut cache = SourceCache::new()?;

    let mut entries = Vec::with_capacity(targets.len());
    for spec in targets {
        let unit = cache.get(&spec.path).and_then(|source| {
            gobble_codegen::build_unit(source, &spec.target).map_err(Report::new)
        });
        let result = match unit {
            Ok(unit) => Ok(serde_json::to_string_pretty(&unit)
                .wrap_err_with(|| format!("failed to serialize generation unit for '{spec}'"))?),
            Err(report) => Err(report.wrap_err(format!("failed to inspect '{spec}'"))),
        };
        entries.push(InspectEntry {
            spec: spec.clone(),
            result,
        });
    }

    Ok(InspectReport { entries })
}
