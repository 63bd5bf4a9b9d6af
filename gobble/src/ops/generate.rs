//! Generate operation - builder files for FILE:TARGET specs.

use gobble_core::{File, TargetSpec};
use miette::{Report, miette};
use tracing::info;

use super::SourceCache;
use crate::reports::{GenerateReport, UnitOutcome, UnitResult};

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every target is attempted; a failing target does not stop the others.
pub fn generate(targets: &[TargetSpec], opts: GenerateOptions) -> eyre::Result<GenerateReport> {
    let mut cache = SourceCache::new()?;

    let units = targets
        .iter()
        .map(|spec| {
            let result = generate_one(&mut cache, spec, opts).unwrap_or_else(|report| {
                UnitResult::Failed(report.wrap_err(format!(
                    "failed to generate builder code for '{spec}'"
                )))
            });
            UnitOutcome {
                spec: spec.clone(),
                result,
            }
        })
        .collect();

    info!(files = cache.paths().count(), "finished generating builders");
    Ok(GenerateReport { units })
}

fn generate_one(
    cache: &mut SourceCache,
    spec: &TargetSpec,
    opts: GenerateOptions,
) -> Result<UnitResult, Report> {
    let source = cache.get(&spec.path)?;
    let code = gobble_codegen::generate(source, &spec.target).map_err(Report::new)?;
    let file = File::new(spec.output_path(), code);

    if opts.dry_run {
        return Ok(UnitResult::Preview(file));
    }

    let status = file.write().map_err(|err| miette!("{err:#}"))?;
    info!(path = %file.path().display(), ?status, "wrote builder");
    Ok(UnitResult::Written {
        path: file.path().to_path_buf(),
        status,
    })
}
