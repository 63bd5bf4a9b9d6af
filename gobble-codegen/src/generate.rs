//! Orchestration from a parsed file to builder source.

use gobble_ir::GenerationUnit;
use gobble_syntax::ast::SourceFile;
use tracing::debug;

use crate::{
    Error, Result,
    extract::extract_fields,
    locate::find_struct,
    render::{GoBuilderRenderer, Render},
};

/// Locate `target` in `file` and collect its builder fields.
pub fn build_unit(file: &SourceFile, target: &str) -> Result<GenerationUnit> {
    let st = find_struct(file, target)?;
    debug!(struct_name = target, package = %file.package, "located target struct");

    let fields = extract_fields(Some(st)).map_err(|source| Error::Extract {
        target: target.to_string(),
        source: Box::new(source),
    })?;
    debug!(struct_name = target, fields = fields.len(), "extracted builder fields");

    Ok(GenerationUnit::new(&file.package, target, fields))
}

/// Generate the Go builder for `target` with the default renderer.
pub fn generate(file: &SourceFile, target: &str) -> Result<String> {
    generate_with(&GoBuilderRenderer, file, target)
}

/// Generate the builder for `target` with a custom renderer.
pub fn generate_with<R>(renderer: &R, file: &SourceFile, target: &str) -> Result<String>
where
    R: Render + ?Sized,
{
    let unit = build_unit(file, target)?;
    renderer.render(&unit)
}
