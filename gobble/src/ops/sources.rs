//! Parsed Go sources shared by every target in one run.

use std::path::{Path, PathBuf};

use eyre::Context;
use gobble_syntax::{GoParser, ast::SourceFile};
use indexmap::IndexMap;
use miette::{Report, miette};
use tracing::debug;

/// Parses each input file at most once, in first-use order.
///
/// A file that failed to parse is remembered so later targets in it fail
/// without re-reading it.
pub struct SourceCache {
    parser: GoParser,
    files: IndexMap<PathBuf, Option<SourceFile>>,
}

impl SourceCache {
    pub fn new() -> eyre::Result<Self> {
        let parser = GoParser::new()
            .map_err(|err| eyre::Report::new(*err))
            .wrap_err("failed to initialise the Go parser")?;
        Ok(Self {
            parser,
            files: IndexMap::new(),
        })
    }

    /// Get the parsed file at `path`, parsing it on first use.
    pub fn get(&mut self, path: &Path) -> Result<&SourceFile, Report> {
        if !self.files.contains_key(path) {
            let parsed = self.parse(path);
            let (file, error) = match parsed {
                Ok(file) => (Some(file), None),
                Err(err) => (None, Some(err)),
            };
            self.files.insert(path.to_path_buf(), file);
            if let Some(err) = error {
                return Err(err);
            }
        }

        match self.files.get(path) {
            Some(Some(file)) => Ok(file),
            _ => Err(miette!(
                "skipped because '{}' failed to parse",
                path.display()
            )),
        }
    }

    /// Paths seen so far, in first-use order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    fn parse(&mut self, path: &Path) -> Result<SourceFile, Report> {
        let file = self
            .parser
            .parse_path(path)
            .map_err(|err| Report::new(*err))?;

        debug!(path = %path.display(), decls = file.decls.len(), "parsed source file");
        Ok(file)
    }
}
