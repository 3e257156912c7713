//! On-demand import check.
//!
//! Course style requires on-demand (`.*`) imports; any single-type import in
//! the unit's import list is flagged with the import text as the argument.

use crate::checks::Check;
use crate::core::ast::SourceUnit;
use crate::core::{Diagnostic, DiagnosticSink, Location, MessageKey};

const STAR_IMPORT_SUFFIX: &str = ".*";

#[derive(Debug, Default)]
pub struct StarImportCheck;

impl Check for StarImportCheck {
    fn name(&self) -> &'static str {
        "star-import"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut dyn DiagnosticSink) {
        for import in &unit.imports {
            if !import.ends_with(STAR_IMPORT_SUFFIX) {
                sink.report(Diagnostic::new(
                    Location::ZERO,
                    MessageKey::StarImport,
                    [import.clone()],
                ));
            }
        }
    }
}
