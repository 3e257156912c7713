//! Structural checks over one parsed class body.
//!
//! Every check is stateful-per-traversal: the instance owns the parsed
//! master specification (built once, at configuration time, where parse
//! failures are fatal), and each [`Check::run`] call works on a fresh
//! pending set cloned from it. Instances must not be shared across
//! concurrent traversals of different class bodies; hosts analyzing files
//! in parallel construct one instance per file.

pub mod constant_name;
pub mod field_spec;
pub mod imports;
pub mod method_spec;
pub mod surface;

pub use constant_name::ConstantNameCheck;
pub use field_spec::FieldSpecCheck;
pub use imports::StarImportCheck;
pub use method_spec::MethodSpecCheck;
pub use surface::SurfaceCheck;

use crate::core::ast::SourceUnit;
use crate::core::{CollectingSink, Diagnostic, DiagnosticSink};

/// One structural check over a compilation unit
pub trait Check {
    /// Name under which the check is configured and logged
    fn name(&self) -> &'static str;

    /// Single pass over the unit; violations go into the sink.
    /// Never halts on a violation; only configuration parsing (which
    /// happened before this call) is fatal.
    fn run(&self, unit: &SourceUnit, sink: &mut dyn DiagnosticSink);
}

/// Run every configured check over one unit, accumulating diagnostics
pub fn run_checks(checks: &[Box<dyn Check>], unit: &SourceUnit) -> Vec<Diagnostic> {
    let mut sink = CollectingSink::default();
    for check in checks {
        log::debug!("running {} on class {}", check.name(), unit.class.name);
        check.run(unit, &mut sink);
    }
    sink.diagnostics
}
