//! Verifies that the structural shape of a class (its fields and methods)
//! matches a declaratively specified contract, as part of an automated
//! style/correctness checker for graded submissions.
//!
//! The source-code parser and the diagnostic formatter live in the host;
//! this crate receives already-parsed member nodes ([`core::ast`]) and emits
//! `(location, message key, args)` events through a [`DiagnosticSink`].
//! Comparison is purely syntactic and text-level: no inherited members, no
//! type resolution, no method bodies.

pub mod checks;
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod spec;

// Re-export commonly used types
pub use crate::checks::{
    run_checks, Check, ConstantNameCheck, FieldSpecCheck, MethodSpecCheck, StarImportCheck,
    SurfaceCheck,
};
pub use crate::config::CheckConfig;
pub use crate::core::errors::{Error, Result};
pub use crate::core::{CollectingSink, Diagnostic, DiagnosticSink, Location, MessageKey};
pub use crate::io::{CheckReport, ReportWriter};
pub use crate::spec::{
    field_from_node, method_from_node, parse_fields, parse_methods, RequiredField, RequiredMethod,
    RequiredParam, Visibility,
};
