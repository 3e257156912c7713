//! All-or-nothing surface check.
//!
//! The simpler of the spec modes: required members arrive as parallel lists
//! (names, types, return types, parameter type/name lists), matching is
//! exact structural identity (name and type for fields; name, return type,
//! and parameter set for methods; modifiers are ignored), and nothing is
//! diffed. Whatever the class fails to provide is reported wholesale as
//! `missing.fields` / `missing.methods` after the traversal.

use crate::checks::Check;
use crate::core::ast::{MemberKind, SourceUnit};
use crate::core::errors::Result;
use crate::core::{Diagnostic, DiagnosticSink, Location, MessageKey};
use crate::spec::extract::{field_from_node, method_from_node};
use crate::spec::model::{RequiredField, RequiredMethod};
use crate::spec::parser::{parse_parallel_fields, parse_parallel_methods};

#[derive(Debug)]
pub struct SurfaceCheck {
    fields: Vec<RequiredField>,
    methods: Vec<RequiredMethod>,
}

impl SurfaceCheck {
    /// Build from parallel lists; mismatched list lengths are fatal
    /// configuration errors surfaced before any traversal.
    pub fn new(
        field_names: &[String],
        field_types: &[String],
        method_names: &[String],
        method_return_types: &[String],
        method_param_types: &[String],
        method_param_names: &[String],
    ) -> Result<Self> {
        Ok(Self {
            fields: parse_parallel_fields(field_names, field_types)?,
            methods: parse_parallel_methods(
                method_names,
                method_return_types,
                method_param_types,
                method_param_names,
            )?,
        })
    }
}

impl Check for SurfaceCheck {
    fn name(&self) -> &'static str {
        "surface"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut dyn DiagnosticSink) {
        let mut pending_fields = self.fields.clone();
        let mut pending_methods = self.methods.clone();

        for node in &unit.class.members {
            match node.kind {
                MemberKind::Field => {
                    let found = field_from_node(node);
                    if let Some(index) = pending_fields
                        .iter()
                        .position(|spec| spec.signature_matches(&found))
                    {
                        pending_fields.remove(index);
                    }
                }
                MemberKind::Method => {
                    let found = method_from_node(node);
                    if let Some(index) = pending_methods
                        .iter()
                        .position(|spec| spec.signature_matches(&found))
                    {
                        pending_methods.remove(index);
                    }
                }
                MemberKind::Constructor => {}
            }
        }

        for spec in &pending_fields {
            sink.report(Diagnostic::new(
                Location::ZERO,
                MessageKey::MissingFields,
                [spec.name.clone()],
            ));
        }
        for spec in &pending_methods {
            sink.report(Diagnostic::new(
                Location::ZERO,
                MessageKey::MissingMethods,
                [spec.name.clone()],
            ));
        }
    }
}
