//! Class-constant naming check.
//!
//! Fields that are both `static` and `final` are class constants and must be
//! named in SCREAMING_SNAKE_CASE. Everything else is left to the host's
//! general naming checks.

use crate::checks::Check;
use crate::core::ast::{MemberKind, SourceUnit};
use crate::core::{Diagnostic, DiagnosticSink, Location, MessageKey};
use once_cell::sync::Lazy;
use regex::Regex;

static CONSTANT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]+(_[A-Z]+)*$").unwrap());

#[derive(Debug, Default)]
pub struct ConstantNameCheck;

impl Check for ConstantNameCheck {
    fn name(&self) -> &'static str {
        "constant-name"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut dyn DiagnosticSink) {
        for node in &unit.class.members {
            if node.kind != MemberKind::Field {
                continue;
            }
            // Java accepts modifiers in any order; test by membership, not
            // by the spec checks' positional slots.
            let is_constant = node.modifiers.iter().any(|m| m == "static")
                && node.modifiers.iter().any(|m| m == "final");
            if is_constant && !CONSTANT_NAME.is_match(&node.name) {
                sink.report(Diagnostic::new(
                    Location::new(node.line, node.column),
                    MessageKey::InvalidConstantName,
                    [node.name.clone(), CONSTANT_NAME.as_str().to_string()],
                ));
            }
        }
    }
}
