//! Method specification check.
//!
//! Observed methods and constructors are matched by name against the parsed
//! method specs, where one name may carry several overloads. An observed
//! method that exactly equals a pending overload consumes it silently.
//! Otherwise the first remaining overload under that name is used as the
//! expected value: every differing attribute gets its own `malformed.method`
//! diagnostic, and that first overload is consumed anyway so the residual
//! pass does not re-report it as missing. Consuming the first overload can
//! attribute another overload's attributes as the expected answer when
//! several share a name; that asymmetry is deliberate and kept.
//!
//! Methods absent from the spec must be `private`. Overloads still pending
//! at end of traversal are each reported as `missing.method`.

use crate::checks::Check;
use crate::core::ast::{MemberKind, SourceUnit};
use crate::core::errors::Result;
use crate::core::{Diagnostic, DiagnosticSink, Location, MessageKey};
use crate::spec::extract::method_from_node;
use crate::spec::model::{static_word, MethodSpecs, RequiredMethod, Visibility};
use crate::spec::parser::parse_methods;

pub struct MethodSpecCheck {
    specs: MethodSpecs,
}

impl MethodSpecCheck {
    /// Parse the raw comma-joined method spec string; parse failures are
    /// fatal and surface before any traversal starts.
    pub fn new(raw_spec: &str) -> Result<Self> {
        Ok(Self {
            specs: parse_methods(raw_spec)?,
        })
    }
}

impl Check for MethodSpecCheck {
    fn name(&self) -> &'static str {
        "method-spec"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut dyn DiagnosticSink) {
        let mut pending = self.specs.clone();

        for node in &unit.class.members {
            if !matches!(node.kind, MemberKind::Method | MemberKind::Constructor) {
                continue;
            }
            let found = method_from_node(node);
            let at = Location::new(node.line, node.column);

            let Some(overloads) = pending.get(&found.name) else {
                if found.visibility != Visibility::Private {
                    sink.report(Diagnostic::new(
                        at,
                        MessageKey::MalformedMethod,
                        [
                            found.name.clone(),
                            found.visibility.keyword().to_string(),
                            Visibility::Private.keyword().to_string(),
                        ],
                    ));
                }
                continue;
            };

            if let Some(index) = overloads.iter().position(|spec| *spec == found) {
                log::debug!("exact match for method spec `{}`", found.name);
                consume(&mut pending, &found.name, index);
            } else {
                // No exact overload: diff against the first remaining one,
                // then consume it regardless of the outcome.
                let expected = overloads
                    .front()
                    .cloned()
                    .unwrap_or_else(|| found.clone());
                diff_method(&expected, &found, at, sink);
                consume(&mut pending, &found.name, 0);
            }
        }

        for overloads in pending.values() {
            for spec in overloads {
                sink.report(Diagnostic::new(
                    Location::ZERO,
                    MessageKey::MissingMethod,
                    [spec.name.clone()],
                ));
            }
        }
    }
}

/// Remove one overload; drop the name key when its list empties
fn consume(pending: &mut MethodSpecs, name: &str, index: usize) {
    let emptied = match pending.get_mut(name) {
        Some(overloads) => {
            overloads.remove(index);
            overloads.is_empty()
        }
        None => false,
    };
    if emptied {
        pending.remove(name);
    }
}

/// One diagnostic per differing attribute, each with found/expected args
fn diff_method(
    spec: &RequiredMethod,
    found: &RequiredMethod,
    at: Location,
    sink: &mut dyn DiagnosticSink,
) {
    let mut report = |found_text: String, expected_text: String| {
        sink.report(Diagnostic::new(
            at,
            MessageKey::MalformedMethod,
            [found.name.clone(), found_text, expected_text],
        ));
    };

    if spec.visibility != found.visibility {
        report(
            found.visibility.keyword().to_string(),
            spec.visibility.keyword().to_string(),
        );
    }
    if spec.is_static != found.is_static {
        report(
            static_word(found.is_static).to_string(),
            static_word(spec.is_static).to_string(),
        );
    }
    if spec.return_type != found.return_type {
        report(
            found.return_type_text().to_string(),
            spec.return_type_text().to_string(),
        );
    }
    if spec.params != found.params {
        report(found.params_text(), spec.params_text());
    }
}
