//! Field specification check.
//!
//! Every observed class field is matched by name against the parsed field
//! specs. A matched field is compared attribute by attribute, and every
//! differing attribute gets its own `malformed.field` diagnostic. The spec
//! entry is consumed whether or not it matched, so one field name is only
//! ever checked once. Fields absent from the spec fall under the
//! default policy: they must be `private`, except in allow-listed node
//! classes whose fields must be `public`. Spec entries still pending at end
//! of traversal are reported as `missing.field`.

use crate::checks::Check;
use crate::core::ast::{MemberKind, SourceUnit};
use crate::core::errors::Result;
use crate::core::{Diagnostic, DiagnosticSink, Location, MessageKey};
use crate::spec::extract::field_from_node;
use crate::spec::model::{final_word, static_word, FieldSpecs, RequiredField, Visibility};
use crate::spec::parser::parse_fields;

/// Node classes whose unspecified fields must be public rather than private.
/// These are the linked-structure containers students implement directly.
pub const DEFAULT_PUBLIC_FIELD_CLASSES: &[&str] = &[
    "ListNode",
    "AssassinNode",
    "IntTreeNode",
    "QuestionNode",
    "HuffmanNode",
];

pub struct FieldSpecCheck {
    specs: FieldSpecs,
    public_field_classes: Vec<String>,
}

impl FieldSpecCheck {
    /// Parse the raw comma-joined field spec string; parse failures are
    /// fatal and surface before any traversal starts.
    pub fn new(raw_spec: &str) -> Result<Self> {
        Self::with_allow_list(
            raw_spec,
            DEFAULT_PUBLIC_FIELD_CLASSES
                .iter()
                .map(|class| class.to_string())
                .collect(),
        )
    }

    pub fn with_allow_list(raw_spec: &str, public_field_classes: Vec<String>) -> Result<Self> {
        Ok(Self {
            specs: parse_fields(raw_spec)?,
            public_field_classes,
        })
    }

    fn expected_default_visibility(&self, class_name: &str) -> Visibility {
        if self.public_field_classes.iter().any(|c| c == class_name) {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

impl Check for FieldSpecCheck {
    fn name(&self) -> &'static str {
        "field-spec"
    }

    fn run(&self, unit: &SourceUnit, sink: &mut dyn DiagnosticSink) {
        let mut pending = self.specs.clone();

        for node in &unit.class.members {
            if node.kind != MemberKind::Field {
                continue;
            }
            let found = field_from_node(node);
            let at = Location::new(node.line, node.column);

            match pending.remove(&found.name) {
                Some(spec) => {
                    log::debug!("consumed field spec `{}`", spec.name);
                    diff_field(&spec, &found, at, sink);
                }
                None => {
                    let expected = self.expected_default_visibility(&unit.class.name);
                    if found.visibility != expected {
                        sink.report(Diagnostic::new(
                            at,
                            MessageKey::MalformedField,
                            [
                                found.name.clone(),
                                found.visibility.keyword().to_string(),
                                expected.keyword().to_string(),
                            ],
                        ));
                    }
                }
            }
        }

        for spec in pending.values() {
            sink.report(Diagnostic::new(
                Location::ZERO,
                MessageKey::MissingField,
                [spec.name.clone()],
            ));
        }
    }
}

/// One diagnostic per differing attribute, each with found/expected args
fn diff_field(spec: &RequiredField, found: &RequiredField, at: Location, sink: &mut dyn DiagnosticSink) {
    let mut report = |found_text: String, expected_text: String| {
        sink.report(Diagnostic::new(
            at,
            MessageKey::MalformedField,
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
    if spec.is_final != found.is_final {
        report(
            final_word(found.is_final).to_string(),
            final_word(spec.is_final).to_string(),
        );
    }
    if spec.type_text != found.type_text {
        report(found.type_text.clone(), spec.type_text.clone());
    }
}
