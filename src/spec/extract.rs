//! Member extractor: observed syntax nodes → required-member records.
//!
//! Produces exactly the record shapes the spec parser produces, so the
//! matching engine compares spec-derived and source-derived values
//! symmetrically. Modifiers are read positionally in declaration order
//! (visibility, then `static`, then `final`), defaulting to package
//! visibility and `false` when absent.

use crate::core::ast::{MemberKind, MemberNode, TypeNode};
use crate::spec::model::{RequiredField, RequiredMethod, RequiredParam, Visibility};

fn split_modifiers(modifiers: &[String]) -> (Visibility, bool, bool) {
    let slot = |index: usize| modifiers.get(index).map(String::as_str).unwrap_or("");
    let visibility = Visibility::from_keyword(slot(0)).unwrap_or(Visibility::Package);
    (visibility, slot(1) == "static", slot(2) == "final")
}

fn type_text(node: Option<&TypeNode>) -> String {
    node.map(TypeNode::text).unwrap_or_default()
}

/// Extract a field record from an observed field declaration
pub fn field_from_node(node: &MemberNode) -> RequiredField {
    let (visibility, is_static, is_final) = split_modifiers(&node.modifiers);
    RequiredField {
        name: node.name.clone(),
        type_text: type_text(node.type_node.as_ref()),
        visibility,
        is_static,
        is_final,
    }
}

/// Extract a method record from an observed method or constructor declaration
pub fn method_from_node(node: &MemberNode) -> RequiredMethod {
    let (visibility, is_static, _) = split_modifiers(&node.modifiers);
    let return_type = match node.kind {
        MemberKind::Constructor => None,
        _ => Some(type_text(node.type_node.as_ref())),
    };
    let params = node
        .params
        .iter()
        .map(|param| RequiredParam {
            name: param.name.clone(),
            type_text: param.type_node.text(),
        })
        .collect();
    RequiredMethod {
        name: node.name.clone(),
        return_type,
        visibility,
        is_static,
        params,
    }
}
