#![allow(dead_code)]

use classcheck::core::ast::{ClassNode, MemberKind, MemberNode, ParamNode, SourceUnit, TypeNode};

pub fn simple_type(text: &str) -> TypeNode {
    TypeNode::leaf(text)
}

/// Generic type as the front end delivers it: one token per leaf
pub fn generic_type(parts: &[&str]) -> TypeNode {
    TypeNode::Inner(parts.iter().copied().map(TypeNode::leaf).collect())
}

fn to_params(params: &[(&str, &str)]) -> Vec<ParamNode> {
    params
        .iter()
        .map(|(type_text, name)| ParamNode {
            name: name.to_string(),
            type_node: TypeNode::leaf(*type_text),
        })
        .collect()
}

fn to_modifiers(modifiers: &[&str]) -> Vec<String> {
    modifiers.iter().map(|m| m.to_string()).collect()
}

pub fn field(name: &str, type_node: TypeNode, modifiers: &[&str]) -> MemberNode {
    MemberNode {
        kind: MemberKind::Field,
        name: name.to_string(),
        type_node: Some(type_node),
        modifiers: to_modifiers(modifiers),
        params: Vec::new(),
        line: 1,
        column: 0,
    }
}

pub fn method(
    name: &str,
    return_type: &str,
    modifiers: &[&str],
    params: &[(&str, &str)],
) -> MemberNode {
    MemberNode {
        kind: MemberKind::Method,
        name: name.to_string(),
        type_node: Some(TypeNode::leaf(return_type)),
        modifiers: to_modifiers(modifiers),
        params: to_params(params),
        line: 1,
        column: 0,
    }
}

pub fn constructor(name: &str, modifiers: &[&str], params: &[(&str, &str)]) -> MemberNode {
    MemberNode {
        kind: MemberKind::Constructor,
        name: name.to_string(),
        type_node: None,
        modifiers: to_modifiers(modifiers),
        params: to_params(params),
        line: 1,
        column: 0,
    }
}

pub fn unit(class_name: &str, members: Vec<MemberNode>) -> SourceUnit {
    SourceUnit {
        imports: Vec::new(),
        class: ClassNode {
            name: class_name.to_string(),
            members,
        },
    }
}

pub fn unit_with_imports(
    class_name: &str,
    imports: &[&str],
    members: Vec<MemberNode>,
) -> SourceUnit {
    SourceUnit {
        imports: imports.iter().map(|i| i.to_string()).collect(),
        class: ClassNode {
            name: class_name.to_string(),
            members,
        },
    }
}
