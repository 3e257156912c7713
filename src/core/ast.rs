//! Read-only view of the host front end's syntax tree.
//!
//! The source-code parser lives outside this crate. For every class member it
//! hands us one [`MemberNode`] in declaration order; the checks never walk
//! anything deeper than what is modeled here. Nodes deserialize from the
//! front end's JSON dump so the bundled CLI can consume an already-parsed
//! class without linking against the parser.

use serde::{Deserialize, Serialize};

/// Declaration kind of one class member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
}

/// Textual subtree of a declared type.
///
/// Generic and array types arrive as a tree of source tokens; [`TypeNode::text`]
/// reconstructs the exact source spelling (whitespace elided) by concatenating
/// the leaves in left-to-right document order. This is the single shared
/// reconstruction used for field types, return types, and parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeNode {
    Leaf(String),
    Inner(Vec<TypeNode>),
}

impl TypeNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        TypeNode::Leaf(text.into())
    }

    /// Depth-first, in-order concatenation of the subtree's textual leaves
    pub fn text(&self) -> String {
        match self {
            TypeNode::Leaf(text) => text.clone(),
            TypeNode::Inner(children) => children.iter().map(TypeNode::text).collect(),
        }
    }
}

/// One formal parameter of a method or constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamNode {
    pub name: String,
    #[serde(rename = "type")]
    pub type_node: TypeNode,
}

/// One member declaration observed in a class body.
///
/// `modifiers` carries the modifier keywords in declaration order; the
/// extractor reads them positionally (visibility, then `static`, then
/// `final`). `type_node` is the declared type for fields, the return type for
/// methods, and absent for constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberNode {
    pub kind: MemberKind,
    pub name: String,
    #[serde(default)]
    pub type_node: Option<TypeNode>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub params: Vec<ParamNode>,
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

/// One class body: simple name plus members in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNode {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberNode>,
}

/// One compilation unit: the import list and the class under check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    #[serde(default)]
    pub imports: Vec<String>,
    pub class: ClassNode,
}
