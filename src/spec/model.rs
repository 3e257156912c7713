//! Required-member records.
//!
//! These are the records both sides of the comparison reduce to: the spec
//! parser produces them from raw specification strings, the extractor
//! produces them from observed member nodes, and the matching engine compares
//! them field by field. Type text is kept at source level (generics verbatim,
//! whitespace elided); no semantic type model exists anywhere in this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Visibility keyword of a member declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// Package-default: no visibility keyword in source
    Package,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::Package => "",
        }
    }

    /// Maps a modifier keyword to a visibility; empty text is package-default
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            "" => Some(Visibility::Package),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Diagnostic wording for the static attribute
pub fn static_word(is_static: bool) -> &'static str {
    if is_static {
        "static"
    } else {
        "non-static"
    }
}

/// Diagnostic wording for the final attribute
pub fn final_word(is_final: bool) -> &'static str {
    if is_final {
        "final"
    } else {
        "non-final"
    }
}

/// One formal parameter; identity is (name, type), order never matters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequiredParam {
    pub type_text: String,
    pub name: String,
}

impl fmt::Display for RequiredParam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.type_text, self.name)
    }
}

/// One required field. Names are unique within a field specification set;
/// the parser rejects duplicates at setup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredField {
    pub name: String,
    pub type_text: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
}

impl RequiredField {
    /// Name-and-type identity used by the all-or-nothing surface check
    pub fn signature_matches(&self, other: &RequiredField) -> bool {
        self.name == other.name && self.type_text == other.type_text
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.visibility != Visibility::Package {
            write!(f, "{} ", self.visibility)?;
        }
        if self.is_static {
            f.write_str("static ")?;
        }
        if self.is_final {
            f.write_str("final ")?;
        }
        write!(f, "{} {}", self.type_text, self.name)
    }
}

/// One required method or constructor.
///
/// Overloads share a name, so method names are not unique within a set.
/// `return_type` is `None` for constructors. Equality is the full tuple
/// (name, static, return type, visibility, params-as-set); two descriptions
/// are the same overload only when every attribute agrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredMethod {
    pub name: String,
    pub return_type: Option<String>,
    pub visibility: Visibility,
    pub is_static: bool,
    pub params: BTreeSet<RequiredParam>,
}

impl RequiredMethod {
    /// Comma-joined `"type name"` rendering used in parameter-diff diagnostics
    pub fn params_text(&self) -> String {
        self.params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Return type as diagnostic text; constructors render as empty
    pub fn return_type_text(&self) -> &str {
        self.return_type.as_deref().unwrap_or("")
    }

    /// Structural identity used by the all-or-nothing surface check:
    /// name, return type, and parameter set, ignoring modifiers
    pub fn signature_matches(&self, other: &RequiredMethod) -> bool {
        self.name == other.name
            && self.return_type == other.return_type
            && self.params == other.params
    }
}

impl fmt::Display for RequiredMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.visibility != Visibility::Package {
            write!(f, "{} ", self.visibility)?;
        }
        if self.is_static {
            f.write_str("static ")?;
        }
        if let Some(return_type) = &self.return_type {
            write!(f, "{} ", return_type)?;
        }
        write!(f, "{}({})", self.name, self.params_text())
    }
}

/// Parsed field specifications keyed by field name.
///
/// The check owns the parsed master copy and clones a fresh pending set per
/// class-body traversal; `im`'s persistent maps make that clone cheap.
pub type FieldSpecs = im::HashMap<String, RequiredField>;

/// Parsed method specifications keyed by method name; each entry holds that
/// name's overloads in specification order.
pub type MethodSpecs = im::HashMap<String, im::Vector<RequiredMethod>>;
