//! Shared types for diagnostics and source locations

pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a member declaration in the checked source file.
///
/// End-of-traversal diagnostics (missing members) carry [`Location::ZERO`],
/// the sentinel the host's reporter renders as "whole file".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const ZERO: Location = Location { line: 0, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Message key identifying one violation kind.
///
/// Keys are stable identifiers the host's message catalog resolves to
/// user-facing text; the checks never format beyond key plus ordered args.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    #[serde(rename = "malformed.field")]
    MalformedField,
    #[serde(rename = "missing.field")]
    MissingField,
    #[serde(rename = "malformed.method")]
    MalformedMethod,
    #[serde(rename = "missing.method")]
    MissingMethod,
    #[serde(rename = "missing.fields")]
    MissingFields,
    #[serde(rename = "missing.methods")]
    MissingMethods,
    #[serde(rename = "name.invalidPattern")]
    InvalidConstantName,
    #[serde(rename = "import.starImport")]
    StarImport,
}

impl MessageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::MalformedField => "malformed.field",
            MessageKey::MissingField => "missing.field",
            MessageKey::MalformedMethod => "malformed.method",
            MessageKey::MissingMethod => "missing.method",
            MessageKey::MissingFields => "missing.fields",
            MessageKey::MissingMethods => "missing.methods",
            MessageKey::InvalidConstantName => "name.invalidPattern",
            MessageKey::StarImport => "import.starImport",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violation event: location, message key, ordered message arguments.
///
/// `malformed.*` diagnostics carry (member-name, found, expected); `missing.*`
/// diagnostics carry the member name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub location: Location,
    pub key: MessageKey,
    pub args: Vec<String>,
}

impl Diagnostic {
    pub fn new<I, S>(location: Location, key: MessageKey, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            location,
            key,
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Sink the checks push violations into.
///
/// Hosts that format and display diagnostics implement this directly;
/// [`CollectingSink`] suffices for batch reporting and tests.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that accumulates every diagnostic in order of emission
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
