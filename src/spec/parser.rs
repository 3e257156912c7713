//! Parser for compact required-member specification strings.
//!
//! Field syntax: `<visibility> [static] [final] <type> <name>`
//! Method syntax: `<visibility> [static] <returnType> <name>(<type name>, ...)`
//! (return type omitted for constructors).
//!
//! Multiple specifications arrive as one comma-joined string. The
//! whole-string split is parenthesis-aware, so parameter-separating commas
//! inside one method spec never split it. Generic types contain commas of
//! their own on top of that, so two escaping layers exist, both spelled
//! with the [`COMMA_ESCAPE`] token:
//!
//! 1. A comma inside a generic type is written `/comma/` so the whole-string
//!    split leaves the specification intact. Field specs un-escape
//!    immediately after that split.
//! 2. Inside one method spec the parameter list is itself comma-separated,
//!    so `/comma/` also protects generic commas within a parameter type; it
//!    is un-escaped per parameter, after the parameter split.
//!
//! All failures here are fatal configuration errors: a check never starts a
//! traversal with a partially built specification set.

use crate::core::errors::{Error, Result};
use crate::spec::model::{
    FieldSpecs, MethodSpecs, RequiredField, RequiredMethod, RequiredParam, Visibility,
};
use std::collections::BTreeSet;

/// Escape token for a literal comma inside a generic type argument list
pub const COMMA_ESCAPE: &str = "/comma/";

fn unescape(text: &str) -> String {
    text.replace(COMMA_ESCAPE, ",")
}

/// Split a comma-joined multi-spec string into individual raw specs.
/// Commas inside parentheses separate parameters, not specifications, so
/// the split only happens at paren depth zero. Escape tokens survive the
/// split; un-escaping happens per layer.
pub fn split_specs(raw: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => pieces.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    pieces.push(current);
    pieces
        .iter()
        .map(|piece| piece.trim())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Recover the full generic type substring around `type_token` by scanning
/// the raw text to the last `>`, then drop internal whitespace so parser
/// output agrees with the extractor's leaf concatenation.
fn generic_type_text(region: &str, type_token: &str) -> Result<String> {
    let start = region.find(type_token).unwrap_or(0);
    let end = match region.rfind('>') {
        Some(end) if end > start => end,
        _ => return Err(Error::specification(region, "unmatched `<` in generic type")),
    };
    Ok(region[start..=end]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect())
}

/// Parse one field specification string
pub fn parse_field(raw: &str) -> Result<RequiredField> {
    let spec = unescape(raw.trim());
    let tokens: Vec<&str> = spec.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(Error::specification(raw, "empty field specification"));
    }

    let visibility = Visibility::from_keyword(tokens[0]).ok_or_else(|| {
        Error::specification(
            spec.as_str(),
            format!("expected a visibility keyword, found `{}`", tokens[0]),
        )
    })?;

    let mut index = 1;
    let is_static = tokens.get(index).copied() == Some("static");
    if is_static {
        index += 1;
    }
    let is_final = tokens.get(index).copied() == Some("final");
    if is_final {
        index += 1;
    }

    if tokens.len() < index + 2 {
        return Err(Error::specification(
            spec.as_str(),
            "expected `<visibility> [static] [final] <type> <name>`",
        ));
    }

    // Generic types split across whitespace tokens; recover them from the
    // raw string instead of the token list.
    let type_token = tokens[index];
    let type_text = if type_token.contains('<') {
        generic_type_text(&spec, type_token)?
    } else {
        tokens[tokens.len() - 2].to_string()
    };

    Ok(RequiredField {
        name: tokens[tokens.len() - 1].to_string(),
        type_text,
        visibility,
        is_static,
        is_final,
    })
}

/// Parse one method or constructor specification string
pub fn parse_method(raw: &str) -> Result<RequiredMethod> {
    let spec = raw.trim();
    let open = spec
        .find('(')
        .ok_or_else(|| Error::specification(spec, "missing `(` before parameter list"))?;
    if !spec.ends_with(')') {
        return Err(Error::specification(spec, "missing `)` after parameter list"));
    }

    let head = unescape(&spec[..open]);
    let param_text = &spec[open + 1..spec.len() - 1];

    let tokens: Vec<&str> = head.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(Error::specification(
            spec,
            "expected `<visibility> [static] [<returnType>] <name>(...)`",
        ));
    }

    let visibility = Visibility::from_keyword(tokens[0]).ok_or_else(|| {
        Error::specification(
            spec,
            format!("expected a visibility keyword, found `{}`", tokens[0]),
        )
    })?;
    let is_static = tokens[1] == "static";
    let name = tokens[tokens.len() - 1].to_string();

    // Exactly two tokens before the parameter list means a constructor:
    // what's missing is the return type, not the name.
    let return_type = if tokens.len() == 2 {
        None
    } else {
        let candidate = if is_static { tokens[2] } else { tokens[1] };
        if candidate.contains('<') {
            Some(generic_type_text(&head, candidate)?)
        } else {
            Some(tokens[tokens.len() - 2].to_string())
        }
    };

    let mut params = BTreeSet::new();
    let trimmed = param_text.trim();
    if !trimmed.is_empty() {
        for piece in trimmed.split(',') {
            let piece = unescape(piece);
            params.insert(parse_param(piece.trim(), spec)?);
        }
    }

    Ok(RequiredMethod {
        name,
        return_type,
        visibility,
        is_static,
        params,
    })
}

fn parse_param(text: &str, spec: &str) -> Result<RequiredParam> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(Error::specification(
            spec,
            format!("malformed parameter `{text}`: expected `<type> <name>`"),
        ));
    }
    Ok(RequiredParam {
        name: tokens[tokens.len() - 1].to_string(),
        type_text: tokens[..tokens.len() - 1].concat(),
    })
}

/// Parse a comma-joined field specification string into a name-keyed set.
/// Duplicate field names are rejected rather than silently overwritten.
pub fn parse_fields(raw: &str) -> Result<FieldSpecs> {
    let mut specs = FieldSpecs::new();
    for piece in split_specs(raw) {
        let field = parse_field(&piece)?;
        let name = field.name.clone();
        if specs.insert(name.clone(), field).is_some() {
            return Err(Error::specification(
                piece,
                format!("duplicate field name `{name}`"),
            ));
        }
    }
    Ok(specs)
}

/// Parse a comma-joined method specification string into a name-keyed set;
/// overloads accumulate under their shared name in specification order.
pub fn parse_methods(raw: &str) -> Result<MethodSpecs> {
    let mut specs = MethodSpecs::new();
    for piece in split_specs(raw) {
        let method = parse_method(&piece)?;
        specs
            .entry(method.name.clone())
            .or_insert_with(im::Vector::new)
            .push_back(method);
    }
    Ok(specs)
}

/// Parallel-list input mode: field names and types as two equal-length lists
pub fn parse_parallel_fields(names: &[String], types: &[String]) -> Result<Vec<RequiredField>> {
    if names.len() != types.len() {
        return Err(Error::configuration(format!(
            "field name/type lists differ in length ({} vs {})",
            names.len(),
            types.len()
        )));
    }
    Ok(names
        .iter()
        .zip(types)
        .map(|(name, type_text)| RequiredField {
            name: name.clone(),
            type_text: type_text.split_whitespace().collect(),
            visibility: Visibility::Package,
            is_static: false,
            is_final: false,
        })
        .collect())
}

/// Parallel-list input mode for methods: names, return types, and
/// whitespace-delimited parameter type/name lists, all equal length.
/// An empty return type entry marks a constructor.
pub fn parse_parallel_methods(
    names: &[String],
    return_types: &[String],
    param_types: &[String],
    param_names: &[String],
) -> Result<Vec<RequiredMethod>> {
    let len = names.len();
    if return_types.len() != len || param_types.len() != len || param_names.len() != len {
        return Err(Error::configuration(format!(
            "method list lengths differ (names {}, return types {}, param types {}, param names {})",
            len,
            return_types.len(),
            param_types.len(),
            param_names.len()
        )));
    }

    let mut methods = Vec::with_capacity(len);
    for i in 0..len {
        let types: Vec<&str> = param_types[i].split_whitespace().collect();
        let names_list: Vec<&str> = param_names[i].split_whitespace().collect();
        if types.len() != names_list.len() {
            return Err(Error::configuration(format!(
                "method `{}`: {} parameter types but {} parameter names",
                names[i],
                types.len(),
                names_list.len()
            )));
        }
        let params = types
            .iter()
            .zip(&names_list)
            .map(|(type_text, name)| RequiredParam {
                type_text: type_text.to_string(),
                name: name.to_string(),
            })
            .collect();
        let return_type = match return_types[i].trim() {
            "" => None,
            text => Some(text.split_whitespace().collect()),
        };
        methods.push(RequiredMethod {
            name: names[i].clone(),
            return_type,
            visibility: Visibility::Package,
            is_static: false,
            params,
        });
    }
    Ok(methods)
}
