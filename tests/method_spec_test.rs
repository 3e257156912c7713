mod common;

use classcheck::checks::method_spec::MethodSpecCheck;
use classcheck::checks::Check;
use classcheck::{CollectingSink, Diagnostic, Location, MessageKey};
use common::{constructor, method, unit};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn run(check: &MethodSpecCheck, unit: &classcheck::core::ast::SourceUnit) -> Vec<Diagnostic> {
    let mut sink = CollectingSink::default();
    check.run(unit, &mut sink);
    sink.diagnostics
}

#[test]
fn exactly_matching_overload_pair_is_silent() {
    let check =
        MethodSpecCheck::new("public int size(), public int size(String label)").unwrap();
    let unit = unit(
        "ArrayIntList",
        vec![
            method("size", "int", &["public"], &[]),
            method("size", "int", &["public"], &[("String", "label")]),
        ],
    );
    assert_eq!(run(&check, &unit), vec![]);
}

#[test]
fn wrong_visibility_reports_single_diff() {
    let check = MethodSpecCheck::new("public int size()").unwrap();
    let unit = unit(
        "ArrayIntList",
        vec![method("size", "int", &["private"], &[])],
    );
    let diagnostics = run(&check, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].key, MessageKey::MalformedMethod);
    assert_eq!(diagnostics[0].args, vec!["size", "private", "public"]);
}

#[test]
fn static_diff_uses_static_wording() {
    let check = MethodSpecCheck::new("public static int max(int a, int b)").unwrap();
    let unit = unit(
        "MathUtil",
        vec![method("max", "int", &["public"], &[("int", "a"), ("int", "b")])],
    );
    let diagnostics = run(&check, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].args, vec!["max", "non-static", "static"]);
}

#[test]
fn param_diff_renders_both_param_sets() {
    let check = MethodSpecCheck::new("public void put(String key, int value)").unwrap();
    let unit = unit(
        "WordCounter",
        vec![method("put", "void", &["public"], &[("String", "key")])],
    );
    let diagnostics = run(&check, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].args,
        vec!["put", "String key", "String key, int value"]
    );
}

#[test]
fn mismatch_diffs_against_first_overload_and_consumes_it() {
    let check =
        MethodSpecCheck::new("public int size(), public int size(String label)").unwrap();
    let unit = unit(
        "ArrayIntList",
        vec![method("size", "double", &["public"], &[])],
    );
    let diagnostics = run(&check, &unit);
    // The observed method matches neither overload exactly, so it is diffed
    // against the first one (return type only), which is consumed; the
    // String overload survives to the residual pass.
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].key, MessageKey::MalformedMethod);
    assert_eq!(diagnostics[0].args, vec!["size", "double", "int"]);
    assert_eq!(diagnostics[1].key, MessageKey::MissingMethod);
    assert_eq!(diagnostics[1].args, vec!["size"]);
}

#[test]
fn unspecified_method_must_be_private() {
    let check = MethodSpecCheck::new("public int size()").unwrap();
    let unit = unit(
        "ArrayIntList",
        vec![
            method("size", "int", &["public"], &[]),
            method("helper", "void", &["public"], &[]),
        ],
    );
    let diagnostics = run(&check, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].args, vec!["helper", "public", "private"]);
}

#[test]
fn private_unspecified_method_is_fine() {
    let check = MethodSpecCheck::new("public int size()").unwrap();
    let unit = unit(
        "ArrayIntList",
        vec![
            method("size", "int", &["public"], &[]),
            method("helper", "void", &["private"], &[]),
        ],
    );
    assert_eq!(run(&check, &unit), vec![]);
}

#[test]
fn constructor_spec_matches_constructor_node() {
    let check = MethodSpecCheck::new("public ArrayIntList(int capacity)").unwrap();
    let unit = unit(
        "ArrayIntList",
        vec![constructor(
            "ArrayIntList",
            &["public"],
            &[("int", "capacity")],
        )],
    );
    assert_eq!(run(&check, &unit), vec![]);
}

#[test]
fn missing_methods_reported_as_a_set() {
    let check =
        MethodSpecCheck::new("public int size(), public void clear()").unwrap();
    let unit = unit("ArrayIntList", vec![]);
    let diagnostics = run(&check, &unit);
    assert_eq!(diagnostics.len(), 2);
    let names: BTreeSet<&str> = diagnostics
        .iter()
        .map(|d| {
            assert_eq!(d.key, MessageKey::MissingMethod);
            assert_eq!(d.location, Location::ZERO);
            d.args[0].as_str()
        })
        .collect();
    assert_eq!(names, BTreeSet::from(["size", "clear"]));
}

#[test]
fn each_overload_is_consumed_at_most_once() {
    let check = MethodSpecCheck::new("public int size()").unwrap();
    let unit = unit(
        "ArrayIntList",
        vec![
            method("size", "int", &["public"], &[]),
            method("size", "int", &["public"], &[]),
        ],
    );
    let diagnostics = run(&check, &unit);
    // First occurrence consumes the only spec entry; the second is
    // unspecified and falls under the default policy.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].args, vec!["size", "public", "private"]);
}
