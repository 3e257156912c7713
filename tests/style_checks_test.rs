mod common;

use classcheck::checks::{Check, ConstantNameCheck, StarImportCheck};
use classcheck::{CollectingSink, Diagnostic, MessageKey};
use common::{field, simple_type, unit, unit_with_imports};
use pretty_assertions::assert_eq;

fn run(check: &dyn Check, unit: &classcheck::core::ast::SourceUnit) -> Vec<Diagnostic> {
    let mut sink = CollectingSink::default();
    check.run(unit, &mut sink);
    sink.diagnostics
}

#[test]
fn screaming_snake_case_constants_pass() {
    let unit = unit(
        "GridWorld",
        vec![
            field("MAX_SIZE", simple_type("int"), &["public", "static", "final"]),
            field("DEFAULT", simple_type("int"), &["private", "static", "final"]),
        ],
    );
    assert_eq!(run(&ConstantNameCheck, &unit), vec![]);
}

#[test]
fn lower_case_constant_is_flagged_with_pattern() {
    let unit = unit(
        "GridWorld",
        vec![field(
            "maxSize",
            simple_type("int"),
            &["private", "static", "final"],
        )],
    );
    let diagnostics = run(&ConstantNameCheck, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].key, MessageKey::InvalidConstantName);
    assert_eq!(diagnostics[0].args[0], "maxSize");
    assert!(diagnostics[0].args[1].contains("A-Z"));
}

#[test]
fn modifier_order_does_not_hide_constants() {
    // `final static` and package-private `static final` are legal Java;
    // the constant test must find the keywords wherever they appear.
    let unit = unit(
        "GridWorld",
        vec![
            field("maxSize", simple_type("int"), &["public", "final", "static"]),
            field("defaultSize", simple_type("int"), &["static", "final"]),
        ],
    );
    let diagnostics = run(&ConstantNameCheck, &unit);
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics
        .iter()
        .all(|d| d.key == MessageKey::InvalidConstantName));
}

#[test]
fn non_constant_fields_are_not_name_checked() {
    let unit = unit(
        "GridWorld",
        vec![
            field("maxSize", simple_type("int"), &["private"]),
            field("maxSize2", simple_type("int"), &["private", "static"]),
        ],
    );
    assert_eq!(run(&ConstantNameCheck, &unit), vec![]);
}

#[test]
fn on_demand_imports_pass() {
    let unit = unit_with_imports("WordCounter", &["java.util.*"], vec![]);
    assert_eq!(run(&StarImportCheck, &unit), vec![]);
}

#[test]
fn single_type_import_is_flagged() {
    let unit = unit_with_imports(
        "WordCounter",
        &["java.util.*", "java.util.Scanner"],
        vec![],
    );
    let diagnostics = run(&StarImportCheck, &unit);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].key, MessageKey::StarImport);
    assert_eq!(diagnostics[0].args, vec!["java.util.Scanner"]);
}
