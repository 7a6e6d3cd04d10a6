//! Architecture contract tests.

mod support;

use support::architecture::{
    collect_rs_files, find_lines_containing, find_non_export_lines_in_mod_files, read_relative,
};

#[test]
fn domain_has_no_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::application",
            "crate::infrastructure",
            "crate::port",
            "tracing::",
            "toml::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_do_not_depend_on_implementations() {
    let hits = find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::application", "crate::infrastructure"],
    );

    assert!(
        hits.is_empty(),
        "found implementation imports in port layer: {hits:#?}"
    );
}

#[test]
fn extension_never_installs_a_global_subscriber() {
    let hits = find_lines_containing(
        "src/application",
        &["tracing_subscriber", "set_global_default"],
    );
    assert!(
        hits.is_empty(),
        "extension code must log through the host span: {hits:#?}"
    );

    let main = read_relative("src/main.rs");
    assert!(
        main.contains("LoggingConfig::from_verbosity"),
        "only the binary should configure logging"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn every_layer_has_sources() {
    for layer in [
        "src/domain",
        "src/port",
        "src/application",
        "src/adapter",
        "src/infrastructure",
    ] {
        assert!(!collect_rs_files(layer).is_empty(), "{layer} is empty");
    }
}
