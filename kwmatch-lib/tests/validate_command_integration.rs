//! Integration tests for the `init` and `validate` commands.

mod common;

use common::{TestHost, Workspace, run};

#[test]
fn test_validate_without_explicit_config() {
    let mut host = TestHost::new();
    let result = run(&mut host, &["validate"]);

    assert!(result.is_ok(), "validate without --config should succeed: {result:?}");
    let output = host.output_str();
    assert!(output.contains("default configuration"), "should mention default configuration, got: {output}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call mkdir on this platform")]
fn test_init_writes_a_valid_config() {
    let ws = Workspace::new();
    let path = ws.path("kwmatch.toml");

    let mut host = TestHost::new();
    run(&mut host, &["init", path.as_str()]).unwrap();
    run(&mut host, &["validate", "--config", path.as_str()]).unwrap();

    let output = host.output_str();
    assert!(output.contains("Generated default configuration file"), "{output}");
    assert!(output.contains("Configuration file is valid"), "{output}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call mkdir on this platform")]
fn test_validate_rejects_zero_min_match_types() {
    let ws = Workspace::new();
    let path = ws.write("kwmatch.toml", "min_match_types = 0\n");

    let mut host = TestHost::new();
    let result = run(&mut host, &["validate", "--config", path.as_str()]);

    assert!(result.is_err());
    assert!(host.error_str().contains("min_match_types must be at least 1"), "{}", host.error_str());
}
