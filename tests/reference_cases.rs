use numstr::{format_f64, profile};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct TestCase {
    value: f64,
    spec: String,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

#[test]
fn test_reference_cases() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("reference-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    let test_suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

    let en_us = profile::builtin("en-US").unwrap();
    let mut failures = Vec::new();

    for (i, case) in test_suite.cases.iter().enumerate() {
        match format_f64(case.value, &case.spec, &en_us) {
            Ok(result) if result == case.expected => {}
            Ok(result) => failures.push(format!(
                "[case {}] value {} with \"{}\": expected \"{}\", got \"{}\"",
                i + 1,
                case.value,
                case.spec,
                case.expected,
                result
            )),
            Err(e) => failures.push(format!(
                "[case {}] value {} with \"{}\": error {}",
                i + 1,
                case.value,
                case.spec,
                e
            )),
        }
    }

    assert!(failures.is_empty(), "\n{}", failures.join("\n"));
}
