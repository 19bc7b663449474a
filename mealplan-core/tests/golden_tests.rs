//! Golden file tests for the preference prompt compiler.
//!
//! Each JSON file in `fixtures/` holds a preferences payload as the front end
//! sends it and the exact prompt block it must compile to.

use mealplan_core::{render_preferences_prompt, RecipePreferences};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    /// Raw preferences payload
    preferences: serde_json::Value,
    /// Expected compiled prompt
    expected: String,
}

/// Load all test cases from the fixtures directory
fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

    let mut cases = Vec::new();

    for entry in fs::read_dir(&fixtures_dir).expect("Failed to read fixtures directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            let case: TestCase = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
            cases.push((name, case));
        }
    }

    assert!(
        !cases.is_empty(),
        "No test fixtures found in {:?}",
        fixtures_dir
    );
    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[test]
fn test_preferences_golden_files() {
    for (name, case) in load_test_cases() {
        println!("Testing: {}", name);

        let prefs = RecipePreferences::from_json(&case.preferences.to_string())
            .unwrap_or_else(|e| panic!("Preferences rejected for {}: {}", name, e));

        let prompt = render_preferences_prompt(&prefs);
        assert_eq!(
            prompt, case.expected,
            "Prompt mismatch for {}\n\nExpected:\n{}\n\nActual:\n{}",
            name, case.expected, prompt
        );
    }
}
