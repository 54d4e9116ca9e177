//! Unit tests for the crate's feature flags.

const MANIFEST: &str = include_str!("../../Cargo.toml");

fn features() -> toml::Table {
    let manifest: toml::Table = toml::from_str(MANIFEST).expect("Failed to parse Cargo.toml");
    manifest["features"]
        .as_table()
        .expect("Missing [features]")
        .clone()
}

/// Test that no feature selects a critical-section implementation.
#[test]
fn test_features_leave_critical_section_impl_to_binary() {
    for (name, enables) in features() {
        let enables = enables.as_array().expect("Feature is not a list");
        assert!(
            enables
                .iter()
                .all(|dep| !dep.as_str().unwrap_or_default().starts_with("critical-section/")),
            "feature `{name}` enables a critical-section implementation"
        );
    }
}

/// Test that only the documented features exist.
#[test]
fn test_feature_set() {
    let mut names: Vec<String> = features().keys().cloned().collect();
    names.sort();
    assert_eq!(names, ["default", "defmt", "log", "std"]);
}
