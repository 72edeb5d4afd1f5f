// Descriptor-driven validation: the JSON bundle shape a host or the CLI
// feeds into the engine, end to end.

use marklint_core::source::{ContractBundle, InMemorySource};
use marklint_enforce::engine::ValidationEngine;

const DESCRIPTOR: &str = r#"{
    "contracts": [{
        "name": "ISchools",
        "methods": [{
            "name": "create",
            "parameters": [
                {"name": "school", "type": {"named": "School"}},
                {"name": "note", "type": {"scalar": "string"}, "markers": ["non_sensitive"]}
            ]
        }]
    }],
    "types": [{
        "name": "School",
        "members": [
            {"name": "address", "kind": "property", "type": {"scalar": "string"}, "markers": ["sensitive"]},
            {"name": "name", "kind": "field", "type": {"scalar": "string"}}
        ]
    }]
}"#;

fn report_for(descriptor: &str) -> marklint_enforce::types::ValidationReport {
    let bundle: ContractBundle = serde_json::from_str(descriptor).unwrap();
    let source = InMemorySource::from_bundles(vec![bundle]).unwrap();
    ValidationEngine::new(Box::new(source)).validate().unwrap()
}

#[test]
fn descriptor_bundle_validates_end_to_end() {
    let report = report_for(DESCRIPTOR);
    assert_eq!(report.status, "error");
    assert_eq!(report.contracts_checked, vec!["ISchools"]);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "school");
}

#[test]
fn runs_are_deterministic() {
    let first = report_for(DESCRIPTOR);
    let second = report_for(DESCRIPTOR);
    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_type_in_descriptor_is_a_metadata_error() {
    let bundle: ContractBundle = serde_json::from_str(
        r#"{
            "contracts": [{
                "name": "IGhosts",
                "methods": [{
                    "name": "haunt",
                    "parameters": [{"name": "g", "type": {"named": "Ghost"}}]
                }]
            }]
        }"#,
    )
    .unwrap();
    let source = InMemorySource::from_bundles(vec![bundle]).unwrap();
    let err = ValidationEngine::new(Box::new(source)).validate().unwrap_err();
    assert!(matches!(
        err,
        marklint_core::types::MetadataError::UnknownType(name) if name == "Ghost"
    ));
}
