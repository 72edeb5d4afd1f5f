// The `log_as_is` opt-out marker suppresses the completeness check for the
// whole type graph behind a parameter. The conflict rule still applies.

use marklint_core::types::Marker;
use marklint_enforce::types::ViolationKind;

use crate::common::*;

fn partially_marked_school() -> Vec<marklint_core::types::ComplexType> {
    vec![complex_type(
        "School",
        vec![
            property("address", vec![Marker::Sensitive]),
            field("name", vec![]),
        ],
    )]
}

#[test]
fn opt_out_parameter_passes_despite_mixed_members() {
    let contract = interface(
        "ISchools",
        vec![method(
            "create",
            vec![],
            vec![complex_param("school", "School", vec![Marker::LogAsIs])],
        )],
    );
    let report = validate(contract, partially_marked_school());
    assert!(report.into_result().is_ok());
}

#[test]
fn same_parameter_without_opt_out_fails() {
    let contract = interface(
        "ISchools",
        vec![method(
            "create",
            vec![],
            vec![complex_param("school", "School", vec![])],
        )],
    );
    let report = validate(contract, partially_marked_school());
    assert_eq!(report.status, "error");
}

#[test]
fn opt_out_applies_per_parameter() {
    let contract = interface(
        "ISchools",
        vec![method(
            "create",
            vec![],
            vec![
                complex_param("approved", "School", vec![Marker::LogAsIs]),
                complex_param("unapproved", "School", vec![]),
            ],
        )],
    );
    let report = validate(contract, partially_marked_school());
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "unapproved");
}

#[test]
fn opt_out_does_not_suppress_the_conflict_rule() {
    let contract = interface(
        "ISchools",
        vec![method(
            "create",
            vec![],
            vec![complex_param(
                "school",
                "School",
                vec![Marker::LogAsIs, Marker::Sensitive, Marker::NonSensitive],
            )],
        )],
    );
    let report = validate(contract, partially_marked_school());
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::ConflictingMarkers);
}
