// Nesting independence: each level of a parameter's type graph is checked on
// its own, and cyclic graphs terminate without error.

use marklint_core::types::Marker;

use crate::common::*;

#[test]
fn mixed_nested_level_fails_under_uniform_parent() {
    // Outer School fully unmarked; nested Student has one marked field.
    let types = vec![
        complex_type(
            "Student",
            vec![
                field("student_name", vec![Marker::Sensitive]),
                property("family_name", vec![]),
            ],
        ),
        complex_type(
            "School",
            vec![
                field("school_name", vec![]),
                nested_member("student", "Student", vec![]),
            ],
        ),
    ];
    let contract = interface(
        "ISchools",
        vec![method(
            "not_valid",
            vec![],
            vec![complex_param("test", "School", vec![])],
        )],
    );
    let report = validate(contract, types);

    // The outer level mixes too: `student` itself is unmarked alongside
    // nothing marked, so only the nested level violates.
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "test.student");
}

#[test]
fn uniform_nested_level_under_uniform_parent_passes() {
    let types = vec![
        complex_type(
            "Student",
            vec![property("name", vec![]), property("family_name", vec![])],
        ),
        complex_type(
            "School",
            vec![
                field("school_name", vec![]),
                nested_member("student", "Student", vec![]),
            ],
        ),
    ];
    let contract = interface(
        "ISchools",
        vec![method(
            "create",
            vec![],
            vec![complex_param("school", "School", vec![])],
        )],
    );
    assert!(validate(contract, types).into_result().is_ok());
}

#[test]
fn depth_three_mix_is_still_found() {
    let types = vec![
        complex_type(
            "Country",
            vec![
                field("code", vec![Marker::NonSensitive]),
                field("tax_id", vec![]),
            ],
        ),
        complex_type("Address", vec![nested_member("country", "Country", vec![])]),
        complex_type("School", vec![nested_member("address", "Address", vec![])]),
    ];
    let contract = interface(
        "ISchools",
        vec![method(
            "create",
            vec![],
            vec![complex_param("school", "School", vec![])],
        )],
    );
    let report = validate(contract, types);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "school.address.country");
}

#[test]
fn cyclic_type_graph_terminates_and_passes_when_uniform() {
    let types = vec![
        complex_type(
            "Employee",
            vec![
                field("name", vec![]),
                nested_member("manager", "Employee", vec![]),
            ],
        ),
    ];
    let contract = interface(
        "IStaff",
        vec![method(
            "hire",
            vec![],
            vec![complex_param("employee", "Employee", vec![])],
        )],
    );
    assert!(validate(contract, types).into_result().is_ok());
}

#[test]
fn cyclic_type_graph_still_reports_its_own_mix() {
    let types = vec![
        complex_type(
            "Employee",
            vec![
                field("name", vec![Marker::Sensitive]),
                field("badge", vec![]),
                nested_member("manager", "Employee", vec![]),
            ],
        ),
    ];
    let contract = interface(
        "IStaff",
        vec![method(
            "hire",
            vec![],
            vec![complex_param("employee", "Employee", vec![])],
        )],
    );
    let report = validate(contract, types);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].path, "employee");
}
