//! The two consistency rules.
//!
//! Rules never raise for their own findings; they return [`Violation`] values
//! for the engine to aggregate. Only metadata defects (an unresolvable type
//! name) propagate as errors.

use marklint_core::config::RuleConfig;
use marklint_core::registry::TypeRegistry;
use marklint_core::types::{Marker, Method, MetadataError, Parameter};

use crate::types::{Violation, ViolationKind};
use crate::walker;

/// ML001 on the method element itself: a method carrying both `Sensitive`
/// and `NonSensitive` is always a violation.
pub fn check_method(interface: &str, method: &Method) -> Vec<Violation> {
    let mut violations = Vec::new();

    if method.markers.is_conflicting() {
        violations.push(Violation::new(
            ViolationKind::ConflictingMarkers,
            interface,
            &method.name,
            &method.name,
            format!(
                "Method `{}` is marked both `{}` and `{}`",
                method.name,
                Marker::Sensitive,
                Marker::NonSensitive
            ),
        ));
    }

    violations
}

/// ML001 on a single parameter element.
pub fn check_parameter(interface: &str, method: &Method, param: &Parameter) -> Vec<Violation> {
    let mut violations = Vec::new();

    if param.markers.is_conflicting() {
        violations.push(Violation::new(
            ViolationKind::ConflictingMarkers,
            interface,
            &method.name,
            &param.name,
            format!(
                "Parameter `{}` is marked both `{}` and `{}`",
                param.name,
                Marker::Sensitive,
                Marker::NonSensitive
            ),
        ));
    }

    violations
}

/// ML002 (and member-level ML001) for one parameter's type graph.
///
/// Skipped wholesale when the parameter carries `LogAsIs`: the host has
/// declared the entire graph approved for logging. Otherwise every nesting
/// level must be uniformly classified — all members marked, or none.
///
/// Each finding follows its own toggle: the `conflict` toggle governs
/// member-level conflicts discovered during the walk, the `completeness`
/// toggle governs uniformity.
pub fn check_parameter_graph(
    interface: &str,
    method: &Method,
    param: &Parameter,
    registry: &TypeRegistry,
    rules: &RuleConfig,
) -> Result<Vec<Violation>, MetadataError> {
    if !rules.conflict && !rules.completeness {
        return Ok(vec![]);
    }
    if param.markers.contains(Marker::LogAsIs) {
        return Ok(vec![]);
    }
    let Some(root) = registry.resolve_ref(&param.type_ref)? else {
        return Ok(vec![]); // scalar parameter, nothing to walk
    };

    let mut violations = Vec::new();

    for level in walker::walk(registry, root, &param.name)? {
        // A member with both markers still counts as classified for the
        // uniformity check, but the conflict itself is reported.
        if rules.conflict {
            for member in level.members {
                if member.markers.is_conflicting() {
                    violations.push(Violation::new(
                        ViolationKind::ConflictingMarkers,
                        interface,
                        &method.name,
                        format!("{}.{}", level.path, member.name),
                        format!(
                            "{} `{}` of type `{}` is marked both `{}` and `{}`",
                            member.kind,
                            member.name,
                            level.type_name,
                            Marker::Sensitive,
                            Marker::NonSensitive
                        ),
                    ));
                }
            }
        }

        if !rules.completeness {
            continue;
        }

        let marked = level
            .members
            .iter()
            .filter(|m| m.markers.is_classified())
            .count();
        if marked == 0 || marked == level.members.len() {
            continue; // uniform absence or uniform presence
        }

        let unmarked: Vec<String> = level
            .members
            .iter()
            .filter(|m| !m.markers.is_classified())
            .map(|m| m.name.clone())
            .collect();
        let mut violation = Violation::new(
            ViolationKind::IncompleteAnnotation,
            interface,
            &method.name,
            &level.path,
            format!(
                "Type `{}` at `{}` is partially classified: {} of {} member(s) carry a \
                 sensitivity marker; unmarked: {}",
                level.type_name,
                level.path,
                marked,
                level.members.len(),
                unmarked.join(", ")
            ),
        );
        violation.unmarked_members = unmarked;
        violations.push(violation);
    }

    Ok(violations)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
