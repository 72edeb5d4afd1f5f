//! Type-graph traversal for the completeness rule.
//!
//! Flattens the transitive closure of a complex type's public members into a
//! sequence of levels, one per complex type reached, each keyed by the dotted
//! path from the root parameter. Recursion into a type already on the active
//! path is skipped: a cycle is a containment boundary, not a violation.

use marklint_core::registry::TypeRegistry;
use marklint_core::types::{ComplexType, Member, MetadataError, TypeRef};

/// One nesting level of a parameter's type graph: the members of a single
/// complex type, with the path by which the walk reached it.
#[derive(Debug)]
pub struct TypeLevel<'a> {
    /// Dotted path from the root parameter, e.g. `school.student`.
    pub path: String,
    /// Name of the complex type whose members these are.
    pub type_name: &'a str,
    /// Direct members in declaration order, leaves and complex alike.
    pub members: &'a [Member],
}

/// Walk the type graph rooted at `root`, producing levels depth-first in
/// declaration order. `root_path` is the parameter name the graph hangs off.
pub fn walk<'a>(
    registry: &'a TypeRegistry,
    root: &'a ComplexType,
    root_path: &str,
) -> Result<Vec<TypeLevel<'a>>, MetadataError> {
    let mut levels = Vec::new();
    let mut active_path = vec![root.name.as_str()];
    descend(registry, root, root_path, &mut active_path, &mut levels)?;
    Ok(levels)
}

fn descend<'a>(
    registry: &'a TypeRegistry,
    ty: &'a ComplexType,
    path: &str,
    active_path: &mut Vec<&'a str>,
    levels: &mut Vec<TypeLevel<'a>>,
) -> Result<(), MetadataError> {
    levels.push(TypeLevel {
        path: path.to_string(),
        type_name: &ty.name,
        members: &ty.members,
    });

    for member in &ty.members {
        let TypeRef::Named(name) = &member.type_ref else {
            continue; // scalar leaf
        };
        let nested = registry.resolve(name)?;
        if active_path.contains(&nested.name.as_str()) {
            // Cycle guard: the member still counts toward its own level's
            // uniformity check, which already happened above.
            continue;
        }
        active_path.push(nested.name.as_str());
        let nested_path = format!("{}.{}", path, member.name);
        descend(registry, nested, &nested_path, active_path, levels)?;
        active_path.pop();
    }

    Ok(())
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
