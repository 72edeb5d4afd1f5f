//! Complex-type resolution for contract descriptors.
//!
//! The registry is the validator's view of the Metadata Accessor's type
//! universe: every named [`TypeRef`] a contract mentions must resolve here.

use std::collections::BTreeMap;

use crate::types::{ComplexType, MetadataError, TypeRef};

/// Maps complex-type names to their member declarations.
///
/// A `BTreeMap` keeps iteration deterministic, which keeps diagnostics that
/// enumerate the registry reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, ComplexType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a complex type. Re-registering a name is a metadata defect.
    pub fn register(&mut self, ty: ComplexType) -> Result<(), MetadataError> {
        if self.types.contains_key(&ty.name) {
            return Err(MetadataError::DuplicateType(ty.name));
        }
        self.types.insert(ty.name.clone(), ty);
        Ok(())
    }

    /// Build a registry from a list of type declarations.
    pub fn from_types(types: Vec<ComplexType>) -> Result<Self, MetadataError> {
        let mut registry = Self::new();
        for ty in types {
            registry.register(ty)?;
        }
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&ComplexType> {
        self.types.get(name)
    }

    /// Resolve a named type, failing on names the metadata never declared.
    pub fn resolve(&self, name: &str) -> Result<&ComplexType, MetadataError> {
        self.types
            .get(name)
            .ok_or_else(|| MetadataError::UnknownType(name.to_string()))
    }

    /// Resolve a `TypeRef` if it is complex; `None` for scalar leaves.
    pub fn resolve_ref<'a>(
        &'a self,
        type_ref: &TypeRef,
    ) -> Result<Option<&'a ComplexType>, MetadataError> {
        match type_ref {
            TypeRef::Scalar(_) => Ok(None),
            TypeRef::Named(name) => self.resolve(name).map(Some),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
