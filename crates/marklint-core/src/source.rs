//! The metadata-access seam between a host and the validator.
//!
//! Hosts hand the validator a [`ContractSource`]: the full set of contract
//! interfaces they intend to expose plus the registry resolving every complex
//! type those interfaces reach. The validator only reads through this trait.

use serde::{Deserialize, Serialize};

use crate::registry::TypeRegistry;
use crate::types::{ComplexType, ContractType, MetadataError};

/// Read-only access to contract metadata.
pub trait ContractSource {
    /// The contract interfaces to validate, in declaration order.
    fn contracts(&self) -> &[ContractType];

    /// The registry resolving every named type the contracts reference.
    fn registry(&self) -> &TypeRegistry;
}

/// The serde document shape for file-based contract descriptors.
///
/// One bundle per JSON file; a host (or the CLI) may merge several.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractBundle {
    #[serde(default)]
    pub contracts: Vec<ContractType>,
    #[serde(default)]
    pub types: Vec<ComplexType>,
}

/// In-memory `ContractSource` built from descriptor values.
#[derive(Debug, Default)]
pub struct InMemorySource {
    contracts: Vec<ContractType>,
    registry: TypeRegistry,
}

impl InMemorySource {
    pub fn new(contracts: Vec<ContractType>, registry: TypeRegistry) -> Self {
        Self {
            contracts,
            registry,
        }
    }

    /// Build a source from one or more bundles, merging contracts in order.
    pub fn from_bundles(bundles: Vec<ContractBundle>) -> Result<Self, MetadataError> {
        let mut contracts = Vec::new();
        let mut types = Vec::new();
        for bundle in bundles {
            contracts.extend(bundle.contracts);
            types.extend(bundle.types);
        }
        Ok(Self {
            contracts,
            registry: TypeRegistry::from_types(types)?,
        })
    }
}

impl ContractSource for InMemorySource {
    fn contracts(&self) -> &[ContractType] {
        &self.contracts
    }

    fn registry(&self) -> &TypeRegistry {
        &self.registry
    }
}
