use marklint_core::config::MarklintConfig;
use marklint_core::source::ContractSource;
use marklint_core::types::MetadataError;

use crate::rules;
use crate::types::{ValidationError, ValidationReport, Violation};

/// Core validation engine. Owns a `ContractSource` and orchestrates the rules.
pub struct ValidationEngine {
    pub(crate) source: Box<dyn ContractSource>,
    pub(crate) config: MarklintConfig,
}

impl ValidationEngine {
    pub fn new(source: Box<dyn ContractSource>) -> Self {
        Self {
            source,
            config: MarklintConfig::default(),
        }
    }

    pub fn with_config(source: Box<dyn ContractSource>, config: MarklintConfig) -> Self {
        Self { source, config }
    }

    /// Validate every contract the source supplies. Collects all violations
    /// across all contracts rather than stopping at the first, so one run
    /// reports the complete picture.
    pub fn validate(&self) -> Result<ValidationReport, MetadataError> {
        let registry = self.source.registry();
        let mut contracts_checked = Vec::new();
        let mut violations: Vec<Violation> = Vec::new();

        for contract in self.source.contracts() {
            if self.config.is_ignored(&contract.name) {
                continue;
            }
            contracts_checked.push(contract.name.clone());

            // Declaration order: the method element first, then each
            // parameter's own conflict followed by its graph findings.
            for method in &contract.methods {
                if self.config.rules.conflict {
                    violations.extend(rules::check_method(&contract.name, method));
                }
                for param in &method.parameters {
                    if self.config.rules.conflict {
                        violations.extend(rules::check_parameter(&contract.name, method, param));
                    }
                    violations.extend(rules::check_parameter_graph(
                        &contract.name,
                        method,
                        param,
                        registry,
                        &self.config.rules,
                    )?);
                }
            }
        }

        let status = if violations.is_empty() { "ok" } else { "error" };
        Ok(ValidationReport {
            status: status.to_string(),
            contracts_checked,
            violations,
        })
    }
}

/// Startup-time convenience: validate and fail with a single error if the
/// contract surface is invalid. A clean surface returns silently.
pub fn validate_contracts(source: Box<dyn ContractSource>) -> Result<(), ValidationError> {
    let report = ValidationEngine::new(source).validate()?;
    report.into_result()?;
    Ok(())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
