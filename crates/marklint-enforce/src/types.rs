use serde::{Deserialize, Serialize};

use marklint_core::types::MetadataError;

/// Violation categories the rule engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    ConflictingMarkers,
    IncompleteAnnotation,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::ConflictingMarkers => "conflicting_markers",
            ViolationKind::IncompleteAnnotation => "incomplete_annotation",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::ConflictingMarkers => "ML001",
            ViolationKind::IncompleteAnnotation => "ML002",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation, locating the offending element precisely enough
/// for a developer to fix the annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub kind: ViolationKind,
    pub interface: String,
    pub method: String,
    /// Element path within the method: the method name itself, a parameter
    /// name, or a dotted nesting path rooted at a parameter.
    pub path: String,
    pub message: String,
    /// For `IncompleteAnnotation`: the members at this level that carry no
    /// classification while siblings do.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unmarked_members: Vec<String>,
}

impl Violation {
    pub fn new(
        kind: ViolationKind,
        interface: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: kind.code().to_string(),
            kind,
            interface: interface.into(),
            method: method.into(),
            path: path.into(),
            message: message.into(),
            unmarked_members: vec![],
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}.{}: {} — {}",
            self.code, self.interface, self.method, self.path, self.message
        )
    }
}

/// Outcome of one validation pass over a contract surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: String, // "ok" | "error"
    pub contracts_checked: Vec<String>,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert the report into the single fatal failure a host treats as a
    /// startup abort. A clean report maps to `Ok(())`.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                violations: self.violations,
            })
        }
    }
}

/// Fatal failure carrying every violation found in one pass.
#[derive(Debug)]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

impl std::error::Error for ValidationFailure {}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "contract sensitivity validation failed with {} violation(s):",
            self.violations.len()
        )?;
        for v in &self.violations {
            writeln!(f, "  {}", v)?;
        }
        Ok(())
    }
}

/// Everything that can go wrong in a validation run: defective metadata, or
/// contracts that fail the rules.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Failed(#[from] ValidationFailure),
}
