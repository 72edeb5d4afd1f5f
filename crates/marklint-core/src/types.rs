use serde::{Deserialize, Serialize};

/// Sensitivity markers attachable to methods, parameters, and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// The element carries personally-identifiable or otherwise sensitive data.
    Sensitive,
    /// The element is explicitly safe to log in the clear.
    NonSensitive,
    /// Opt-out: the whole type graph behind this element is approved for
    /// logging as-is; the completeness rule does not descend into it.
    LogAsIs,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Sensitive => "sensitive",
            Marker::NonSensitive => "non_sensitive",
            Marker::LogAsIs => "log_as_is",
        }
    }

    /// True for the two classification markers; `LogAsIs` is a directive,
    /// not a classification.
    pub fn is_classification(&self) -> bool {
        matches!(self, Marker::Sensitive | Marker::NonSensitive)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of markers attached to a single declared element.
///
/// Order and duplicates are irrelevant; the rules only ask "is marker X
/// present". Kept as a plain vector so descriptor JSON stays an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerSet(pub Vec<Marker>);

impl MarkerSet {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self(markers)
    }

    pub fn contains(&self, marker: Marker) -> bool {
        self.0.contains(&marker)
    }

    /// True when the element carries at least one of `Sensitive`/`NonSensitive`.
    pub fn is_classified(&self) -> bool {
        self.0.iter().any(Marker::is_classification)
    }

    /// True when both `Sensitive` and `NonSensitive` are attached.
    pub fn is_conflicting(&self) -> bool {
        self.contains(Marker::Sensitive) && self.contains(Marker::NonSensitive)
    }
}

impl From<Vec<Marker>> for MarkerSet {
    fn from(markers: Vec<Marker>) -> Self {
        Self(markers)
    }
}

/// Scalar leaf kinds. The walker never descends into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    String,
    Bytes,
    DateTime,
    Uuid,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
            ScalarKind::DateTime => "date_time",
            ScalarKind::Uuid => "uuid",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared type reference: either a scalar leaf or a named complex type
/// resolved through the [`TypeRegistry`](crate::registry::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Scalar(ScalarKind),
    Named(String),
}

impl TypeRef {
    pub fn string() -> Self {
        TypeRef::Scalar(ScalarKind::String)
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, TypeRef::Named(_))
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Scalar(kind) => f.write_str(kind.as_str()),
            TypeRef::Named(name) => f.write_str(name),
        }
    }
}

/// Whether a member was declared as a field or a property.
///
/// The rules treat both identically; the distinction survives only so
/// violation messages can echo the source declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Property,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Property => "property",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A public field or property of a complex type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub markers: MarkerSet,
}

/// A complex type: a name plus its direct members in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexType {
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A declared method parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub markers: MarkerSet,
}

/// A contract method: ordered parameters plus markers on the method itself.
/// The return shape is irrelevant to sensitivity rules and is not modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub markers: MarkerSet,
}

/// A contract interface a host intends to expose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractType {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// Errors that can occur while loading or resolving contract metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Unknown complex type: {0}")]
    UnknownType(String),

    #[error("Duplicate complex type registered: {0}")]
    DuplicateType(String),

    #[error("Invalid config at {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed descriptor {path}: {source}")]
    Descriptor {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
