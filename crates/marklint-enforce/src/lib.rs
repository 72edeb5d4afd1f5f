//! Validation engine for marklint sensitivity-marker consistency.
//!
//! Checks contract metadata against the classification rules and produces
//! violations:
//! - ML001: conflicting markers (`Sensitive` and `NonSensitive` on one element)
//! - ML002: incomplete annotation (a complex type's members are partially,
//!   but not uniformly, classified at some nesting level)

pub mod engine;
pub mod rules;
pub mod types;
pub mod walker;
