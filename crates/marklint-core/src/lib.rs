//! Core types, type registry, and configuration for marklint.
//!
//! This crate provides the foundational data structures used across all marklint crates:
//! - [`types`] — Contract descriptors, sensitivity markers, and error types
//! - [`registry`] — The [`TypeRegistry`](registry::TypeRegistry) for complex-type resolution
//! - [`source`] — The [`ContractSource`](source::ContractSource) trait for metadata access
//! - [`config`] — Configuration loading from `marklint.json`

pub mod config;
pub mod registry;
pub mod source;
pub mod types;
