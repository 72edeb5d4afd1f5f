//! Descriptor-file discovery and loading.
//!
//! Accepts explicit `.json` files or directories scanned recursively; files
//! are loaded in sorted path order so merged bundles are deterministic.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use marklint_core::source::{ContractBundle, InMemorySource};
use marklint_core::types::MetadataError;

/// Collect the descriptor files behind a set of CLI paths.
pub fn collect_descriptor_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, MetadataError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| MetadataError::Io {
                    path: path.display().to_string(),
                    source: e.into(),
                })?;
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "json")
                {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn load_bundle(path: &Path) -> Result<ContractBundle, MetadataError> {
    let content = std::fs::read_to_string(path).map_err(|e| MetadataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| MetadataError::Descriptor {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load every descriptor behind `paths` and merge into one contract source.
pub fn load_source(paths: &[PathBuf]) -> Result<InMemorySource, MetadataError> {
    let files = collect_descriptor_files(paths)?;
    let mut bundles = Vec::with_capacity(files.len());
    for file in &files {
        bundles.push(load_bundle(file)?);
    }
    InMemorySource::from_bundles(bundles)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
