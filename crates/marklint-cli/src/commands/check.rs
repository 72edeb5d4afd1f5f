use std::path::{Path, PathBuf};

use marklint_core::config::MarklintConfig;
use marklint_enforce::engine::ValidationEngine;

use crate::loader;
use crate::output;

/// Run `marklint check`. Exit codes: 0 clean, 1 violations, 2 metadata or
/// config errors.
pub fn run(paths: Vec<PathBuf>, config_path: Option<PathBuf>, json: bool) -> i32 {
    // An explicitly named config file must exist; only the implicit
    // `marklint.json` default is optional.
    if let Some(path) = &config_path {
        if !path.exists() {
            eprintln!("marklint: config file not found: {}", path.display());
            return 2;
        }
    }
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("marklint.json"));
    let config = match MarklintConfig::load(Path::new(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("marklint: {}", e);
            return 2;
        }
    };

    let source = match loader::load_source(&paths) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("marklint: {}", e);
            return 2;
        }
    };

    let engine = ValidationEngine::with_config(Box::new(source), config);
    let report = match engine.validate() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("marklint: {}", e);
            return 2;
        }
    };

    let rendered = if json {
        output::format_json(&report)
    } else {
        output::format_human(&report)
    };
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if report.is_clean() {
        0
    } else {
        1
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
