//! Report rendering for the terminal.

use marklint_enforce::types::ValidationReport;

/// Human-readable rendering. A clean report renders as empty stdout.
pub fn format_human(report: &ValidationReport) -> String {
    if report.violations.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for v in &report.violations {
        out.push_str(&format!("{}\n", v));
        if !v.unmarked_members.is_empty() {
            out.push_str(&format!(
                "    unmarked: {}\n",
                v.unmarked_members.join(", ")
            ));
        }
    }
    out.push_str(&format!(
        "\n{} violation(s) in {} contract(s)\n",
        report.violations.len(),
        report.contracts_checked.len(),
    ));
    out
}

/// Structured JSON rendering of the full report.
pub fn format_json(report: &ValidationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
