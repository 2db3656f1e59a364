//! Non-technical summary text.

use pigweb_common::protocol::{severity_label, ProtocolInput};
use pigweb_scoring::regulations::RegulationFinding;

use crate::matrix::law_lines;

pub const DISCLAIMER: &str =
    "This tool supports ethical review but does not replace formal authorization under Directive 2010/63/EU.";

/// Render the plain-text summary for one evaluation.
pub fn generate_summary(
    input: &ProtocolInput,
    outcome: &str,
    findings: &[RegulationFinding],
) -> String {
    let mut lines = vec![
        format!("Research Objective: {}", input.goal.label()),
        format!("Species: {}", input.species.label()),
        format!("Severity: {}", severity_label(input.severity)),
        format!("Number of Animals: {}", input.numbers.label()),
        format!("Scientific Confidence: {}", input.success_rate.label()),
        format!(
            "Xenotransplantation/GMO: {}",
            if input.xeno_flag { "Yes" } else { "No" }
        ),
        String::new(),
        format!("Ethical Outcome: {}", outcome),
        String::new(),
        "Regulations & Notes:".to_string(),
    ];
    lines.extend(law_lines(findings).into_iter().map(|l| format!("• {}", l)));
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}
