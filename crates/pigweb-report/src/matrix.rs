//! Regulation matrix rows: one per finding, with a status icon and colour.

use serde::Serialize;

use pigweb_scoring::regulations::{ComplianceStatus, RegulationFinding};

/// Visual grouping of compliance statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Informational,
    Warning,
    Review,
    Borderline,
    Negative,
    Prohibited,
}

impl StatusTone {
    pub fn of(status: ComplianceStatus) -> Self {
        match status {
            ComplianceStatus::Compliant | ComplianceStatus::Favorable => StatusTone::Positive,
            ComplianceStatus::Applied => StatusTone::Informational,
            ComplianceStatus::Triggered => StatusTone::Warning,
            ComplianceStatus::SpecialReview | ComplianceStatus::SpecialAuthorization => StatusTone::Review,
            ComplianceStatus::Borderline => StatusTone::Borderline,
            ComplianceStatus::Failed
            | ComplianceStatus::NonCompliant
            | ComplianceStatus::Unfavorable => StatusTone::Negative,
            ComplianceStatus::Prohibited => StatusTone::Prohibited,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusTone::Positive => "✔️",
            StatusTone::Informational => "ℹ️",
            StatusTone::Warning => "⚠️",
            StatusTone::Review => "🔍",
            StatusTone::Borderline => "⚖️",
            StatusTone::Negative => "❌",
            StatusTone::Prohibited => "⛔",
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            StatusTone::Positive => "#0d8030",
            StatusTone::Informational => "#1e88e5",
            StatusTone::Warning => "#f57c00",
            StatusTone::Review => "#6a1b9a",
            StatusTone::Borderline => "#d81b60",
            StatusTone::Negative | StatusTone::Prohibited => "#c62828",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub rule: String,
    pub status: String,
    pub tone: StatusTone,
    pub icon: &'static str,
    pub colour: &'static str,
    pub note: String,
}

impl From<&RegulationFinding> for MatrixRow {
    fn from(finding: &RegulationFinding) -> Self {
        let tone = StatusTone::of(finding.status);
        Self {
            rule: finding.rule_name.clone(),
            status: finding.status.label().to_string(),
            tone,
            icon: tone.icon(),
            colour: tone.colour(),
            note: finding.note.clone(),
        }
    }
}

pub fn build_matrix(findings: &[RegulationFinding]) -> Vec<MatrixRow> {
    findings.iter().map(MatrixRow::from).collect()
}

/// "rule: note" lines listed under "Regulations & Notes" in the summary.
pub fn law_lines(findings: &[RegulationFinding]) -> Vec<String> {
    findings
        .iter()
        .map(|f| format!("{}: {}", f.rule_name, f.note))
        .collect()
}
