//! Protocol description submitted for harm–benefit evaluation.
//!
//! `ProtocolInput` is the complete value the scoring engine consumes.
//! `ProtocolDraft` is the form-shaped variant a caller collects field by
//! field; converting it is where the "incomplete input" check lives.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PigwebError, Result};

/// Primary objective of the proposed research.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchGoal {
    Critical,
    Conservation,
    Safety,
    Basic,
    Education,
    Cosmetic,
}

impl ResearchGoal {
    pub const ALL: [ResearchGoal; 6] = [
        ResearchGoal::Critical,
        ResearchGoal::Conservation,
        ResearchGoal::Safety,
        ResearchGoal::Basic,
        ResearchGoal::Education,
        ResearchGoal::Cosmetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchGoal::Critical => "critical",
            ResearchGoal::Conservation => "conservation",
            ResearchGoal::Safety => "safety",
            ResearchGoal::Basic => "basic",
            ResearchGoal::Education => "education",
            ResearchGoal::Cosmetic => "cosmetic",
        }
    }

    /// Human-readable label used in summaries and the calculator form.
    pub fn label(&self) -> &'static str {
        match self {
            ResearchGoal::Critical => "Critical human or animal health",
            ResearchGoal::Conservation => "Species conservation",
            ResearchGoal::Safety => "Regulatory safety testing",
            ResearchGoal::Basic => "Basic research",
            ResearchGoal::Education => "Education and training",
            ResearchGoal::Cosmetic => "Cosmetic testing",
        }
    }
}

/// Species used in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Species {
    Piglets,
    NonHumanPrimates,
    DairyCow,
    BeefCattle,
    Pigs,
    Rabbits,
    Mice,
    Poultry,
    Other,
}

impl Species {
    pub const ALL: [Species; 9] = [
        Species::Piglets,
        Species::NonHumanPrimates,
        Species::DairyCow,
        Species::BeefCattle,
        Species::Pigs,
        Species::Rabbits,
        Species::Mice,
        Species::Poultry,
        Species::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Piglets => "piglets",
            Species::NonHumanPrimates => "non-human-primates",
            Species::DairyCow => "dairy-cow",
            Species::BeefCattle => "beef-cattle",
            Species::Pigs => "pigs",
            Species::Rabbits => "rabbits",
            Species::Mice => "mice",
            Species::Poultry => "poultry",
            Species::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Species::Piglets => "Piglets (<4 weeks)",
            Species::NonHumanPrimates => "Non-human primates",
            Species::DairyCow => "Dairy cows",
            Species::BeefCattle => "Beef cattle",
            Species::Pigs => "Pigs",
            Species::Rabbits => "Rabbits",
            Species::Mice => "Mice",
            Species::Poultry => "Poultry",
            Species::Other => "Other",
        }
    }

    pub fn is_porcine(&self) -> bool {
        matches!(self, Species::Pigs | Species::Piglets)
    }

    /// Farmed species covered by the livestock transport regulation.
    pub fn is_livestock(&self) -> bool {
        matches!(
            self,
            Species::Pigs | Species::Piglets | Species::DairyCow | Species::BeefCattle
        )
    }
}

/// Number of animals requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimalNumbers {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl AnimalNumbers {
    pub const ALL: [AnimalNumbers; 4] = [
        AnimalNumbers::Low,
        AnimalNumbers::Medium,
        AnimalNumbers::High,
        AnimalNumbers::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalNumbers::Low => "low",
            AnimalNumbers::Medium => "medium",
            AnimalNumbers::High => "high",
            AnimalNumbers::VeryHigh => "very-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimalNumbers::Low => "Low",
            AnimalNumbers::Medium => "Medium",
            AnimalNumbers::High => "High",
            AnimalNumbers::VeryHigh => "Very high",
        }
    }

    pub fn is_large_cohort(&self) -> bool {
        matches!(self, AnimalNumbers::High | AnimalNumbers::VeryHigh)
    }
}

/// Expected likelihood that the research reaches its objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuccessRate {
    High,
    Medium,
    Low,
}

impl SuccessRate {
    pub const ALL: [SuccessRate; 3] = [SuccessRate::High, SuccessRate::Medium, SuccessRate::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuccessRate::High => "high",
            SuccessRate::Medium => "medium",
            SuccessRate::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuccessRate::High => "High confidence",
            SuccessRate::Medium => "Medium confidence",
            SuccessRate::Low => "Low confidence",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(ResearchGoal, Species, AnimalNumbers, SuccessRate);

/// Label for an ordinal severity class. Values outside 0–3 have no label.
pub fn severity_label(severity: i32) -> &'static str {
    match severity {
        0 => "Non-recovery",
        1 => "Mild",
        2 => "Moderate",
        3 => "Severe",
        _ => "—",
    }
}

/// Procedure name that triggers the xenotransplantation authorization rule.
pub const XENOTRANSPLANTATION: &str = "xenotransplantation";

/// A fully specified research protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolInput {
    pub goal: ResearchGoal,
    pub procedure: String,
    pub species: Species,
    pub numbers: AnimalNumbers,
    /// Ordinal severity class, nominally 0–3. Out-of-range values are accepted.
    pub severity: i32,
    pub success_rate: SuccessRate,
    pub alternatives_exist: bool,
    pub xeno_flag: bool,
}

impl ProtocolInput {
    pub fn involves_xenotransplantation(&self) -> bool {
        self.xeno_flag || self.procedure == XENOTRANSPLANTATION
    }
}

impl Default for ProtocolInput {
    /// Form defaults: basic research on a small group of pigs, mild severity.
    fn default() -> Self {
        Self {
            goal: ResearchGoal::Basic,
            procedure: "other".to_string(),
            species: Species::Pigs,
            numbers: AnimalNumbers::Low,
            severity: 1,
            success_rate: SuccessRate::Medium,
            alternatives_exist: false,
            xeno_flag: false,
        }
    }
}

/// Protocol as collected from a form, where any field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolDraft {
    pub goal: Option<ResearchGoal>,
    pub procedure: Option<String>,
    pub species: Option<Species>,
    pub numbers: Option<AnimalNumbers>,
    pub severity: Option<i32>,
    pub success_rate: Option<SuccessRate>,
    pub alternatives_exist: Option<bool>,
    pub xeno_flag: Option<bool>,
}

impl ProtocolDraft {
    /// Convert into a complete `ProtocolInput`.
    ///
    /// The goal and the alternatives answer are required; every other field
    /// falls back to the form default.
    pub fn into_input(self) -> Result<ProtocolInput> {
        let goal = self
            .goal
            .ok_or_else(|| PigwebError::IncompleteInput("goal".to_string()))?;
        let alternatives_exist = self
            .alternatives_exist
            .ok_or_else(|| PigwebError::IncompleteInput("alternatives".to_string()))?;

        let defaults = ProtocolInput::default();
        Ok(ProtocolInput {
            goal,
            procedure: self
                .procedure
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.procedure),
            species: self.species.unwrap_or(defaults.species),
            numbers: self.numbers.unwrap_or(defaults.numbers),
            severity: self.severity.unwrap_or(defaults.severity),
            success_rate: self.success_rate.unwrap_or(defaults.success_rate),
            alternatives_exist,
            xeno_flag: self.xeno_flag.unwrap_or(defaults.xeno_flag),
        })
    }
}

impl From<ProtocolInput> for ProtocolDraft {
    fn from(input: ProtocolInput) -> Self {
        Self {
            goal: Some(input.goal),
            procedure: Some(input.procedure),
            species: Some(input.species),
            numbers: Some(input.numbers),
            severity: Some(input.severity),
            success_rate: Some(input.success_rate),
            alternatives_exist: Some(input.alternatives_exist),
            xeno_flag: Some(input.xeno_flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kebab_case_wire_names() {
        let json = serde_json::json!({
            "goal": "critical",
            "procedure": "xenotransplantation",
            "species": "non-human-primates",
            "numbers": "very-high",
            "severity": 2,
            "success_rate": "low",
            "alternatives_exist": false,
            "xeno_flag": false
        });
        let input: ProtocolInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.species, Species::NonHumanPrimates);
        assert_eq!(input.numbers, AnimalNumbers::VeryHigh);
        assert!(input.involves_xenotransplantation());
    }

    #[test]
    fn test_draft_requires_goal() {
        let draft = ProtocolDraft {
            alternatives_exist: Some(false),
            ..Default::default()
        };
        let err = draft.into_input().unwrap_err();
        assert!(matches!(err, PigwebError::IncompleteInput(ref f) if f == "goal"));
    }

    #[test]
    fn test_draft_requires_alternatives_answer() {
        let draft = ProtocolDraft {
            goal: Some(ResearchGoal::Safety),
            ..Default::default()
        };
        assert!(matches!(
            draft.into_input(),
            Err(PigwebError::IncompleteInput(ref f)) if f == "alternatives"
        ));
    }

    #[test]
    fn test_draft_applies_form_defaults() {
        let draft = ProtocolDraft {
            goal: Some(ResearchGoal::Education),
            procedure: Some("   ".to_string()),
            alternatives_exist: Some(false),
            ..Default::default()
        };
        let input = draft.into_input().unwrap();
        assert_eq!(
            input,
            ProtocolInput {
                goal: ResearchGoal::Education,
                ..ProtocolInput::default()
            }
        );
    }

    #[test]
    fn test_explicit_zero_severity_is_kept() {
        let draft = ProtocolDraft {
            goal: Some(ResearchGoal::Basic),
            severity: Some(0),
            alternatives_exist: Some(false),
            ..Default::default()
        };
        assert_eq!(draft.into_input().unwrap().severity, 0);
    }

    #[test]
    fn test_livestock_classification() {
        assert!(Species::DairyCow.is_livestock());
        assert!(Species::Piglets.is_porcine());
        assert!(!Species::Mice.is_livestock());
        assert!(!Species::NonHumanPrimates.is_porcine());
    }
}
