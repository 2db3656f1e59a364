//! Regulation matrix derivation.
//!
//! Each rule is an independent predicate over the protocol and its ratio,
//! evaluated in the fixed order of `RULES`. A rule contributes at most one
//! finding.

use serde::{Deserialize, Serialize};

use pigweb_common::protocol::{ProtocolInput, ResearchGoal, Species};
use crate::scorer::{APPROVAL_THRESHOLD, REVIEW_THRESHOLD};

/// Ratio below which non-human primate work goes to a national committee.
pub const NHP_REVIEW_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Applied,
    Compliant,
    #[serde(rename = "Non-compliant")]
    NonCompliant,
    Failed,
    Triggered,
    #[serde(rename = "Special Review")]
    SpecialReview,
    #[serde(rename = "Special Authorization")]
    SpecialAuthorization,
    Prohibited,
    Favorable,
    Borderline,
    Unfavorable,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Applied => "Applied",
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-compliant",
            ComplianceStatus::Failed => "Failed",
            ComplianceStatus::Triggered => "Triggered",
            ComplianceStatus::SpecialReview => "Special Review",
            ComplianceStatus::SpecialAuthorization => "Special Authorization",
            ComplianceStatus::Prohibited => "Prohibited",
            ComplianceStatus::Favorable => "Favorable",
            ComplianceStatus::Borderline => "Borderline",
            ComplianceStatus::Unfavorable => "Unfavorable",
        }
    }
}

/// One row of the compliance checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationFinding {
    pub rule_name: String,
    pub status: ComplianceStatus,
    pub note: String,
}

/// Inputs visible to every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub input: &'a ProtocolInput,
    pub ratio: f64,
}

type RuleOutcome = Option<(ComplianceStatus, &'static str)>;

/// A named rule. `check` returns `None` when the rule does not apply.
pub struct RegulationRule {
    pub name: &'static str,
    pub check: fn(&RuleContext<'_>) -> RuleOutcome,
}

pub static RULES: &[RegulationRule] = &[
    RegulationRule { name: "Directive 2010/63/EU", check: base_directive },
    RegulationRule { name: "Directive 2010/63/EU — Article 4", check: replacement },
    RegulationRule { name: "Regulation (EC) 1223/2009", check: cosmetics_ban },
    RegulationRule { name: "Directive 2008/120/EC (Pig Welfare)", check: pig_welfare },
    RegulationRule { name: "NHP Protections", check: primate_protections },
    RegulationRule { name: "Xenotransplantation", check: xenotransplantation },
    RegulationRule { name: "Regulation (EC) 1/2005", check: animal_transport },
    RegulationRule { name: "Harm-Benefit Outcome", check: harm_benefit_outcome },
];

fn base_directive(_: &RuleContext<'_>) -> RuleOutcome {
    Some((ComplianceStatus::Applied, "Harm-Benefit Analysis performed (Art. 38)"))
}

fn replacement(ctx: &RuleContext<'_>) -> RuleOutcome {
    if ctx.input.alternatives_exist {
        Some((ComplianceStatus::Failed, "Validated alternatives exist — must be used"))
    } else {
        Some((ComplianceStatus::Compliant, "No validated alternatives"))
    }
}

fn cosmetics_ban(ctx: &RuleContext<'_>) -> RuleOutcome {
    (ctx.input.goal == ResearchGoal::Cosmetic)
        .then_some((ComplianceStatus::Prohibited, "Cosmetics testing banned in EU"))
}

fn pig_welfare(ctx: &RuleContext<'_>) -> RuleOutcome {
    let species = ctx.input.species;
    if !species.is_porcine() {
        return None;
    }
    let (max_severity, note) = if species == Species::Piglets {
        (1, "Piglets: only mild procedures")
    } else {
        (2, "Moderate severity limit")
    };
    let status = if ctx.input.severity <= max_severity {
        ComplianceStatus::Compliant
    } else {
        ComplianceStatus::NonCompliant
    };
    Some((status, note))
}

fn primate_protections(ctx: &RuleContext<'_>) -> RuleOutcome {
    if ctx.input.species != Species::NonHumanPrimates {
        return None;
    }
    if ctx.input.severity >= 3 {
        Some((ComplianceStatus::Failed, "Severe procedures rarely permitted"))
    } else if ctx.ratio < NHP_REVIEW_THRESHOLD {
        Some((ComplianceStatus::SpecialReview, "National committee required"))
    } else {
        Some((ComplianceStatus::Compliant, "Conditions met"))
    }
}

fn xenotransplantation(ctx: &RuleContext<'_>) -> RuleOutcome {
    ctx.input
        .involves_xenotransplantation()
        .then_some((ComplianceStatus::SpecialAuthorization, "National approval required"))
}

fn animal_transport(ctx: &RuleContext<'_>) -> RuleOutcome {
    (ctx.input.numbers.is_large_cohort() && ctx.input.species.is_livestock())
        .then_some((ComplianceStatus::Triggered, "Transport rules apply"))
}

fn harm_benefit_outcome(ctx: &RuleContext<'_>) -> RuleOutcome {
    if ctx.ratio >= APPROVAL_THRESHOLD {
        Some((ComplianceStatus::Favorable, "Benefit outweighs harm"))
    } else if ctx.ratio >= REVIEW_THRESHOLD {
        Some((ComplianceStatus::Borderline, "Refinement needed"))
    } else {
        Some((ComplianceStatus::Unfavorable, "Harm likely outweighs benefit"))
    }
}

/// Run every rule in order and collect the findings that apply.
pub fn derive_findings(input: &ProtocolInput, ratio: f64) -> Vec<RegulationFinding> {
    let ctx = RuleContext { input, ratio };
    RULES
        .iter()
        .filter_map(|rule| {
            (rule.check)(&ctx).map(|(status, note)| RegulationFinding {
                rule_name: rule.name.to_string(),
                status,
                note: note.to_string(),
            })
        })
        .collect()
}
