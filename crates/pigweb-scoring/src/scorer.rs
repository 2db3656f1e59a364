//! Harm–benefit score computation.
//!
//! benefit = w_goal × w_success
//! harm    = w_severity × w_numbers × m_species
//! ratio   = benefit / harm (0 when harm is 0)

use serde::{Deserialize, Serialize};
use tracing::debug;

use pigweb_common::protocol::{ProtocolInput, ResearchGoal};
use crate::regulations::{derive_findings, RegulationFinding};
use crate::weights::{WeightTable, ETHICAL_WEIGHTS};

/// Ratio at or above which authorization is likely.
pub const APPROVAL_THRESHOLD: f64 = 1.8;
/// Ratio at or above which the protocol goes to enhanced review.
pub const REVIEW_THRESHOLD: f64 = 1.1;

/// Score reported for protocols blocked before weighting.
pub const BLOCKED_BENEFIT: f64 = 0.0;
pub const BLOCKED_HARM: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Approved,
    Borderline,
    Denied,
    /// Validated non-animal alternatives exist.
    BlockedAlternatives,
    /// Cosmetic testing on animals is banned.
    BlockedCosmetic,
}

impl Classification {
    /// Short ethical outcome phrase carried into summaries.
    pub fn outcome(&self) -> &'static str {
        match self {
            Classification::Approved => "Likely to be authorized",
            Classification::Borderline => "Enhanced review required",
            Classification::Denied => "Likely to be refused",
            Classification::BlockedAlternatives => "⚠️ Replacement Required",
            Classification::BlockedCosmetic => "Prohibited",
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(
            self,
            Classification::BlockedAlternatives | Classification::BlockedCosmetic
        )
    }
}

/// Map a harm–benefit ratio onto a tier. Equality belongs to the higher tier.
pub fn classify(ratio: f64) -> Classification {
    if ratio >= APPROVAL_THRESHOLD {
        Classification::Approved
    } else if ratio >= REVIEW_THRESHOLD {
        Classification::Borderline
    } else {
        Classification::Denied
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub benefit: f64,
    pub harm: f64,
    pub ratio: f64,
    pub classification: Classification,
}

impl ScoreResult {
    fn blocked(classification: Classification) -> Self {
        Self {
            benefit: BLOCKED_BENEFIT,
            harm: BLOCKED_HARM,
            ratio: 0.0,
            classification,
        }
    }
}

/// Full result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: ScoreResult,
    pub findings: Vec<RegulationFinding>,
}

/// Compute the score alone, applying the replacement and cosmetics blocks
/// before any weighting.
pub fn compute_score(input: &ProtocolInput, weights: &WeightTable) -> ScoreResult {
    if input.alternatives_exist {
        return ScoreResult::blocked(Classification::BlockedAlternatives);
    }
    if input.goal == ResearchGoal::Cosmetic {
        return ScoreResult::blocked(Classification::BlockedCosmetic);
    }

    let benefit = weights.goal_weight(input.goal) * weights.success_weight(input.success_rate);
    let harm = weights.severity_weight(input.severity)
        * weights.numbers_weight(input.numbers)
        * weights.species_multiplier(input.species);
    let ratio = if harm > 0.0 { benefit / harm } else { 0.0 };

    ScoreResult {
        benefit,
        harm,
        ratio,
        classification: classify(ratio),
    }
}

/// Evaluate a protocol against the standard weight table.
pub fn evaluate(input: &ProtocolInput) -> Evaluation {
    evaluate_with(input, &ETHICAL_WEIGHTS)
}

pub fn evaluate_with(input: &ProtocolInput, weights: &WeightTable) -> Evaluation {
    let score = compute_score(input, weights);
    let findings = derive_findings(input, score.ratio);

    debug!(
        goal = %input.goal,
        species = %input.species,
        benefit = score.benefit,
        harm = score.harm,
        ratio = score.ratio,
        classification = ?score.classification,
        findings = findings.len(),
        "Protocol evaluated"
    );

    Evaluation { score, findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigweb_common::protocol::{AnimalNumbers, Species, SuccessRate};
    use pigweb_test_utils::ProtocolBuilder;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_basic_pig_study_is_approved() {
        let input = ProtocolBuilder::new()
            .goal(ResearchGoal::Basic)
            .success(SuccessRate::Medium)
            .severity(1)
            .numbers(AnimalNumbers::Low)
            .species(Species::Pigs)
            .build();
        let score = evaluate(&input).score;
        assert!(approx(score.benefit, 4.5));
        assert!(approx(score.harm, 1.0));
        assert!(approx(score.ratio, 4.5));
        assert_eq!(score.classification, Classification::Approved);
    }

    #[test]
    fn test_severe_piglet_study_is_denied() {
        let input = ProtocolBuilder::new()
            .goal(ResearchGoal::Critical)
            .success(SuccessRate::Low)
            .severity(3)
            .numbers(AnimalNumbers::High)
            .species(Species::Piglets)
            .build();
        let score = evaluate(&input).score;
        assert!(approx(score.benefit, 4.0));
        assert!(approx(score.harm, 30.0));
        assert!((score.ratio - 0.1333).abs() < 1e-3);
        assert_eq!(score.classification, Classification::Denied);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(1.8), Classification::Approved);
        assert_eq!(classify(1.7999), Classification::Borderline);
        assert_eq!(classify(1.1), Classification::Borderline);
        assert_eq!(classify(1.0999), Classification::Denied);
        assert_eq!(classify(0.0), Classification::Denied);
    }

    #[test]
    fn test_alternatives_block_everything() {
        for goal in ResearchGoal::ALL {
            for species in Species::ALL {
                let input = ProtocolBuilder::new()
                    .goal(goal)
                    .species(species)
                    .alternatives(true)
                    .build();
                let score = evaluate(&input).score;
                assert_eq!(score.classification, Classification::BlockedAlternatives);
                assert_eq!(score.benefit, 0.0);
                assert_eq!(score.harm, 100.0);
                assert_eq!(score.ratio, 0.0);
            }
        }
    }

    #[test]
    fn test_cosmetic_goal_is_blocked() {
        for species in Species::ALL {
            let input = ProtocolBuilder::new()
                .goal(ResearchGoal::Cosmetic)
                .species(species)
                .success(SuccessRate::High)
                .build();
            assert_eq!(
                evaluate(&input).score.classification,
                Classification::BlockedCosmetic
            );
        }
    }

    #[test]
    fn test_ratio_is_benefit_over_positive_harm() {
        for goal in ResearchGoal::ALL.into_iter().filter(|g| *g != ResearchGoal::Cosmetic) {
            for species in Species::ALL {
                for numbers in AnimalNumbers::ALL {
                    for severity in -1..=4 {
                        let input = ProtocolBuilder::new()
                            .goal(goal)
                            .species(species)
                            .numbers(numbers)
                            .severity(severity)
                            .build();
                        let score = evaluate(&input).score;
                        assert!(score.harm > 0.0);
                        assert!(approx(score.ratio, score.benefit / score.harm));
                        assert_eq!(score.classification, classify(score.ratio));
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_harm_table_yields_zero_ratio() {
        let zero = WeightTable {
            severity: &[(1, 0.0)],
            ..ETHICAL_WEIGHTS
        };
        let score = compute_score(&ProtocolBuilder::new().severity(1).build(), &zero);
        assert_eq!(score.ratio, 0.0);
        assert_eq!(score.classification, Classification::Denied);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let input = ProtocolBuilder::new()
            .species(Species::NonHumanPrimates)
            .numbers(AnimalNumbers::VeryHigh)
            .xeno(true)
            .build();
        assert_eq!(evaluate(&input), evaluate(&input));
    }
}
