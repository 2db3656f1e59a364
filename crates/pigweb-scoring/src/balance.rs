//! Science / harm / cost balance meter and research scenario presets.
//! Slider values are percentages; the cost bar is capped at 100.

use serde::{Deserialize, Serialize};

use crate::scorer::ScoreResult;

/// Starting slider position when nothing has been evaluated.
pub const DEFAULT_SLIDER: f64 = 50.0;
/// Margin beyond which one side clearly outweighs the other.
pub const BALANCE_MARGIN: f64 = 15.0;

const HARM_SHARE: f64 = 0.8;
const MONEY_SHARE: f64 = 0.2;

/// Evidence-informed starting values for a research area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioPreset {
    pub key: &'static str,
    pub science: f64,
    pub harm: f64,
    pub money: f64,
}

const fn preset(key: &'static str, science: f64, harm: f64, money: f64) -> ScenarioPreset {
    ScenarioPreset { key, science, harm, money }
}

pub static SCENARIOS: &[ScenarioPreset] = &[
    preset("growth", 70.0, 40.0, 50.0),
    preset("meat", 60.0, 35.0, 45.0),
    preset("fat", 55.0, 30.0, 40.0),
    preset("feed", 75.0, 30.0, 45.0),
    preset("sustainable", 80.0, 25.0, 60.0),
    preset("emissions", 85.0, 20.0, 55.0),
    preset("drug", 90.0, 60.0, 70.0),
    preset("resistance", 85.0, 50.0, 65.0),
    preset("pain", 70.0, 40.0, 55.0),
    preset("behaviour", 65.0, 35.0, 40.0),
    preset("housing", 60.0, 30.0, 50.0),
    preset("infectious", 95.0, 70.0, 80.0),
    preset("welfare", 65.0, 25.0, 40.0),
    preset("gene-therapy", 95.0, 60.0, 90.0),
    preset("gene-editing", 90.0, 45.0, 85.0),
    preset("cancer", 95.0, 70.0, 90.0),
    preset("cardio", 85.0, 55.0, 80.0),
    preset("organ", 90.0, 65.0, 95.0),
    preset("neuro", 85.0, 55.0, 75.0),
    preset("regeneration", 90.0, 50.0, 80.0),
    preset("aging", 80.0, 40.0, 65.0),
];

pub fn find_scenario(key: &str) -> Option<&'static ScenarioPreset> {
    SCENARIOS.iter().find(|s| s.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceVerdict {
    BenefitsOutweigh,
    Borderline,
    HarmOutweighs,
}

impl BalanceVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            BalanceVerdict::BenefitsOutweigh => "Benefits clearly outweigh costs",
            BalanceVerdict::Borderline => "Borderline — optimization advised",
            BalanceVerdict::HarmOutweighs => "Harm outweighs benefit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceReading {
    pub science: f64,
    pub harm: f64,
    pub money: f64,
    /// Width of the cost bar, capped at 100.
    pub cost_bar: f64,
    pub verdict: BalanceVerdict,
}

impl BalanceReading {
    pub fn compute(science: f64, harm: f64, money: f64) -> Self {
        let weighted_cost = harm * HARM_SHARE + money * MONEY_SHARE;
        let diff = science - weighted_cost;
        let verdict = if diff > BALANCE_MARGIN {
            BalanceVerdict::BenefitsOutweigh
        } else if diff < -BALANCE_MARGIN {
            BalanceVerdict::HarmOutweighs
        } else {
            BalanceVerdict::Borderline
        };

        Self {
            science,
            harm,
            money,
            cost_bar: weighted_cost.min(100.0),
            verdict,
        }
    }

    /// Slider positions after an evaluation. Weighted scores are scaled by
    /// ten; blocked scores are already on the slider scale.
    pub fn from_score(score: &ScoreResult, money: f64) -> Self {
        if score.classification.is_blocked() {
            return Self::compute(score.benefit, score.harm, money);
        }
        Self::compute(score.benefit * 10.0, score.harm * 10.0, money)
    }

    pub fn from_scenario(preset: &ScenarioPreset) -> Self {
        Self::compute(preset.science, preset.harm, preset.money)
    }
}

impl Default for BalanceReading {
    fn default() -> Self {
        Self::compute(DEFAULT_SLIDER, DEFAULT_SLIDER, DEFAULT_SLIDER)
    }
}
