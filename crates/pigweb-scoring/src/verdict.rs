//! Headline verdict shown above the regulation matrix.

use serde::{Deserialize, Serialize};

use crate::scorer::{Classification, ScoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub title: String,
    pub message: String,
    /// Style class for the result box: approved, borderline or denied.
    pub css_class: String,
    pub icon: String,
    pub outcome: String,
}

impl Verdict {
    pub fn from_score(score: &ScoreResult) -> Self {
        let ratio_text = format!(
            "Benefit/Harm ratio: {:.2} (≥1.8 = clear justification)",
            round_half_up(score.ratio)
        );
        let (title, message, css_class, icon) = match score.classification {
            Classification::BlockedAlternatives => (
                "❌ Proposal Blocked",
                "Validated non-animal alternatives exist — Directive 2010/63/EU Article 4 requires their use.".to_string(),
                "denied",
                "Blocked",
            ),
            Classification::BlockedCosmetic => (
                "⛔Prohibited by Law",
                "Animal testing for cosmetics is banned in the EU (Regulation EC 1223/2009).".to_string(),
                "denied",
                "Prohibited",
            ),
            Classification::Approved => ("Authorization Likely", ratio_text, "approved", "Approved"),
            Classification::Borderline => ("Borderline — Enhanced Review", ratio_text, "borderline", "Scale"),
            Classification::Denied => ("Authorization Denied", ratio_text, "denied", "Cross"),
        };

        Self {
            title: title.to_string(),
            message,
            css_class: css_class.to_string(),
            icon: icon.to_string(),
            outcome: score.classification.outcome().to_string(),
        }
    }
}

/// Two-decimal rounding with ties going up. `{:.2}` alone rounds ties to even.
fn round_half_up(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}
