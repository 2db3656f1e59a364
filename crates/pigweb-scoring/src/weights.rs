//! Ethical weight table for harm–benefit scoring.
//!
//! Benefit is driven by the research goal and its likelihood of success;
//! harm by severity, animal numbers and a per-species sensitivity multiplier.
//! Piglets (<4 weeks) and non-human primates carry roughly 3x the adult-pig
//! baseline; adult pigs are the 1.0 reference.

use pigweb_common::protocol::{AnimalNumbers, ResearchGoal, Species, SuccessRate};

/// Weight used when a goal is absent from the table.
pub const DEFAULT_GOAL_WEIGHT: f64 = 6.0;
/// Weight used when a success rate is absent from the table.
pub const DEFAULT_SUCCESS_WEIGHT: f64 = 0.75;
/// Weight used for severities outside the table (anything but 0–3).
pub const DEFAULT_SEVERITY_WEIGHT: f64 = 1.0;
pub const DEFAULT_NUMBERS_WEIGHT: f64 = 1.0;
pub const DEFAULT_SPECIES_MULTIPLIER: f64 = 1.0;

/// Read-only lookup tables. Entries are searched linearly; a miss falls back
/// to the matching `DEFAULT_*` constant.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    pub goal: &'static [(ResearchGoal, f64)],
    pub severity: &'static [(i32, f64)],
    pub numbers: &'static [(AnimalNumbers, f64)],
    pub success: &'static [(SuccessRate, f64)],
    pub species: &'static [(Species, f64)],
}

/// The process-wide weight table.
pub static ETHICAL_WEIGHTS: WeightTable = WeightTable {
    goal: &[
        (ResearchGoal::Critical, 10.0),
        (ResearchGoal::Conservation, 9.0),
        (ResearchGoal::Safety, 8.0),
        (ResearchGoal::Basic, 6.0),
        (ResearchGoal::Education, 4.0),
        (ResearchGoal::Cosmetic, 1.0),
    ],
    severity: &[(0, 4.0), (1, 1.0), (2, 2.5), (3, 4.0)],
    numbers: &[
        (AnimalNumbers::Low, 1.0),
        (AnimalNumbers::Medium, 1.5),
        (AnimalNumbers::High, 2.5),
        (AnimalNumbers::VeryHigh, 4.0),
    ],
    success: &[
        (SuccessRate::High, 1.0),
        (SuccessRate::Medium, 0.75),
        (SuccessRate::Low, 0.4),
    ],
    species: &[
        (Species::Piglets, 3.0),
        (Species::NonHumanPrimates, 2.8),
        (Species::DairyCow, 1.4),
        (Species::BeefCattle, 1.4),
        (Species::Pigs, 1.0),
        (Species::Rabbits, 1.1),
        (Species::Mice, 0.8),
        (Species::Poultry, 0.7),
        (Species::Other, 1.0),
    ],
};

fn lookup<K: PartialEq>(table: &[(K, f64)], key: &K, default: f64) -> f64 {
    table
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, w)| *w)
        .unwrap_or(default)
}

impl WeightTable {
    pub fn goal_weight(&self, goal: ResearchGoal) -> f64 {
        lookup(self.goal, &goal, DEFAULT_GOAL_WEIGHT)
    }

    pub fn severity_weight(&self, severity: i32) -> f64 {
        lookup(self.severity, &severity, DEFAULT_SEVERITY_WEIGHT)
    }

    pub fn numbers_weight(&self, numbers: AnimalNumbers) -> f64 {
        lookup(self.numbers, &numbers, DEFAULT_NUMBERS_WEIGHT)
    }

    pub fn success_weight(&self, success: SuccessRate) -> f64 {
        lookup(self.success, &success, DEFAULT_SUCCESS_WEIGHT)
    }

    pub fn species_multiplier(&self, species: Species) -> f64 {
        lookup(self.species, &species, DEFAULT_SPECIES_MULTIPLIER)
    }

    /// Every weight must be strictly positive so that harm never reaches zero.
    pub fn validate(&self) -> bool {
        self.goal.iter().map(|(_, w)| *w)
            .chain(self.severity.iter().map(|(_, w)| *w))
            .chain(self.numbers.iter().map(|(_, w)| *w))
            .chain(self.success.iter().map(|(_, w)| *w))
            .chain(self.species.iter().map(|(_, w)| *w))
            .all(|w| w > 0.0 && w.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_positive() {
        assert!(ETHICAL_WEIGHTS.validate(), "All weights must be > 0");
    }

    #[test]
    fn test_every_variant_has_an_entry() {
        for goal in ResearchGoal::ALL {
            assert!(ETHICAL_WEIGHTS.goal.iter().any(|(g, _)| *g == goal));
        }
        for species in Species::ALL {
            assert!(ETHICAL_WEIGHTS.species.iter().any(|(s, _)| *s == species));
        }
        for numbers in AnimalNumbers::ALL {
            assert!(ETHICAL_WEIGHTS.numbers.iter().any(|(n, _)| *n == numbers));
        }
        for success in SuccessRate::ALL {
            assert!(ETHICAL_WEIGHTS.success.iter().any(|(s, _)| *s == success));
        }
    }

    #[test]
    fn test_out_of_range_severity_defaults_to_one() {
        assert_eq!(ETHICAL_WEIGHTS.severity_weight(-1), 1.0);
        assert_eq!(ETHICAL_WEIGHTS.severity_weight(4), 1.0);
        assert_eq!(ETHICAL_WEIGHTS.severity_weight(99), 1.0);
    }

    #[test]
    fn test_severity_zero_is_weighted_like_severe() {
        assert_eq!(
            ETHICAL_WEIGHTS.severity_weight(0),
            ETHICAL_WEIGHTS.severity_weight(3)
        );
    }

    #[test]
    fn test_missing_entries_fall_back() {
        let sparse = WeightTable {
            goal: &[],
            severity: &[],
            numbers: &[],
            success: &[],
            species: &[],
        };
        assert_eq!(sparse.goal_weight(ResearchGoal::Critical), DEFAULT_GOAL_WEIGHT);
        assert_eq!(sparse.success_weight(SuccessRate::High), DEFAULT_SUCCESS_WEIGHT);
        assert_eq!(sparse.numbers_weight(AnimalNumbers::VeryHigh), DEFAULT_NUMBERS_WEIGHT);
        assert_eq!(sparse.species_multiplier(Species::Piglets), DEFAULT_SPECIES_MULTIPLIER);
    }
}
