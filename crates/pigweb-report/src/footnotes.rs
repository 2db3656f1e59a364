//! Explanatory footnotes appended to the summary and the printed report.

pub const SPECIES_FOOTNOTE_TITLE: &str = "Species sensitivity multipliers:";

pub const SPECIES_FOOTNOTE: &str = "The tool applies relative ethical weighting based on current EU \
harm–benefit practice (Directive 2010/63/EU). Piglets (<4 weeks) and non-human primates receive the \
highest weighting (≈3× baseline) due to their protected legal status and high vulnerability. Adult \
pigs = 1.0 (reference). Cattle 1.4×, rabbits 1.1×, mice 0.8×, poultry 0.7× reflect consensus from \
national ethics committees (Swiss 3RCC 2021–2024, German TvV 2024, Finnish TENK 2023, UK ASC 2020). \
These values mirror severity adjustments used by EU competent authorities when assessing project \
authorisation.";

pub const SCENARIO_FOOTNOTE_TITLE: &str = "Research scenario presets (Science / Harm / Cost):";

pub const SCENARIO_FOOTNOTE: &[&str] = &[
    "The pre-filled slider values for specific research scenarios (e.g., cancer models, gene therapy, \
     methane reduction) are evidence-informed approximations derived from:",
    "• EU severity classifications (Directive 2010/63/EU Annex VIII)",
    "• Published harm–benefit analyses and economic models (FELASA/ESLAV/EFSA 2020–2025)",
    "• Typical protocol costs and translational impact reported in the literature",
    "They provide realistic starting points for ethical review and illustrate relative differences \
     between research areas. Actual values vary by protocol, species, and refinement measures; adjust \
     the sliders to reflect the specific project.",
];
