//! pigweb-scoring: Harm–benefit scoring engine.
//!
//! `evaluate` turns a `ProtocolInput` into a score, a classification and the
//! ordered regulation findings. Everything here is pure and synchronous.

pub mod weights;
pub mod scorer;
pub mod regulations;
pub mod verdict;
pub mod balance;

pub use scorer::{evaluate, Classification, Evaluation, ScoreResult};
pub use regulations::{derive_findings, ComplianceStatus, RegulationFinding};
pub use verdict::Verdict;
