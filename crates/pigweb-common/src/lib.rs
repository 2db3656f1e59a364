//! pigweb-common: Shared protocol types, errors, config and HTTP plumbing
//! used across all PigWeb crates.

pub mod error;
pub mod protocol;
pub mod config;
pub mod sandbox;

// Re-export commonly used types
pub use error::{ApiError, PigwebError, Result};
pub use protocol::{AnimalNumbers, ProtocolDraft, ProtocolInput, ResearchGoal, Species, SuccessRate};
pub use config::AppConfig;
