//! pigweb-genes: Gene lookup against the NCBI Gene database.
//!
//! The lookup is an optional side feature of the calculator: it never
//! touches scoring state and is injected into callers as `Arc<dyn GeneLookup>`.

pub mod ncbi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use pigweb_common::{PigwebError, Result};

pub use ncbi::NcbiGeneClient;

/// Summary of one gene record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub organism: String,
    pub chromosome: Option<String>,
    pub map_location: Option<String>,
    pub summary: Option<String>,
}

/// Common interface for gene lookup backends.
#[async_trait]
pub trait GeneLookup: Send + Sync {
    /// Resolve a gene symbol to its record.
    async fn lookup(&self, symbol: &str) -> Result<GeneRecord>;
}

// ── Mock Implementation for Testing ────────────────────────────────────────

pub struct MockGeneLookup {
    records: HashMap<String, GeneRecord>,
}

impl MockGeneLookup {
    pub fn new() -> Self {
        Self { records: HashMap::new() }
    }

    pub fn with(mut self, symbol: &str, record: GeneRecord) -> Self {
        self.records.insert(symbol.to_uppercase(), record);
        self
    }
}

impl Default for MockGeneLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeneLookup for MockGeneLookup {
    async fn lookup(&self, symbol: &str) -> Result<GeneRecord> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(PigwebError::Lookup("Gene symbol is empty".to_string()));
        }
        self.records
            .get(&symbol.to_uppercase())
            .cloned()
            .ok_or_else(|| PigwebError::GeneNotFound(symbol.to_string()))
    }
}
