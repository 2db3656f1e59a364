//! Shared test fixtures for PigWeb crates.

use pigweb_common::protocol::{AnimalNumbers, ProtocolInput, ResearchGoal, Species, SuccessRate};

/// Fluent builder over `ProtocolInput::default()`.
#[derive(Debug, Clone, Default)]
pub struct ProtocolBuilder {
    input: ProtocolInput,
}

impl ProtocolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goal(mut self, goal: ResearchGoal) -> Self {
        self.input.goal = goal;
        self
    }

    pub fn procedure(mut self, procedure: &str) -> Self {
        self.input.procedure = procedure.to_string();
        self
    }

    pub fn species(mut self, species: Species) -> Self {
        self.input.species = species;
        self
    }

    pub fn numbers(mut self, numbers: AnimalNumbers) -> Self {
        self.input.numbers = numbers;
        self
    }

    pub fn severity(mut self, severity: i32) -> Self {
        self.input.severity = severity;
        self
    }

    pub fn success(mut self, success: SuccessRate) -> Self {
        self.input.success_rate = success;
        self
    }

    pub fn alternatives(mut self, exist: bool) -> Self {
        self.input.alternatives_exist = exist;
        self
    }

    pub fn xeno(mut self, flag: bool) -> Self {
        self.input.xeno_flag = flag;
        self
    }

    pub fn build(self) -> ProtocolInput {
        self.input
    }
}

/// Canned NCBI E-utilities payloads.
pub mod ncbi {
    use serde_json::{json, Value};

    pub fn esearch(ids: &[&str]) -> Value {
        json!({
            "header": { "type": "esearch", "version": "0.3" },
            "esearchresult": {
                "count": ids.len().to_string(),
                "retmax": ids.len().to_string(),
                "retstart": "0",
                "idlist": ids,
            }
        })
    }

    /// esummary payload for the pig MSTN gene.
    pub fn esummary_mstn() -> Value {
        json!({
            "header": { "type": "esummary", "version": "0.3" },
            "result": {
                "uids": ["399534"],
                "399534": {
                    "uid": "399534",
                    "name": "MSTN",
                    "description": "myostatin",
                    "organism": { "scientificname": "Sus scrofa", "commonname": "pig", "taxid": 9823 },
                    "chromosome": "15",
                    "maplocation": "",
                    "summary": ""
                }
            }
        })
    }
}
