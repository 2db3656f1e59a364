//! NCBI Gene E-utilities client.
//!
//! Endpoints used:
//!   esearch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi

use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use pigweb_common::config::GeneLookupConfig;
use pigweb_common::sandbox::SandboxClient as Client;
use pigweb_common::{PigwebError, Result};

use crate::{GeneLookup, GeneRecord};

const ESEARCH_URL:  &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

pub struct NcbiGeneClient {
    client: Client,
    organism: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl NcbiGeneClient {
    pub fn new(config: &GeneLookupConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        Ok(Self {
            client: Client::new(timeout)?,
            organism: config.organism.clone(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", "gene".to_string()),
            ("retmode", "json".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Search term restricting the symbol to the configured organism.
    pub fn search_term(&self, symbol: &str) -> String {
        format!("{}[sym] AND {}[orgn]", symbol, self.organism)
    }

    /// Run one request under the configured time box.
    async fn time_boxed<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| PigwebError::Timeout(self.timeout.as_secs()))?
    }

    #[instrument(skip(self))]
    async fn esearch(&self, symbol: &str) -> Result<Vec<String>> {
        let mut params = self.base_params();
        params.push(("term", self.search_term(symbol)));

        let resp = self.time_boxed(async {
            let resp: Value = self.client
                .get(ESEARCH_URL)?
                .query(&params)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            Ok::<_, PigwebError>(resp)
        })
        .await?;

        let ids = parse_esearch_ids(&resp);
        debug!(?ids, "NCBI esearch returned gene ids");
        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn esummary(&self, gene_id: &str) -> Result<Value> {
        let mut params = self.base_params();
        params.push(("id", gene_id.to_string()));

        self.time_boxed(async {
            let resp: Value = self.client
                .get(ESUMMARY_URL)?
                .query(&params)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            Ok::<_, PigwebError>(resp)
        })
        .await
    }
}

#[async_trait]
impl GeneLookup for NcbiGeneClient {
    async fn lookup(&self, symbol: &str) -> Result<GeneRecord> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(PigwebError::Lookup("Gene symbol is empty".to_string()));
        }

        let ids = self.esearch(symbol).await?;
        let Some(gene_id) = ids.first() else {
            warn!(symbol, organism = %self.organism, "Gene not found");
            return Err(PigwebError::GeneNotFound(symbol.to_string()));
        };

        let summary = self.esummary(gene_id).await?;
        parse_esummary(&summary, gene_id)
    }
}

/// Extract the id list from an esearch JSON response.
pub fn parse_esearch_ids(resp: &Value) -> Vec<String> {
    resp["esearchresult"]["idlist"]
        .as_array()
        .map(|ids| {
            ids.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn non_empty(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Build a `GeneRecord` from the esummary entry for `gene_id`.
pub fn parse_esummary(resp: &Value, gene_id: &str) -> Result<GeneRecord> {
    let info = &resp["result"][gene_id];
    if !info.is_object() {
        return Err(PigwebError::Lookup("Details not found for this gene.".to_string()));
    }

    Ok(GeneRecord {
        id: gene_id.to_string(),
        name: info["name"].as_str().unwrap_or_default().to_string(),
        description: info["description"].as_str().unwrap_or_default().to_string(),
        organism: info["organism"]["scientificname"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        chromosome: non_empty(&info["chromosome"]),
        map_location: non_empty(&info["maplocation"]),
        summary: non_empty(&info["summary"]),
    })
}
