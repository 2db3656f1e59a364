//! Shared application state for the web server.

use std::sync::Arc;

use pigweb_common::{AppConfig, Result};
use pigweb_genes::{GeneLookup, NcbiGeneClient};
use pigweb_report::{HtmlReportExporter, ReportExporter};

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` when gene lookup is disabled in config.
    pub gene_lookup: Option<Arc<dyn GeneLookup>>,
    pub exporter: Arc<dyn ReportExporter>,
}

impl AppState {
    /// Build the production state: NCBI lookup and HTML report export.
    pub fn new(config: AppConfig) -> Result<Self> {
        let gene_lookup: Option<Arc<dyn GeneLookup>> = if config.gene_lookup.enabled {
            Some(Arc::new(NcbiGeneClient::new(&config.gene_lookup)?))
        } else {
            None
        };
        let exporter = Arc::new(HtmlReportExporter::new()?);
        Ok(Self::with_components(config, gene_lookup, exporter))
    }

    pub fn with_components(
        config: AppConfig,
        gene_lookup: Option<Arc<dyn GeneLookup>>,
        exporter: Arc<dyn ReportExporter>,
    ) -> Self {
        Self { config, gene_lookup, exporter }
    }
}

pub type SharedState = Arc<AppState>;
