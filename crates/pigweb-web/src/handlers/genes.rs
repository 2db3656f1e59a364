//! Gene lookup proxy.

use axum::{
    extract::{Path, State},
    Json,
};

use pigweb_common::ApiError;
use pigweb_genes::GeneRecord;

use crate::state::SharedState;

/// GET /api/genes/{symbol}: Look up a pig gene by symbol
pub async fn api_gene_lookup(
    State(state): State<SharedState>,
    Path(symbol): Path<String>,
) -> Result<Json<GeneRecord>, ApiError> {
    let lookup = state
        .gene_lookup
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("Gene lookup is disabled".to_string()))?;

    let record = lookup.lookup(&symbol).await.map_err(|e| {
        tracing::warn!(symbol = %symbol, error = %e, "Gene lookup failed");
        ApiError::from(e)
    })?;
    Ok(Json(record))
}
