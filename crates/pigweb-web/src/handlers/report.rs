//! Printable report download.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use pigweb_common::protocol::ProtocolDraft;
use pigweb_common::ApiError;
use pigweb_report::PrintableReport;

use crate::extract::ApiJson;
use crate::handlers::evaluate::evaluate_draft;
use crate::state::SharedState;

/// POST /api/report: Evaluate a protocol and export the printable report
pub async fn api_report(
    State(state): State<SharedState>,
    ApiJson(draft): ApiJson<ProtocolDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let evaluation = evaluate_draft(draft)?;
    let report = PrintableReport::new(
        state.config.report.title.clone(),
        evaluation.summary,
        evaluation.matrix,
    );
    let body = state.exporter.export(&report)?;

    tracing::info!(reference = %report.reference, "Report exported");
    Ok((
        [
            (header::CONTENT_TYPE, state.exporter.content_type()),
            (header::CONTENT_DISPOSITION, "inline; filename=\"pigweb-report.html\""),
        ],
        body,
    ))
}
