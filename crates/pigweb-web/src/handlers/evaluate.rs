//! Protocol evaluation API.

use axum::Json;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

use pigweb_common::protocol::{ProtocolDraft, ProtocolInput};
use pigweb_common::ApiError;
use pigweb_report::{build_matrix, generate_summary, MatrixRow};
use pigweb_scoring::balance::{BalanceReading, DEFAULT_SLIDER};
use pigweb_scoring::{evaluate, RegulationFinding, ScoreResult, Verdict};

use crate::extract::ApiJson;

/// Body of `POST /api/evaluate`: the protocol fields plus the cost slider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(flatten)]
    pub protocol: ProtocolDraft,
    /// Research cost slider, 0–100. Midpoint when absent.
    pub money: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub input: ProtocolInput,
    pub verdict: Verdict,
    pub score: ScoreResult,
    pub findings: Vec<RegulationFinding>,
    pub matrix: Vec<MatrixRow>,
    pub balance: BalanceReading,
    pub summary: String,
}

/// Evaluate a protocol and build every presentation artefact from it.
pub fn assemble(input: ProtocolInput, money: f64) -> EvaluationResponse {
    let evaluation = evaluate(&input);
    let verdict = Verdict::from_score(&evaluation.score);
    let summary = generate_summary(&input, &verdict.outcome, &evaluation.findings);

    EvaluationResponse {
        verdict,
        score: evaluation.score,
        matrix: build_matrix(&evaluation.findings),
        balance: BalanceReading::from_score(&evaluation.score, money),
        findings: evaluation.findings,
        summary,
        input,
    }
}

/// Convert a draft and assemble the result with the default cost slider.
pub fn evaluate_draft(draft: ProtocolDraft) -> Result<EvaluationResponse, ApiError> {
    evaluate_draft_with(draft, |input| assemble(input, DEFAULT_SLIDER))
}

/// Convert a draft and run `assembler` on it. A panic inside the assembler
/// is reported as `ApiError::CalculationFailed`.
pub fn evaluate_draft_with<F>(draft: ProtocolDraft, assembler: F) -> Result<EvaluationResponse, ApiError>
where
    F: FnOnce(ProtocolInput) -> EvaluationResponse,
{
    let input = draft.into_input()?;
    panic::catch_unwind(AssertUnwindSafe(|| assembler(input))).map_err(|_| {
        error!("Evaluation panicked while assembling results");
        ApiError::CalculationFailed
    })
}

/// POST /api/evaluate: score a protocol and derive its regulation matrix
pub async fn api_evaluate(
    ApiJson(req): ApiJson<EvaluateRequest>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let money = req.money.unwrap_or(DEFAULT_SLIDER);
    let response = evaluate_draft_with(req.protocol, |input| assemble(input, money))?;
    info!(
        classification = ?response.score.classification,
        ratio = response.score.ratio,
        money,
        "Protocol evaluated"
    );
    Ok(Json(response))
}
