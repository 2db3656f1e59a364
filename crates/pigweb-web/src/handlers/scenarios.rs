//! Research scenario presets and the science/harm/cost balance meter.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use pigweb_common::ApiError;
use pigweb_scoring::balance::{find_scenario, BalanceReading, ScenarioPreset, DEFAULT_SLIDER, SCENARIOS};

#[derive(Debug, Serialize)]
pub struct ScenarioDetail {
    pub preset: ScenarioPreset,
    pub balance: BalanceReading,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub science: Option<f64>,
    pub harm: Option<f64>,
    pub money: Option<f64>,
}

/// GET /api/scenarios: List all presets
pub async fn api_scenarios() -> Json<&'static [ScenarioPreset]> {
    Json(SCENARIOS)
}

/// GET /api/scenarios/{name}: One preset with its balance reading
pub async fn api_scenario_detail(
    Path(name): Path<String>,
) -> Result<Json<ScenarioDetail>, ApiError> {
    let preset = find_scenario(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown research scenario: {}", name)))?;
    let balance = BalanceReading::from_scenario(preset);
    Ok(Json(ScenarioDetail {
        preset: *preset,
        message: balance.verdict.message(),
        balance,
    }))
}

/// GET /api/balance: Balance reading for arbitrary slider positions
pub async fn api_balance(Query(q): Query<BalanceQuery>) -> Json<BalanceReading> {
    Json(BalanceReading::compute(
        q.science.unwrap_or(DEFAULT_SLIDER),
        q.harm.unwrap_or(DEFAULT_SLIDER),
        q.money.unwrap_or(DEFAULT_SLIDER),
    ))
}
