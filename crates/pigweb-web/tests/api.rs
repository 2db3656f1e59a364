//! End-to-end tests for the HTTP API, driven through the router without a socket.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use pigweb_common::AppConfig;
use pigweb_genes::{GeneLookup, GeneRecord, MockGeneLookup};
use pigweb_report::HtmlReportExporter;
use pigweb_web::{router::build_router, state::AppState};

fn mstn() -> GeneRecord {
    GeneRecord {
        id: "399534".into(),
        name: "MSTN".into(),
        description: "myostatin".into(),
        organism: "Sus scrofa".into(),
        chromosome: Some("15".into()),
        map_location: None,
        summary: None,
    }
}

fn app_with(gene_lookup: Option<Arc<dyn GeneLookup>>) -> Router {
    let exporter = Arc::new(HtmlReportExporter::new().unwrap());
    build_router(AppState::with_components(AppConfig::default(), gene_lookup, exporter))
}

fn app() -> Router {
    app_with(Some(Arc::new(MockGeneLookup::new().with("MSTN", mstn()))))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn basic_pig_study() -> Value {
    json!({
        "goal": "basic",
        "procedure": "other",
        "species": "pigs",
        "numbers": "low",
        "severity": 1,
        "success_rate": "medium",
        "alternatives_exist": false,
        "xeno_flag": false
    })
}

#[tokio::test]
async fn test_evaluate_returns_verdict_matrix_and_summary() {
    let (status, body) = send(app(), post_json("/api/evaluate", &basic_pig_study())).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["score"]["classification"], "Approved");
    assert!((body["score"]["ratio"].as_f64().unwrap() - 4.5).abs() < 1e-9);
    assert_eq!(body["verdict"]["css_class"], "approved");
    assert_eq!(body["findings"][0]["rule_name"], "Directive 2010/63/EU");
    assert_eq!(body["findings"][0]["status"], "Applied");
    assert_eq!(body["findings"][1]["rule_name"], "Directive 2010/63/EU — Article 4");
    assert_eq!(body["findings"][1]["status"], "Compliant");
    assert_eq!(
        body["matrix"].as_array().unwrap().len(),
        body["findings"].as_array().unwrap().len()
    );
    assert!(body["summary"].as_str().unwrap().contains("Species: Pigs"));
}

#[tokio::test]
async fn test_evaluate_blocked_by_alternatives() {
    let mut payload = basic_pig_study();
    payload["alternatives_exist"] = json!(true);

    let (status, body) = send(app(), post_json("/api/evaluate", &payload)).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["score"]["classification"], "BlockedAlternatives");
    assert_eq!(body["score"]["benefit"], 0.0);
    assert_eq!(body["score"]["harm"], 100.0);
    assert_eq!(body["balance"]["verdict"], "harm_outweighs");
}

#[tokio::test]
async fn test_evaluate_incomplete_draft_is_unprocessable() {
    let payload = json!({ "species": "pigs", "alternatives_exist": false });
    let (status, body) = send(app(), post_json("/api/evaluate", &payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Please complete all required fields.");
}

#[tokio::test]
async fn test_evaluate_malformed_body_is_json_bad_request() {
    let mut payload = basic_pig_study();
    payload["species"] = json!("unicorns");

    let (status, body) = send(app(), post_json("/api/evaluate", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("unicorns"));

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/report")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(serde_json::from_slice::<Value>(&body).unwrap()["error"].is_string());
}

#[tokio::test]
async fn test_evaluate_uses_money_slider() {
    let mut payload = basic_pig_study();
    payload["severity"] = json!(2);
    payload["money"] = json!(100.0);

    let (status, body) = send(app(), post_json("/api/evaluate", &payload)).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["balance"]["money"], 100.0);
    assert_eq!(body["balance"]["verdict"], "borderline");
}

#[tokio::test]
async fn test_scenarios_list_and_detail() {
    let (status, list) = get_json(app(), "/api/scenarios").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 21);
    assert_eq!(list[0]["key"], "growth");

    let (status, detail) = get_json(app(), "/api/scenarios/growth").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["preset"]["science"], 70.0);
    assert_eq!(detail["balance"]["verdict"], "benefits_outweigh");
    assert_eq!(detail["message"], "Benefits clearly outweigh costs");

    let (status, _) = get_json(app(), "/api/scenarios/teleportation").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_balance_query() {
    let (status, reading) = get_json(app(), "/api/balance?science=10&harm=90&money=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reading["verdict"], "harm_outweighs");

    let (_, reading) = get_json(app(), "/api/balance").await;
    assert_eq!(reading["verdict"], "borderline");
    assert_eq!(reading["science"], 50.0);
}

#[tokio::test]
async fn test_gene_lookup_found_and_missing() {
    let (status, gene) = get_json(app(), "/api/genes/mstn").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gene["id"], "399534");
    assert_eq!(gene["chromosome"], "15");

    let (status, body) = get_json(app(), "/api/genes/TP53").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("TP53"));
}

#[tokio::test]
async fn test_gene_lookup_disabled() {
    let (status, _) = get_json(app_with(None), "/api/genes/MSTN").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_report_is_printable_html() {
    let req = post_json("/api/report", &basic_pig_study());
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Directive 2010"));
    assert!(html.contains("Ethical Outcome"));
}

#[tokio::test]
async fn test_calculator_page_renders() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("MATE-PIGWEB25"));
    assert!(html.contains("/api/evaluate"));
}
