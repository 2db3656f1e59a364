//! Printable report and the export capability that renders it.

use chrono::{Local, NaiveDate};
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use uuid::Uuid;

use pigweb_common::{PigwebError, Result};

use crate::footnotes::{SCENARIO_FOOTNOTE, SCENARIO_FOOTNOTE_TITLE, SPECIES_FOOTNOTE, SPECIES_FOOTNOTE_TITLE};
use crate::matrix::MatrixRow;

const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

/// Everything the printed report shows.
#[derive(Debug, Clone, Serialize)]
pub struct PrintableReport {
    pub reference: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub rows: Vec<MatrixRow>,
}

impl PrintableReport {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, rows: Vec<MatrixRow>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            title: title.into(),
            date: Local::now().date_naive(),
            summary: summary.into(),
            rows,
        }
    }

    /// Date in en-GB form, e.g. 18/10/2026.
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Print/export capability injected into callers.
pub trait ReportExporter: Send + Sync {
    /// MIME type of the exported document.
    fn content_type(&self) -> &'static str;

    fn export(&self, report: &PrintableReport) -> Result<String>;
}

/// Renders the report as a self-contained, print-ready HTML page.
pub struct HtmlReportExporter {
    env: Environment<'static>,
}

impl HtmlReportExporter {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template("report.html", REPORT_TEMPLATE)
            .map_err(|e| PigwebError::Render(e.to_string()))?;
        Ok(Self { env })
    }
}

impl ReportExporter for HtmlReportExporter {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn export(&self, report: &PrintableReport) -> Result<String> {
        let template = self
            .env
            .get_template("report.html")
            .map_err(|e| PigwebError::Render(e.to_string()))?;

        let html = template
            .render(context! {
                title => &report.title,
                date => report.formatted_date(),
                reference => report.reference.to_string(),
                summary => &report.summary,
                rows => &report.rows,
                species_title => SPECIES_FOOTNOTE_TITLE,
                species_note => SPECIES_FOOTNOTE,
                scenario_title => SCENARIO_FOOTNOTE_TITLE,
                scenario_note => SCENARIO_FOOTNOTE,
            })
            .map_err(|e| PigwebError::Render(e.to_string()))?;

        tracing::debug!(reference = %report.reference, bytes = html.len(), "Report rendered");
        Ok(html)
    }
}
