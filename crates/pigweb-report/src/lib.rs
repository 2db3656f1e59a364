//! pigweb-report: Presentation of evaluation results.
//!
//! Consumes the scoring engine's output and produces:
//!   - regulation matrix rows with status icons
//!   - the plain-text non-technical summary
//!   - the printable report, through an injectable `ReportExporter`

pub mod matrix;
pub mod summary;
pub mod footnotes;
pub mod export;

pub use export::{HtmlReportExporter, PrintableReport, ReportExporter};
pub use matrix::{build_matrix, law_lines, MatrixRow, StatusTone};
pub use summary::generate_summary;
