//! Report assembly for the diagnosis table export.
//!
//! A pure formatting operation over an existing result: the report never
//! mutates session state, and an empty result is a user-facing error
//! rather than an empty document.

use jiff::Timestamp;
use serde::Serialize;
use tracing::info;

use mentis_core::models::diagnosis::DiagnosisCandidate;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::render::{REPORT_TEMPLATE, render_report};
use crate::styles::DocumentStyles;

pub const REPORT_TITLE: &str = "Diagnoses Report";

/// Context handed to the report template.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub title: String,
    pub generated_at: String,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// 1-based position in the table.
    pub index: usize,
    pub name: String,
    pub confidence_level: String,
    pub explanation: String,
}

impl DiagnosisReport {
    pub fn from_result(
        candidates: &[DiagnosisCandidate],
        generated_at: Timestamp,
    ) -> Result<Self, ExportError> {
        if candidates.is_empty() {
            return Err(ExportError::EmptyResult);
        }

        let entries = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| ReportEntry {
                index: i + 1,
                name: candidate.name.clone(),
                confidence_level: candidate.confidence_level.clone(),
                explanation: candidate.explanation.clone(),
            })
            .collect();

        Ok(Self {
            title: REPORT_TITLE.to_string(),
            generated_at: generated_at.to_string(),
            entries,
        })
    }
}

/// Render the current result into a paginated DOCX document with the
/// default template and styles.
pub fn export_diagnoses_docx(
    candidates: &[DiagnosisCandidate],
    generated_at: Timestamp,
) -> Result<Vec<u8>, ExportError> {
    let report = DiagnosisReport::from_result(candidates, generated_at)?;
    let rendered = render_report("report", REPORT_TEMPLATE, &report)?;
    let bytes = generate_docx(&rendered, &DocumentStyles::default())?;

    info!(
        entries = report.entries.len(),
        bytes = bytes.len(),
        "diagnosis report exported"
    );

    Ok(bytes)
}
