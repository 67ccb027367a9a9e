//! Pure projection of the orchestrator state into the result table.
//!
//! No state of its own: the same snapshot always projects to the same view.

use crate::orchestrator::{Phase, Snapshot};

pub const PLACEHOLDER_MESSAGE: &str = "No diagnoses available. Click 'Diagnose' to get started.";

/// Rows whose parsed confidence is below this render muted.
pub const MUTED_CONFIDENCE_THRESHOLD: i64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Loading,
    Placeholder { message: &'static str },
    Error { message: String },
    Table { rows: Vec<ResultRow> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// 1-based position in the table.
    pub index: usize,
    pub name: String,
    pub confidence_level: String,
    pub explanation: String,
    /// True when the confidence parses and is below the threshold;
    /// unparseable confidence renders normally.
    pub muted: bool,
}

pub fn project_view(snapshot: &Snapshot) -> ResultView {
    if snapshot.phase == Phase::Submitting {
        return ResultView::Loading;
    }

    if let Some(result) = &snapshot.result
        && !result.is_empty()
    {
        let rows = result
            .iter()
            .enumerate()
            .map(|(i, candidate)| ResultRow {
                index: i + 1,
                name: candidate.name.clone(),
                confidence_level: candidate.confidence_level.clone(),
                explanation: candidate.explanation.clone(),
                muted: candidate
                    .confidence_percent()
                    .is_some_and(|p| p < MUTED_CONFIDENCE_THRESHOLD),
            })
            .collect();
        return ResultView::Table { rows };
    }

    if let Some(error) = &snapshot.error {
        return ResultView::Error {
            message: error.clone(),
        };
    }

    ResultView::Placeholder {
        message: PLACEHOLDER_MESSAGE,
    }
}
