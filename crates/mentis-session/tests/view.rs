use mentis_core::models::diagnosis::DiagnosisCandidate;
use mentis_session::orchestrator::{Phase, Snapshot};
use mentis_session::view::{PLACEHOLDER_MESSAGE, ResultView, project_view};

fn candidate(name: &str, confidence: &str) -> DiagnosisCandidate {
    DiagnosisCandidate {
        name: name.to_string(),
        confidence_level: confidence.to_string(),
        explanation: format!("{name} explanation"),
    }
}

fn snapshot(phase: Phase, result: Option<Vec<DiagnosisCandidate>>, error: Option<&str>) -> Snapshot {
    Snapshot {
        phase,
        result,
        error: error.map(str::to_string),
    }
}

#[test]
fn idle_without_result_or_error_shows_the_placeholder() {
    let view = project_view(&snapshot(Phase::Idle, None, None));
    assert_eq!(
        view,
        ResultView::Placeholder {
            message: PLACEHOLDER_MESSAGE
        }
    );
}

#[test]
fn submitting_shows_the_loading_state() {
    let view = project_view(&snapshot(Phase::Submitting, None, None));
    assert_eq!(view, ResultView::Loading);
}

#[test]
fn an_error_renders_until_the_next_success() {
    let view = project_view(&snapshot(Phase::Failed, None, Some("Missing API key")));
    assert_eq!(
        view,
        ResultView::Error {
            message: "Missing API key".to_string()
        }
    );
}

#[test]
fn low_confidence_rows_are_muted_individually() {
    let result = vec![
        candidate("Generalized Anxiety Disorder", "85%"),
        candidate("Adjustment Disorder", "40%"),
        candidate("Major Depressive Disorder", "50%"),
    ];
    let view = project_view(&snapshot(Phase::Succeeded, Some(result), None));

    let ResultView::Table { rows } = view else {
        panic!("expected a table");
    };
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].index, 1);
    assert!(!rows[0].muted);
    assert!(rows[1].muted);
    // Exactly at the threshold renders normally.
    assert!(!rows[2].muted);

    assert_eq!(rows[1].name, "Adjustment Disorder");
    assert_eq!(rows[1].confidence_level, "40%");
    assert_eq!(rows[1].explanation, "Adjustment Disorder explanation");
}

#[test]
fn unparseable_confidence_is_not_muted() {
    let result = vec![candidate("X", "N/A"), candidate("Y", "")];
    let ResultView::Table { rows } = project_view(&snapshot(Phase::Succeeded, Some(result), None))
    else {
        panic!("expected a table");
    };
    assert!(rows.iter().all(|row| !row.muted));
}

#[test]
fn an_empty_result_falls_back_to_the_placeholder() {
    let view = project_view(&snapshot(Phase::Succeeded, Some(vec![]), None));
    assert_eq!(
        view,
        ResultView::Placeholder {
            message: PLACEHOLDER_MESSAGE
        }
    );
}

#[test]
fn a_result_takes_precedence_over_a_stale_error() {
    let result = vec![candidate("X", "60%")];
    let view = project_view(&snapshot(Phase::Succeeded, Some(result), Some("old error")));
    assert!(matches!(view, ResultView::Table { .. }));
}
