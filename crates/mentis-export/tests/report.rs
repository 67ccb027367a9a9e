use jiff::Timestamp;

use mentis_core::models::diagnosis::DiagnosisCandidate;
use mentis_export::error::ExportError;
use mentis_export::pdf::generate_pdf;
use mentis_export::render::{REPORT_TEMPLATE, render_report};
use mentis_export::report::{DiagnosisReport, REPORT_TITLE, export_diagnoses_docx};

fn candidate(name: &str, confidence: &str, explanation: &str) -> DiagnosisCandidate {
    DiagnosisCandidate {
        name: name.to_string(),
        confidence_level: confidence.to_string(),
        explanation: explanation.to_string(),
    }
}

fn sample_result() -> Vec<DiagnosisCandidate> {
    vec![
        candidate("Generalized Anxiety Disorder", "85%", "Persistent worry."),
        candidate("Adjustment Disorder", "40%", "Recent stressor."),
    ]
}

fn generated_at() -> Timestamp {
    "2026-08-08T12:00:00Z".parse().expect("timestamp")
}

#[test]
fn exporting_an_empty_result_fails_gracefully() {
    let err = DiagnosisReport::from_result(&[], generated_at()).unwrap_err();
    assert!(matches!(err, ExportError::EmptyResult));
    assert_eq!(err.to_string(), "No diagnoses to download.");

    assert!(matches!(
        export_diagnoses_docx(&[], generated_at()),
        Err(ExportError::EmptyResult)
    ));
}

#[test]
fn report_entries_keep_result_order_and_numbering() {
    let report = DiagnosisReport::from_result(&sample_result(), generated_at()).unwrap();

    assert_eq!(report.title, REPORT_TITLE);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].index, 1);
    assert_eq!(report.entries[0].name, "Generalized Anxiety Disorder");
    assert_eq!(report.entries[1].index, 2);
    assert_eq!(report.entries[1].confidence_level, "40%");
}

#[test]
fn rendered_report_lists_every_candidate() {
    let report = DiagnosisReport::from_result(&sample_result(), generated_at()).unwrap();
    let rendered = render_report("report", REPORT_TEMPLATE, &report).unwrap();

    assert!(rendered.starts_with("# Diagnoses Report"));
    assert!(rendered.contains("Generated 2026-08-08T12:00:00Z"));

    let first = rendered
        .find("## 1. Generalized Anxiety Disorder")
        .expect("first entry missing");
    let second = rendered
        .find("## 2. Adjustment Disorder")
        .expect("second entry missing");
    assert!(first < second);

    assert!(rendered.contains("- **Confidence Level:** 85%"));
    assert!(rendered.contains("- **Explanation:** Recent stressor."));
}

#[test]
fn docx_export_produces_a_zip_container() {
    let bytes = export_diagnoses_docx(&sample_result(), generated_at()).unwrap();
    // OOXML documents are ZIP archives.
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn bad_template_is_a_parse_error() {
    let report = DiagnosisReport::from_result(&sample_result(), generated_at()).unwrap();
    let err = render_report("report", "{% for x in %}", &report).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn pdf_generation_is_still_pending() {
    assert!(matches!(
        generate_pdf("# Diagnoses Report"),
        Err(ExportError::Pdf(_))
    ));
}
