use mentis_anthropic::prompt::{NO_DATA_PLACEHOLDER, build_diagnosis_prompt};
use mentis_core::models::diagnosis::DiagnosisRequest;
use mentis_core::models::symptom::Symptom;

fn two_symptom_request() -> DiagnosisRequest {
    DiagnosisRequest {
        symptoms: vec![
            Symptom {
                name: "Depressed mood".to_string(),
                severity: 8,
                duration: 6,
            },
            Symptom {
                name: "Fatigue".to_string(),
                severity: 4,
                duration: 12,
            },
        ],
        ..DiagnosisRequest::default()
    }
}

#[test]
fn empty_history_fields_render_the_placeholder() {
    let prompt = build_diagnosis_prompt(&two_symptom_request());

    assert_eq!(prompt.matches(NO_DATA_PLACEHOLDER).count(), 3);
    assert!(prompt.contains(&format!("**Family History:** {NO_DATA_PLACEHOLDER}")));
    assert!(prompt.contains(&format!("**Past Diagnosis:** {NO_DATA_PLACEHOLDER}")));
    assert!(prompt.contains(&format!("**Medication History:** {NO_DATA_PLACEHOLDER}")));
}

#[test]
fn symptoms_are_enumerated_in_order() {
    let prompt = build_diagnosis_prompt(&two_symptom_request());

    let first = prompt
        .find("1. **Depressed mood**")
        .expect("first symptom missing");
    let second = prompt.find("2. **Fatigue**").expect("second symptom missing");
    assert!(first < second);

    assert!(prompt.contains("- **Severity:** 8"));
    assert!(prompt.contains("- **Duration:** 6 months"));
    assert!(prompt.contains("- **Severity:** 4"));
    assert!(prompt.contains("- **Duration:** 12 months"));
}

#[test]
fn provided_history_is_embedded_verbatim() {
    let mut request = two_symptom_request();
    request.family_history = "Mother treated for depression".to_string();
    request.medication_history = "Sertraline 50mg".to_string();

    let prompt = build_diagnosis_prompt(&request);
    assert!(prompt.contains("**Family History:** Mother treated for depression"));
    assert!(prompt.contains("**Medication History:** Sertraline 50mg"));
    assert!(prompt.contains(&format!("**Past Diagnosis:** {NO_DATA_PLACEHOLDER}")));
    assert_eq!(prompt.matches(NO_DATA_PLACEHOLDER).count(), 1);
}

#[test]
fn prompt_demands_a_raw_json_array() {
    let prompt = build_diagnosis_prompt(&two_symptom_request());
    assert!(prompt.contains("DSM-5"));
    assert!(prompt.contains("ICD-11"));
    assert!(prompt.contains("5-6 potential diagnoses"));
    assert!(prompt.contains("Only return the **JSON array** without any extra text."));
}
