use mentis_core::error::ValidationError;
use mentis_core::models::diagnosis::DiagnosisRequest;
use mentis_core::models::symptom::Symptom;
use mentis_core::validate::validate_request;

fn symptom(name: &str, severity: u8, duration: u8) -> Symptom {
    Symptom {
        name: name.to_string(),
        severity,
        duration,
    }
}

fn request_with(symptoms: Vec<Symptom>) -> DiagnosisRequest {
    DiagnosisRequest {
        symptoms,
        ..DiagnosisRequest::default()
    }
}

#[test]
fn empty_symptom_list_is_rejected() {
    let err = validate_request(&request_with(vec![])).unwrap_err();
    assert_eq!(err, ValidationError::NoSymptoms);
    assert_eq!(err.to_string(), "Please select at least one symptom.");
}

#[test]
fn in_range_lists_of_every_length_pass() {
    for len in 1..=5 {
        let symptoms: Vec<Symptom> = (0..len)
            .map(|i| symptom(&format!("Symptom {i}"), 1 + (i as u8 % 10), 1 + (i as u8 % 24)))
            .collect();
        assert!(validate_request(&request_with(symptoms)).is_ok());
    }
}

#[test]
fn boundary_values_pass() {
    let symptoms = vec![symptom("Anxiety", 1, 1), symptom("Fatigue", 10, 24)];
    assert!(validate_request(&request_with(symptoms)).is_ok());
}

#[test]
fn zero_severity_is_rejected_and_names_the_symptom() {
    let symptoms = vec![symptom("Anxiety", 5, 3), symptom("Fatigue", 0, 3)];
    let err = validate_request(&request_with(symptoms)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingSeverityOrDuration {
            name: "Fatigue".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Please provide severity and duration for the symptom: Fatigue."
    );
}

#[test]
fn zero_duration_is_rejected() {
    let symptoms = vec![symptom("Irritability", 5, 0)];
    assert!(matches!(
        validate_request(&request_with(symptoms)),
        Err(ValidationError::MissingSeverityOrDuration { name }) if name == "Irritability"
    ));
}

#[test]
fn validation_reports_the_first_offending_symptom() {
    let symptoms = vec![symptom("A", 0, 1), symptom("B", 0, 0)];
    assert!(matches!(
        validate_request(&request_with(symptoms)),
        Err(ValidationError::MissingSeverityOrDuration { name }) if name == "A"
    ));
}
