use mentis_session::error::SessionError;
use mentis_session::history::HistoryEditor;
use mentis_session::store::Session;
use mentis_session::symptoms::SymptomEditor;

#[test]
fn handle_outside_session_scope_fails_loudly() {
    let session = Session::new();
    let handle = session.handle();
    drop(session);

    assert_eq!(
        handle.read(|_| ()).unwrap_err(),
        SessionError::Closed
    );
    assert_eq!(
        handle.write(|_| ()).unwrap_err(),
        SessionError::Closed
    );
    assert_eq!(
        handle.diagnosis_request().unwrap_err().to_string(),
        "session state accessed outside an active session scope"
    );
}

#[test]
fn editor_mutations_are_visible_to_all_readers() {
    let session = Session::new();
    let mut symptoms = SymptomEditor::new(session.handle());
    let history = HistoryEditor::new(session.handle());
    let reader = session.handle();

    symptoms.toggle_catalog("Anxiety").unwrap();
    symptoms.set_severity(0, 6).unwrap();
    symptoms.set_duration(0, 3).unwrap();
    history.set_family_history("none of note").unwrap();

    let request = reader.diagnosis_request().unwrap();
    assert_eq!(request.symptoms.len(), 1);
    assert_eq!(request.symptoms[0].name, "Anxiety");
    assert_eq!(request.symptoms[0].severity, 6);
    assert_eq!(request.symptoms[0].duration, 3);
    assert_eq!(request.family_history, "none of note");
    assert_eq!(request.past_diagnosis, "");
}

#[test]
fn a_new_session_starts_empty() {
    let session = Session::new();
    let request = session.handle().diagnosis_request().unwrap();
    assert!(request.symptoms.is_empty());
    assert_eq!(request.family_history, "");
    assert_eq!(request.past_diagnosis, "");
    assert_eq!(request.medication_history, "");
}
