//! Diagnosis prompt assembly.
//!
//! Builds the single user message sent to the model: a numbered symptom
//! list, the three history fields (placeholder-substituted when empty), and
//! the instruction to answer with a raw JSON array of candidates.

use mentis_core::models::diagnosis::DiagnosisRequest;

/// Substituted for any history field the user left empty.
pub const NO_DATA_PLACEHOLDER: &str = "No data provided.";

const RETURN_FORMAT_INSTRUCTION: &str = r#"Using official **DSM-5** and **ICD-11** criteria, suggest **5-6 potential diagnoses**.
For each diagnosis, include:
- **Name**
- **Confidence Level (%)**
- **Explanation**

**Return Format:** JSON array, structured as:
```json
[
  {
    "name": "Generalized Anxiety Disorder",
    "confidenceLevel": "85%",
    "explanation": "The patient exhibits persistent anxiety and excessive worry lasting over 12 months, along with physical symptoms such as fatigue and changes in appetite."
  }
]
```
Only return the **JSON array** without any extra text."#;

/// Render the full prompt for one diagnosis request.
pub fn build_diagnosis_prompt(request: &DiagnosisRequest) -> String {
    let symptom_details = request
        .symptoms
        .iter()
        .enumerate()
        .map(|(index, symptom)| {
            format!(
                "{}. **{}**\n   - **Severity:** {}\n   - **Duration:** {} months",
                index + 1,
                symptom.name,
                symptom.severity,
                symptom.duration
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Based on the following details:\n\n\
         **Symptoms:**\n\
         {symptom_details}\n\n\
         **Family History:** {family}\n\
         **Past Diagnosis:** {past}\n\
         **Medication History:** {medication}\n\n\
         {RETURN_FORMAT_INSTRUCTION}",
        family = or_placeholder(&request.family_history),
        past = or_placeholder(&request.past_diagnosis),
        medication = or_placeholder(&request.medication_history),
    )
}

fn or_placeholder(field: &str) -> &str {
    if field.is_empty() {
        NO_DATA_PLACEHOLDER
    } else {
        field
    }
}
