use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free-text patient history. Every field may be empty; the service
/// substitutes a placeholder at prompt time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PatientHistory {
    pub family_history: String,
    pub past_diagnosis: String,
    pub medication_history: String,
}
