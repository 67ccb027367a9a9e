use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::history::PatientHistory;
use super::symptom::Symptom;

/// The payload of `POST /api/getDiagnosis`.
///
/// All fields default so that an absent history field deserializes to an
/// empty string and an absent symptom list to an empty one — the latter is
/// then rejected by validation rather than by the JSON layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRequest {
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub family_history: String,
    #[serde(default)]
    pub past_diagnosis: String,
    #[serde(default)]
    pub medication_history: String,
}

impl DiagnosisRequest {
    pub fn new(symptoms: Vec<Symptom>, history: PatientHistory) -> Self {
        Self {
            symptoms,
            family_history: history.family_history,
            past_diagnosis: history.past_diagnosis,
            medication_history: history.medication_history,
        }
    }
}

/// One suggested diagnosis, produced by the upstream model.
///
/// Treated as opaque output: `confidence_level` and `explanation` default to
/// empty rather than failing the parse when the model omits them. The sole
/// numeric interpretation is [`DiagnosisCandidate::confidence_percent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisCandidate {
    pub name: String,
    /// Percentage-formatted, e.g. `"85%"`.
    #[serde(default)]
    pub confidence_level: String,
    #[serde(default)]
    pub explanation: String,
}

impl DiagnosisCandidate {
    /// Parse the leading integer of the confidence string, with the lenient
    /// semantics of a `parseInt`: skip leading whitespace, accept an
    /// optional sign, stop at the first non-digit. `None` when no digits.
    pub fn confidence_percent(&self) -> Option<i64> {
        let s = self.confidence_level.trim_start();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        let value: i64 = digits.parse().ok()?;
        Some(if negative { -value } else { value })
    }
}

/// Ordered candidate list, replaced wholesale on each request.
pub type DiagnosisResult = Vec<DiagnosisCandidate>;
