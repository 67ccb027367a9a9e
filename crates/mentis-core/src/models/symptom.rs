use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Upper bound of the severity scale.
pub const SEVERITY_MAX: u8 = 10;

/// Upper bound of the duration scale, in months.
pub const DURATION_MAX: u8 = 24;

/// One reported symptom with its intensity and duration.
///
/// Zero severity or duration means "not provided" — valid submissions carry
/// values in `1..=SEVERITY_MAX` / `1..=DURATION_MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub name: String,
    pub severity: u8,
    /// Months.
    pub duration: u8,
}
