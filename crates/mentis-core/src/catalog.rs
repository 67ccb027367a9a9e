//! The fixed symptom catalog offered by the selection editor.

/// Number of symptom slots a session can hold.
pub const SYMPTOM_SLOTS: usize = 5;

/// Catalog entries selectable by checkbox. Free-text entry is also allowed;
/// the catalog only drives the checked-selection set.
pub const SYMPTOM_CATALOG: [&str; 20] = [
    "Depressed mood",
    "Loss of interest",
    "Change in appetite",
    "Sleep disturbance",
    "Fatigue",
    "Difficulty concentrating",
    "Anxiety",
    "Irritability",
    "Excessive worry",
    "Panic attacks",
    "Obsessive thoughts",
    "Compulsive behaviors",
    "Mood swings",
    "Hyperactivity",
    "Impulsivity",
    "Hallucinations",
    "Delusions",
    "Grandiosity",
    "Flight of ideas",
    "Decreased need for sleep",
];

/// Whether `name` is one of the catalog entries (exact match).
pub fn is_catalog_symptom(name: &str) -> bool {
    SYMPTOM_CATALOG.contains(&name)
}
