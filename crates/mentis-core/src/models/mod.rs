pub mod cost;
pub mod diagnosis;
pub mod history;
pub mod symptom;
pub mod token_count;
