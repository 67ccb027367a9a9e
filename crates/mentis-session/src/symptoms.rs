//! Symptom slot editor.
//!
//! Five fixed slots, filled either by checking a catalog entry (first empty
//! slot) or by free-text entry. After every edit the non-empty slots are
//! recomputed in slot order and written to the session store as the current
//! symptom list.

use mentis_core::catalog::SYMPTOM_SLOTS;
use mentis_core::models::symptom::{DURATION_MAX, SEVERITY_MAX, Symptom};

use crate::error::EditorError;
use crate::store::SessionHandle;

/// One slot's working values. Zero severity/duration means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub name: String,
    pub severity: u8,
    pub duration: u8,
}

pub struct SymptomEditor {
    session: SessionHandle,
    slots: [Slot; SYMPTOM_SLOTS],
    checked: Vec<String>,
}

impl SymptomEditor {
    pub fn new(session: SessionHandle) -> Self {
        Self {
            session,
            slots: Default::default(),
            checked: Vec::new(),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.iter().any(|c| c == name)
    }

    /// Toggle a catalog entry. Checking fills the first empty slot; with no
    /// empty slot the toggle is a no-op. Checking a distinct entry while the
    /// selection is full is rejected with a user-facing warning and changes
    /// nothing. Unchecking clears exactly the slot holding the entry.
    pub fn toggle_catalog(&mut self, name: &str) -> Result<(), EditorError> {
        if self.checked.len() >= SYMPTOM_SLOTS && !self.is_checked(name) {
            return Err(EditorError::SelectionLimit);
        }

        if let Some(pos) = self.checked.iter().position(|c| c == name) {
            self.checked.remove(pos);
            if let Some(slot) = self.slots.iter_mut().find(|s| s.name == name) {
                *slot = Slot::default();
            }
            self.sync_store()?;
        } else if let Some(slot) = self.slots.iter_mut().find(|s| s.name.is_empty()) {
            slot.name = name.to_string();
            self.checked.push(name.to_string());
            self.sync_store()?;
        }

        Ok(())
    }

    /// Free-text edit of a slot's name. If the slot previously held a
    /// checked catalog entry and the typed value no longer matches it, the
    /// entry leaves the checked set.
    pub fn set_name(&mut self, slot: usize, value: &str) -> Result<(), EditorError> {
        let Some(s) = self.slots.get_mut(slot) else {
            return Ok(());
        };

        let previous = std::mem::replace(&mut s.name, value.to_string());
        if previous != value
            && let Some(pos) = self.checked.iter().position(|c| *c == previous)
        {
            self.checked.remove(pos);
        }

        self.sync_store()
    }

    /// Bounded severity input (0..=10). Out-of-range values are ignored.
    pub fn set_severity(&mut self, slot: usize, value: i64) -> Result<(), EditorError> {
        if !(0..=SEVERITY_MAX as i64).contains(&value) {
            return Ok(());
        }
        if let Some(s) = self.slots.get_mut(slot) {
            s.severity = value as u8;
            self.sync_store()?;
        }
        Ok(())
    }

    /// Bounded duration input (0..=24 months). Out-of-range values are
    /// ignored.
    pub fn set_duration(&mut self, slot: usize, value: i64) -> Result<(), EditorError> {
        if !(0..=DURATION_MAX as i64).contains(&value) {
            return Ok(());
        }
        if let Some(s) = self.slots.get_mut(slot) {
            s.duration = value as u8;
            self.sync_store()?;
        }
        Ok(())
    }

    fn sync_store(&self) -> Result<(), EditorError> {
        let symptoms: Vec<Symptom> = self
            .slots
            .iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| Symptom {
                name: s.name.clone(),
                severity: s.severity,
                duration: s.duration,
            })
            .collect();

        self.session.write(|state| state.symptoms = symptoms)?;
        Ok(())
    }
}
