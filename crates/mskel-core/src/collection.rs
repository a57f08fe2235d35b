//! The in-memory survey: shared header plus the task-unit list.
//!
//! Interactions are modeled as an explicit edit event applied to the
//! current collection, returning the next collection; there is no
//! shared mutable session object. Every application ends with a full
//! evaluation pass: header fields written through to every unit, the
//! at-least-one-entry rule restored, and every verdict map recomputed
//! from scratch.

use crate::classify::classify;
use crate::model::hazard::HazardEntry;
use crate::model::unit::{SharedHeader, TaskUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One user interaction against the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Edit {
    SetHeader(SharedHeader),
    AddUnit,
    RemoveUnit(usize),
    ReplaceUnit { index: usize, unit: Box<TaskUnit> },
    AddEntry { unit: usize },
    RemoveEntry { unit: usize, entry: usize },
    ReplaceEntry {
        unit: usize,
        entry: usize,
        value: Box<HazardEntry>,
    },
}

/// The full survey state exchanged with the file boundary and the CLI
/// session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyCollection {
    pub header: SharedHeader,
    pub units: Vec<TaskUnit>,
}

impl Default for SurveyCollection {
    /// One default unit; also the reset target after a failed load.
    fn default() -> Self {
        Self {
            header: SharedHeader::default(),
            units: vec![TaskUnit::default()],
        }
    }
}

impl SurveyCollection {
    /// Apply one edit, returning the next collection state. Index-based
    /// edits with out-of-range indices are silent no-ops.
    #[must_use]
    pub fn apply(mut self, edit: Edit) -> Self {
        debug!(?edit, "applying survey edit");
        match edit {
            Edit::SetHeader(header) => self.header = header,
            Edit::AddUnit => self.units.push(TaskUnit::default()),
            Edit::RemoveUnit(index) => {
                if index < self.units.len() {
                    self.units.remove(index);
                }
            }
            Edit::ReplaceUnit { index, unit } => {
                if let Some(slot) = self.units.get_mut(index) {
                    *slot = *unit;
                }
            }
            Edit::AddEntry { unit } => {
                if let Some(u) = self.units.get_mut(unit) {
                    u.add_entry();
                }
            }
            Edit::RemoveEntry { unit, entry } => {
                if let Some(u) = self.units.get_mut(unit) {
                    u.remove_entry(entry);
                }
            }
            Edit::ReplaceEntry { unit, entry, value } => {
                if let Some(u) = self.units.get_mut(unit) {
                    u.replace_entry(entry, *value);
                }
            }
        }
        self.evaluate();
        self
    }

    /// One full, non-overlapping evaluation pass over every unit:
    /// header propagation, entry-list repair, verdict recomputation.
    pub fn evaluate(&mut self) {
        if self.units.is_empty() {
            self.units.push(TaskUnit::default());
        }
        for unit in &mut self.units {
            unit.apply_header(&self.header);
            unit.ensure_entry();
            unit.verdicts = classify(unit);
        }
    }

    /// Consuming variant of [`Self::evaluate`] for pipeline use.
    #[must_use]
    pub fn evaluated(mut self) -> Self {
        self.evaluate();
        self
    }
}
