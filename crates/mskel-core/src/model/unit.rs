//! Task units: one unit of work being assessed.

use super::ParseEnumError;
use super::hazard::HazardEntry;
use crate::verdict::VerdictMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::{fmt, str::FromStr};

/// Separator used when serializing the protective-gear set into a
/// single cell. Part of the file contract.
pub const GEAR_SEPARATOR: &str = ", ";

/// Day shift or rotating shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkPattern {
    #[default]
    Day,
    Rotating,
}

impl WorkPattern {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "주간",
            Self::Rotating => "교대",
        }
    }
}

impl fmt::Display for WorkPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkPattern {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "주간" => Ok(Self::Day),
            "교대" => Ok(Self::Rotating),
            _ => Err(ParseEnumError {
                expected: "work pattern",
                got: s.to_string(),
            }),
        }
    }
}

/// The fixed protective-gear catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtectiveGear {
    KneePad,
    WristGuard,
    BackBelt,
    Gaiters,
    Other,
}

impl ProtectiveGear {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KneePad => "무릎보호대",
            Self::WristGuard => "손목보호대",
            Self::BackBelt => "허리보호대",
            Self::Gaiters => "각반",
            Self::Other => "기타",
        }
    }

    /// Serialize a gear set into a single `", "`-joined cell value.
    #[must_use]
    pub fn join(set: &BTreeSet<Self>) -> String {
        set.iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join(GEAR_SEPARATOR)
    }

    /// Split a joined cell value back into a gear set. Unknown names
    /// are dropped rather than erroring.
    #[must_use]
    pub fn split(joined: &str) -> BTreeSet<Self> {
        joined
            .split(GEAR_SEPARATOR.trim())
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    }
}

impl fmt::Display for ProtectiveGear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtectiveGear {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "무릎보호대" => Ok(Self::KneePad),
            "손목보호대" => Ok(Self::WristGuard),
            "허리보호대" => Ok(Self::BackBelt),
            "각반" => Ok(Self::Gaiters),
            "기타" => Ok(Self::Other),
            _ => Err(ParseEnumError {
                expected: "protective gear",
                got: s.to_string(),
            }),
        }
    }
}

/// Header fields shared by every unit in a survey. Whenever these
/// change they are written through to every unit in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SharedHeader {
    pub company: String,
    pub division: String,
    pub class: String,
}

/// One unit of work within a company/division/class, owning its hazard
/// entries and the derived verdict map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskUnit {
    pub company: String,
    pub division: String,
    pub class: String,
    pub process_name: String,
    pub description: String,
    pub worker_count: u32,
    pub worker_names: String,
    pub work_pattern: WorkPattern,
    pub daily_hours: f64,
    pub gear: BTreeSet<ProtectiveGear>,
    pub author: String,
    pub contact: String,
    pub entries: Vec<HazardEntry>,
    /// Derived from `entries`; recomputed in full on every evaluation,
    /// never edited independently.
    pub verdicts: VerdictMap,
}

impl Default for TaskUnit {
    fn default() -> Self {
        Self {
            company: String::new(),
            division: String::new(),
            class: String::new(),
            process_name: String::new(),
            description: String::new(),
            worker_count: 1,
            worker_names: String::new(),
            work_pattern: WorkPattern::Day,
            daily_hours: 0.0,
            gear: BTreeSet::new(),
            author: String::new(),
            contact: String::new(),
            entries: vec![HazardEntry::Unset],
            verdicts: VerdictMap::default(),
        }
    }
}

impl TaskUnit {
    /// Append a blank (unset) hazard entry.
    pub fn add_entry(&mut self) {
        self.entries.push(HazardEntry::Unset);
    }

    /// Remove the entry at `index`. Out-of-range indices are a silent
    /// no-op; callers are expected to guard.
    pub fn remove_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
        self.ensure_entry();
    }

    /// Replace the entry at `index` wholesale. Silent no-op when out of
    /// range.
    pub fn replace_entry(&mut self, index: usize, entry: HazardEntry) {
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = entry;
        }
    }

    /// Overwrite the shared header fields on this unit.
    pub fn apply_header(&mut self, header: &SharedHeader) {
        self.company = header.company.clone();
        self.division = header.division.clone();
        self.class = header.class.clone();
    }

    /// Downstream consumers always see at least one entry.
    pub fn ensure_entry(&mut self) {
        if self.entries.is_empty() {
            self.entries.push(HazardEntry::Unset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hazard::HazardType;

    #[test]
    fn default_unit_has_one_blank_entry_and_one_worker() {
        let unit = TaskUnit::default();
        assert_eq!(unit.worker_count, 1);
        assert_eq!(unit.entries.len(), 1);
        assert_eq!(unit.entries[0].hazard_type(), HazardType::Unset);
        assert!(unit.verdicts.is_all_no());
    }

    #[test]
    fn remove_entry_out_of_range_is_silent() {
        let mut unit = TaskUnit::default();
        unit.remove_entry(5);
        assert_eq!(unit.entries.len(), 1);
    }

    #[test]
    fn remove_last_entry_synthesizes_a_blank_one() {
        let mut unit = TaskUnit::default();
        unit.remove_entry(0);
        assert_eq!(unit.entries.len(), 1);
        assert_eq!(unit.entries[0], HazardEntry::Unset);
    }

    #[test]
    fn apply_header_overwrites_shared_fields() {
        let mut unit = TaskUnit {
            company: "이전회사".into(),
            ..TaskUnit::default()
        };
        let header = SharedHeader {
            company: "한빛중공업".into(),
            division: "조립1부".into(),
            class: "용접반".into(),
        };
        unit.apply_header(&header);
        assert_eq!(unit.company, "한빛중공업");
        assert_eq!(unit.division, "조립1부");
        assert_eq!(unit.class, "용접반");
    }

    #[test]
    fn gear_set_joins_and_splits_on_the_same_delimiter() {
        let set: BTreeSet<_> = [
            ProtectiveGear::KneePad,
            ProtectiveGear::BackBelt,
            ProtectiveGear::Other,
        ]
        .into();
        let joined = ProtectiveGear::join(&set);
        assert_eq!(joined, "무릎보호대, 허리보호대, 기타");
        assert_eq!(ProtectiveGear::split(&joined), set);
    }

    #[test]
    fn gear_split_drops_unknown_names() {
        let set = ProtectiveGear::split("무릎보호대, 우주복");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&ProtectiveGear::KneePad));
        assert!(ProtectiveGear::split("").is_empty());
    }

    #[test]
    fn work_pattern_roundtrips() {
        for p in [WorkPattern::Day, WorkPattern::Rotating] {
            assert_eq!(p.to_string().parse::<WorkPattern>().unwrap(), p);
        }
        assert!("야간".parse::<WorkPattern>().is_err());
    }
}
