//! Hazard-cause entries.
//!
//! One entry records one observed ergonomic risk factor. Each hazard
//! type carries only its own field struct, so fields that do not apply
//! to the selected type cannot exist, let alone go stale; switching
//! type builds a fresh variant with defaulted fields. The few
//! sub-selections inside a variant (clause-10 extras, the static
//! posture block, cart push/pull fields) are reset by the setters or
//! modeled as nested sums.

use super::{ParseEnumError, normalize};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Selector suffix marking a repetitive clause compounded with static
/// posture (clause 12).
pub const STATIC_POSTURE_SUFFIX: &str = " + 정적자세(12호)";

/// Selector suffix marking a force clause compounded with push/pull
/// work (clause 12).
pub const PUSH_PULL_SUFFIX: &str = " + 밀기·당기기(12호)";

/// The four hazard kinds plus the not-yet-selected state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardType {
    #[default]
    Unset,
    Repetitive,
    Posture,
    Force,
    Contact,
}

impl HazardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "미선택",
            Self::Repetitive => "반복동작",
            Self::Posture => "부자연스러운 자세",
            Self::Force => "과도한 힘",
            Self::Contact => "접촉스트레스 등 기타",
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HazardType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "" | "미선택" => Ok(Self::Unset),
            "반복동작" => Ok(Self::Repetitive),
            "부자연스러운 자세" => Ok(Self::Posture),
            "과도한 힘" => Ok(Self::Force),
            "접촉스트레스 등 기타" => Ok(Self::Contact),
            _ => Err(ParseEnumError {
                expected: "hazard type",
                got: s.to_string(),
            }),
        }
    }
}

/// Statutory clause selector for repetitive-motion work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepetitiveClause {
    #[default]
    C1,
    C2,
    C6,
    C7,
    C10,
}

impl RepetitiveClause {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C1 => "(1호) 하루 4시간 이상 키보드·마우스를 조작하는 작업",
            Self::C2 => "(2호) 하루 총 2시간 이상 목·어깨·팔꿈치·손목·손으로 같은 동작을 반복하는 작업",
            Self::C6 => "(6호) 하루 총 2시간 이상 손가락으로 물건을 집어 옮기거나 쥐는 작업",
            Self::C7 => "(7호) 하루 총 2시간 이상 4.5kg 이상 물건을 한 손으로 들거나 쥐는 작업",
            Self::C10 => "(10호) 하루 총 2시간 이상·분당 2회 이상 4.5kg 이상 물체를 드는 작업",
        }
    }

    #[must_use]
    pub const fn clause_number(self) -> u8 {
        match self {
            Self::C1 => 1,
            Self::C2 => 2,
            Self::C6 => 6,
            Self::C7 => 7,
            Self::C10 => 10,
        }
    }
}

impl fmt::Display for RepetitiveClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepetitiveClause {
    type Err = ParseEnumError;

    /// Matches by `(N호` containment so label wording may drift between
    /// file versions. `(10호` is tested before `(1호`, which it
    /// contains.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains("(10호") {
            Ok(Self::C10)
        } else if s.contains("(1호") {
            Ok(Self::C1)
        } else if s.contains("(2호") {
            Ok(Self::C2)
        } else if s.contains("(6호") {
            Ok(Self::C6)
        } else if s.contains("(7호") {
            Ok(Self::C7)
        } else {
            Err(ParseEnumError {
                expected: "repetitive clause",
                got: s.to_string(),
            })
        }
    }
}

/// Statutory clause selector for awkward-posture work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PostureClause {
    #[default]
    C3,
    C4,
    C5,
}

impl PostureClause {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C3 => "(3호) 하루 총 2시간 이상 팔꿈치가 어깨 위에 있는 자세로 하는 작업",
            Self::C4 => "(4호) 하루 총 2시간 이상 목이나 허리를 구부리거나 트는 자세로 하는 작업",
            Self::C5 => "(5호) 하루 총 2시간 이상 쪼그려 앉거나 무릎을 굽힌 자세로 하는 작업",
        }
    }

    #[must_use]
    pub const fn clause_number(self) -> u8 {
        match self {
            Self::C3 => 3,
            Self::C4 => 4,
            Self::C5 => 5,
        }
    }
}

impl fmt::Display for PostureClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostureClause {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains("(3호") {
            Ok(Self::C3)
        } else if s.contains("(4호") {
            Ok(Self::C4)
        } else if s.contains("(5호") {
            Ok(Self::C5)
        } else {
            Err(ParseEnumError {
                expected: "posture clause",
                got: s.to_string(),
            })
        }
    }
}

/// Base statutory clause for excessive-force work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceBase {
    #[default]
    C8,
    C9,
}

impl ForceBase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C8 => "(8호) 하루 10회 이상 25kg 이상 물체를 드는 작업",
            Self::C9 => "(9호) 하루 25회 이상 10kg 이상 물체를 무릎 아래·어깨 위·팔을 뻗은 상태로 드는 작업",
        }
    }

    #[must_use]
    pub const fn clause_number(self) -> u8 {
        match self {
            Self::C8 => 8,
            Self::C9 => 9,
        }
    }
}

impl fmt::Display for ForceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Force clause selector: a base clause, optionally compounded with
/// push/pull work (clause 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForceClause {
    pub base: ForceBase,
    pub with_push_pull: bool,
}

impl fmt::Display for ForceClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())?;
        if self.with_push_pull {
            f.write_str(PUSH_PULL_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for ForceClause {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = if s.contains("(8호") {
            ForceBase::C8
        } else if s.contains("(9호") {
            ForceBase::C9
        } else {
            return Err(ParseEnumError {
                expected: "force clause",
                got: s.to_string(),
            });
        };
        Ok(Self {
            base,
            with_push_pull: s.contains("12호"),
        })
    }
}

/// Tri-state answer for the vibration-tool support-stand question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    #[default]
    Unset,
    Yes,
    No,
}

impl TriState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Yes => "유",
            Self::No => "무",
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriState {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "" => Ok(Self::Unset),
            "유" | "있음" | "예" => Ok(Self::Yes),
            "무" | "없음" | "아니오" => Ok(Self::No),
            _ => Err(ParseEnumError {
                expected: "tri-state",
                got: s.to_string(),
            }),
        }
    }
}

/// Static-posture sub-block of a compound repetitive selector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaticPosture {
    pub description: String,
    pub work_minutes: f64,
    pub rest_minutes: f64,
    pub body_part: String,
}

/// Fields for repetitive-motion work.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepetitiveWork {
    pub clause: RepetitiveClause,
    pub tool_name: String,
    pub tool_purpose: String,
    pub tool_weight_kg: f64,
    /// Free text ("수시로", "2시간" ...); not used by the engine.
    pub tool_usage_time: String,
    pub body_part: String,
    pub secs_per_cycle: f64,
    pub daily_reps: u32,
    /// Clause-10 only. Cleared when the selector leaves clause 10.
    pub object_weight_kg: f64,
    /// Clause-10 only. Cleared when the selector leaves clause 10.
    pub reps_per_minute: f64,
    /// `Some` marks the compound "+ 정적자세(12호)" selector.
    pub static_posture: Option<StaticPosture>,
}

impl RepetitiveWork {
    /// Derived total work time: `(sec/cycle * reps) / 60` minutes.
    #[must_use]
    pub fn total_minutes(&self) -> f64 {
        self.secs_per_cycle * f64::from(self.daily_reps) / 60.0
    }

    /// Change the clause selector, clearing the clause-10 extras when
    /// leaving clause 10 so they cannot go stale.
    pub fn set_clause(&mut self, clause: RepetitiveClause) {
        self.clause = clause;
        if clause != RepetitiveClause::C10 {
            self.object_weight_kg = 0.0;
            self.reps_per_minute = 0.0;
        }
    }

    /// Toggle the compound static-posture selector. Turning it off
    /// drops the static sub-fields.
    pub fn set_static_posture(&mut self, compound: bool) {
        if compound {
            if self.static_posture.is_none() {
                self.static_posture = Some(StaticPosture::default());
            }
        } else {
            self.static_posture = None;
        }
    }
}

/// Fields for awkward-posture work. Total minutes here is user-entered
/// free text, not derived.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PostureWork {
    pub clause: PostureClause,
    pub secs_per_cycle: f64,
    pub daily_reps: u32,
    pub total_minutes: String,
}

/// What pushes or pulls a manual cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CartAgent {
    #[default]
    Unset,
    Person,
    Powered,
    Other(String),
}

impl CartAgent {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Person => "사람이 밀고 당김",
            Self::Powered => "동력 보조",
            Self::Other(_) => "기타",
        }
    }
}

/// Transport method, applicable only under direct handling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    #[default]
    Unset,
    Manual,
    Cart {
        agent: CartAgent,
    },
}

impl Transport {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Manual => "인력 운반",
            Self::Cart { .. } => "대차 운반",
        }
    }
}

/// Handling method for a load. Transport only exists under direct
/// handling; selecting crane discards it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handling {
    #[default]
    Unset,
    Direct {
        transport: Transport,
    },
    Crane,
}

impl Handling {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Direct { .. } => "직접 취급",
            Self::Crane => "크레인 사용",
        }
    }
}

/// Fields for excessive-force work.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForceWork {
    pub clause: ForceClause,
    pub load_name: String,
    pub load_purpose: String,
    pub load_weight_kg: f64,
    /// Free text; the source evolutions disagree on whether this field
    /// was typed or free text, so it is kept permissive and parsed.
    pub daily_lifts: String,
    pub handling: Handling,
}

/// Vibration-tool sub-fields of a contact/other entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VibrationTool {
    pub tool_name: String,
    pub tool_purpose: String,
    pub work_minutes: f64,
    pub secs_per_cycle: f64,
    pub daily_count: u32,
    pub support_stand: TriState,
}

/// Contact-stress / other selector. The two selections carry disjoint
/// field sets, so switching swaps them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactClause {
    Impact { work_minutes: f64 },
    Vibration(VibrationTool),
}

impl Default for ContactClause {
    fn default() -> Self {
        Self::Impact { work_minutes: 0.0 }
    }
}

impl ContactClause {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Impact { .. } => "(11호) 손·무릎으로 반복 충격을 가하는 작업",
            Self::Vibration(_) => "(12호) 진동공구를 사용하는 작업",
        }
    }
}

/// One observed hazard cause: a tagged union with one variant per
/// hazard type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardEntry {
    #[default]
    Unset,
    Repetitive(RepetitiveWork),
    Posture(PostureWork),
    Force(ForceWork),
    Contact(ContactClause),
}

impl HazardEntry {
    #[must_use]
    pub const fn hazard_type(&self) -> HazardType {
        match self {
            Self::Unset => HazardType::Unset,
            Self::Repetitive(_) => HazardType::Repetitive,
            Self::Posture(_) => HazardType::Posture,
            Self::Force(_) => HazardType::Force,
            Self::Contact(_) => HazardType::Contact,
        }
    }

    /// A fresh entry of the given type with every field defaulted.
    /// Switching types always goes through here, which is what keeps
    /// fields from a previous selection from leaking into the new one.
    #[must_use]
    pub fn blank(kind: HazardType) -> Self {
        match kind {
            HazardType::Unset => Self::Unset,
            HazardType::Repetitive => Self::Repetitive(RepetitiveWork::default()),
            HazardType::Posture => Self::Posture(PostureWork::default()),
            HazardType::Force => Self::Force(ForceWork::default()),
            HazardType::Contact => Self::Contact(ContactClause::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn hazard_type_display_parse_roundtrips() {
        for t in [
            HazardType::Unset,
            HazardType::Repetitive,
            HazardType::Posture,
            HazardType::Force,
            HazardType::Contact,
        ] {
            assert_eq!(HazardType::from_str(&t.to_string()).unwrap(), t);
        }
        assert_eq!(HazardType::from_str("").unwrap(), HazardType::Unset);
        assert!(HazardType::from_str("소음").is_err());
    }

    #[test]
    fn clause_10_is_not_mistaken_for_clause_1() {
        let parsed = RepetitiveClause::from_str(RepetitiveClause::C10.as_str()).unwrap();
        assert_eq!(parsed, RepetitiveClause::C10);
        let parsed = RepetitiveClause::from_str(RepetitiveClause::C1.as_str()).unwrap();
        assert_eq!(parsed, RepetitiveClause::C1);
    }

    #[test]
    fn clause_parsing_tolerates_label_drift() {
        assert_eq!(
            RepetitiveClause::from_str("(2호) 반복 작업").unwrap(),
            RepetitiveClause::C2
        );
        assert_eq!(
            PostureClause::from_str("(5호) 쪼그려 앉기").unwrap(),
            PostureClause::C5
        );
    }

    #[test]
    fn force_clause_compound_roundtrips() {
        let compound = ForceClause {
            base: ForceBase::C9,
            with_push_pull: true,
        };
        let rendered = compound.to_string();
        assert!(rendered.contains("(9호"));
        assert!(rendered.contains("12호"));
        assert_eq!(ForceClause::from_str(&rendered).unwrap(), compound);

        let single = ForceClause::from_str(ForceBase::C8.as_str()).unwrap();
        assert!(!single.with_push_pull);
    }

    #[test]
    fn leaving_clause_10_clears_its_extras() {
        let mut work = RepetitiveWork {
            clause: RepetitiveClause::C10,
            object_weight_kg: 6.0,
            reps_per_minute: 3.0,
            ..RepetitiveWork::default()
        };
        work.set_clause(RepetitiveClause::C2);
        assert_eq!(work.object_weight_kg, 0.0);
        assert_eq!(work.reps_per_minute, 0.0);
    }

    #[test]
    fn static_posture_toggle_drops_sub_fields() {
        let mut work = RepetitiveWork::default();
        work.set_static_posture(true);
        work.static_posture
            .as_mut()
            .unwrap()
            .description
            .push_str("대기 자세");
        work.set_static_posture(false);
        assert!(work.static_posture.is_none());
        // Re-enabling starts from defaults, not the old values.
        work.set_static_posture(true);
        assert_eq!(work.static_posture.unwrap(), StaticPosture::default());
    }

    #[test]
    fn blank_entry_matches_its_type() {
        for kind in [
            HazardType::Unset,
            HazardType::Repetitive,
            HazardType::Posture,
            HazardType::Force,
            HazardType::Contact,
        ] {
            assert_eq!(HazardEntry::blank(kind).hazard_type(), kind);
        }
    }

    #[test]
    fn tri_state_accepts_alternate_labels() {
        assert_eq!(TriState::from_str("있음").unwrap(), TriState::Yes);
        assert_eq!(TriState::from_str("없음").unwrap(), TriState::No);
        assert_eq!(TriState::from_str(" ").unwrap(), TriState::Unset);
    }
}
