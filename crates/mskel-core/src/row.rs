//! Bidirectional mapping between a task unit and one fixed-shape row.
//!
//! `flatten` emits every schema column for a unit (absent slots and
//! non-applicable sub-fields as empty cells, never omitted);
//! `unflatten` rebuilds a unit reading only the sub-columns relevant to
//! each slot's hazard type, defaulting anything the source row lacks.
//! Verdict columns are derived from the entries at flatten time and
//! recomputed on unflatten; stored verdicts are never trusted.

use crate::classify::classify;
use crate::model::hazard::{
    CartAgent, ContactClause, ForceClause, ForceWork, HazardEntry, HazardType, Handling,
    PostureWork, RepetitiveClause, RepetitiveWork, STATIC_POSTURE_SUFFIX, StaticPosture,
    Transport, VibrationTool,
};
use crate::model::unit::{ProtectiveGear, TaskUnit};
use crate::parse::{clean_f64, clean_u32};
use crate::schema::{SLOT_COUNT, col, slot, slot_col};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One cell of the flat row: empty, text, or a number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Text cell; blank text collapses to `Empty`.
    #[must_use]
    pub fn from_text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() { Self::Empty } else { Self::Text(s) }
    }

    #[must_use]
    pub const fn number(v: f64) -> Self {
        Self::Number(v)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Cell content as text; numbers render without a trailing `.0`.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(v) if v.fract() == 0.0 => format!("{v:.0}"),
            Self::Number(v) => v.to_string(),
        }
    }

    /// Cell content as `f64`; text goes through the value parser.
    #[must_use]
    pub fn f64_or(&self, default: f64) -> f64 {
        match self {
            Self::Empty => default,
            Self::Number(v) => *v,
            Self::Text(s) => clean_f64(s, default),
        }
    }

    /// Cell content as `u32`; text goes through the value parser.
    #[must_use]
    pub fn u32_or(&self, default: u32) -> u32 {
        match self {
            Self::Empty => default,
            Self::Number(v) if (0.0..=f64::from(u32::MAX)).contains(v) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    v.trunc() as u32
                }
            }
            Self::Number(_) => default,
            Self::Text(s) => clean_u32(s, default),
        }
    }
}

/// A flat row keyed by column name. Lookups of absent columns yield
/// `Cell::Empty`, which is what gives the read path its
/// get-with-default semantics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn set(&mut self, name: impl Into<String>, cell: Cell) {
        self.cells.insert(name.into(), cell);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> &Cell {
        self.cells.get(name).unwrap_or(&EMPTY_CELL)
    }

    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.get(name).text()
    }

    #[must_use]
    pub fn number(&self, name: &str, default: f64) -> f64 {
        self.get(name).f64_or(default)
    }

    #[must_use]
    pub fn count(&self, name: &str, default: u32) -> u32 {
        self.get(name).u32_or(default)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Flatten one task unit into a full-width row. Entries beyond
/// [`SLOT_COUNT`] are truncated; this is a documented boundary of the
/// fixed-slot format, not silent corruption of the kept slots.
#[must_use]
pub fn flatten(unit: &TaskUnit) -> Row {
    let mut row = Row::default();

    row.set(col::COMPANY, Cell::from_text(&unit.company));
    row.set(col::DIVISION, Cell::from_text(&unit.division));
    row.set(col::CLASS, Cell::from_text(&unit.class));
    row.set(col::PROCESS, Cell::from_text(&unit.process_name));
    row.set(col::DESCRIPTION, Cell::from_text(&unit.description));
    row.set(col::WORKER_COUNT, Cell::number(f64::from(unit.worker_count)));
    row.set(col::WORKER_NAMES, Cell::from_text(&unit.worker_names));
    row.set(col::WORK_PATTERN, Cell::from_text(unit.work_pattern.as_str()));
    row.set(col::DAILY_HOURS, Cell::number(unit.daily_hours));

    for (clause, verdict) in classify(unit).iter() {
        row.set(clause.column_name(), Cell::from_text(verdict.as_str()));
    }

    for s in 1..=SLOT_COUNT {
        write_slot(&mut row, s, unit.entries.get(s - 1));
    }

    row.set(col::GEAR, Cell::from_text(ProtectiveGear::join(&unit.gear)));
    row.set(col::AUTHOR, Cell::from_text(&unit.author));
    row.set(col::CONTACT, Cell::from_text(&unit.contact));

    row
}

/// Rebuild a task unit from a flat row. Columns absent from the row
/// default; a blank entry-type column means the slot holds no entry;
/// an entry-less unit gets one synthesized blank entry. Verdicts are
/// recomputed from the reconstructed entries.
#[must_use]
pub fn unflatten(row: &Row) -> TaskUnit {
    let mut unit = TaskUnit {
        company: row.text(col::COMPANY),
        division: row.text(col::DIVISION),
        class: row.text(col::CLASS),
        process_name: row.text(col::PROCESS),
        description: row.text(col::DESCRIPTION),
        worker_count: row.count(col::WORKER_COUNT, 1).max(1),
        worker_names: row.text(col::WORKER_NAMES),
        work_pattern: row.text(col::WORK_PATTERN).parse().unwrap_or_default(),
        daily_hours: row.number(col::DAILY_HOURS, 0.0),
        gear: ProtectiveGear::split(&row.text(col::GEAR)),
        author: row.text(col::AUTHOR),
        contact: row.text(col::CONTACT),
        entries: Vec::new(),
        ..TaskUnit::default()
    };

    for s in 1..=SLOT_COUNT {
        let raw_type = row.text(&slot_col(slot::ENTRY_TYPE, s));
        if raw_type.trim().is_empty() {
            continue;
        }
        let Ok(kind) = raw_type.parse::<HazardType>() else {
            // Unknown type label: tolerate the slot rather than fail
            // the whole row.
            continue;
        };
        unit.entries.push(read_slot(row, s, kind));
    }

    unit.ensure_entry();
    unit.verdicts = classify(&unit);
    unit
}

fn write_slot(row: &mut Row, s: usize, entry: Option<&HazardEntry>) {
    for base in slot::ORDER {
        row.set(slot_col(base, s), Cell::Empty);
    }
    let Some(entry) = entry else {
        return;
    };

    row.set(
        slot_col(slot::ENTRY_TYPE, s),
        Cell::from_text(entry.hazard_type().as_str()),
    );

    match entry {
        HazardEntry::Unset => {}
        HazardEntry::Repetitive(work) => write_repetitive(row, s, work),
        HazardEntry::Posture(work) => write_posture(row, s, work),
        HazardEntry::Force(work) => write_force(row, s, work),
        HazardEntry::Contact(clause) => write_contact(row, s, clause),
    }
}

fn write_repetitive(row: &mut Row, s: usize, work: &RepetitiveWork) {
    let mut label = work.clause.to_string();
    if work.static_posture.is_some() {
        label.push_str(STATIC_POSTURE_SUFFIX);
    }
    row.set(slot_col(slot::REP_CLAUSE, s), Cell::from_text(label));
    row.set(slot_col(slot::TOOL_NAME, s), Cell::from_text(&work.tool_name));
    row.set(
        slot_col(slot::TOOL_PURPOSE, s),
        Cell::from_text(&work.tool_purpose),
    );
    row.set(
        slot_col(slot::TOOL_WEIGHT, s),
        Cell::number(work.tool_weight_kg),
    );
    row.set(
        slot_col(slot::TOOL_USAGE, s),
        Cell::from_text(&work.tool_usage_time),
    );
    row.set(slot_col(slot::BODY_PART, s), Cell::from_text(&work.body_part));
    row.set(slot_col(slot::REP_SECS, s), Cell::number(work.secs_per_cycle));
    row.set(
        slot_col(slot::REP_DAILY, s),
        Cell::number(f64::from(work.daily_reps)),
    );
    row.set(
        slot_col(slot::REP_TOTAL, s),
        Cell::number(work.total_minutes()),
    );

    if work.clause == RepetitiveClause::C10 {
        row.set(
            slot_col(slot::REP_OBJECT_WEIGHT, s),
            Cell::number(work.object_weight_kg),
        );
        row.set(
            slot_col(slot::REP_PER_MINUTE, s),
            Cell::number(work.reps_per_minute),
        );
    }

    if let Some(sp) = &work.static_posture {
        row.set(slot_col(slot::STATIC_DESC, s), Cell::from_text(&sp.description));
        row.set(slot_col(slot::STATIC_WORK, s), Cell::number(sp.work_minutes));
        row.set(slot_col(slot::STATIC_REST, s), Cell::number(sp.rest_minutes));
        row.set(slot_col(slot::STATIC_PART, s), Cell::from_text(&sp.body_part));
    }
}

fn write_posture(row: &mut Row, s: usize, work: &PostureWork) {
    row.set(
        slot_col(slot::POSTURE_CLAUSE, s),
        Cell::from_text(work.clause.as_str()),
    );
    row.set(
        slot_col(slot::POSTURE_SECS, s),
        Cell::number(work.secs_per_cycle),
    );
    row.set(
        slot_col(slot::POSTURE_DAILY, s),
        Cell::number(f64::from(work.daily_reps)),
    );
    row.set(
        slot_col(slot::POSTURE_TOTAL, s),
        Cell::from_text(&work.total_minutes),
    );
}

fn write_force(row: &mut Row, s: usize, work: &ForceWork) {
    row.set(
        slot_col(slot::FORCE_CLAUSE, s),
        Cell::from_text(work.clause.to_string()),
    );
    row.set(slot_col(slot::LOAD_NAME, s), Cell::from_text(&work.load_name));
    row.set(
        slot_col(slot::LOAD_PURPOSE, s),
        Cell::from_text(&work.load_purpose),
    );
    row.set(
        slot_col(slot::LOAD_WEIGHT, s),
        Cell::number(work.load_weight_kg),
    );
    row.set(
        slot_col(slot::DAILY_LIFTS, s),
        Cell::from_text(&work.daily_lifts),
    );
    row.set(
        slot_col(slot::HANDLING, s),
        Cell::from_text(work.handling.label()),
    );

    if let Handling::Direct { transport } = &work.handling {
        row.set(
            slot_col(slot::TRANSPORT, s),
            Cell::from_text(transport.label()),
        );
        if let Transport::Cart { agent } = transport {
            row.set(slot_col(slot::CART_AGENT, s), Cell::from_text(agent.label()));
            if let CartAgent::Other(detail) = agent {
                row.set(slot_col(slot::CART_AGENT_OTHER, s), Cell::from_text(detail));
            }
        }
    }
}

fn write_contact(row: &mut Row, s: usize, clause: &ContactClause) {
    row.set(
        slot_col(slot::CONTACT_CLAUSE, s),
        Cell::from_text(clause.label()),
    );
    match clause {
        ContactClause::Impact { work_minutes } => {
            row.set(slot_col(slot::IMPACT_MINUTES, s), Cell::number(*work_minutes));
        }
        ContactClause::Vibration(tool) => {
            row.set(slot_col(slot::VIB_NAME, s), Cell::from_text(&tool.tool_name));
            row.set(
                slot_col(slot::VIB_PURPOSE, s),
                Cell::from_text(&tool.tool_purpose),
            );
            row.set(slot_col(slot::VIB_MINUTES, s), Cell::number(tool.work_minutes));
            row.set(slot_col(slot::VIB_SECS, s), Cell::number(tool.secs_per_cycle));
            row.set(
                slot_col(slot::VIB_DAILY, s),
                Cell::number(f64::from(tool.daily_count)),
            );
            row.set(
                slot_col(slot::VIB_STAND, s),
                Cell::from_text(tool.support_stand.as_str()),
            );
        }
    }
}

fn read_slot(row: &Row, s: usize, kind: HazardType) -> HazardEntry {
    match kind {
        HazardType::Unset => HazardEntry::Unset,
        HazardType::Repetitive => HazardEntry::Repetitive(read_repetitive(row, s)),
        HazardType::Posture => HazardEntry::Posture(PostureWork {
            clause: row
                .text(&slot_col(slot::POSTURE_CLAUSE, s))
                .parse()
                .unwrap_or_default(),
            secs_per_cycle: row.number(&slot_col(slot::POSTURE_SECS, s), 0.0),
            daily_reps: row.count(&slot_col(slot::POSTURE_DAILY, s), 0),
            total_minutes: row.text(&slot_col(slot::POSTURE_TOTAL, s)),
        }),
        HazardType::Force => HazardEntry::Force(read_force(row, s)),
        HazardType::Contact => HazardEntry::Contact(read_contact(row, s)),
    }
}

fn read_repetitive(row: &Row, s: usize) -> RepetitiveWork {
    let raw_clause = row.text(&slot_col(slot::REP_CLAUSE, s));
    let clause: RepetitiveClause = raw_clause.parse().unwrap_or_default();

    // Clause-10 extras and static-posture sub-fields exist only behind
    // their selector; anything else in those columns is ignored.
    let (object_weight_kg, reps_per_minute) = if clause == RepetitiveClause::C10 {
        (
            row.number(&slot_col(slot::REP_OBJECT_WEIGHT, s), 0.0),
            row.number(&slot_col(slot::REP_PER_MINUTE, s), 0.0),
        )
    } else {
        (0.0, 0.0)
    };

    let static_posture = raw_clause.contains("12호").then(|| StaticPosture {
        description: row.text(&slot_col(slot::STATIC_DESC, s)),
        work_minutes: row.number(&slot_col(slot::STATIC_WORK, s), 0.0),
        rest_minutes: row.number(&slot_col(slot::STATIC_REST, s), 0.0),
        body_part: row.text(&slot_col(slot::STATIC_PART, s)),
    });

    RepetitiveWork {
        clause,
        tool_name: row.text(&slot_col(slot::TOOL_NAME, s)),
        tool_purpose: row.text(&slot_col(slot::TOOL_PURPOSE, s)),
        tool_weight_kg: row.number(&slot_col(slot::TOOL_WEIGHT, s), 0.0),
        tool_usage_time: row.text(&slot_col(slot::TOOL_USAGE, s)),
        body_part: row.text(&slot_col(slot::BODY_PART, s)),
        secs_per_cycle: row.number(&slot_col(slot::REP_SECS, s), 0.0),
        daily_reps: row.count(&slot_col(slot::REP_DAILY, s), 0),
        object_weight_kg,
        reps_per_minute,
        static_posture,
    }
}

fn read_force(row: &Row, s: usize) -> ForceWork {
    let clause: ForceClause = row
        .text(&slot_col(slot::FORCE_CLAUSE, s))
        .parse()
        .unwrap_or_default();

    let handling = match row.text(&slot_col(slot::HANDLING, s)).trim() {
        "직접 취급" => Handling::Direct {
            transport: read_transport(row, s),
        },
        "크레인 사용" => Handling::Crane,
        _ => Handling::Unset,
    };

    ForceWork {
        clause,
        load_name: row.text(&slot_col(slot::LOAD_NAME, s)),
        load_purpose: row.text(&slot_col(slot::LOAD_PURPOSE, s)),
        load_weight_kg: row.number(&slot_col(slot::LOAD_WEIGHT, s), 0.0),
        daily_lifts: row.text(&slot_col(slot::DAILY_LIFTS, s)),
        handling,
    }
}

fn read_transport(row: &Row, s: usize) -> Transport {
    match row.text(&slot_col(slot::TRANSPORT, s)).trim() {
        "인력 운반" => Transport::Manual,
        "대차 운반" => Transport::Cart {
            agent: read_cart_agent(row, s),
        },
        _ => Transport::Unset,
    }
}

fn read_cart_agent(row: &Row, s: usize) -> CartAgent {
    match row.text(&slot_col(slot::CART_AGENT, s)).trim() {
        "사람이 밀고 당김" => CartAgent::Person,
        "동력 보조" => CartAgent::Powered,
        "기타" => CartAgent::Other(row.text(&slot_col(slot::CART_AGENT_OTHER, s))),
        _ => CartAgent::Unset,
    }
}

fn read_contact(row: &Row, s: usize) -> ContactClause {
    let raw = row.text(&slot_col(slot::CONTACT_CLAUSE, s));
    if raw.contains("진동") || raw.contains("12호") {
        ContactClause::Vibration(VibrationTool {
            tool_name: row.text(&slot_col(slot::VIB_NAME, s)),
            tool_purpose: row.text(&slot_col(slot::VIB_PURPOSE, s)),
            work_minutes: row.number(&slot_col(slot::VIB_MINUTES, s), 0.0),
            secs_per_cycle: row.number(&slot_col(slot::VIB_SECS, s), 0.0),
            daily_count: row.count(&slot_col(slot::VIB_DAILY, s), 0),
            support_stand: row
                .text(&slot_col(slot::VIB_STAND, s))
                .parse()
                .unwrap_or_default(),
        })
    } else {
        ContactClause::Impact {
            work_minutes: row.number(&slot_col(slot::IMPACT_MINUTES, s), 0.0),
        }
    }
}
