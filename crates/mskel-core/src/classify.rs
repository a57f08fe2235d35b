//! The burden-task classification engine.
//!
//! Turns a task unit's hazard entries into the 12-clause verdict map.
//! Each entry produces a partial map; partial maps join under the
//! monotonic verdict merge, so entry order cannot change the result
//! and an `O` reached early is never downgraded by a later entry.
//!
//! The engine is total: absent or unparseable numbers simply fail
//! their threshold and land on the else branch.

use crate::model::hazard::{
    ContactClause, ForceBase, ForceWork, HazardEntry, PostureWork, RepetitiveClause,
    RepetitiveWork,
};
use crate::model::unit::TaskUnit;
use crate::parse::clean_f64;
use crate::verdict::{Clause, Verdict, VerdictMap};

const CLAUSE_12: Clause = match Clause::new(12) {
    Some(c) => c,
    None => unreachable!(),
};

/// Clause 1 confirms at 4 hours of total work per day.
const HIGH_MINUTES: f64 = 240.0;
/// Every other time-based clause confirms at 2 hours.
const BASE_MINUTES: f64 = 120.0;
/// Clause 8: at least 10 lifts of at least 25 kg.
const C8_LIFTS: f64 = 10.0;
const C8_WEIGHT_KG: f64 = 25.0;
/// Clause 9: at least 25 lifts of at least 10 kg.
const C9_LIFTS: f64 = 25.0;
const C9_WEIGHT_KG: f64 = 10.0;
/// Clause 10 extras: at least 2 lifts per minute of at least 4.5 kg.
const C10_PER_MINUTE: f64 = 2.0;
const C10_WEIGHT_KG: f64 = 4.5;

/// Derive the full 12-entry verdict map for one task unit.
#[must_use]
pub fn classify(unit: &TaskUnit) -> VerdictMap {
    unit.entries.iter().fold(VerdictMap::default(), |mut acc, entry| {
        acc.merge(&classify_entry(entry));
        acc
    })
}

/// The partial verdict map contributed by a single entry.
#[must_use]
pub fn classify_entry(entry: &HazardEntry) -> VerdictMap {
    let mut map = VerdictMap::default();
    match entry {
        HazardEntry::Unset => {}
        HazardEntry::Repetitive(work) => classify_repetitive(work, &mut map),
        HazardEntry::Posture(work) => classify_posture(work, &mut map),
        HazardEntry::Force(work) => classify_force(work, &mut map),
        HazardEntry::Contact(clause) => classify_contact(clause, &mut map),
    }
    map
}

fn classify_repetitive(work: &RepetitiveWork, map: &mut VerdictMap) {
    let total = work.total_minutes();
    let confirmed = match work.clause {
        RepetitiveClause::C1 => total >= HIGH_MINUTES,
        RepetitiveClause::C2 | RepetitiveClause::C6 | RepetitiveClause::C7 => {
            total >= BASE_MINUTES
        }
        RepetitiveClause::C10 => {
            total >= BASE_MINUTES
                && work.reps_per_minute >= C10_PER_MINUTE
                && work.object_weight_kg >= C10_WEIGHT_KG
        }
    };
    raise_clause(map, work.clause.clause_number(), confirmed);

    if work.static_posture.is_some() {
        map.raise(CLAUSE_12, Verdict::Maybe);
    }
}

fn classify_posture(work: &PostureWork, map: &mut VerdictMap) {
    let total = clean_f64(&work.total_minutes, 0.0);
    raise_clause(map, work.clause.clause_number(), total >= BASE_MINUTES);
}

fn classify_force(work: &ForceWork, map: &mut VerdictMap) {
    let lifts = clean_f64(&work.daily_lifts, 0.0);
    let confirmed = match work.clause.base {
        ForceBase::C8 => lifts >= C8_LIFTS && work.load_weight_kg >= C8_WEIGHT_KG,
        ForceBase::C9 => lifts >= C9_LIFTS && work.load_weight_kg >= C9_WEIGHT_KG,
    };
    raise_clause(map, work.clause.base.clause_number(), confirmed);

    if work.clause.with_push_pull {
        map.raise(CLAUSE_12, Verdict::Maybe);
    }
}

fn classify_contact(clause: &ContactClause, map: &mut VerdictMap) {
    match clause {
        ContactClause::Impact { work_minutes } => {
            raise_clause(map, 11, *work_minutes >= BASE_MINUTES);
        }
        // Vibration work maps to clause 12, which never auto-confirms.
        ContactClause::Vibration(_) => map.raise(CLAUSE_12, Verdict::Maybe),
    }
}

/// A selected clause always contributes at least `△`; the threshold
/// decides whether it reaches `O`.
fn raise_clause(map: &mut VerdictMap, number: u8, confirmed: bool) {
    let Some(clause) = Clause::new(number) else {
        return;
    };
    let verdict = if confirmed {
        Verdict::Confirmed
    } else {
        Verdict::Maybe
    };
    map.raise(clause, verdict);
}
