//! The fixed column schema of the exchange sheet.
//!
//! This is the single source of truth for column names and order: both
//! mapper directions in [`crate::row`] and the physical writer build
//! from the tables here, so write and read cannot drift apart. The
//! schema is part of the external file contract and must not change
//! silently.

use crate::verdict::Clause;

/// Sheet name inside the exchange workbook.
pub const SHEET_NAME: &str = "작업목록";

/// Fixed number of hazard-entry slots per row. Entries beyond this are
/// truncated on flatten.
pub const SLOT_COUNT: usize = 5;

/// Header-block and trailing column names.
pub mod col {
    pub const COMPANY: &str = "회사명";
    pub const DIVISION: &str = "소속";
    pub const CLASS: &str = "반";
    pub const PROCESS: &str = "단위작업명";
    pub const DESCRIPTION: &str = "상세설명";
    pub const WORKER_COUNT: &str = "작업자 수";
    pub const WORKER_NAMES: &str = "작업자 이름";
    pub const WORK_PATTERN: &str = "작업형태";
    pub const DAILY_HOURS: &str = "1일 작업시간";
    pub const GEAR: &str = "보호구";
    pub const AUTHOR: &str = "작성자";
    pub const CONTACT: &str = "연락처";

    pub const HEADER: [&str; 9] = [
        COMPANY,
        DIVISION,
        CLASS,
        PROCESS,
        DESCRIPTION,
        WORKER_COUNT,
        WORKER_NAMES,
        WORK_PATTERN,
        DAILY_HOURS,
    ];

    pub const TRAILING: [&str; 3] = [GEAR, AUTHOR, CONTACT];
}

/// Per-slot column bases. Final column names carry a `_{slot}` suffix
/// (slot is 1-based); see [`slot_col`].
pub mod slot {
    pub const ENTRY_TYPE: &str = "유해요인구분";

    // Repetitive-motion block.
    pub const REP_CLAUSE: &str = "반복_부담작업호";
    pub const TOOL_NAME: &str = "수공구명";
    pub const TOOL_PURPOSE: &str = "수공구용도";
    pub const TOOL_WEIGHT: &str = "수공구무게(kg)";
    pub const TOOL_USAGE: &str = "수공구사용시간";
    pub const BODY_PART: &str = "부담부위";
    pub const REP_SECS: &str = "반복_1회시간(초)";
    pub const REP_DAILY: &str = "반복_하루횟수";
    pub const REP_TOTAL: &str = "반복_총작업시간(분)";
    pub const REP_OBJECT_WEIGHT: &str = "반복_중량물무게(kg)";
    pub const REP_PER_MINUTE: &str = "반복_분당횟수";
    pub const STATIC_DESC: &str = "정적자세_내용";
    pub const STATIC_WORK: &str = "정적자세_작업시간(분)";
    pub const STATIC_REST: &str = "정적자세_휴식시간(분)";
    pub const STATIC_PART: &str = "정적자세_부위";

    // Awkward-posture block.
    pub const POSTURE_CLAUSE: &str = "자세_부담작업호";
    pub const POSTURE_SECS: &str = "자세_1회시간(초)";
    pub const POSTURE_DAILY: &str = "자세_하루횟수";
    pub const POSTURE_TOTAL: &str = "자세_총작업시간(분)";

    // Excessive-force block.
    pub const FORCE_CLAUSE: &str = "힘_부담작업호";
    pub const LOAD_NAME: &str = "중량물명";
    pub const LOAD_PURPOSE: &str = "중량물용도";
    pub const LOAD_WEIGHT: &str = "중량물무게(kg)";
    pub const DAILY_LIFTS: &str = "하루작업횟수";
    pub const HANDLING: &str = "취급방법";
    pub const TRANSPORT: &str = "운반수단";
    pub const CART_AGENT: &str = "밀당수단";
    pub const CART_AGENT_OTHER: &str = "밀당수단기타";

    // Contact-stress / other block.
    pub const CONTACT_CLAUSE: &str = "기타_부담작업호";
    pub const IMPACT_MINUTES: &str = "충격_작업시간(분)";
    pub const VIB_NAME: &str = "진동공구명";
    pub const VIB_PURPOSE: &str = "진동공구용도";
    pub const VIB_MINUTES: &str = "진동_작업시간(분)";
    pub const VIB_SECS: &str = "진동_1회시간(초)";
    pub const VIB_DAILY: &str = "진동_하루횟수";
    pub const VIB_STAND: &str = "진동_받침대";

    /// Every per-slot base in column order.
    pub const ORDER: [&str; 37] = [
        ENTRY_TYPE,
        REP_CLAUSE,
        TOOL_NAME,
        TOOL_PURPOSE,
        TOOL_WEIGHT,
        TOOL_USAGE,
        BODY_PART,
        REP_SECS,
        REP_DAILY,
        REP_TOTAL,
        REP_OBJECT_WEIGHT,
        REP_PER_MINUTE,
        STATIC_DESC,
        STATIC_WORK,
        STATIC_REST,
        STATIC_PART,
        POSTURE_CLAUSE,
        POSTURE_SECS,
        POSTURE_DAILY,
        POSTURE_TOTAL,
        FORCE_CLAUSE,
        LOAD_NAME,
        LOAD_PURPOSE,
        LOAD_WEIGHT,
        DAILY_LIFTS,
        HANDLING,
        TRANSPORT,
        CART_AGENT,
        CART_AGENT_OTHER,
        CONTACT_CLAUSE,
        IMPACT_MINUTES,
        VIB_NAME,
        VIB_PURPOSE,
        VIB_MINUTES,
        VIB_SECS,
        VIB_DAILY,
        VIB_STAND,
    ];
}

/// Final column name for a per-slot base. `slot` is 1-based.
#[must_use]
pub fn slot_col(base: &str, slot: usize) -> String {
    format!("{base}_{slot}")
}

/// The complete ordered column list: header block, 12 verdict columns,
/// 5 entry slots, trailing fields.
#[must_use]
pub fn columns() -> Vec<String> {
    let mut cols: Vec<String> = col::HEADER.iter().map(ToString::to_string).collect();
    for clause in Clause::ALL {
        cols.push(clause.column_name());
    }
    for s in 1..=SLOT_COUNT {
        for base in slot::ORDER {
            cols.push(slot_col(base, s));
        }
    }
    cols.extend(col::TRAILING.iter().map(ToString::to_string));
    cols
}
