//! Burden-category verdicts and the 12-clause verdict map.
//!
//! A verdict is ordered `X < △ < O` and verdicts combine by `max`, so
//! merging partial per-entry maps is a commutative, associative,
//! idempotent join. Once a clause reaches `O` no later entry can lower
//! it, regardless of the order entries are processed in.

use crate::model::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Per-clause verdict: not applicable, borderline, or confirmed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// "X": the clause does not apply.
    #[default]
    No,
    /// "△": borderline / potential burden task.
    Maybe,
    /// "O": confirmed burden task.
    Confirmed,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::No => "X",
            Self::Maybe => "△",
            Self::Confirmed => "O",
        }
    }

    /// Join two verdicts, keeping the stronger one.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Self::No),
            "△" => Ok(Self::Maybe),
            "O" | "o" | "○" => Ok(Self::Confirmed),
            _ => Err(ParseEnumError {
                expected: "verdict",
                got: s.to_string(),
            }),
        }
    }
}

/// One of the 12 statutory burden-task clauses (1호..12호).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Clause(u8);

impl Clause {
    pub const COUNT: usize = 12;

    /// All 12 clauses in numeric order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(1); Self::COUNT];
        let mut n = 0;
        while n < Self::COUNT {
            all[n] = Self(n as u8 + 1);
            n += 1;
        }
        all
    };

    /// Build a clause from its statutory number. `None` outside 1..=12.
    #[must_use]
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= Self::COUNT as u8 {
            Some(Self(n))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Column name in the exchange sheet: `부담작업_{n}호`.
    #[must_use]
    pub fn column_name(self) -> String {
        format!("부담작업_{}호", self.0)
    }

    const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}호", self.0)
    }
}

/// The full 12-entry verdict map. Always fully populated; defaults to
/// all-`X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerdictMap([Verdict; Clause::COUNT]);

impl VerdictMap {
    #[must_use]
    pub const fn get(&self, clause: Clause) -> Verdict {
        self.0[clause.index()]
    }

    /// Raise a clause to `verdict` if it is stronger than the current
    /// value. Never lowers an existing verdict.
    pub fn raise(&mut self, clause: Clause, verdict: Verdict) {
        let slot = &mut self.0[clause.index()];
        *slot = slot.merge(verdict);
    }

    /// Pointwise join with another map.
    pub fn merge(&mut self, other: &Self) {
        for clause in Clause::ALL {
            self.raise(clause, other.get(clause));
        }
    }

    /// Iterate `(clause, verdict)` pairs in clause order.
    pub fn iter(&self) -> impl Iterator<Item = (Clause, Verdict)> + '_ {
        Clause::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// True when every clause is `X`.
    #[must_use]
    pub fn is_all_no(&self) -> bool {
        self.0.iter().all(|v| *v == Verdict::No)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clause, Verdict, VerdictMap};
    use std::str::FromStr;

    #[test]
    fn verdict_order_is_x_triangle_o() {
        assert!(Verdict::No < Verdict::Maybe);
        assert!(Verdict::Maybe < Verdict::Confirmed);
    }

    #[test]
    fn merge_keeps_the_stronger_verdict() {
        assert_eq!(Verdict::Confirmed.merge(Verdict::Maybe), Verdict::Confirmed);
        assert_eq!(Verdict::Maybe.merge(Verdict::Confirmed), Verdict::Confirmed);
        assert_eq!(Verdict::No.merge(Verdict::Maybe), Verdict::Maybe);
        assert_eq!(Verdict::No.merge(Verdict::No), Verdict::No);
    }

    #[test]
    fn display_parse_roundtrips() {
        for v in [Verdict::No, Verdict::Maybe, Verdict::Confirmed] {
            assert_eq!(Verdict::from_str(&v.to_string()).unwrap(), v);
        }
        assert!(Verdict::from_str("maybe").is_err());
    }

    #[test]
    fn clause_bounds() {
        assert!(Clause::new(0).is_none());
        assert!(Clause::new(13).is_none());
        assert_eq!(Clause::new(1).unwrap().number(), 1);
        assert_eq!(Clause::ALL.len(), 12);
        assert_eq!(Clause::ALL[11].number(), 12);
    }

    #[test]
    fn clause_column_names() {
        assert_eq!(Clause::new(1).unwrap().column_name(), "부담작업_1호");
        assert_eq!(Clause::new(12).unwrap().column_name(), "부담작업_12호");
    }

    #[test]
    fn raise_never_lowers() {
        let c2 = Clause::new(2).unwrap();
        let mut map = VerdictMap::default();
        map.raise(c2, Verdict::Confirmed);
        map.raise(c2, Verdict::Maybe);
        map.raise(c2, Verdict::No);
        assert_eq!(map.get(c2), Verdict::Confirmed);
    }

    #[test]
    fn default_map_is_all_no() {
        let map = VerdictMap::default();
        assert!(map.is_all_no());
        assert_eq!(map.iter().count(), 12);
    }
}
