use crate::output::{self, OutputMode};
use crate::session;
use anyhow::Result;
use clap::Args;
use mskel_core::collection::SurveyCollection;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Session file to evaluate.
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,
}

/// One unit's verdict row in the report.
#[derive(Debug, Serialize)]
struct UnitReport {
    process_name: String,
    verdicts: Vec<ClauseVerdict>,
}

#[derive(Debug, Serialize)]
struct ClauseVerdict {
    clause: u8,
    verdict: &'static str,
}

#[derive(Debug, Serialize)]
struct EvalReport {
    company: String,
    division: String,
    class: String,
    units: Vec<UnitReport>,
}

impl EvalReport {
    fn from_collection(collection: &SurveyCollection) -> Self {
        Self {
            company: collection.header.company.clone(),
            division: collection.header.division.clone(),
            class: collection.header.class.clone(),
            units: collection
                .units
                .iter()
                .map(|unit| UnitReport {
                    process_name: unit.process_name.clone(),
                    verdicts: unit
                        .verdicts
                        .iter()
                        .map(|(clause, verdict)| ClauseVerdict {
                            clause: clause.number(),
                            verdict: verdict.as_str(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Execute `msk eval`: load the session, recompute every verdict, and
/// print the per-unit 12-clause table.
///
/// # Errors
///
/// Returns an error if the session file is missing or not valid JSON.
pub fn run_eval(args: &EvalArgs, mode: OutputMode) -> Result<()> {
    let collection = session::load(&args.session)?;
    let report = EvalReport::from_collection(&collection);

    output::render(mode, &report, |report, w| {
        output::kv(w, "회사명", &report.company)?;
        output::kv(w, "소속", &report.division)?;
        output::kv(w, "반", &report.class)?;
        output::rule(w)?;
        let numbers: Vec<String> = (1..=12).map(|n| format!("{n:>2}")).collect();
        writeln!(w, "{:<20} {}", "단위작업명", numbers.join(" "))?;
        for unit in &report.units {
            let glyphs: Vec<String> = unit
                .verdicts
                .iter()
                .map(|v| format!("{:>2}", v.verdict))
                .collect();
            let name = if unit.process_name.is_empty() {
                "(무제)"
            } else {
                unit.process_name.as_str()
            };
            writeln!(w, "{:<20} {}", name, glyphs.join(" "))?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mskel_core::collection::Edit;
    use mskel_core::model::hazard::{ContactClause, HazardEntry};

    #[test]
    fn report_has_twelve_verdicts_per_unit() {
        let collection = SurveyCollection::default().apply(Edit::AddUnit);
        let report = EvalReport::from_collection(&collection);
        assert_eq!(report.units.len(), 2);
        for unit in &report.units {
            assert_eq!(unit.verdicts.len(), 12);
            assert!(unit.verdicts.iter().all(|v| v.verdict == "X"));
        }
    }

    #[test]
    fn report_reflects_recomputed_verdicts() {
        let collection = SurveyCollection::default().apply(Edit::ReplaceEntry {
            unit: 0,
            entry: 0,
            value: Box::new(HazardEntry::Contact(ContactClause::Impact {
                work_minutes: 180.0,
            })),
        });
        let report = EvalReport::from_collection(&collection);
        let row = &report.units[0].verdicts;
        assert_eq!(row[10].clause, 11);
        assert_eq!(row[10].verdict, "O");
    }
}
