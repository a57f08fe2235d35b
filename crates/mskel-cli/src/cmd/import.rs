use crate::output::{self, OutputMode};
use crate::session;
use anyhow::Result;
use clap::Args;
use mskel_core::collection::SurveyCollection;
use mskel_table::read_workbook;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Workbook to import (one `작업목록` sheet).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Session file to write.
    #[arg(long, short, value_name = "PATH", default_value = "session.json")]
    pub output: PathBuf,
}

#[derive(Debug, Serialize)]
struct ImportReport {
    session: PathBuf,
    units: usize,
    /// Set when the workbook could not be read and the session was
    /// reset to a single default unit instead.
    reset: bool,
}

/// Execute `msk import`: read the workbook into a fresh collection and
/// persist it as the session file.
///
/// An unreadable workbook is not fatal: any partially-loaded state is
/// discarded, the collection is reset to one default unit, a warning
/// is printed, and the reset session is still written.
///
/// # Errors
///
/// Returns an error only if the session file cannot be written.
pub fn run_import(args: &ImportArgs, mode: OutputMode) -> Result<()> {
    let (collection, reset) = match read_workbook(&args.file) {
        Ok(collection) => (collection, false),
        Err(err) => {
            warn!(file = %args.file.display(), %err, "workbook load failed; resetting");
            eprintln!(
                "경고: {} 파일을 읽을 수 없어 새 작업목록으로 시작합니다. ({err})",
                args.file.display()
            );
            (SurveyCollection::default(), true)
        }
    };

    session::save(&args.output, &collection)?;

    let report = ImportReport {
        session: args.output.clone(),
        units: collection.units.len(),
        reset,
    };
    output::render(mode, &report, |report, w| {
        output::kv(w, "세션", report.session.display().to_string())?;
        output::kv(w, "단위작업", report.units.to_string())?;
        if report.reset {
            output::kv(w, "상태", "초기화됨")?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mskel_table::write_workbook;

    #[test]
    fn import_roundtrips_through_the_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = dir.path().join("survey.xlsx");
        let collection = SurveyCollection::default();
        write_workbook(&workbook, &collection).unwrap();

        let session_path = dir.path().join("session.json");
        run_import(
            &ImportArgs {
                file: workbook,
                output: session_path.clone(),
            },
            OutputMode::Human,
        )
        .unwrap();

        assert_eq!(session::load(&session_path).unwrap(), collection);
    }

    #[test]
    fn unreadable_workbook_resets_and_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.xlsx");
        std::fs::write(&bogus, b"not a workbook").unwrap();

        let session_path = dir.path().join("session.json");
        run_import(
            &ImportArgs {
                file: bogus,
                output: session_path.clone(),
            },
            OutputMode::Human,
        )
        .unwrap();

        let loaded = session::load(&session_path).unwrap();
        assert_eq!(loaded, SurveyCollection::default());
        assert_eq!(loaded.units.len(), 1);
    }
}
