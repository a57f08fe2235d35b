use crate::cmd::init::CONFIG_FILE;
use crate::output::{self, OutputMode};
use crate::session;
use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use mskel_core::config::ProjectConfig;
use mskel_table::{download_file_name, write_workbook};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Session file to export.
    #[arg(value_name = "SESSION")]
    pub session: PathBuf,

    /// Directory to write the workbook into. Defaults to the
    /// `[export] dir` from `mskel.toml`.
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    path: PathBuf,
    units: usize,
}

/// Execute `msk export`: write the session out as one `작업목록` XLSX,
/// named by the download rule.
///
/// # Errors
///
/// Returns an error if the session cannot be loaded, the export
/// directory cannot be created, or the workbook cannot be written.
pub fn run_export(args: &ExportArgs, mode: OutputMode, project_root: &Path) -> Result<()> {
    let collection = session::load(&args.session)?;

    let dir = match &args.output {
        Some(dir) => dir.clone(),
        None => {
            let config = ProjectConfig::load(&project_root.join(CONFIG_FILE))?;
            project_root.join(config.export.dir)
        }
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let name = download_file_name(&collection.header.class, Local::now().date_naive());
    let path = dir.join(name);
    write_workbook(&path, &collection)?;
    info!(path = %path.display(), units = collection.units.len(), "exported workbook");

    let report = ExportReport {
        path,
        units: collection.units.len(),
    };
    output::render(mode, &report, |report, w| {
        output::kv(w, "파일", report.path.display().to_string())?;
        output::kv(w, "단위작업", report.units.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mskel_core::collection::{Edit, SurveyCollection};
    use mskel_core::model::unit::SharedHeader;

    #[test]
    fn export_writes_a_dated_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        let collection = SurveyCollection::default().apply(Edit::SetHeader(SharedHeader {
            company: "한빛중공업".into(),
            division: "조립1부".into(),
            class: "용접반".into(),
        }));
        session::save(&session_path, &collection).unwrap();

        let out = dir.path().join("out");
        run_export(
            &ExportArgs {
                session: session_path,
                output: Some(out.clone()),
            },
            OutputMode::Human,
            dir.path(),
        )
        .unwrap();

        let expected = download_file_name("용접반", Local::now().date_naive());
        assert!(out.join(expected).is_file());
    }

    #[test]
    fn missing_session_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_export(
            &ExportArgs {
                session: dir.path().join("absent.json"),
                output: None,
            },
            OutputMode::Human,
            dir.path(),
        );
        assert!(result.is_err());
    }
}
