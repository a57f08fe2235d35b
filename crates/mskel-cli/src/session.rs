//! Session file I/O: one survey collection persisted as JSON between
//! invocations. Every load ends with a full evaluation pass so stale
//! verdicts in the file never survive.

use anyhow::{Context, Result};
use mskel_core::collection::SurveyCollection;
use std::fs;
use std::path::Path;

/// Load and re-evaluate a session file.
///
/// # Errors
///
/// Returns an error if the file is missing or not valid JSON.
pub fn load(path: &Path) -> Result<SurveyCollection> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    let collection: SurveyCollection = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse session file {}", path.display()))?;
    Ok(collection.evaluated())
}

/// Persist a session file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(path: &Path, collection: &SurveyCollection) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(collection).context("failed to serialize session")?;
    fs::write(path, rendered)
        .with_context(|| format!("failed to write session file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mskel_core::collection::Edit;
    use mskel_core::model::hazard::{HazardEntry, RepetitiveClause, RepetitiveWork};
    use mskel_core::verdict::{Clause, Verdict};

    #[test]
    fn save_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let collection = SurveyCollection::default().apply(Edit::AddUnit);
        save(&path, &collection).unwrap();
        assert_eq!(load(&path).unwrap(), collection);
    }

    #[test]
    fn load_recomputes_stale_verdicts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut collection = SurveyCollection::default().apply(Edit::ReplaceEntry {
            unit: 0,
            entry: 0,
            value: Box::new(HazardEntry::Repetitive(RepetitiveWork {
                clause: RepetitiveClause::C1,
                secs_per_cycle: 60.0,
                daily_reps: 300,
                ..RepetitiveWork::default()
            })),
        });
        // Corrupt the derived state before persisting.
        collection.units[0].verdicts = mskel_core::verdict::VerdictMap::default();
        save(&path, &collection).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(
            loaded.units[0].verdicts.get(Clause::new(1).unwrap()),
            Verdict::Confirmed
        );
    }

    #[test]
    fn missing_session_is_an_error() {
        assert!(load(Path::new("no-such-session.json")).is_err());
    }
}
