//! Shared output layer: human text or stable JSON, selected per
//! invocation with `--json`.

use serde::Serialize;
use std::io::{self, Write};

/// Width of the horizontal rule used by human output.
pub const RULE_WIDTH: usize = 64;

/// Write a horizontal separator used by human output.
///
/// # Errors
///
/// Propagates the underlying write error.
pub fn rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)
}

/// Render a left-aligned key/value line in human output.
///
/// # Errors
///
/// Propagates the underlying write error.
pub fn kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<12} {}", format!("{key}:"), value.as_ref())
}

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tables and key/value lines for a terminal.
    Human,
    /// Machine-readable JSON, one pretty-printed object per command.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render `value` as JSON, or fall back to the `human` closure.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn render<T, F>(mode: OutputMode, value: &T, human: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T, &mut dyn Write) -> io::Result<()>,
{
    let stdout = io::stdout();
    let mut w = stdout.lock();
    if mode.is_json() {
        serde_json::to_writer_pretty(&mut w, value)?;
        writeln!(w)?;
    } else {
        human(value, &mut w)?;
    }
    Ok(())
}
