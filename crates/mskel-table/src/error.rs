use thiserror::Error;

/// Failures at the physical workbook boundary. These are the only
/// errors in the system; the engine and mapper inside `mskel-core` are
/// total. Callers recover from read failures by resetting the
/// collection to its default state.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("workbook has no '{name}' sheet")]
    MissingSheet { name: String },

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
