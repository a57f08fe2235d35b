//! Reading a survey back from an exchange workbook.
//!
//! Column lookup is by header name, so files with missing, extra, or
//! reordered columns still load; anything absent defaults. Stored
//! verdict columns are ignored; the collection is re-evaluated from
//! the reconstructed entries. A missing sheet or unreadable structure
//! is an error; the caller resets to the default collection.

use crate::error::TableError;
use calamine::{Data, Reader, Xlsx, open_workbook};
use mskel_core::collection::SurveyCollection;
use mskel_core::model::unit::SharedHeader;
use mskel_core::row::{Cell, Row, unflatten};
use mskel_core::schema::SHEET_NAME;
use std::path::Path;
use tracing::{debug, info};

/// Load a survey collection from an XLSX exchange file.
pub fn read_workbook(path: &Path) -> Result<SurveyCollection, TableError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    if !workbook.sheet_names().iter().any(|n| n == SHEET_NAME) {
        return Err(TableError::MissingSheet {
            name: SHEET_NAME.to_string(),
        });
    }
    let range = workbook.worksheet_range(SHEET_NAME)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header_row| header_row.iter().map(data_to_text).collect())
        .unwrap_or_default();
    debug!(columns = headers.len(), "read sheet header");

    let mut collection = SurveyCollection {
        header: SharedHeader::default(),
        units: Vec::new(),
    };

    for data_row in rows {
        let mut row = Row::default();
        for (name, data) in headers.iter().zip(data_row) {
            if name.is_empty() {
                continue;
            }
            row.set(name.clone(), data_to_cell(data));
        }
        if row.is_empty() {
            continue;
        }
        collection.units.push(unflatten(&row));
    }

    // The shared header is whatever the rows carry; every row holds the
    // same values by construction of the write path.
    if let Some(first) = collection.units.first() {
        collection.header = SharedHeader {
            company: first.company.clone(),
            division: first.division.clone(),
            class: first.class.clone(),
        };
    }

    collection.evaluate();
    info!(
        units = collection.units.len(),
        path = %path.display(),
        "loaded survey workbook"
    );
    Ok(collection)
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from_text(s.clone()),
        Data::Float(v) => Cell::Number(*v),
        Data::Int(v) => {
            #[allow(clippy::cast_precision_loss)]
            Cell::Number(*v as f64)
        }
        Data::Bool(b) => Cell::from_text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from_text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}

fn data_to_text(data: &Data) -> String {
    data_to_cell(data).text()
}
