//! Writing a survey to an exchange workbook.

use crate::error::TableError;
use chrono::NaiveDate;
use mskel_core::collection::SurveyCollection;
use mskel_core::row::{Cell, flatten};
use mskel_core::schema::{SHEET_NAME, columns};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

/// Class name used in the download file name when the survey has no
/// class set yet.
const UNSET_CLASS: &str = "미정반";

/// Write the collection to `path` as one `작업목록` sheet. Every schema
/// column is present; cells without data stay blank, they are never
/// dropped from the sheet.
pub fn write_workbook(path: &Path, collection: &SurveyCollection) -> Result<(), TableError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let cols = columns();
    for (c, name) in cols.iter().enumerate() {
        sheet.write_string(0, col_index(c), name)?;
    }

    for (r, unit) in collection.units.iter().enumerate() {
        let row = flatten(unit);
        #[allow(clippy::cast_possible_truncation)]
        let r = r as u32 + 1;
        for (c, name) in cols.iter().enumerate() {
            match row.get(name) {
                Cell::Empty => {}
                Cell::Text(s) => {
                    sheet.write_string(r, col_index(c), s)?;
                }
                Cell::Number(v) => {
                    sheet.write_number(r, col_index(c), *v)?;
                }
            }
        }
    }

    workbook.save(path)?;
    info!(
        units = collection.units.len(),
        path = %path.display(),
        "wrote survey workbook"
    );
    Ok(())
}

/// Download file name: `작업목록표_{class}_{YYMMDD}.xlsx`, with
/// `미정반` standing in for an unset class.
#[must_use]
pub fn download_file_name(class: &str, date: NaiveDate) -> String {
    let class = if class.trim().is_empty() {
        UNSET_CLASS
    } else {
        class.trim()
    };
    format!("작업목록표_{}_{}.xlsx", class, date.format("%y%m%d"))
}

// The schema has ~200 columns, far below the u16 sheet limit.
#[allow(clippy::cast_possible_truncation)]
const fn col_index(c: usize) -> u16 {
    c as u16
}
