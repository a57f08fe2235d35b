#![forbid(unsafe_code)]
//! mskel-table: the physical exchange boundary.
//!
//! Serializes a [`mskel_core::collection::SurveyCollection`] to one
//! `작업목록` XLSX sheet and back. The logical row shape lives in
//! `mskel_core::schema`; this crate only moves cells between that
//! shape and the workbook codec.

mod error;
mod read;
mod write;

pub use error::TableError;
pub use read::read_workbook;
pub use write::{download_file_name, write_workbook};
