#![forbid(unsafe_code)]
//! mskel-core: survey model, burden-task classification engine, and
//! the row round-trip mapper.
//!
//! The engine and mapper are total functions: classification and
//! flattening always produce a result, because numeric coercion routes
//! through the default-returning value parser and every row access has
//! get-with-default semantics. The only fallible operations live at
//! the file boundary (`mskel-table`) and in config loading.

pub mod classify;
pub mod collection;
pub mod config;
pub mod model;
pub mod parse;
pub mod row;
pub mod schema;
pub mod verdict;
