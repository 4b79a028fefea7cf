//! Export functionality for analysis results
//!
//! Currently supports CSV export of the opening-move table.

mod openings_csv;

pub use openings_csv::{OpeningCsvRecord, export_openings, write_openings};
