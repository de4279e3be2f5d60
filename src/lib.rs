pub mod components;
pub mod data;
pub mod demo;
pub mod error;
pub mod id;
pub mod prelude;
pub mod theme;

pub use calmtable_derive::TableRecord;
pub use components::{DataTable, RowsPerPage, SortOrder, SortToggle, TableEngine, TableOptions};
pub use data::{CellValue, Column, Record, TableRecord, records_from, records_from_json};
pub use error::{Result, TableError};
pub use theme::TableTheme;

#[cfg(test)]
mod test_public_api;
