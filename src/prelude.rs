pub use crate::components::{
    DataTable, PagerModel, Pagination, RowsPerPage, RowsPerPageSelect, SearchInput, SortOrder,
    SortToggle, TableEngine, TableOptions, TableRowView,
};
pub use crate::data::{CellValue, Column, Record, TableRecord};
pub use crate::error::{Result, TableError};
pub use crate::id::ComponentId;
pub use crate::theme::TableTheme;
pub use calmtable_derive::TableRecord;
