mod collate;
mod pagination;
mod rows_per_page;
mod search_input;
pub mod search_state;
mod table;
pub mod table_engine;
pub mod table_row;
pub mod table_state;

pub use collate::compare as collate_compare;
pub use pagination::{PageButton, PagerModel, Pagination};
pub use rows_per_page::RowsPerPageSelect;
pub use search_input::{SearchEdit, SearchInput, apply_edit, edit_for_key};
pub use table::DataTable;
pub use table_engine::{
    DerivationStats, HeaderCell, RowsPerPage, SortOrder, SortToggle, TableEngine, TableOptions,
    TableSnapshot,
};
pub use table_row::{RenderedRow, RowCacheStats, RowRenderCache, RowRenderer, Stripe, TableRowView};

#[cfg(test)]
mod test_component_smoke;
#[cfg(test)]
mod test_table_engine;
#[cfg(test)]
mod test_table_properties;
