//! Headless data pipeline behind [`DataTable`](super::DataTable).
//!
//! The engine owns the transient UI state of one table (search term, sort,
//! page position and page size) and derives the visible rows in three
//! memoized stages:
//!
//! 1. filter, keyed by the inputs and the search term,
//! 2. sort, keyed by the filter result and the sort state,
//! 3. paginate, keyed by the sort result and the page state.
//!
//! Stages hold dataset indices, the dataset itself is never touched. Every
//! mutator re-runs the stages whose keys changed before returning, so reads
//! are always consistent with the current state.

use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::{Column, Record};
use crate::error::TableError;

use super::collate;
use super::pagination::PagerModel;
use super::table_row::{RenderedRow, RowRenderCache};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum RowsPerPage {
    #[default]
    Ten,
    Twenty,
    Thirty,
}

impl RowsPerPage {
    pub const ALL: [Self; 3] = [Self::Ten, Self::Twenty, Self::Thirty];

    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Thirty => 30,
        }
    }
}

impl TryFrom<usize> for RowsPerPage {
    type Error = TableError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            30 => Ok(Self::Thirty),
            other => Err(TableError::UnsupportedRowsPerPage(other)),
        }
    }
}

impl From<RowsPerPage> for usize {
    fn from(value: RowsPerPage) -> Self {
        value.get()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// How a header click picks the next sort order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortToggle {
    /// Flip the current order on every click, even when the clicked field is
    /// not the active one.
    #[default]
    Flip,
    /// Start over at ascending when a different field is clicked.
    RestartOnNewField,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub default_rows_per_page: RowsPerPage,
    pub sort_toggle: SortToggle,
    /// Go back to page 1 when the search term or the page size changes,
    /// instead of keeping the page and clamping it.
    pub reset_page_on_change: bool,
    pub striped: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            default_rows_per_page: RowsPerPage::Ten,
            sort_toggle: SortToggle::Flip,
            reset_page_on_change: false,
            striped: true,
        }
    }
}

impl TableOptions {
    pub fn from_json_str(source: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DerivationStats {
    pub filter_runs: usize,
    pub sort_runs: usize,
    pub page_runs: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeaderCell {
    pub title: String,
    pub field: String,
    pub ascending_active: bool,
    pub descending_active: bool,
}

/// Everything the view needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSnapshot {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
    pub pager: PagerModel,
    pub rows_per_page: RowsPerPage,
    pub search_term: String,
    pub filtered_count: usize,
    pub total_count: usize,
}

#[derive(Clone, Copy, Debug, Default)]
struct Revisions {
    inputs: u64,
    search: u64,
    sort: u64,
    page: u64,
}

#[derive(Clone, Debug, Default)]
struct Stage<T> {
    key: Option<(u64, u64)>,
    generation: u64,
    output: T,
}

impl<T> Stage<T> {
    fn is_fresh(&self, key: (u64, u64)) -> bool {
        self.key == Some(key)
    }

    fn store(&mut self, key: (u64, u64), output: T) {
        self.key = Some(key);
        self.generation += 1;
        self.output = output;
    }
}

pub struct TableEngine {
    columns: Arc<[Column]>,
    data: Arc<[Record]>,
    options: TableOptions,
    search_term: String,
    sort_field: Option<String>,
    sort_order: Option<SortOrder>,
    current_page: usize,
    rows_per_page: RowsPerPage,
    revisions: Revisions,
    filtered: Stage<Vec<usize>>,
    sorted: Stage<Vec<usize>>,
    page: Stage<Range<usize>>,
    stats: DerivationStats,
}

impl TableEngine {
    pub fn new(columns: impl Into<Arc<[Column]>>, data: impl Into<Arc<[Record]>>) -> Self {
        Self::with_options(columns, data, TableOptions::default())
    }

    pub fn with_options(
        columns: impl Into<Arc<[Column]>>,
        data: impl Into<Arc<[Record]>>,
        options: TableOptions,
    ) -> Self {
        let mut engine = Self {
            columns: columns.into(),
            data: data.into(),
            rows_per_page: options.default_rows_per_page,
            options,
            search_term: String::new(),
            sort_field: None,
            sort_order: None,
            current_page: 1,
            revisions: Revisions::default(),
            filtered: Stage::default(),
            sorted: Stage::default(),
            page: Stage::default(),
            stats: DerivationStats::default(),
        };
        engine.refresh();
        engine
    }

    /// Replaces the inputs. Caches survive when both slices are the same
    /// allocations as before.
    pub fn sync_inputs(&mut self, columns: &Arc<[Column]>, data: &Arc<[Record]>) {
        if Arc::ptr_eq(&self.columns, columns) && Arc::ptr_eq(&self.data, data) {
            return;
        }
        self.columns = columns.clone();
        self.data = data.clone();
        self.revisions.inputs += 1;
        log::debug!(
            "table inputs replaced: {} columns, {} records",
            self.columns.len(),
            self.data.len()
        );
        self.refresh();
    }

    /// Replaces the options. The toggle, reset and stripe settings apply from
    /// the next event; a changed `default_rows_per_page` is applied at once.
    pub fn set_options(&mut self, options: TableOptions) {
        if self.options == options {
            return;
        }
        let rows_per_page = (options.default_rows_per_page
            != self.options.default_rows_per_page)
            .then_some(options.default_rows_per_page);
        log::debug!("table options replaced");
        self.options = options;
        if let Some(rows_per_page) = rows_per_page {
            self.set_rows_per_page(rows_per_page);
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        log::debug!("search term changed to {term:?}");
        self.search_term = term;
        self.revisions.search += 1;
        if self.options.reset_page_on_change {
            self.move_to_page(1);
        }
        self.refresh();
    }

    pub fn set_sort(&mut self, field: &str) {
        let restart = self.options.sort_toggle == SortToggle::RestartOnNewField
            && self.sort_field.as_deref() != Some(field);
        let order = if restart {
            SortOrder::Ascending
        } else {
            match self.sort_order {
                Some(SortOrder::Ascending) => SortOrder::Descending,
                _ => SortOrder::Ascending,
            }
        };
        log::debug!("sort set to {field} {}", order.as_str());
        self.sort_field = Some(field.to_string());
        self.sort_order = Some(order);
        self.revisions.sort += 1;
        self.refresh();
    }

    pub fn clear_sort(&mut self) {
        if self.sort_field.is_none() && self.sort_order.is_none() {
            return;
        }
        self.sort_field = None;
        self.sort_order = None;
        self.revisions.sort += 1;
        self.refresh();
    }

    pub fn set_page(&mut self, page: usize) {
        let page = page.clamp(1, self.total_pages());
        self.move_to_page(page);
        self.refresh();
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: RowsPerPage) {
        if rows_per_page == self.rows_per_page {
            return;
        }
        log::debug!("rows per page changed to {}", rows_per_page.get());
        self.rows_per_page = rows_per_page;
        self.revisions.page += 1;
        if self.options.reset_page_on_change {
            self.move_to_page(1);
        }
        self.refresh();
    }

    pub fn columns(&self) -> &Arc<[Column]> {
        &self.columns
    }

    pub fn data(&self) -> &Arc<[Record]> {
        &self.data
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref()
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> RowsPerPage {
        self.rows_per_page
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.output.len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.rows_per_page.get()).max(1)
    }

    pub fn inputs_revision(&self) -> u64 {
        self.revisions.inputs
    }

    pub fn derivation_stats(&self) -> DerivationStats {
        self.stats
    }

    /// Dataset indices of the filtered rows in display order.
    pub fn sorted_indices(&self) -> &[usize] {
        &self.sorted.output
    }

    /// Dataset indices of the rows on the current page.
    pub fn visible_indices(&self) -> &[usize] {
        &self.sorted.output[self.page.output.clone()]
    }

    pub fn visible_rows(&self) -> Vec<&Record> {
        self.visible_indices()
            .iter()
            .map(|&index| &self.data[index])
            .collect()
    }

    pub fn header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| {
                let active = self.sort_field.as_deref() == Some(column.field.as_str());
                HeaderCell {
                    title: column.title.clone(),
                    field: column.field.clone(),
                    ascending_active: active && self.sort_order == Some(SortOrder::Ascending),
                    descending_active: active && self.sort_order == Some(SortOrder::Descending),
                }
            })
            .collect()
    }

    pub fn pager(&self) -> PagerModel {
        PagerModel::new(self.current_page, self.total_pages())
    }

    pub fn snapshot(&self, rows: &mut RowRenderCache) -> TableSnapshot {
        let rendered = self
            .visible_indices()
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                rows.render(
                    self.revisions.inputs,
                    index,
                    &self.data[index],
                    &self.columns,
                    position,
                )
            })
            .collect();

        TableSnapshot {
            header: self.header(),
            rows: rendered,
            pager: self.pager(),
            rows_per_page: self.rows_per_page,
            search_term: self.search_term.clone(),
            filtered_count: self.filtered_count(),
            total_count: self.data.len(),
        }
    }

    fn move_to_page(&mut self, page: usize) {
        if page != self.current_page {
            self.current_page = page;
            self.revisions.page += 1;
        }
    }

    fn refresh(&mut self) {
        let filter_key = (self.revisions.inputs, self.revisions.search);
        if !self.filtered.is_fresh(filter_key) {
            let filtered = filter_rows(&self.data, &self.columns, &self.search_term);
            log::trace!(
                "filter stage kept {} of {} records",
                filtered.len(),
                self.data.len()
            );
            self.filtered.store(filter_key, filtered);
            self.stats.filter_runs += 1;
        }

        let sort_key = (self.filtered.generation, self.revisions.sort);
        if !self.sorted.is_fresh(sort_key) {
            let mut sorted = self.filtered.output.clone();
            if let (Some(field), Some(order)) = (self.sort_field.as_deref(), self.sort_order) {
                sort_rows(&mut sorted, &self.data, field, order);
            }
            log::trace!("sort stage ordered {} records", sorted.len());
            self.sorted.store(sort_key, sorted);
            self.stats.sort_runs += 1;
        }

        let total_pages = self.total_pages();
        let clamped = self.current_page.clamp(1, total_pages);
        if clamped != self.current_page {
            log::debug!(
                "page {} clamped to {clamped} of {total_pages}",
                self.current_page
            );
            self.move_to_page(clamped);
        }

        let page_key = (self.sorted.generation, self.revisions.page);
        if !self.page.is_fresh(page_key) {
            let len = self.sorted.output.len();
            let size = self.rows_per_page.get();
            let start = ((self.current_page - 1) * size).min(len);
            let end = (self.current_page * size).min(len);
            self.page.store(page_key, start..end);
            self.stats.page_runs += 1;
        }
    }
}

fn filter_rows(data: &[Record], columns: &[Column], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..data.len()).collect();
    }
    let needle = term.to_lowercase();
    data.iter()
        .enumerate()
        .filter(|(_, record)| {
            columns
                .iter()
                .any(|column| record.text(&column.field).to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

fn sort_rows(indices: &mut [usize], data: &[Record], field: &str, order: SortOrder) {
    indices.sort_by(|&left, &right| {
        let left = data[left].text(field);
        let right = data[right].text(field);
        match order {
            SortOrder::Ascending => collate::compare(&left, &right),
            SortOrder::Descending => collate::compare(&right, &left),
        }
    });
}
