use std::sync::Arc;

use gpui::{
    ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, div,
};

use crate::data::{Column, Record, TableRecord, records_from};
use crate::id::ComponentId;
use crate::theme::TableTheme;

use super::pagination::Pagination;
use super::rows_per_page::RowsPerPageSelect;
use super::search_input::SearchInput;
use super::table_engine::{HeaderCell, TableOptions};
use super::table_row::TableRowView;
use super::table_state::{self, TableStateInput};

/// Sortable, searchable, paginated table over a fixed set of records.
///
/// Search, sort and page state live in [`table_state`] under the table's id,
/// so the element can be rebuilt every frame. Give each table on screen its
/// own id when more than one is built from the same call site.
#[derive(IntoElement)]
pub struct DataTable {
    id: ComponentId,
    columns: Arc<[Column]>,
    data: Arc<[Record]>,
    options: TableOptions,
    theme: TableTheme,
}

impl DataTable {
    #[track_caller]
    pub fn new(columns: impl Into<Arc<[Column]>>, data: impl Into<Arc<[Record]>>) -> Self {
        Self {
            id: ComponentId::auto("data-table"),
            columns: columns.into(),
            data: data.into(),
            options: TableOptions::default(),
            theme: TableTheme::default(),
        }
    }

    #[track_caller]
    pub fn from_records<T: TableRecord>(items: &[T]) -> Self {
        Self::new(T::columns(), records_from(items))
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn options(mut self, value: TableOptions) -> Self {
        self.options = value;
        self
    }

    pub fn theme(mut self, value: TableTheme) -> Self {
        self.theme = value;
        self
    }

    fn render_header_cell(&self, index: usize, cell: HeaderCell) -> impl IntoElement {
        let theme = self.theme;
        let indicator = |glyph: &'static str, active: bool| {
            div()
                .text_color(if active {
                    theme.indicator_active
                } else {
                    theme.indicator_idle
                })
                .child(glyph)
        };
        let table_id = self.id.clone();
        let field = cell.field;

        div()
            .id(self.id.slot_index("header-cell", index))
            .flex_1()
            .min_w_0()
            .p_2()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .text_color(theme.header_fg)
            .font_weight(FontWeight::SEMIBOLD)
            .child(div().truncate().child(SharedString::from(cell.title)))
            .child(
                div()
                    .ml_2()
                    .flex()
                    .flex_col()
                    .text_xs()
                    .child(indicator("▲", cell.ascending_active))
                    .child(indicator("▼", cell.descending_active)),
            )
            .on_click(move |_: &ClickEvent, window, _cx| {
                if table_state::on_sort(&table_id, &field) {
                    window.refresh();
                }
            })
    }
}

impl RenderOnce for DataTable {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme;
        let snapshot = table_state::resolve(TableStateInput {
            id: &self.id,
            columns: &self.columns,
            data: &self.data,
            options: &self.options,
        });

        let id_for_rows_per_page = self.id.clone();
        let id_for_search = self.id.clone();
        let id_for_page = self.id.clone();

        let toolbar = div()
            .id(self.id.slot("toolbar"))
            .w_full()
            .mb_2()
            .flex()
            .items_center()
            .justify_between()
            .text_color(theme.label_fg)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child("Show entries:")
                    .child(
                        RowsPerPageSelect::new(snapshot.rows_per_page)
                            .with_id(self.id.slot("rows-per-page"))
                            .theme(theme)
                            .on_change(move |rows_per_page, window, _cx| {
                                if table_state::on_rows_per_page_change(
                                    &id_for_rows_per_page,
                                    rows_per_page,
                                ) {
                                    window.refresh();
                                }
                            }),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child("Search:")
                    .child(
                        SearchInput::new()
                            .with_id(self.id.slot(table_state::SEARCH_SLOT))
                            .value(snapshot.search_term.clone())
                            .placeholder("Enter search term here")
                            .theme(theme)
                            .on_change(move |term, window, _cx| {
                                if table_state::on_search_change(&id_for_search, &term) {
                                    window.refresh();
                                }
                            }),
                    ),
            );

        let mut header = div()
            .id(self.id.slot("header"))
            .w_full()
            .flex()
            .items_center()
            .border_b_2()
            .border_color(theme.header_border);
        for (index, cell) in snapshot.header.into_iter().enumerate() {
            header = header.child(self.render_header_cell(index, cell));
        }

        let rows = snapshot
            .rows
            .into_iter()
            .enumerate()
            .map(|(position, row)| {
                TableRowView::new(self.id.slot_index("row", position), row)
                    .striped(self.options.striped)
                    .theme(theme)
            })
            .collect::<Vec<_>>();
        let body = div()
            .id(self.id.slot("rows"))
            .w_full()
            .flex()
            .flex_col()
            .children(rows);

        let pagination = Pagination::new(snapshot.pager)
            .with_id(self.id.slot("pagination"))
            .theme(theme)
            .on_change(move |page, window, _cx| {
                if table_state::on_page_change(&id_for_page, page) {
                    window.refresh();
                }
            });

        div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .flex_col()
            .child(toolbar)
            .child(header)
            .child(body)
            .child(pagination)
    }
}
