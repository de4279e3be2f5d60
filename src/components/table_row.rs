use std::collections::HashMap;

use gpui::{
    InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled, div,
};

use crate::data::{Column, Record};
use crate::id::ComponentId;
use crate::theme::TableTheme;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedRow {
    pub cells: Vec<SharedString>,
    pub stripe: Stripe,
}

pub struct RowRenderer;

impl RowRenderer {
    /// One cell per column, in column order.
    pub fn render(record: &Record, columns: &[Column], position: usize) -> RenderedRow {
        RenderedRow {
            cells: columns
                .iter()
                .map(|column| SharedString::from(record.text(&column.field).into_owned()))
                .collect(),
            stripe: Stripe::for_position(position),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RowCacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Skips re-rendering rows whose inputs have not changed. Entries are keyed by
/// dataset slot and stripe, and dropped wholesale when the dataset or column
/// identity changes.
#[derive(Debug, Default)]
pub struct RowRenderCache {
    inputs_revision: Option<u64>,
    rows: HashMap<(usize, Stripe), RenderedRow>,
    stats: RowCacheStats,
}

impl RowRenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        inputs_revision: u64,
        index: usize,
        record: &Record,
        columns: &[Column],
        position: usize,
    ) -> RenderedRow {
        if self.inputs_revision != Some(inputs_revision) {
            self.rows.clear();
            self.inputs_revision = Some(inputs_revision);
        }
        let key = (index, Stripe::for_position(position));
        if let Some(row) = self.rows.get(&key) {
            self.stats.hits += 1;
            return row.clone();
        }
        self.stats.misses += 1;
        let row = RowRenderer::render(record, columns, position);
        self.rows.insert(key, row.clone());
        row
    }

    pub fn stats(&self) -> RowCacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(IntoElement)]
pub struct TableRowView {
    id: ComponentId,
    row: RenderedRow,
    striped: bool,
    theme: TableTheme,
}

impl TableRowView {
    pub fn new(id: impl Into<ComponentId>, row: RenderedRow) -> Self {
        Self {
            id: id.into(),
            row,
            striped: true,
            theme: TableTheme::default(),
        }
    }

    pub fn striped(mut self, value: bool) -> Self {
        self.striped = value;
        self
    }

    pub fn theme(mut self, value: TableTheme) -> Self {
        self.theme = value;
        self
    }
}

impl RenderOnce for TableRowView {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme;
        let row_bg = if self.striped && self.row.stripe == Stripe::Even {
            theme.row_alt_bg
        } else {
            theme.row_bg
        };

        let mut row = div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .items_center()
            .bg(row_bg)
            .text_color(theme.cell_fg)
            .border_b_1()
            .border_color(theme.row_border);

        for (column, text) in self.row.cells.into_iter().enumerate() {
            row = row.child(
                div()
                    .id(self.id.slot_index("cell", column))
                    .flex_1()
                    .min_w_0()
                    .p_2()
                    .text_center()
                    .truncate()
                    .child(text),
            );
        }
        row
    }
}
