use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex},
};

use crate::data::{Column, Record};
use crate::id::ComponentId;

use super::search_state;
use super::table_engine::{RowsPerPage, TableEngine, TableOptions, TableSnapshot};
use super::table_row::RowRenderCache;

/// Slot name of the search box inside a table's id space.
pub const SEARCH_SLOT: &str = "search";

struct TableSlot {
    engine: TableEngine,
    rows: RowRenderCache,
}

static TABLE_STATE: LazyLock<Mutex<HashMap<String, TableSlot>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub struct TableStateInput<'a> {
    pub id: &'a str,
    pub columns: &'a Arc<[Column]>,
    pub data: &'a Arc<[Record]>,
    pub options: &'a TableOptions,
}

/// Syncs the stored engine for `input.id` with the latest inputs and returns
/// the frame to draw. The engine is created on first use.
pub fn resolve(input: TableStateInput<'_>) -> TableSnapshot {
    let Ok(mut tables) = TABLE_STATE.lock() else {
        let engine = TableEngine::with_options(
            input.columns.clone(),
            input.data.clone(),
            input.options.clone(),
        );
        return engine.snapshot(&mut RowRenderCache::new());
    };

    let slot = tables.entry(input.id.to_string()).or_insert_with(|| {
        log::debug!("creating table state for {}", input.id);
        TableSlot {
            engine: TableEngine::with_options(
                input.columns.clone(),
                input.data.clone(),
                input.options.clone(),
            ),
            rows: RowRenderCache::new(),
        }
    });
    slot.engine.set_options(input.options.clone());
    slot.engine.sync_inputs(input.columns, input.data);
    slot.engine.snapshot(&mut slot.rows)
}

/// Runs `apply` against the engine stored for `id`. Returns false when no
/// table with that id has been rendered yet.
pub fn update(id: &str, apply: impl FnOnce(&mut TableEngine)) -> bool {
    let Ok(mut tables) = TABLE_STATE.lock() else {
        return false;
    };
    match tables.get_mut(id) {
        Some(slot) => {
            apply(&mut slot.engine);
            true
        }
        None => false,
    }
}

pub fn on_sort(id: &str, field: &str) -> bool {
    update(id, |engine| engine.set_sort(field))
}

pub fn on_page_change(id: &str, page: usize) -> bool {
    update(id, |engine| engine.set_page(page))
}

pub fn on_rows_per_page_change(id: &str, rows_per_page: RowsPerPage) -> bool {
    update(id, |engine| engine.set_rows_per_page(rows_per_page))
}

pub fn on_search_change(id: &str, term: &str) -> bool {
    update(id, |engine| engine.set_search_term(term))
}

pub fn remove(id: &str) -> bool {
    search_state::remove(&ComponentId::from(id).slot(SEARCH_SLOT));
    TABLE_STATE
        .lock()
        .map(|mut tables| tables.remove(id).is_some())
        .unwrap_or(false)
}

pub fn clear_all() {
    if let Ok(mut tables) = TABLE_STATE.lock() {
        for id in tables.keys() {
            search_state::remove(&ComponentId::from(id.as_str()).slot(SEARCH_SLOT));
        }
        tables.clear();
    }
}
