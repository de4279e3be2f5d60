use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

use super::search_input::{SearchEdit, apply_edit};

/// Live text of one search box. `value` moves with every key press, while
/// `rendered` remembers the last value the owner passed in, so a frame that
/// lags behind the keyboard does not roll the text back.
#[derive(Debug, Default)]
struct SearchSlot {
    value: String,
    rendered: String,
}

static SEARCH_STATE: LazyLock<Mutex<HashMap<String, SearchSlot>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Adopts `rendered` when the owner changed it since the previous frame and
/// returns the text to draw.
pub fn sync(id: &str, rendered: &str) -> String {
    let Ok(mut state) = SEARCH_STATE.lock() else {
        return rendered.to_string();
    };
    let slot = state.entry(id.to_string()).or_insert_with(|| SearchSlot {
        value: rendered.to_string(),
        rendered: rendered.to_string(),
    });
    if slot.rendered != rendered {
        slot.rendered = rendered.to_string();
        slot.value = rendered.to_string();
    }
    slot.value.clone()
}

pub fn value(id: &str) -> Option<String> {
    SEARCH_STATE
        .lock()
        .ok()
        .and_then(|state| state.get(id).map(|slot| slot.value.clone()))
}

/// Applies `change` to the live text and returns the new text when it changed.
pub fn edit(id: &str, change: SearchEdit) -> Option<String> {
    let Ok(mut state) = SEARCH_STATE.lock() else {
        return None;
    };
    let slot = state.entry(id.to_string()).or_default();
    let next = apply_edit(&slot.value, change);
    if next == slot.value {
        return None;
    }
    slot.value = next.clone();
    Some(next)
}

pub fn remove(id: &str) {
    if let Ok(mut state) = SEARCH_STATE.lock() {
        state.remove(id);
    }
}

pub fn clear_all() {
    if let Ok(mut state) = SEARCH_STATE.lock() {
        state.clear();
    }
}
