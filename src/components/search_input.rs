use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{LazyLock, Mutex};

use gpui::{
    ClickEvent, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::id::ComponentId;
use crate::theme::TableTheme;

use super::search_state;

type ChangeHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;

static SEARCH_FOCUS_HANDLES: LazyLock<Mutex<HashMap<String, FocusHandle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchEdit {
    Insert(String),
    Backspace,
    Clear,
}

/// Maps an unmodified key press to a text edit.
pub fn edit_for_key(key: &str, key_char: Option<&str>) -> Option<SearchEdit> {
    match key {
        "backspace" => Some(SearchEdit::Backspace),
        "escape" => Some(SearchEdit::Clear),
        "enter" | "tab" | "left" | "right" | "up" | "down" | "home" | "end" => None,
        _ => key_char
            .filter(|text| !text.is_empty() && !text.chars().any(char::is_control))
            .map(|text| SearchEdit::Insert(text.to_string())),
    }
}

pub fn apply_edit(value: &str, edit: SearchEdit) -> String {
    match edit {
        SearchEdit::Insert(text) => format!("{value}{text}"),
        SearchEdit::Backspace => {
            let mut next = value.to_string();
            next.pop();
            next
        }
        SearchEdit::Clear => String::new(),
    }
}

#[derive(IntoElement)]
pub struct SearchInput {
    id: ComponentId,
    value: SharedString,
    placeholder: Option<SharedString>,
    theme: TableTheme,
    focus_handle: Option<FocusHandle>,
    on_change: Option<ChangeHandler>,
}

impl SearchInput {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("search-input"),
            value: SharedString::default(),
            placeholder: None,
            theme: TableTheme::default(),
            focus_handle: None,
            on_change: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn theme(mut self, value: TableTheme) -> Self {
        self.theme = value;
        self
    }

    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    fn resolved_focus_handle(&self, cx: &gpui::App) -> FocusHandle {
        if let Some(focus_handle) = self.focus_handle.as_ref() {
            return focus_handle.clone();
        }
        if let Ok(mut handles) = SEARCH_FOCUS_HANDLES.lock() {
            return handles
                .entry(self.id.to_string())
                .or_insert_with(|| cx.focus_handle())
                .clone();
        }
        cx.focus_handle()
    }
}

impl Default for SearchInput {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for SearchInput {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme;
        let focus_handle = self.resolved_focus_handle(cx);
        let is_focused = focus_handle.is_focused(window);
        let current_value = search_state::sync(&self.id, &self.value);

        let text = if current_value.is_empty() {
            div()
                .text_color(theme.control_disabled_fg)
                .child(self.placeholder.clone().unwrap_or_default())
        } else {
            div()
                .text_color(theme.control_fg)
                .child(SharedString::from(current_value))
        };

        let mut input = div()
            .id(self.id.clone())
            .track_focus(&focus_handle)
            .min_w(px(180.0))
            .px_2()
            .py_1()
            .flex()
            .items_center()
            .border_1()
            .rounded_sm()
            .bg(theme.row_bg)
            .border_color(if is_focused {
                theme.control_focus_border
            } else {
                theme.control_border
            })
            .cursor_text()
            .child(text);

        if is_focused {
            input = input.child(div().ml(px(1.0)).w(px(1.0)).h(px(14.0)).bg(theme.control_fg));
        }

        let handle_for_click = focus_handle.clone();
        let handle_for_blur = focus_handle;
        let id_for_keys = self.id.clone();
        let on_change = self.on_change.clone();

        input
            .on_click(move |_: &ClickEvent, window, _cx| {
                window.focus(&handle_for_click);
                window.refresh();
            })
            .on_mouse_down_out(move |_, window, _cx| {
                if handle_for_blur.is_focused(window) {
                    window.blur();
                    window.refresh();
                }
            })
            .on_key_down(move |event: &KeyDownEvent, window, cx| {
                let modifiers = &event.keystroke.modifiers;
                if modifiers.control || modifiers.platform || modifiers.function || modifiers.alt
                {
                    return;
                }
                let Some(edit) =
                    edit_for_key(&event.keystroke.key, event.keystroke.key_char.as_deref())
                else {
                    return;
                };
                if let Some(next_value) = search_state::edit(&id_for_keys, edit)
                    && let Some(handler) = on_change.as_ref()
                {
                    (handler)(next_value.into(), window, cx);
                }
                window.refresh();
                cx.stop_propagation();
            })
    }
}
