use std::rc::Rc;

use gpui::{
    ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div,
};

use crate::id::ComponentId;
use crate::theme::TableTheme;

use super::table_engine::RowsPerPage;

type ChangeHandler = Rc<dyn Fn(RowsPerPage, &mut Window, &mut gpui::App)>;

/// Segmented choice among the supported page sizes.
#[derive(IntoElement)]
pub struct RowsPerPageSelect {
    id: ComponentId,
    value: RowsPerPage,
    theme: TableTheme,
    on_change: Option<ChangeHandler>,
}

impl RowsPerPageSelect {
    #[track_caller]
    pub fn new(value: RowsPerPage) -> Self {
        Self {
            id: ComponentId::auto("rows-per-page"),
            value,
            theme: TableTheme::default(),
            on_change: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn theme(mut self, value: TableTheme) -> Self {
        self.theme = value;
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(RowsPerPage, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for RowsPerPageSelect {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme;
        let mut items = div().id(self.id.clone()).flex().items_center().gap_1();

        for option in RowsPerPage::ALL {
            let is_active = option == self.value;
            let mut item = div()
                .id(self.id.slot_index("option", option.get()))
                .px_2()
                .py_1()
                .border_1()
                .rounded_sm()
                .border_color(theme.control_border)
                .bg(if is_active {
                    theme.control_active_bg
                } else {
                    theme.control_bg
                })
                .text_color(theme.control_fg)
                .font_weight(if is_active {
                    FontWeight::SEMIBOLD
                } else {
                    FontWeight::NORMAL
                })
                .child(option.get().to_string());

            if is_active {
                item = item.cursor_default();
            } else {
                let on_change = self.on_change.clone();
                let hover_bg = theme.control_hover_bg;
                item = item
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .on_click(move |_: &ClickEvent, window, cx| {
                        if let Some(handler) = on_change.as_ref() {
                            (handler)(option, window, cx);
                        }
                    });
            }
            items = items.child(item);
        }
        items
    }
}
