use std::rc::Rc;

use gpui::{
    ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::id::ComponentId;
use crate::theme::TableTheme;

type ChangeHandler = Rc<dyn Fn(usize, &mut Window, &mut gpui::App)>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageButton {
    pub page: usize,
    pub active: bool,
}

/// What the pagination bar shows for a given page position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PagerModel {
    pub current: usize,
    pub total: usize,
}

impl PagerModel {
    pub fn new(current: usize, total: usize) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.current <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.total
    }

    pub fn previous_target(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next_target(&self) -> usize {
        (self.current + 1).min(self.total)
    }

    pub fn pages(&self) -> Vec<PageButton> {
        (1..=self.total)
            .map(|page| PageButton {
                page,
                active: page == self.current,
            })
            .collect()
    }
}

#[derive(IntoElement)]
pub struct Pagination {
    id: ComponentId,
    model: PagerModel,
    theme: TableTheme,
    on_change: Option<ChangeHandler>,
}

impl Pagination {
    #[track_caller]
    pub fn new(model: PagerModel) -> Self {
        Self {
            id: ComponentId::auto("pagination"),
            model,
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
        handler: impl Fn(usize, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme;
        let model = self.model;
        let on_change = self.on_change.clone();

        let make_item = |id: ComponentId, label: String, target: usize, disabled: bool, bold: bool| {
            let mut item = div()
                .id(id)
                .min_w(px(32.0))
                .px_2()
                .py_1()
                .text_center()
                .border_1()
                .border_color(theme.control_border)
                .rounded_sm()
                .bg(theme.control_bg)
                .text_color(if disabled && !bold {
                    theme.control_disabled_fg
                } else {
                    theme.control_fg
                })
                .font_weight(if bold {
                    FontWeight::BOLD
                } else {
                    FontWeight::NORMAL
                })
                .child(label);

            if disabled {
                item = item.cursor_default();
            } else {
                let on_change = on_change.clone();
                let hover_bg = theme.control_hover_bg;
                item = item
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .on_click(move |_: &ClickEvent, window, cx| {
                        if let Some(handler) = on_change.as_ref() {
                            (handler)(target, window, cx);
                        }
                    });
            }
            item
        };

        let previous = make_item(
            self.id.slot("prev"),
            "Previous".to_string(),
            model.previous_target(),
            model.previous_disabled(),
            false,
        );
        let next = make_item(
            self.id.slot("next"),
            "Next".to_string(),
            model.next_target(),
            model.next_disabled(),
            false,
        );
        let pages = model.pages().into_iter().map(|button| {
            make_item(
                self.id.slot_index("page", button.page),
                button.page.to_string(),
                button.page,
                button.active,
                button.active,
            )
        });

        div()
            .id(self.id.clone())
            .w_full()
            .mt_2()
            .flex()
            .items_center()
            .justify_between()
            .child(previous)
            .child(div().flex().items_center().gap_1().children(pages))
            .child(next)
    }
}
