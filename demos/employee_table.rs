use std::sync::Arc;

use calmtable::demo::{DEMO_TITLE, employee_columns, employees};
use calmtable::{Column, DataTable, Record};
use gpui::{
    App, AppContext, Application, Bounds, Context, FontWeight, IntoElement, ParentElement, Render,
    Styled, TitlebarOptions, Window, WindowBounds, WindowOptions, div, px, size,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

struct EmployeeDemo {
    columns: Arc<[Column]>,
    data: Arc<[Record]>,
}

impl Render for EmployeeDemo {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .p_4()
            .flex()
            .flex_col()
            .gap_2()
            .bg(gpui::white())
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .child(DEMO_TITLE),
            )
            .child(
                DataTable::new(self.columns.clone(), self.data.clone()).with_id("employees"),
            )
    }
}

fn main() {
    if let Err(error) = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger unavailable: {error}");
    }

    Application::new().run(|cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1100.0), px(480.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(DEMO_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let opened = cx.open_window(options, |_, cx| {
            cx.new(|_| EmployeeDemo {
                columns: employee_columns(),
                data: employees(),
            })
        });
        if let Err(error) = opened {
            log::error!("failed to open demo window: {error}");
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
