use super::*;
use crate::data::{Column, Record};
use crate::demo::{EMPLOYEES, employee_columns, employees};
use crate::theme::TableTheme;
use gpui::{AnyElement, IntoElement};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

#[test]
fn smoke_table_renders_into_any_element() {
    let _ = into_any(DataTable::new(employee_columns(), employees()));
    let _ = into_any(
        DataTable::new(employee_columns(), employees())
            .with_id("employees")
            .options(TableOptions {
                striped: false,
                ..TableOptions::default()
            })
            .theme(TableTheme::default()),
    );
    let _ = into_any(DataTable::from_records(&EMPLOYEES));
    let _ = into_any(DataTable::new(Vec::<Column>::new(), Vec::<Record>::new()));
}

#[test]
fn smoke_table_parts_render_into_any_element() {
    let _ = into_any(Pagination::new(PagerModel::new(2, 5)).on_change(|_, _, _| {}));
    let _ = into_any(Pagination::new(PagerModel::new(1, 1)).with_id("pager"));
    let _ = into_any(RowsPerPageSelect::new(RowsPerPage::Twenty).on_change(|_, _, _| {}));
    let _ = into_any(
        SearchInput::new()
            .placeholder("Enter search term here")
            .value("jane")
            .on_change(|_, _, _| {}),
    );

    let columns = employee_columns();
    let data = employees();
    let row = RowRenderer::render(&data[0], &columns, 0);
    let _ = into_any(TableRowView::new("row-0", row.clone()));
    let _ = into_any(TableRowView::new("row-1", row).striped(false));
}
