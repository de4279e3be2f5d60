use gpui::IntoElement;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn prelude_exports_render_components() {
    use crate::prelude::*;

    assert_render_once::<DataTable>();
    assert_render_once::<Pagination>();
    assert_render_once::<RowsPerPageSelect>();
    assert_render_once::<SearchInput>();
    assert_render_once::<TableRowView>();
}

#[test]
fn root_exports_build_a_table() {
    let records = crate::records_from_json(
        r#"[{"name": "Ada", "age": 36}, {"name": "Grace", "age": 85.5}]"#,
    )
    .expect("valid dataset");
    let columns = vec![
        crate::Column::new("Name", "name"),
        crate::Column::new("Age", "age"),
    ];

    let mut engine = crate::TableEngine::new(columns.clone(), records.clone());
    engine.set_sort("age");
    engine.set_sort("age");
    assert_eq!(engine.sort_order(), Some(crate::SortOrder::Descending));
    assert_eq!(engine.visible_rows()[0].text("age"), "85.5");

    let _ = into_any(crate::DataTable::new(columns, records).with_id("people"));
}

#[test]
fn json_datasets_report_bad_records() {
    let error = crate::records_from_json(r#"[{"name": "Ada"}, 7]"#)
        .expect_err("non-object record");
    assert!(matches!(error, crate::TableError::InvalidDataset(_)));
    assert!(error.to_string().contains("record 1"));

    assert!(matches!(
        crate::records_from_json("not json"),
        Err(crate::TableError::Json(_))
    ));
}

#[test]
fn derived_records_expose_columns_and_values() {
    use crate::TableRecord as _;

    #[derive(crate::TableRecord)]
    struct Book {
        title: String,
        #[column(title = "Pages", field = "pageCount")]
        pages: u32,
        #[column(skip)]
        #[allow(dead_code)]
        shelf: u8,
        in_print: bool,
    }

    let columns = Book::columns();
    let pairs = columns
        .iter()
        .map(|column| (column.title.as_str(), column.field.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        pairs,
        vec![("Title", "title"), ("Pages", "pageCount"), ("In Print", "inPrint")]
    );

    let record = Book {
        title: "Dune".into(),
        pages: 412,
        shelf: 3,
        in_print: true,
    }
    .to_record();
    assert_eq!(record.text("title"), "Dune");
    assert_eq!(record.text("pageCount"), "412");
    assert_eq!(record.text("inPrint"), "true");
    assert!(record.get("shelf").is_none());
}
