use std::sync::Arc;

use crate::data::{Column, Record};
use crate::demo::{employee_columns, employees};

use super::table_row::RowRenderCache;
use super::*;

fn first_names(engine: &TableEngine) -> Vec<String> {
    engine
        .visible_rows()
        .into_iter()
        .map(|record| record.text("firstName").into_owned())
        .collect()
}

fn numbered(count: usize) -> Arc<[Record]> {
    (0..count)
        .map(|index| {
            Record::new()
                .with("id", index)
                .with("name", format!("row {index:03}"))
        })
        .collect::<Vec<_>>()
        .into()
}

fn numbered_columns() -> Arc<[Column]> {
    vec![Column::new("Id", "id"), Column::new("Name", "name")].into()
}

#[test]
fn search_keeps_only_matching_records() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    engine.set_search_term("jane");

    assert_eq!(first_names(&engine), vec!["Jane"]);
    assert_eq!(engine.filtered_count(), 1);
}

#[test]
fn search_matches_any_column_case_insensitively() {
    let mut engine = TableEngine::new(employee_columns(), employees());

    engine.set_search_term("ANYTOWN");
    assert_eq!(first_names(&engine), vec!["John"]);

    engine.set_search_term("67890");
    assert_eq!(first_names(&engine), vec!["Jane"]);

    engine.set_search_term("");
    assert_eq!(first_names(&engine), vec!["John", "Jane"]);

    engine.set_search_term("nobody");
    assert!(engine.visible_rows().is_empty());
}

#[test]
fn search_ignores_fields_that_are_not_columns() {
    let columns: Arc<[Column]> = vec![Column::new("Name", "name")].into();
    let data: Arc<[Record]> = vec![
        Record::new().with("name", "Ada").with("secret", "needle"),
        Record::new().with("name", "needle"),
    ]
    .into();
    let mut engine = TableEngine::new(columns, data);
    engine.set_search_term("needle");

    assert_eq!(engine.visible_indices(), &[1]);
}

#[test]
fn two_rows_fit_on_one_page() {
    let engine = TableEngine::new(employee_columns(), employees());
    let pager = engine.pager();

    assert_eq!(engine.rows_per_page(), RowsPerPage::Ten);
    assert_eq!(engine.total_pages(), 1);
    assert!(pager.previous_disabled());
    assert!(pager.next_disabled());
}

#[test]
fn header_click_sorts_then_reverses() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    assert_eq!(first_names(&engine), vec!["John", "Jane"]);

    engine.set_sort("firstName");
    assert_eq!(engine.sort_field(), Some("firstName"));
    assert_eq!(engine.sort_order(), Some(SortOrder::Ascending));
    assert_eq!(first_names(&engine), vec!["Jane", "John"]);

    engine.set_sort("firstName");
    assert_eq!(engine.sort_order(), Some(SortOrder::Descending));
    assert_eq!(first_names(&engine), vec!["John", "Jane"]);
}

#[test]
fn switching_sort_field_flips_the_current_order() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    engine.set_sort("firstName");
    engine.set_sort("startDate");

    assert_eq!(engine.sort_field(), Some("startDate"));
    assert_eq!(engine.sort_order(), Some(SortOrder::Descending));
    assert_eq!(first_names(&engine), vec!["John", "Jane"]);
}

#[test]
fn restart_toggle_begins_new_fields_ascending() {
    let options = TableOptions {
        sort_toggle: SortToggle::RestartOnNewField,
        ..TableOptions::default()
    };
    let mut engine = TableEngine::with_options(employee_columns(), employees(), options);
    engine.set_sort("firstName");
    engine.set_sort("startDate");

    assert_eq!(engine.sort_order(), Some(SortOrder::Ascending));
    assert_eq!(first_names(&engine), vec!["Jane", "John"]);

    engine.set_sort("startDate");
    assert_eq!(engine.sort_order(), Some(SortOrder::Descending));
}

#[test]
fn clearing_sort_restores_dataset_order() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    engine.set_sort("firstName");
    engine.clear_sort();

    assert_eq!(engine.sort_field(), None);
    assert_eq!(first_names(&engine), vec!["John", "Jane"]);
}

#[test]
fn sorting_by_a_missing_field_keeps_filtered_order() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    engine.set_sort("salary");

    assert_eq!(first_names(&engine), vec!["John", "Jane"]);
}

#[test]
fn page_is_clamped_when_search_empties_the_table() {
    let mut engine = TableEngine::new(numbered_columns(), numbered(25));
    engine.set_page(2);
    assert_eq!(engine.current_page(), 2);

    engine.set_search_term("no such row");
    assert_eq!(engine.filtered_count(), 0);
    assert_eq!(engine.total_pages(), 1);
    assert_eq!(engine.current_page(), 1);
    assert!(engine.visible_rows().is_empty());
}

#[test]
fn page_is_kept_when_it_still_exists() {
    let mut engine = TableEngine::new(numbered_columns(), numbered(25));
    engine.set_page(3);
    engine.set_search_term("row");

    assert_eq!(engine.current_page(), 3);
    assert_eq!(engine.visible_indices(), &[20, 21, 22, 23, 24]);
}

#[test]
fn reset_option_returns_to_the_first_page() {
    let options = TableOptions {
        reset_page_on_change: true,
        ..TableOptions::default()
    };
    let mut engine = TableEngine::with_options(numbered_columns(), numbered(25), options);
    engine.set_page(3);
    engine.set_search_term("row");
    assert_eq!(engine.current_page(), 1);

    engine.set_page(2);
    engine.set_rows_per_page(RowsPerPage::Twenty);
    assert_eq!(engine.current_page(), 1);
}

#[test]
fn set_page_clamps_into_range() {
    let mut engine = TableEngine::new(numbered_columns(), numbered(25));

    engine.set_page(0);
    assert_eq!(engine.current_page(), 1);

    engine.set_page(99);
    assert_eq!(engine.current_page(), 3);
    assert_eq!(engine.visible_rows().len(), 5);
}

#[test]
fn larger_page_size_clamps_a_page_that_disappears() {
    let mut engine = TableEngine::new(numbered_columns(), numbered(25));
    engine.set_page(3);
    engine.set_rows_per_page(RowsPerPage::Thirty);

    assert_eq!(engine.total_pages(), 1);
    assert_eq!(engine.current_page(), 1);
    assert_eq!(engine.visible_rows().len(), 25);
}

#[test]
fn empty_dataset_has_one_inert_page() {
    let engine = TableEngine::new(employee_columns(), Vec::<Record>::new());
    let pager = engine.pager();

    assert_eq!(engine.total_pages(), 1);
    assert!(engine.visible_rows().is_empty());
    assert_eq!(pager.pages(), vec![PageButton { page: 1, active: true }]);
    assert!(pager.previous_disabled());
    assert!(pager.next_disabled());
}

#[test]
fn rows_per_page_accepts_only_supported_sizes() {
    assert_eq!(RowsPerPage::try_from(20).ok(), Some(RowsPerPage::Twenty));
    assert!(matches!(
        RowsPerPage::try_from(25),
        Err(crate::TableError::UnsupportedRowsPerPage(25))
    ));
    assert_eq!(usize::from(RowsPerPage::Thirty), 30);
}

#[test]
fn options_load_from_json_with_defaults() {
    let options = TableOptions::from_json_str(
        r#"{"default_rows_per_page": 20, "sort_toggle": "restart_on_new_field"}"#,
    )
    .expect("valid options");
    assert_eq!(options.default_rows_per_page, RowsPerPage::Twenty);
    assert_eq!(options.sort_toggle, SortToggle::RestartOnNewField);
    assert!(!options.reset_page_on_change);
    assert!(options.striped);

    assert!(TableOptions::from_json_str(r#"{"default_rows_per_page": 15}"#).is_err());

    let engine = TableEngine::with_options(employee_columns(), employees(), options);
    assert_eq!(engine.rows_per_page(), RowsPerPage::Twenty);
}

#[test]
fn stages_recompute_only_when_their_inputs_change() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    let baseline = engine.derivation_stats();
    assert_eq!(
        baseline,
        DerivationStats {
            filter_runs: 1,
            sort_runs: 1,
            page_runs: 1,
        }
    );

    engine.set_sort("firstName");
    let after_sort = engine.derivation_stats();
    assert_eq!(after_sort.filter_runs, 1);
    assert_eq!(after_sort.sort_runs, 2);

    engine.set_page(1);
    assert_eq!(engine.derivation_stats(), after_sort);

    engine.set_search_term("j");
    let after_search = engine.derivation_stats();
    assert_eq!(after_search.filter_runs, 2);
    assert_eq!(after_search.sort_runs, 3);

    engine.set_search_term("j");
    assert_eq!(engine.derivation_stats(), after_search);

    let columns = engine.columns().clone();
    let data = engine.data().clone();
    engine.sync_inputs(&columns, &data);
    assert_eq!(engine.derivation_stats(), after_search);

    let fresh_data: Arc<[Record]> = data.iter().cloned().collect::<Vec<_>>().into();
    engine.sync_inputs(&columns, &fresh_data);
    assert_eq!(engine.derivation_stats().filter_runs, 3);
}

#[test]
fn snapshot_describes_header_rows_and_pager() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    engine.set_sort("lastName");
    let mut rows = RowRenderCache::new();
    let snapshot = engine.snapshot(&mut rows);

    assert_eq!(snapshot.header.len(), 9);
    let last_name = &snapshot.header[1];
    assert_eq!(last_name.title, "Last Name");
    assert!(last_name.ascending_active);
    assert!(!last_name.descending_active);
    assert!(
        snapshot
            .header
            .iter()
            .filter(|cell| cell.field != "lastName")
            .all(|cell| !cell.ascending_active && !cell.descending_active)
    );

    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.rows[0].cells[1].to_string(), "Doe");
    assert_eq!(snapshot.rows[0].stripe, Stripe::Even);
    assert_eq!(snapshot.rows[1].cells[1].to_string(), "Smith");
    assert_eq!(snapshot.rows[1].stripe, Stripe::Odd);
    assert_eq!(snapshot.pager, PagerModel::new(1, 1));
    assert_eq!(snapshot.total_count, 2);
    assert_eq!(snapshot.filtered_count, 2);

    engine.snapshot(&mut rows);
    assert_eq!(rows.stats(), RowCacheStats { hits: 2, misses: 2 });
}

#[test]
fn changed_default_page_size_applies_to_a_live_table() {
    let mut engine = TableEngine::new(numbered_columns(), numbered(25));
    engine.set_page(3);

    engine.set_options(TableOptions {
        default_rows_per_page: RowsPerPage::Twenty,
        ..TableOptions::default()
    });
    assert_eq!(engine.rows_per_page(), RowsPerPage::Twenty);
    assert_eq!(engine.total_pages(), 2);
    assert_eq!(engine.current_page(), 2);
    assert_eq!(engine.visible_rows().len(), 5);

    engine.set_rows_per_page(RowsPerPage::Thirty);
    engine.set_options(TableOptions {
        default_rows_per_page: RowsPerPage::Twenty,
        striped: false,
        ..TableOptions::default()
    });
    assert_eq!(engine.rows_per_page(), RowsPerPage::Thirty);
    assert!(!engine.options().striped);
}

#[test]
fn changed_sort_toggle_applies_to_the_next_click() {
    let mut engine = TableEngine::new(employee_columns(), employees());
    engine.set_sort("firstName");
    engine.set_options(TableOptions {
        sort_toggle: SortToggle::RestartOnNewField,
        ..TableOptions::default()
    });
    engine.set_sort("lastName");

    assert_eq!(engine.sort_order(), Some(SortOrder::Ascending));
}
