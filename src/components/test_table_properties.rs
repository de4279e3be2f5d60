use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use crate::data::{Column, Record};

use super::*;

fn columns() -> Arc<[Column]> {
    vec![
        Column::new("Name", "name"),
        Column::new("City", "city"),
        Column::new("Age", "age"),
    ]
    .into()
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[A-Za-z ]{0,8}",
        prop::option::of("[a-zA-Z]{0,6}"),
        0u32..100,
    )
        .prop_map(|(name, city, age)| {
            let mut record = Record::new().with("name", name).with("age", age);
            if let Some(city) = city {
                record.insert("city", city);
            }
            record
        })
}

fn dataset_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..70)
}

fn rows_per_page_strategy() -> impl Strategy<Value = RowsPerPage> {
    prop::sample::select(RowsPerPage::ALL.to_vec())
}

fn matches(record: &Record, columns: &[Column], term: &str) -> bool {
    let needle = term.to_lowercase();
    columns
        .iter()
        .any(|column| record.text(&column.field).to_lowercase().contains(&needle))
}

proptest! {
    #[test]
    fn filter_is_an_ordered_subsequence_of_matches(
        data in dataset_strategy(),
        term in "[a-zA-Z]{0,2}",
    ) {
        let mut engine = TableEngine::new(columns(), data.clone());
        engine.set_search_term(term.clone());
        let kept = engine.sorted_indices().to_vec();

        prop_assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
        for &index in &kept {
            prop_assert!(term.is_empty() || matches(&data[index], &columns(), &term));
        }
        let expected = (0..data.len())
            .filter(|&index| term.is_empty() || matches(&data[index], &columns(), &term))
            .count();
        prop_assert_eq!(kept.len(), expected);
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys(
        names in prop::collection::btree_set("[a-z]{1,6}", 0..30),
    ) {
        let data = names
            .iter()
            .rev()
            .map(|name| Record::new().with("name", name.as_str()))
            .collect::<Vec<_>>();
        let mut engine = TableEngine::new(columns(), data);

        engine.set_sort("name");
        prop_assert_eq!(engine.sort_order(), Some(SortOrder::Ascending));
        let ascending = engine.sorted_indices().to_vec();

        engine.set_sort("name");
        prop_assert_eq!(engine.sort_order(), Some(SortOrder::Descending));
        let mut descending = engine.sorted_indices().to_vec();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn repeated_derivation_is_stable(
        data in dataset_strategy(),
        page in 0usize..10,
        rows_per_page in rows_per_page_strategy(),
    ) {
        let mut engine = TableEngine::new(columns(), data);
        engine.set_rows_per_page(rows_per_page);
        engine.set_page(page);

        let first = engine.visible_indices().to_vec();
        let second = engine.visible_indices().to_vec();
        prop_assert_eq!(first, second);
        prop_assert!(engine.current_page() >= 1);
        prop_assert!(engine.current_page() <= engine.total_pages());
    }

    #[test]
    fn pages_partition_the_sorted_rows(
        data in dataset_strategy(),
        term in "[a-z]{0,1}",
        rows_per_page in rows_per_page_strategy(),
        sort_clicks in 0usize..3,
    ) {
        let mut engine = TableEngine::new(columns(), data);
        engine.set_search_term(term);
        engine.set_rows_per_page(rows_per_page);
        for _ in 0..sort_clicks {
            engine.set_sort("city");
        }

        let sorted = engine.sorted_indices().to_vec();
        let mut concatenated = Vec::with_capacity(sorted.len());
        for page in 1..=engine.total_pages() {
            engine.set_page(page);
            prop_assert_eq!(engine.current_page(), page);
            prop_assert!(engine.visible_indices().len() <= rows_per_page.get());
            concatenated.extend_from_slice(engine.visible_indices());
        }

        prop_assert_eq!(&concatenated, &sorted);
        let unique = concatenated.iter().collect::<BTreeSet<_>>();
        prop_assert_eq!(unique.len(), concatenated.len());
    }
}
