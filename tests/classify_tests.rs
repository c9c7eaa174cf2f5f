use benchfmt::classify::{OperationKind, classify};

#[test]
fn test_insert_only_counts_each_element_once() {
    let classified = classify("sbt_insert_100").expect("classified");
    assert_eq!(classified.kind, OperationKind::InsertOnly);
    assert_eq!(classified.element_count, 100);
    assert_eq!(classified.operation_count, 100);
    assert_eq!(classified.chart_name(), "Insert Only (100 elements)");
}

#[test]
fn test_insert_search_doubles_operations() {
    let classified = classify("sbt_insert_search_50").expect("classified");
    assert_eq!(classified.kind, OperationKind::InsertSearch);
    assert_eq!(classified.element_count, 50);
    assert_eq!(classified.operation_count, 100);
    assert_eq!(classified.chart_name(), "Insert + Search (50 elements)");
}

#[test]
fn test_full_cycle_doubles_operations() {
    let classified = classify("sbt_full_cycle_20").expect("classified");
    assert_eq!(classified.kind, OperationKind::InsertRemove);
    assert_eq!(classified.operation_count, 40);
    assert_eq!(classified.chart_name(), "Insert + Remove (20 elements)");
}

#[test]
fn test_unrecognized_prefix_keeps_element_count() {
    let classified = classify("art_lookup_500").expect("classified");
    assert_eq!(classified.kind, OperationKind::Unknown);
    assert_eq!(classified.operation_count, 500);
    assert_eq!(classified.chart_name(), "Unknown (500 elements)");
}

#[test]
fn test_insert_search_takes_priority_over_insert() {
    assert_eq!(
        OperationKind::from_name("sbt_insert_search_50"),
        OperationKind::InsertSearch
    );
}

#[test]
fn test_name_without_trailing_count_is_skipped() {
    assert!(classify("sbt_setup").is_none());
    assert!(classify("sbt_insert").is_none());
}

#[test]
fn test_digits_must_follow_an_underscore() {
    assert!(classify("insert100").is_none());
    assert!(classify("100").is_none());
}
