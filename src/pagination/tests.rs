//! Tests for pagination module

use super::*;
use crate::error::Error;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Page Arithmetic Tests
// ============================================================================

#[test_case(0, 30 => 0 ; "empty collection")]
#[test_case(5, 3 => 2 ; "partial last page")]
#[test_case(6, 3 => 2 ; "exact multiple")]
#[test_case(1, 30 => 1 ; "single element")]
#[test_case(100, 1 => 100 ; "page size one")]
#[test_case(5, 0 => 0 ; "zero page size")]
fn test_page_count(total: usize, size: usize) -> usize {
    page_count(total, size)
}

#[test]
fn test_page_bounds() {
    assert_eq!(page_bounds(1, 3, 5).unwrap(), 0..3);
    assert_eq!(page_bounds(2, 3, 5).unwrap(), 3..5);
    // Page starting exactly at the end is empty, not an error
    assert_eq!(page_bounds(3, 3, 6).unwrap(), 6..6);
    assert_eq!(page_bounds(1, 30, 0).unwrap(), 0..0);
}

#[test]
fn test_page_bounds_errors() {
    assert!(matches!(
        page_bounds(0, 3, 5),
        Err(Error::InvalidPage { page: 0 })
    ));
    assert!(matches!(
        page_bounds(3, 3, 5),
        Err(Error::InvalidPage { page: 3 })
    ));
    assert!(matches!(
        page_bounds(2, 30, 0),
        Err(Error::InvalidPage { page: 2 })
    ));
    assert!(matches!(
        page_bounds(1, 0, 5),
        Err(Error::InvalidPageSize { size: 0 })
    ));
}

#[test]
fn test_check_page_size() {
    assert_eq!(types::check_page_size(1).unwrap(), 1);
    assert_eq!(types::check_page_size(30).unwrap(), 30);
    assert!(matches!(
        types::check_page_size(0),
        Err(Error::InvalidPageSize { size: 0 })
    ));
}

#[test]
fn test_page_bounds_overflow_is_invalid_page() {
    let result = page_bounds(usize::MAX, 2, 10);
    assert!(result.unwrap_err().is_invalid_page());
}

// ============================================================================
// PageDetails Tests
// ============================================================================

#[test]
fn test_page_details_compute() {
    let details = PageDetails::compute(1, 3, 5, vec![1, 2, 3]);
    assert_eq!(
        details,
        PageDetails {
            current_page: 1,
            total_pages: 2,
            total_count: 5,
            page_size: 3,
            has_next_page: true,
            has_prev_page: false,
            result: vec![1, 2, 3],
        }
    );
    assert_eq!(details.len(), 3);
    assert!(!details.is_empty());
}

#[test]
fn test_page_details_serialized_field_names() {
    let details = PageDetails::compute(2, 3, 5, vec![4, 5]);
    let value = serde_json::to_value(&details).unwrap();
    assert_eq!(
        value,
        json!({
            "current_page": 2,
            "total_pages": 2,
            "total_count": 5,
            "page_size": 3,
            "has_next_page": false,
            "has_prev_page": true,
            "result": [4, 5]
        })
    );
}

#[test]
fn test_page_details_map() {
    let details = PageDetails::compute(1, 2, 3, vec![1, 2]).map(|n| n.to_string());
    assert_eq!(details.result, vec!["1".to_string(), "2".to_string()]);
    assert_eq!(details.total_pages, 2);
    assert!(details.has_next_page);
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[test]
fn test_paginator_defaults() {
    let items = vec![1, 2, 3, 4, 5];
    let mut paginator = Paginator::new(&items);

    assert_eq!(paginator.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(paginator.current_page(), 0);
    assert_eq!(paginator.paginate(1).unwrap(), items);
}

#[test]
fn test_items_borrows_source_collection() {
    let items = vec![1, 2, 3];
    let mut paginator = Paginator::new(&items).with_page_size(2).unwrap();

    assert!(std::ptr::eq(paginator.items(), items.as_slice()));
    paginator.paginate(2).unwrap();
    assert_eq!(paginator.items(), &[1, 2, 3]);
}

#[test]
fn test_set_page_size() {
    let items: Vec<i32> = Vec::new();
    let mut paginator = Paginator::new(&items);

    paginator.set_page_size(10).unwrap();
    assert_eq!(paginator.page_size(), 10);

    paginator.set_page_size(20).unwrap();
    assert_eq!(paginator.page_size(), 20);
}

#[test]
fn test_set_page_size_rejects_zero() {
    let items = [1, 2, 3];
    let mut paginator = Paginator::new(&items);
    paginator.set_page_size(2).unwrap();

    let err = paginator.set_page_size(0).unwrap_err();
    assert!(matches!(err, Error::InvalidPageSize { size: 0 }));
    assert_eq!(paginator.page_size(), 2);

    assert!(Paginator::new(&items).with_page_size(0).is_err());
}

#[test]
fn test_paginate_invalid_pages() {
    let items = [1, 2, 3, 4, 5];
    let mut paginator = Paginator::new(&items);

    assert!(paginator.paginate(0).unwrap_err().is_invalid_page());
    // start = 30 > 5
    assert!(paginator.paginate(2).unwrap_err().is_invalid_page());
    assert_eq!(paginator.current_page(), 0);
}

#[test]
fn test_paginate_pages() {
    let items = [1, 2, 3, 4, 5];
    let mut paginator = Paginator::new(&items).with_page_size(3).unwrap();

    assert_eq!(paginator.paginate(1).unwrap(), vec![1, 2, 3]);
    assert_eq!(paginator.paginate(2).unwrap(), vec![4, 5]);
    assert!(paginator.paginate(3).unwrap_err().is_invalid_page());
}

#[test]
fn test_failed_paginate_keeps_last_successful_page() {
    let items = [1, 2, 3, 4, 5];
    let mut paginator = Paginator::new(&items).with_page_size(3).unwrap();

    paginator.paginate(2).unwrap();
    assert!(paginator.paginate(9).is_err());
    assert_eq!(paginator.current_page(), 2);
    assert!(!paginator.has_next_page());
    assert!(paginator.has_prev_page());
}

#[test]
fn test_paginate_boundary_page_is_empty() {
    let items = [1, 2, 3, 4, 5, 6];
    let mut paginator = Paginator::new(&items).with_page_size(3).unwrap();

    let page = paginator.paginate(3).unwrap();
    assert!(page.is_empty());
    assert_eq!(paginator.current_page(), 3);
    assert!(paginator.paginate(4).is_err());
}

#[test]
fn test_paginate_returns_independent_copy() {
    let items = vec![String::from("a"), String::from("b")];
    let mut paginator = Paginator::new(&items);

    let mut page = paginator.paginate(1).unwrap();
    page[0].push('!');
    assert_eq!(items[0], "a");
}

#[test]
fn test_paginate_with_details() {
    let items = [1, 2, 3, 4, 5];
    let mut paginator = Paginator::new(&items).with_page_size(3).unwrap();

    let expected = [
        PageDetails {
            current_page: 1,
            total_pages: 2,
            total_count: 5,
            page_size: 3,
            has_next_page: true,
            has_prev_page: false,
            result: vec![1, 2, 3],
        },
        PageDetails {
            current_page: 2,
            total_pages: 2,
            total_count: 5,
            page_size: 3,
            has_next_page: false,
            has_prev_page: true,
            result: vec![4, 5],
        },
    ];

    for want in expected {
        let got = paginator.paginate_with_details(want.current_page).unwrap();
        assert_eq!(got, want);
    }
}

#[test]
fn test_paginate_with_details_propagates_errors() {
    let items = [1, 2, 3, 4, 5];
    let mut paginator = Paginator::new(&items).with_page_size(3).unwrap();

    assert!(paginator.paginate_with_details(0).unwrap_err().is_invalid_page());
    assert!(paginator.paginate_with_details(3).unwrap_err().is_invalid_page());
}

#[test]
fn test_empty_collection() {
    let items: Vec<u8> = Vec::new();
    let mut paginator = Paginator::new(&items);

    assert!(paginator.paginate(1).unwrap().is_empty());

    let details = paginator.paginate_with_details(1).unwrap();
    assert_eq!(details.total_pages, 0);
    assert_eq!(details.total_count, 0);
    assert!(!details.has_next_page);
    assert!(!details.has_prev_page);
    assert!(details.result.is_empty());

    assert!(paginator.paginate(2).is_err());
    assert_eq!(paginator.pages().count(), 0);
}

#[test]
fn test_page_slice_does_not_track_current_page() {
    let items = [1, 2, 3, 4, 5];
    let paginator = Paginator::new(&items).with_page_size(2).unwrap();

    assert_eq!(paginator.page_slice(3).unwrap(), &[5]);
    assert_eq!(paginator.current_page(), 0);
    assert!(paginator.page_slice(4).is_err());
}

#[test_case(0, 1 ; "empty with size one")]
#[test_case(1, 1 ; "one element")]
#[test_case(5, 3 ; "partial last page")]
#[test_case(9, 3 ; "exact multiple")]
#[test_case(7, 30 ; "single page")]
#[test_case(17, 4 ; "many pages")]
fn test_pages_partition_collection(len: usize, size: usize) {
    let items: Vec<usize> = (0..len).collect();
    let mut paginator = Paginator::new(&items).with_page_size(size).unwrap();

    let mut rebuilt = Vec::new();
    for page in 1..=paginator.page_count() {
        let chunk = paginator.paginate(page).unwrap();
        assert!(!chunk.is_empty());
        assert!(chunk.len() <= size);
        rebuilt.extend(chunk);
    }
    assert_eq!(rebuilt, items);

    let from_iter: Vec<usize> = paginator.pages().flatten().copied().collect();
    assert_eq!(from_iter, items);
    assert_eq!(paginator.pages().count(), paginator.page_count());
}

// ============================================================================
// JsonPaginator Tests
// ============================================================================

#[test_case(json!("not a slice"), "string" ; "string")]
#[test_case(json!({"a": 1}), "object" ; "object")]
#[test_case(json!(42), "number" ; "number")]
#[test_case(json!(null), "null" ; "null")]
#[test_case(json!(true), "bool" ; "bool")]
fn test_json_paginator_rejects_non_arrays(value: serde_json::Value, kind: &str) {
    let err = JsonPaginator::from_value(value).unwrap_err();
    match err {
        Error::InvalidItemsType { found } => assert_eq!(found, kind),
        other => panic!("Expected InvalidItemsType, got {other:?}"),
    }
}

#[test]
fn test_json_paginator_from_str() {
    let mut paginator = JsonPaginator::from_json_str("[1, 2, 3, 4, 5]").unwrap();
    paginator.set_page_size(3).unwrap();

    assert_eq!(paginator.total_count(), 5);
    assert_eq!(paginator.page_count(), 2);
    assert_eq!(paginator.paginate(2).unwrap(), vec![json!(4), json!(5)]);
    assert_eq!(paginator.current_page(), 2);

    let details = paginator.paginate_with_details(1).unwrap();
    assert_eq!(details.result, vec![json!(1), json!(2), json!(3)]);
    assert!(details.has_next_page);
    assert_eq!(paginator.current_page(), 1);
}

#[test]
fn test_json_paginator_malformed_text() {
    let err = JsonPaginator::from_json_str("[1, 2").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));

    let err = JsonPaginator::from_json_str("\"text\"").unwrap_err();
    assert!(err.is_invalid_items_type());
}

#[test]
fn test_json_paginator_errors() {
    let mut paginator = JsonPaginator::from_value(json!([])).unwrap();
    assert_eq!(paginator.page_size(), DEFAULT_PAGE_SIZE);
    paginator.set_page_size(4).unwrap();
    assert!(matches!(
        paginator.set_page_size(0),
        Err(Error::InvalidPageSize { size: 0 })
    ));
    assert_eq!(paginator.page_size(), 4);

    assert!(paginator.paginate(1).unwrap().is_empty());
    assert!(paginator.paginate(0).unwrap_err().is_invalid_page());
    assert!(paginator.paginate_with_details(2).unwrap_err().is_invalid_page());
    assert_eq!(paginator.current_page(), 1);
}
