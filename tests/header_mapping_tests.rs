use paramcrate::headers::{create_response_headers, fill_map_param};
use paramcrate::{KeywordType, MapParam, SortDirection};
use std::collections::HashMap;

fn filled(headers: &[(&str, &str)]) -> MapParam {
    let map: HashMap<String, String> = headers
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect();
    let mut param = MapParam::new();
    fill_map_param(&mut param, |name| map.get(name).cloned());
    param
}

#[test]
fn pagination_arithmetic_from_headers() {
    let param = filled(&[
        ("X-Pagination-Per-Page", "50"),
        ("X-Pagination-Current-Page", "3"),
    ]);
    assert_eq!(param.limit(), Some(50));
    assert_eq!(param.offset(), Some(100));
}

#[test]
fn page_size_clamps_to_the_cap() {
    let param = filled(&[("X-Pagination-Per-Page", "1000")]);
    assert_eq!(param.limit(), Some(500));
}

#[test]
fn unparseable_page_size_falls_back_to_default() {
    let param = filled(&[("X-Pagination-Per-Page", "abc")]);
    assert_eq!(param.limit(), Some(20));
    assert_eq!(param.offset(), Some(0));
}

#[test]
fn page_without_size_implies_default_size() {
    let param = filled(&[("X-Pagination-Current-Page", "2")]);
    assert_eq!(param.limit(), Some(20));
    assert_eq!(param.offset(), Some(20));
}

#[test]
fn size_without_page_starts_at_the_first_page() {
    let param = filled(&[("X-Pagination-Per-Page", "25")]);
    assert_eq!(param.limit(), Some(25));
    assert_eq!(param.offset(), Some(0));
}

#[test]
fn page_numbers_below_one_are_treated_as_the_first_page() {
    let param = filled(&[
        ("X-Pagination-Per-Page", "10"),
        ("X-Pagination-Current-Page", "-5"),
    ]);
    assert_eq!(param.offset(), Some(0));
}

#[test]
fn absent_headers_set_nothing() {
    let param = filled(&[]);
    assert_eq!(param.limit(), None);
    assert_eq!(param.offset(), None);
    assert!(param.order_by().is_empty());
    assert_eq!(param.keyword_search(), None);
}

#[test]
fn sorting_requires_both_headers() {
    let param = filled(&[("X-Sort-Field", "name"), ("X-Sort-Order", "desc")]);
    assert_eq!(param.order_by().len(), 1);
    assert_eq!(param.order_by()[0].sort_by(), "name");
    assert_eq!(param.order_by()[0].sort_order(), SortDirection::Desc);

    let partial = filled(&[("X-Sort-Field", "name")]);
    assert!(partial.order_by().is_empty());
}

#[test]
fn keyword_is_percent_decoded() {
    let param = filled(&[("X-Keyword-Search", "hello%20world")]);
    assert_eq!(param.keyword_search(), Some("hello world"));
    assert_eq!(param.keyword_search_type(), KeywordType::String);
}

#[test]
fn undecodable_keyword_is_left_unset() {
    let param = filled(&[("X-Keyword-Search", "%FF")]);
    assert_eq!(param.keyword_search(), None);
}

#[test]
fn keyword_type_hint_is_stored_alongside_the_term() {
    let param = filled(&[
        ("X-Keyword-Search", "42"),
        ("X-Keyword-Search-Type", "Integer"),
    ]);
    assert_eq!(param.keyword_search(), Some("42"));
    assert_eq!(param.filters()["keywordType"], "Integer");

    // The hint alone, without a term, is ignored.
    let hint_only = filled(&[("X-Keyword-Search-Type", "Integer")]);
    assert!(!hint_only.filters().contains_key("keywordType"));
}

#[test]
fn custom_pagination_flag_parses_leniently() {
    let param = filled(&[("X-Pagination-Custom", "TRUE")]);
    assert_eq!(param.filters()["customPagination"], true);

    let param = filled(&[("X-Pagination-Custom", "nope")]);
    assert_eq!(param.filters()["customPagination"], false);
}

#[test]
fn response_headers_carry_pagination_state() {
    let mut param = MapParam::new();
    param.set_limit(50).set_offset(100);

    let headers = create_response_headers(&param, 1234);
    assert_eq!(headers["X-Pagination-Total-Entries"], "1234");
    assert_eq!(headers["X-Pagination-Per-Page"], "50");
    // floor(100 / 50) + 1
    assert_eq!(headers["X-Pagination-Current-Page"], "3");
}

#[test]
fn response_headers_omit_pagination_without_a_positive_limit() {
    let param = MapParam::new();
    let headers = create_response_headers(&param, 7);
    assert_eq!(headers["X-Pagination-Total-Entries"], "7");
    assert!(!headers.contains_key("X-Pagination-Per-Page"));
    assert!(!headers.contains_key("X-Pagination-Current-Page"));

    let mut zero = MapParam::new();
    zero.set_limit(0);
    let headers = create_response_headers(&zero, 7);
    assert!(!headers.contains_key("X-Pagination-Per-Page"));
}

#[test]
fn response_headers_omit_current_page_without_an_offset() {
    let mut param = MapParam::new();
    param.set_limit(10);
    let headers = create_response_headers(&param, 99);
    assert_eq!(headers["X-Pagination-Per-Page"], "10");
    assert!(!headers.contains_key("X-Pagination-Current-Page"));
}
