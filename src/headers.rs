//! Transport boundary: header-to-parameter mapping and response headers.
//!
//! The input side reads raw string values through an abstract accessor
//! (`header name -> Option<String>`) so callers can adapt any framework's
//! header map. Values that fail to parse or decode are silently ignored
//! (the parameter is simply not set) rather than propagated as errors.

use axum::http::header::HeaderMap;

use crate::criteria::MapParam;
use crate::params::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE, StandardParam, TOTAL_ENTRIES_HEADER,
};

/// Populates a [`MapParam`] from transport headers: pagination, sorting,
/// keyword search and the custom-pagination flag.
pub fn fill_map_param<F>(map_param: &mut MapParam, accessor: F)
where
    F: Fn(&str) -> Option<String>,
{
    process_pagination(map_param, &accessor);
    process_sorting(map_param, &accessor);
    process_keyword(map_param, &accessor);
    process_custom_flags(map_param, &accessor);
}

fn header_value<F>(accessor: &F, param: StandardParam) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    param.header_name().and_then(accessor)
}

/// Page sizes clamp to [`MAX_PER_PAGE`]; unparseable input falls back to the
/// default size.
fn parse_page_size(raw: &str) -> i64 {
    raw.parse::<i64>()
        .map_or(DEFAULT_PER_PAGE, |size| size.min(MAX_PER_PAGE))
}

fn process_pagination<F>(map_param: &mut MapParam, accessor: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let limit = header_value(accessor, StandardParam::PerPage).map(|raw| parse_page_size(&raw));
    let page = header_value(accessor, StandardParam::CurrentPage)
        .map(|raw| raw.parse::<i64>().unwrap_or(DEFAULT_PAGE));

    if let Some(limit) = limit {
        map_param.set_limit(limit);
    } else if page.is_some() {
        // A page request without a size implies the default size.
        map_param.set_limit(DEFAULT_PER_PAGE);
    }

    if let Some(page) = page {
        let actual_limit = map_param.limit().unwrap_or(DEFAULT_PER_PAGE);
        let safe_page = page.max(1);
        map_param.set_offset((safe_page - 1) * actual_limit);
    } else if map_param.limit().is_some() && map_param.offset().is_none() {
        map_param.set_offset(DEFAULT_PAGE);
    }
}

fn process_sorting<F>(map_param: &mut MapParam, accessor: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let field = header_value(accessor, StandardParam::SortField);
    let order = header_value(accessor, StandardParam::SortOrder);
    if let (Some(field), Some(order)) = (field, order) {
        map_param.add_order_by(&field, order.as_str());
    }
}

fn process_keyword<F>(map_param: &mut MapParam, accessor: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = header_value(accessor, StandardParam::KeywordSearch) else {
        return;
    };
    match urlencoding::decode(&raw) {
        Ok(keyword) => {
            map_param.set_keyword_search(keyword.into_owned());
            if let Some(hint) = header_value(accessor, StandardParam::KeywordSearchType) {
                map_param.filter(StandardParam::KeywordSearchType.key(), hint);
            }
        }
        Err(err) => {
            // Undecodable keyword: leave the search unset.
            tracing::debug!(error = %err, "keyword header failed to decode, ignoring");
        }
    }
}

fn process_custom_flags<F>(map_param: &mut MapParam, accessor: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = header_value(accessor, StandardParam::CustomPagination) {
        let flag = raw.eq_ignore_ascii_case("true");
        map_param.filter(StandardParam::CustomPagination.key(), flag);
    }
}

/// Builds the pagination response headers: the total entry count always, and
/// when a positive page size is set, the per-page header plus, if an offset
/// is present, the computed current page (`offset / limit + 1`).
#[must_use]
pub fn create_response_headers(map_param: &MapParam, total_count: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert_header(&mut headers, TOTAL_ENTRIES_HEADER, &total_count.to_string());

    if let Some(limit) = map_param.limit().filter(|limit| *limit > 0) {
        if let Some(name) = StandardParam::PerPage.header_name() {
            insert_header(&mut headers, name, &limit.to_string());
        }
        if let Some(offset) = map_param.offset() {
            let current_page = offset / limit + 1;
            if let Some(name) = StandardParam::CurrentPage.header_name() {
                insert_header(&mut headers, name, &current_page.to_string());
            }
        }
    }
    headers
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    // Values here are numeric strings; parsing cannot realistically fail.
    if let Ok(value) = value.parse() {
        headers.insert(name, value);
    }
}
