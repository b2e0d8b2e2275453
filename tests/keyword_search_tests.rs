use paramcrate::{ColumnSearch, KeywordType, MapParam, SqlOperator, TableSearch};

#[test]
fn classification_examples() {
    let mut search = TableSearch::new();

    search.set_keyword_search("42");
    assert_eq!(search.keyword_search_type(), KeywordType::Integer);

    search.set_keyword_search("3.14");
    assert_eq!(search.keyword_search_type(), KeywordType::Double);

    search.set_keyword_search("abc");
    assert_eq!(search.keyword_search_type(), KeywordType::String);
}

#[test]
fn string_terms_get_idempotent_like_wrapping() {
    let mut search = TableSearch::new();
    search.set_keyword_search("abc");
    assert_eq!(search.keyword_like_search(), "%abc%");

    // Re-setting the already-wrapped term adds no further markers.
    let wrapped = search.keyword_like_search().to_string();
    search.set_keyword_search(wrapped);
    assert_eq!(search.keyword_like_search(), "%abc%");
}

#[test]
fn numeric_terms_wrap_unconditionally() {
    let mut search = TableSearch::new();
    search.set_keyword_search("42");
    assert_eq!(search.keyword_like_search(), "%42%");

    search.set_keyword_search("3.14");
    assert_eq!(search.keyword_like_search(), "%3.14%");
}

#[test]
fn double_round_trip_keeps_original_on_parse_failure() {
    let mut search = TableSearch::new();
    // Double-shaped per the pattern, but not a parseable number.
    search.set_keyword_search(".");
    assert_eq!(search.keyword_search_type(), KeywordType::Double);
    assert_eq!(search.keyword_search(), ".");
}

#[test]
fn string_columns_are_always_eligible() {
    let column = ColumnSearch::typed("title", KeywordType::String);
    assert!(column.supports(KeywordType::String));
    assert!(column.supports(KeywordType::Integer));
    assert!(column.supports(KeywordType::Double));
}

#[test]
fn numeric_columns_drop_out_on_text_terms() {
    let column = ColumnSearch::typed("price", KeywordType::Double);
    assert!(column.supports(KeywordType::Double));
    assert!(!column.supports(KeywordType::Integer));
    assert!(!column.supports(KeywordType::String));
}

#[test]
fn default_column_accepts_every_type() {
    let column = ColumnSearch::new("anything");
    assert!(column.supports(KeywordType::String));
    assert!(column.supports(KeywordType::Integer));
    assert!(column.supports(KeywordType::Double));
    assert_eq!(column.operator(), SqlOperator::Like);
    assert!(column.is_like_operator());
}

#[test]
fn typed_constructor_picks_conventional_operators() {
    assert_eq!(
        ColumnSearch::typed("title", KeywordType::String).operator(),
        SqlOperator::Like
    );
    assert_eq!(
        ColumnSearch::typed("count", KeywordType::Integer).operator(),
        SqlOperator::Equals
    );
    assert_eq!(
        ColumnSearch::with_operator("code", KeywordType::Integer, SqlOperator::EndsLike).operator(),
        SqlOperator::EndsLike
    );
}

#[test]
fn eligible_view_tracks_the_current_term() {
    let mut search = TableSearch::new();
    search.add(ColumnSearch::new("name"));
    search.add(ColumnSearch::typed("quantity", KeywordType::Integer));
    search.add(ColumnSearch::typed("price", KeywordType::Double));

    search.set_keyword_search("42");
    let names: Vec<&str> = search.to_list().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["name", "quantity"]);

    search.set_keyword_search("cheap");
    let names: Vec<&str> = search.to_list().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["name"]);

    search.set_keyword_search("9.99");
    let names: Vec<&str> = search.to_list().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["name", "price"]);
}

#[test]
fn registration_order_is_preserved() {
    let mut search = TableSearch::new();
    search.add_all([
        ColumnSearch::new("c"),
        ColumnSearch::new("a"),
        ColumnSearch::new("b"),
    ]);
    search.set_keyword_search("term");
    let names: Vec<&str> = search.to_list().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn map_param_delegates_keyword_state() {
    let mut param = MapParam::new();
    param
        .set_columns(["name", "description"])
        .set_keyword_search("widget");

    assert_eq!(param.keyword_search(), Some("widget"));
    assert_eq!(param.keyword_like_search(), "%widget%");
    assert_eq!(param.keyword_search_type(), KeywordType::String);
    assert_eq!(param.columns().len(), 2);
}

#[test]
fn unset_keyword_reads_as_none() {
    let param = MapParam::new();
    assert_eq!(param.keyword_search(), None);
    assert_eq!(param.keyword_search_type(), KeywordType::String);
}
