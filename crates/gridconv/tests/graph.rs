//! Path search and composition over purpose-built graphs
//!
//! Covers:
//! - composition of registered chains (text - number - timestamp)
//! - reverse-direction composition
//! - multi-hop composition equals manual function application
//! - no-path and same-set outcomes

use chrono::{DateTime, NaiveDate};
use gridconv::converters::{
    BooleanToNumber, NumberToText, TimestampToNumber, TimestampToTimestampTz,
};
use gridconv::{ConversionGraph, DataConverter};
use gridconv_format::FormatterCreator;
use gridconv_types::{points, GridValue, PointSetRegistry};

/// Graph with TEXT <-> NUMBER and NUMBER <-> TIMESTAMP only
fn text_number_timestamp_graph() -> ConversionGraph {
    let registry = PointSetRegistry::standard();
    let creator = FormatterCreator::with_defaults();
    let texts = registry.resolve(&points::TEXT);
    let numbers = registry.resolve(&points::INTEGER);
    let timestamps = registry.resolve(&points::TIMESTAMP);
    let mut graph = ConversionGraph::new(registry);
    graph.register(Box::new(NumberToText::new(numbers, texts, &creator)));
    graph.register(Box::new(TimestampToNumber::new(timestamps, numbers)));
    graph
}

fn epoch_plus_millis(millis: i64) -> GridValue {
    let ts = DateTime::from_timestamp_millis(millis)
        .expect("in range")
        .naive_utc();
    GridValue::Timestamp(ts)
}

#[test]
fn test_text_to_timestamp_composes_through_numbers() {
    let graph = text_number_timestamp_graph();
    let chain = graph
        .get_converter(&points::TEXT, &points::TIMESTAMP)
        .expect("connected transitively");
    assert_eq!(chain.len(), 2);
    assert_eq!(
        chain
            .apply(&graph, &GridValue::Text("1000".into()))
            .unwrap(),
        epoch_plus_millis(1000)
    );
}

#[test]
fn test_timestamp_to_text_is_the_reverse_composition() {
    let graph = text_number_timestamp_graph();
    let chain = graph
        .get_converter(&points::TIMESTAMP, &points::TEXT)
        .expect("connected transitively");
    assert_eq!(chain.len(), 2);
    assert_eq!(
        chain.apply(&graph, &epoch_plus_millis(1000)).unwrap(),
        GridValue::Text("1000".into())
    );
}

#[test]
fn test_unparsable_text_soft_fails_through_the_chain() {
    let graph = text_number_timestamp_graph();
    let chain = graph
        .get_converter(&points::TEXT, &points::TIMESTAMP)
        .unwrap();
    // "abc" dies at the number hop; the null then short-circuits
    assert_eq!(
        chain.apply(&graph, &GridValue::Text("abc".into())).unwrap(),
        GridValue::Null
    );
}

#[test]
fn test_three_hop_chain_equals_manual_composition() {
    let registry = PointSetRegistry::standard();
    let creator = FormatterCreator::with_defaults();
    let booleans = registry.resolve(&points::BOOLEAN);
    let numbers = registry.resolve(&points::INTEGER);
    let timestamps = registry.resolve(&points::TIMESTAMP);
    let zoned = registry.resolve(&points::TIMESTAMP_TZ);

    let f1 = BooleanToNumber::new(booleans, numbers);
    let f2 = TimestampToNumber::new(timestamps, numbers);
    let f3 = TimestampToTimestampTz::new(timestamps, zoned, &creator);

    let sample = GridValue::Boolean(true);
    let expected = f3
        .convert(&f2.convert_reverse(&f1.convert(&sample).unwrap()).unwrap())
        .unwrap();

    let mut graph = ConversionGraph::new(registry);
    graph.register(Box::new(BooleanToNumber::new(booleans, numbers)));
    graph.register(Box::new(TimestampToNumber::new(timestamps, numbers)));
    graph.register(Box::new(TimestampToTimestampTz::new(
        timestamps, zoned, &creator,
    )));

    let chain = graph
        .get_converter(&points::BOOLEAN, &points::TIMESTAMP_TZ)
        .expect("three-hop path exists");
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.apply(&graph, &sample).unwrap(), expected);
}

#[test]
fn test_no_registered_path_returns_none() {
    let graph = text_number_timestamp_graph();
    assert!(graph
        .get_converter(&points::UUID, &points::TEXT)
        .is_none());
    assert!(graph
        .get_converter(&points::TEXT, &points::OBJECT)
        .is_none());
}

#[test]
fn test_points_of_the_same_set_return_none() {
    // Identity self-edges are registered, but an empty path never becomes
    // a chain.
    let graph = text_number_timestamp_graph();
    assert!(graph
        .get_converter(&points::TEXT, &points::VARCHAR)
        .is_none());
    assert!(graph
        .get_converter(&points::INTEGER, &points::BIGINT)
        .is_none());
}

#[test]
fn test_repeated_queries_behave_identically() {
    let graph = text_number_timestamp_graph();
    let first = graph
        .get_converter(&points::TEXT, &points::TIMESTAMP)
        .unwrap();
    let second = graph
        .get_converter(&points::TEXT, &points::TIMESTAMP)
        .unwrap();
    assert_eq!(first, second);
    let input = GridValue::Text("86400000".into());
    assert_eq!(
        first.apply(&graph, &input).unwrap(),
        second.apply(&graph, &input).unwrap()
    );
}

#[test]
fn test_narrowed_probe_resolves_to_the_same_path() {
    use gridconv_types::ReprKind;
    let graph = text_number_timestamp_graph();
    let narrow = points::INTEGER.with_repr(ReprKind::Int);
    let via_narrow = graph.get_converter(&narrow, &points::TEXT).unwrap();
    let via_general = graph.get_converter(&points::INTEGER, &points::TEXT).unwrap();
    assert_eq!(via_narrow, via_general);
}

#[test]
fn test_date_reaches_zoned_timestamp_in_standard_graph() {
    use gridconv_format::JsonObjectFormatter;
    use std::sync::Arc;
    let graph = ConversionGraph::standard(
        &FormatterCreator::with_defaults(),
        Arc::new(JsonObjectFormatter),
    );
    let chain = graph
        .get_converter(&points::DATE, &points::TIMESTAMP_TZ)
        .expect("dates reach zoned timestamps through timestamps");
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let out = chain.apply(&graph, &GridValue::Date(date)).unwrap();
    let GridValue::TimestampTz(zoned) = out else {
        panic!("expected zoned timestamp, got {out:?}");
    };
    assert_eq!(zoned.naive_local(), date.and_hms_opt(0, 0, 0).unwrap());
}
