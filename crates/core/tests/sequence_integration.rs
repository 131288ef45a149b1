//! Integration tests for sequence generation.
//!
//! These tests drive the public entry points (`generate_sequence`,
//! `generate_sequence_json`, `DateSpace`) end to end: input normalization,
//! error taxonomy, direction handling and rounding of fractional increments.

mod support;

use datespace_core::{
    format_increment, generate_sequence, generate_sequence_json, generate_sequence_with,
    parse_increment, DateSpace,
};
use datespace_domain::{
    DateSpaceError, ErrorKind, GenerationOptions, IncrementSpec, RoundMode, Sequence,
};
use serde_json::{json, Value};
use support::{deltas, init_tracing, stop_datetime, DAY_MS, STOP, STOP_MS};

fn millis(value: f64) -> Option<IncrementSpec> {
    Some(IncrementSpec::Millis(value))
}

fn json_error(
    start: &Value,
    stop: &Value,
    increment: Option<&Value>,
    options: Option<&Value>,
) -> DateSpaceError {
    generate_sequence_json(start, stop, increment, options)
        .expect_err("input should be rejected")
}

// ============================================================================
// Input validation
// ============================================================================

/// Invalid start and stop boundaries each surface their own error kind.
#[test]
fn test_invalid_boundaries() {
    init_tracing();
    let valid = json!(STOP_MS);

    let cases = [
        (json!("beep"), ErrorKind::Parse),
        (json!(5), ErrorKind::Validation),
        (json!(-5), ErrorKind::Validation),
        (json!(1.5), ErrorKind::Validation),
        (json!(true), ErrorKind::Type),
        (json!(null), ErrorKind::Type),
        (json!([]), ErrorKind::Type),
        (json!({}), ErrorKind::Type),
    ];

    for (value, kind) in &cases {
        let err = json_error(value, &valid, None, None);
        assert_eq!(err.kind(), *kind, "start {value}");
        assert_eq!(err.field(), "start");

        let err = json_error(&valid, value, None, None);
        assert_eq!(err.kind(), *kind, "stop {value}");
        assert_eq!(err.field(), "stop");
    }
}

/// Invalid increments are rejected whether or not options follow.
#[test]
fn test_invalid_increments() {
    let start = json!(STOP_MS - 10);
    let stop = json!(STOP);
    let empty = json!({});

    let cases = [
        (json!("beep"), ErrorKind::Parse),
        (json!("5x"), ErrorKind::Parse),
        (json!(true), ErrorKind::Type),
        (json!(null), ErrorKind::Type),
        (json!([]), ErrorKind::Type),
    ];

    for (value, kind) in &cases {
        let err = json_error(&start, &stop, Some(value), None);
        assert_eq!(err.kind(), *kind, "increment {value}");

        let err = json_error(&start, &stop, Some(value), Some(&empty));
        assert_eq!(err.kind(), *kind, "increment {value} with options");
        assert_eq!(err.field(), "increment");
    }

    let err = generate_sequence(STOP_MS - 10, STOP, millis(f64::NAN), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

/// Options that are not a mapping are a type error.
#[test]
fn test_non_mapping_options() {
    for value in [json!("beep"), json!(5), json!(true), json!(null), json!([])] {
        let err = generate_sequence(STOP_MS - 10, STOP, millis(10.0), Some(&value))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type, "options {value}");
        assert_eq!(err.field(), "options");
    }
}

/// Round options must be one of the three keywords.
#[test]
fn test_invalid_round_option() {
    let cases = [
        (json!("beep"), ErrorKind::Validation),
        (json!(5), ErrorKind::Type),
        (json!(true), ErrorKind::Type),
        (json!(null), ErrorKind::Type),
        (json!([]), ErrorKind::Type),
        (json!({}), ErrorKind::Type),
    ];

    for (value, kind) in &cases {
        let options = json!({ "round": value });
        let err =
            generate_sequence(STOP_MS - 10, STOP, millis(10.0), Some(&options)).unwrap_err();
        assert_eq!(err.kind(), *kind, "round {value}");
        assert_eq!(err.field(), "round");
    }
}

#[test]
fn test_unrecognized_options_are_ignored() {
    for key in ["beep", "boop"] {
        let mut options = serde_json::Map::new();
        options.insert(key.to_string(), json!("floor"));
        let result =
            generate_sequence(STOP_MS - 10, STOP, millis(10.0), Some(&Value::Object(options)));
        assert!(result.is_ok(), "option key {key} should be ignored");
    }
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_increment_exceeding_span_returns_start() {
    let sequence = generate_sequence(STOP_MS, stop_datetime(), millis(1.0), None).unwrap();
    assert_eq!(sequence.millis(), vec![STOP_MS]);

    let sequence =
        generate_sequence(STOP_MS - 5, STOP, millis(10.0), None).unwrap();
    assert_eq!(sequence.millis(), vec![STOP_MS - 5]);
}

#[test]
fn test_instants_convert_to_datetimes() {
    let sequence = generate_sequence(STOP_MS - DAY_MS, STOP, None, None).unwrap();
    let datetimes = sequence.to_datetimes().unwrap();
    assert_eq!(datetimes.len(), sequence.len());
    assert_eq!(datetimes[0].timestamp_millis(), STOP_MS - DAY_MS);
}

/// With no increment the sequence advances one day at a time.
#[test]
fn test_default_increment_is_one_day() {
    let options = json!({ "round": "floor" });
    let sequence = generate_sequence(STOP_MS - 2 * DAY_MS, STOP, None, Some(&options)).unwrap();

    assert_eq!(sequence.millis(), vec![STOP_MS - 2 * DAY_MS, STOP_MS - DAY_MS]);
}

/// A mapping in the increment slot is read as the options.
#[test]
fn test_json_options_in_increment_position() {
    let options = json!({ "round": "floor" });
    let sequence =
        generate_sequence_json(&json!(STOP_MS - 2 * DAY_MS), &json!(STOP), Some(&options), None)
            .unwrap();
    assert_eq!(sequence.len(), 2);

    let bad = json!({ "round": "beep" });
    let err = json_error(&json!(STOP_MS - 2 * DAY_MS), &json!(STOP), Some(&bad), None);
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_incremental_and_decremental() {
    let start = STOP_MS - 2 * DAY_MS;

    let ascending =
        generate_sequence(start, STOP, None, Some(&json!({ "round": "floor" }))).unwrap();
    assert!(ascending.as_slice()[0] < ascending.as_slice()[1]);

    let descending = generate_sequence(
        STOP,
        start,
        millis(-(DAY_MS as f64)),
        Some(&json!({ "round": "round" })),
    )
    .unwrap();
    assert!(descending.as_slice()[0] > descending.as_slice()[1]);
    assert_eq!(descending.first().map(|instant| instant.as_millis()), Some(STOP_MS));
}

/// Without a negative increment a descending range collapses to its start.
#[test]
fn test_descending_range_with_positive_increment() {
    let sequence = generate_sequence(STOP, STOP_MS - 2 * DAY_MS, None, None).unwrap();
    assert_eq!(sequence.millis(), vec![STOP_MS]);
}

#[test]
fn test_linearly_spaced() {
    init_tracing();
    let sequence = generate_sequence(STOP_MS - 5_000, STOP, millis(1_000.0), None).unwrap();

    assert_eq!(
        sequence.millis(),
        vec![
            1_417_503_650_973,
            1_417_503_651_973,
            1_417_503_652_973,
            1_417_503_653_973,
            1_417_503_654_973,
        ]
    );
}

fn fractional(round: &str) -> Vec<i64> {
    generate_sequence(STOP_MS - 5, STOP, millis(0.5), Some(&json!({ "round": round })))
        .unwrap()
        .millis()
}

#[test]
fn test_ceil_date_values() {
    assert_eq!(
        fractional("ceil"),
        vec![
            1_417_503_655_968,
            1_417_503_655_969,
            1_417_503_655_969,
            1_417_503_655_970,
            1_417_503_655_970,
            1_417_503_655_971,
            1_417_503_655_971,
            1_417_503_655_972,
            1_417_503_655_972,
            1_417_503_655_973,
        ]
    );
}

#[test]
fn test_floor_date_values() {
    assert_eq!(
        fractional("floor"),
        vec![
            1_417_503_655_968,
            1_417_503_655_968,
            1_417_503_655_969,
            1_417_503_655_969,
            1_417_503_655_970,
            1_417_503_655_970,
            1_417_503_655_971,
            1_417_503_655_971,
            1_417_503_655_972,
            1_417_503_655_972,
        ]
    );
}

#[test]
fn test_round_date_values() {
    assert_eq!(
        fractional("round"),
        vec![
            1_417_503_655_968,
            1_417_503_655_969,
            1_417_503_655_969,
            1_417_503_655_970,
            1_417_503_655_970,
            1_417_503_655_971,
            1_417_503_655_971,
            1_417_503_655_972,
            1_417_503_655_972,
            1_417_503_655_973,
        ]
    );
}

// ============================================================================
// Properties
// ============================================================================

/// Length is `ceil(span / increment)` and integer increments give exact steps.
#[test]
fn test_length_and_spacing_properties() {
    let spans = [1_i64, 999, 1_000, 1_001, 59_999, 360_000];
    let increments = [1_i64, 7, 1_000, 60_000];

    for span in spans {
        for increment in increments {
            let sequence =
                generate_sequence(STOP_MS - span, STOP_MS, Some(increment.into()), None).unwrap();
            let expected_len = (span + increment - 1) / increment;
            assert_eq!(sequence.len() as i64, expected_len.max(1), "span {span} inc {increment}");

            let millis = sequence.millis();
            assert!(deltas(&millis).iter().all(|delta| *delta == increment));
            assert!(millis.last().is_some_and(|last| *last < STOP_MS));
        }
    }
}

/// Each boundary is element 0 of its own direction.
#[test]
fn test_reverse_direction_starts_at_own_boundary() {
    let start = STOP_MS - 10 * 3_600_000;

    let forward = DateSpace::new(start, STOP).increment("1h").generate().unwrap();
    let backward = DateSpace::new(STOP, start).increment("-1h").generate().unwrap();

    assert_eq!(forward.first().map(|instant| instant.as_millis()), Some(start));
    assert_eq!(backward.first().map(|instant| instant.as_millis()), Some(STOP_MS));
    assert_eq!(forward.len(), backward.len());

    let mut reversed = backward.millis();
    reversed.reverse();
    assert_eq!(deltas(&reversed), deltas(&forward.millis()));
}

#[test]
fn test_duration_strings_commute() {
    let start = STOP_MS - 10 * DAY_MS;
    let first = generate_sequence(start, STOP, Some("1h.30m".into()), None).unwrap();
    let second = generate_sequence(start, STOP, Some("30m.1h".into()), None).unwrap();
    assert_eq!(first, second);
    assert_eq!(parse_increment("1h.30m").unwrap(), 5_400_000);
}

/// The `12h` example: a 100-day span in half-day steps.
#[test]
fn test_string_increments_match_numeric() {
    let start = STOP_MS - 8_640_000_000;

    let by_string = generate_sequence(start, STOP, Some("12h".into()), None).unwrap();
    let by_number = generate_sequence(start, STOP, Some(43_200_000_i64.into()), None).unwrap();
    assert_eq!(by_string, by_number);
    assert_eq!(by_string.len(), 200);

    let decrement = generate_sequence(STOP, start, Some("-12h".into()), None).unwrap();
    assert_eq!(decrement.len(), 200);
    assert_eq!(decrement.last().map(|instant| instant.as_millis()), Some(start + 43_200_000));
}

#[test]
fn test_formatted_increment_generates_same_sequence() {
    let millis = 86_400_500;
    let formatted = format_increment(millis);
    assert_eq!(formatted, "1d.500ms");

    let start = STOP_MS - 30 * DAY_MS;
    let from_string = generate_sequence(start, STOP, Some(formatted.into()), None).unwrap();
    let from_number = generate_sequence(start, STOP, Some(millis.into()), None).unwrap();
    assert_eq!(from_string, from_number);
}

#[test]
fn test_typed_options_match_mapping() {
    let typed = generate_sequence_with(
        STOP_MS - 5,
        STOP,
        millis(0.5),
        GenerationOptions::with_round(RoundMode::Ceil),
    )
    .unwrap();
    assert_eq!(typed.millis(), fractional("ceil"));
}

#[test]
fn test_large_sequence_matches_small_steps() {
    let sequence: Sequence =
        generate_sequence(STOP_MS - 70_000, STOP, millis(1.0), None).unwrap();
    assert_eq!(sequence.len(), 70_000);
    assert!(deltas(&sequence.millis()).iter().all(|delta| *delta == 1));
}

#[test]
fn test_sequence_serializes_to_json_millis() -> anyhow::Result<()> {
    let sequence = generate_sequence(STOP_MS - 2_000, STOP, millis(1_000.0), None)?;
    let encoded = serde_json::to_string(&sequence)?;
    assert_eq!(encoded, format!("[{},{}]", STOP_MS - 2_000, STOP_MS - 1_000));
    Ok(())
}
