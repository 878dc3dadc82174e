use crate::{
    datetime::{DateTime, MAX_EPOCH_MILLIS, is_date_time_input},
    value::Value,
};

fn nums(parts: &[f64]) -> Value {
    Value::List(parts.iter().copied().map(Value::Number).collect())
}

#[test]
fn epoch_millis_survive_construction() {
    let instant = DateTime::from_epoch_millis(1_614_834_367_000.0).expect("valid instant");

    assert!((instant.epoch_millis() - 1_614_834_367_000.0).abs() < f64::EPSILON);
    assert_eq!(instant.to_string(), "2021-03-04T05:06:07Z");
}

#[test]
fn fractional_millis_truncate_toward_zero() {
    let a = DateTime::from_epoch_millis(1_000.9).expect("valid instant");
    let b = DateTime::from_epoch_millis(1_000.0).expect("valid instant");

    assert_eq!(a, b);
}

#[test]
fn non_finite_and_out_of_range_millis_are_rejected() {
    assert!(DateTime::from_epoch_millis(f64::NAN).is_none());
    assert!(DateTime::from_epoch_millis(f64::INFINITY).is_none());
    assert!(DateTime::from_epoch_millis(9.0e15).is_none());
}

#[test]
fn accepted_text_layouts_parse_to_the_same_instant() {
    let expected = DateTime::from_epoch_millis(1_614_834_367_000.0).expect("valid instant");

    for text in [
        "2021-03-04T05:06:07Z",
        "2021-03-04T06:06:07+01:00",
        "2021-03-04T05:06:07",
        "2021-03-04 05:06:07",
        "  2021-03-04 05:06:07.000  ",
        "2021-03-04T05:06:07.000",
    ] {
        assert_eq!(DateTime::parse(text), Some(expected), "layout: {text}");
    }
}

#[test]
fn offsets_without_colon_parse() {
    let expected = DateTime::parse("2021-01-01T23:00:00Z").expect("rfc 3339");

    for text in [
        "2021-01-02T00:00:00+0100",
        "2021-01-02T00:00:00.000+0100",
        "2021-01-02T00:00+01:00",
        "2021-01-02T00:00+0100",
        "2021-01-02 00:00:00+01:00",
        "20210102T000000+0100",
    ] {
        assert_eq!(DateTime::parse(text), Some(expected), "layout: {text}");
    }
}

#[test]
fn basic_forms_parse() {
    assert_eq!(
        DateTime::parse("20210102").map(|t| t.to_string()),
        Some("2021-01-02T00:00:00Z".to_string())
    );
    assert_eq!(
        DateTime::parse("20210102T050607Z").map(|t| t.to_string()),
        Some("2021-01-02T05:06:07Z".to_string())
    );
    assert_eq!(
        DateTime::parse("20210102T0506").map(|t| t.to_string()),
        Some("2021-01-02T05:06:00Z".to_string())
    );
}

#[test]
fn reduced_precision_times_parse() {
    assert_eq!(
        DateTime::parse("2021-01-02T05").map(|t| t.to_string()),
        Some("2021-01-02T05:00:00Z".to_string())
    );
    assert_eq!(
        DateTime::parse("2021-01-02T05:06Z").map(|t| t.to_string()),
        Some("2021-01-02T05:06:00Z".to_string())
    );
}

#[test]
fn epoch_bound_is_the_end_of_year_9999() {
    let last = DateTime::from_epoch_millis(MAX_EPOCH_MILLIS).expect("last instant");

    assert_eq!(last.to_string(), "9999-12-31T23:59:59.999Z");
    assert!(DateTime::from_epoch_millis(MAX_EPOCH_MILLIS + 1.0).is_none());
    assert!(DateTime::from_epoch_millis(1.0e15).is_none());
}

#[test]
fn empty_components_are_today() {
    let today = DateTime::from_input(&nums(&[])).expect("empty list");
    let now = DateTime::from(time::OffsetDateTime::now_utc());

    assert!(today.epoch_millis().rem_euclid(86_400_000.0).abs() < f64::EPSILON);
    assert!(!now.is_before(&today));
}

#[test]
fn date_only_text_is_midnight_utc() {
    let parsed = DateTime::parse("2021-03-04").expect("date parses");

    assert_eq!(parsed.to_string(), "2021-03-04T00:00:00Z");
}

#[test]
fn unparsable_text_has_no_instant() {
    assert!(DateTime::parse("yesterday").is_none());
    assert!(DateTime::parse("2021-13-01").is_none());
    assert!(DateTime::parse("").is_none());
}

#[test]
fn components_use_zero_based_months() {
    let parsed = DateTime::from_components(&[
        Value::Number(2021.0),
        Value::Number(2.0),
        Value::Number(4.0),
        Value::Number(5.0),
        Value::Number(6.0),
        Value::Number(7.0),
    ])
    .expect("valid components");

    assert_eq!(parsed.to_string(), "2021-03-04T05:06:07Z");
}

#[test]
fn component_defaults_fill_trailing_parts() {
    let parsed = DateTime::from_input(&nums(&[2020.0])).expect("year only");

    assert_eq!(parsed.to_string(), "2020-01-01T00:00:00Z");
}

#[test]
fn invalid_components_have_no_instant() {
    assert!(DateTime::from_input(&nums(&[2021.0, 12.0])).is_none());
    assert!(DateTime::from_input(&nums(&[2021.0, 1.0, 30.0])).is_none());
    assert!(DateTime::from_input(&nums(&[2021.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0])).is_none());
    assert!(
        DateTime::from_input(&Value::List(vec![
            Value::Number(2021.0),
            Value::Text("x".to_string())
        ]))
        .is_none()
    );
}

#[test]
fn is_before_is_strict() {
    let early = DateTime::from_epoch_millis(1_000.0).expect("valid instant");
    let late = DateTime::from_epoch_millis(2_000.0).expect("valid instant");

    assert!(early.is_before(&late));
    assert!(!late.is_before(&early));
    assert!(!early.is_before(&early));
}

#[test]
fn time_like_classification() {
    assert!(is_date_time_input(&Value::Number(0.0)));
    assert!(is_date_time_input(&Value::Text("nope".to_string())));
    assert!(is_date_time_input(&nums(&[2021.0, 0.0])));
    assert!(is_date_time_input(&Value::List(Vec::new())));

    assert!(!is_date_time_input(&Value::Null));
    assert!(!is_date_time_input(&Value::Bool(true)));
    assert!(!is_date_time_input(&Value::List(vec![Value::Bool(true)])));
}

#[test]
fn serializes_as_epoch_millis() {
    let instant = DateTime::from_epoch_millis(1_500.0).expect("valid instant");

    assert_eq!(serde_json::to_string(&instant).expect("serialize"), "1500.0");
}
