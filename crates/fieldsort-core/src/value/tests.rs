use crate::{datetime::DateTime, value::Value};

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn v_time(ms: f64) -> Value {
    Value::Time(DateTime::from_epoch_millis(ms).expect("valid instant"))
}

// ---- truthiness --------------------------------------------------------

#[test]
fn falsy_values_are_enumerated() {
    for value in [
        Value::Null,
        Value::Bool(false),
        Value::Number(0.0),
        Value::Number(-0.0),
        Value::Number(f64::NAN),
        v_txt(""),
    ] {
        assert!(!value.is_truthy(), "{value:?} should be falsy");
    }
}

#[test]
fn text_that_looks_falsy_is_still_truthy() {
    for value in [
        v_txt("0"),
        v_txt("false"),
        v_txt(" "),
        Value::Number(-1.0),
        Value::Number(f64::INFINITY),
        Value::Bool(true),
        v_time(0.0),
        Value::List(Vec::new()),
    ] {
        assert!(value.is_truthy(), "{value:?} should be truthy");
    }
}

// ---- numeric reading ---------------------------------------------------

#[test]
fn numeric_reading_coerces_every_variant() {
    assert!(Value::Null.to_number().abs() < f64::EPSILON);
    assert!((Value::Bool(true).to_number() - 1.0).abs() < f64::EPSILON);
    assert!((v_txt(" 42.5 ").to_number() - 42.5).abs() < f64::EPSILON);
    assert!(v_txt("").to_number().abs() < f64::EPSILON);
    assert!((v_time(1_500.0).to_number() - 1_500.0).abs() < f64::EPSILON);

    assert!(v_txt("12px").to_number().is_nan());
    assert!(v_txt("inf").to_number().is_nan());
    assert!(Value::List(vec![Value::Number(1.0)]).to_number().is_nan());
}

#[test]
fn infinity_word_form_is_accepted() {
    assert_eq!(v_txt("Infinity").to_number(), f64::INFINITY);
    assert_eq!(v_txt("-Infinity").to_number(), f64::NEG_INFINITY);
}

// ---- text rendering ----------------------------------------------------

#[test]
fn text_rendering_matches_cell_display() {
    assert_eq!(Value::Number(1.0).to_text(), "1");
    assert_eq!(Value::Number(1.5).to_text(), "1.5");
    assert_eq!(Value::Number(-0.0).to_text(), "0");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_text(), "-Infinity");
    assert_eq!(Value::Null.to_text(), "");
    assert_eq!(Value::Bool(false).to_text(), "false");
    assert_eq!(v_time(0.0).to_text(), "1970-01-01T00:00:00Z");
    assert_eq!(
        Value::List(vec![Value::Number(1.0), Value::Null, v_txt("a")]).to_text(),
        "1,,a"
    );
}

// ---- conversions / serde -----------------------------------------------

#[test]
fn option_conversion_maps_none_to_null() {
    assert_eq!(Value::from(None::<f64>), Value::Null);
    assert_eq!(Value::from(Some("x")), v_txt("x"));
    assert_eq!(Value::from(3), Value::Number(3.0));
}

#[test]
fn json_cells_deserialize_untagged() {
    let values: Vec<Value> =
        serde_json::from_str(r#"[null, true, 3, 2.5, "a", [2021, 0, 1]]"#).expect("decode");

    assert_eq!(
        values,
        vec![
            Value::Null,
            Value::Bool(true),
            Value::Number(3.0),
            Value::Number(2.5),
            v_txt("a"),
            Value::List(vec![
                Value::Number(2021.0),
                Value::Number(0.0),
                Value::Number(1.0)
            ]),
        ]
    );
}

#[test]
fn time_cells_serialize_as_epoch_millis() {
    let json = serde_json::to_string(&vec![v_time(2_000.0), Value::Null]).expect("encode");

    assert_eq!(json, "[2000.0,null]");
}
