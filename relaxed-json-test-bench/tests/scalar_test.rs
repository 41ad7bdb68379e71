use pretty_assertions::assert_eq;
use proptest::prelude::*;
use relaxed_json_core::classify::{
    is_array, is_bool, is_false, is_float, is_int, is_null, is_object, is_string, is_true,
};
use relaxed_json_core::extract::{parse_bool, parse_double, parse_float, parse_int};
use relaxed_json_core::{ErrorType, JsonError, Tokenizer};
use relaxed_json_test_bench::consts::{KEYWORDS_INPUT, NUMBERS_INPUT};

#[test]
fn scalar_classification() {
    let mut tokenizer = Tokenizer::new(KEYWORDS_INPUT);
    let arr = tokenizer.enter_array().unwrap();
    let flags: Vec<_> = arr
        .map(|t| t.map(|t| (t.is_true(), t.is_false(), t.is_bool(), t.is_null())))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        flags,
        vec![
            (true, false, true, false),
            (false, true, true, false),
            (false, false, false, true),
        ]
    );
}

#[test]
fn scalar_span_predicates() {
    assert!(is_object(b"{"));
    assert!(is_array(b"["));
    assert!(!is_array(b"{"));
    assert!(is_string(b"\"\""));
    assert!(!is_string(b"\""));
    assert!(!is_string(b"null"));
    assert!(is_null(b"null"));
    assert!(!is_null(b"nul"));
    assert!(is_true(b"true") && is_false(b"false"));
    assert!(is_bool(b"false") && !is_bool(b"True"));
    assert!(is_int(b"-2147483648"));
    assert!(!is_int(b"2147483648"));
    assert!(!is_int(b"1.0"));
    assert!(is_float(b"1.5e3") && is_float(b"7") && is_float(b"-.5"));
    assert!(!is_float(b"1.5x"));
    assert!(!is_float(b"\"1.5\""));
}

#[test]
fn scalar_numbers() {
    let mut tokenizer = Tokenizer::new(NUMBERS_INPUT);
    let mut arr = tokenizer.enter_array().unwrap();
    assert_eq!(arr.get_int(), Ok(0));
    assert_eq!(arr.get_int(), Ok(-1));
    assert_eq!(arr.get_double(), Ok(3.25));
    assert_eq!(arr.get_float(), Ok(-2.5e-3));
    // consumed even though it isn't an i32
    assert_eq!(
        arr.get_int(),
        Err(JsonError::new(ErrorType::ExpectedInt, 19))
    );
    assert_eq!(arr.next_token(), Ok(None));
    assert!(is_float(b"1E10"));
}

#[test]
fn scalar_parse_failures() {
    assert_eq!(
        parse_int(b"12ab"),
        Err(JsonError::new(ErrorType::ExpectedInt, 0))
    );
    assert_eq!(
        parse_float(b"abc"),
        Err(JsonError::new(ErrorType::ExpectedFloat, 0))
    );
    let mut flag = true;
    assert_eq!(
        parse_bool(b"yes", &mut flag),
        Err(JsonError::new(ErrorType::ExpectedBool, 0))
    );
    assert!(flag);
    assert_eq!(parse_bool(b"false", &mut flag), Ok(()));
    assert!(!flag);
}

#[test]
fn scalar_getter_at_scope_end() {
    let mut tokenizer = Tokenizer::new("[]");
    let mut arr = tokenizer.enter_array().unwrap();
    assert_eq!(
        arr.get_bool(),
        Err(JsonError::new(ErrorType::UnexpectedEndOfScope, 1))
    );
}

proptest! {
    #[test]
    fn double_round_trip(value in -1e12f64..1e12f64) {
        let text = format!("[{value}]");
        let mut tokenizer = Tokenizer::new(text.as_str());
        let mut arr = tokenizer.enter_array().unwrap();
        prop_assert_eq!(arr.get_double(), Ok(value));
        prop_assert_eq!(parse_double(value.to_string().as_bytes()), Ok(value));
    }

    #[test]
    fn int_round_trip(value in any::<i32>(), sep in "[ ,:\t\n]{1,3}") {
        let text = format!("{value}{sep}{value}");
        let mut tokenizer = Tokenizer::new(text.as_str());
        prop_assert_eq!(tokenizer.get_int(), Ok(value));
        prop_assert_eq!(tokenizer.get_int(), Ok(value));
        prop_assert_eq!(tokenizer.next_token(), Ok(None));
    }

    #[test]
    fn string_round_trip(value in "[^\"\\\\\\x00-\\x1f\\x7f]{0,24}") {
        let text = format!("{{k: \"{value}\"}}");
        let mut tokenizer = Tokenizer::new(text.as_str());
        let mut obj = tokenizer.enter_object().unwrap();
        prop_assert_eq!(
            obj.get_string_owned(),
            Err(JsonError::new(ErrorType::ExpectedString, 1))
        );
        prop_assert_eq!(obj.get_string_owned(), Ok(value));
        prop_assert_eq!(obj.next_token(), Ok(None));
    }
}
