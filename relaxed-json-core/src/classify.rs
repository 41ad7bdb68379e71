//! Stateless predicates over token spans returned by the tokenizer.
//!
//! None of these look at a [`Tokenizer`], they only inspect the bytes.
//!
//! [`Tokenizer`]: crate::Tokenizer

use core::str::{from_utf8, FromStr};

#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub fn is_object(span: &[u8]) -> bool {
    span.first() == Some(&b'{')
}

#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub fn is_array(span: &[u8]) -> bool {
    span.first() == Some(&b'[')
}

/// String tokens span at least both quotes.
#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub fn is_string(span: &[u8]) -> bool {
    span.len() > 1 && span[0] == b'"'
}

#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub fn is_null(span: &[u8]) -> bool {
    span == b"null"
}

#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub fn is_true(span: &[u8]) -> bool {
    span == b"true"
}

#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub fn is_false(span: &[u8]) -> bool {
    span == b"false"
}

#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub fn is_bool(span: &[u8]) -> bool {
    is_true(span) || is_false(span)
}

/// Whole span parses as a float, trailing bytes included.
///
/// Values beyond the `f32` range still count, they parse to infinity.
#[must_use]
pub fn is_float(span: &[u8]) -> bool {
    parse_whole::<f32>(span).is_some()
}

/// Whole span parses as an `i32`.
#[must_use]
pub fn is_int(span: &[u8]) -> bool {
    parse_whole::<i32>(span).is_some()
}

pub(crate) fn parse_whole<T: FromStr>(span: &[u8]) -> Option<T> {
    from_utf8(span).ok()?.parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containers() {
        assert!(is_object(b"{"));
        assert!(!is_object(b"["));
        assert!(is_array(b"["));
        assert!(!is_array(b""));
        assert!(!is_object(b""));
    }

    #[test]
    fn test_string() {
        assert!(is_string(b"\"\""));
        assert!(is_string(b"\"abc\""));
        assert!(!is_string(b"\""));
        assert!(!is_string(b"abc"));
    }

    #[test]
    fn test_keywords() {
        assert!(is_null(b"null"));
        assert!(!is_null(b"nul"));
        assert!(!is_null(b"nulll"));
        assert!(is_true(b"true"));
        assert!(is_false(b"false"));
        assert!(!is_true(b"True"));
        assert!(is_bool(b"true") && is_bool(b"false"));
        assert!(!is_bool(b"null"));
    }

    #[test]
    fn test_numbers() {
        assert!(is_float(b"1"));
        assert!(is_float(b"-1.5e3"));
        assert!(is_float(b".5"));
        assert!(!is_float(b"1.5x"));
        assert!(!is_float(b" 1.5"));
        assert!(!is_float(b"1,5"));
        assert!(!is_float(b""));
        assert!(is_int(b"-42"));
        assert!(!is_int(b"4.2"));
        assert!(!is_int(b"99999999999"));
    }

    #[test]
    fn test_float_out_of_range() {
        // out of range saturates instead of failing
        assert!(is_float(b"1e999"));
        assert_eq!(parse_whole::<f32>(b"1e999"), Some(f32::INFINITY));
        assert_eq!(parse_whole::<f32>(b"-1e999"), Some(f32::NEG_INFINITY));
        assert_eq!(parse_whole::<f32>(b"1e-999"), Some(0.0));
    }
}
