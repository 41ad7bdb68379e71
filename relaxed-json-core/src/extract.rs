//! Typed values out of token spans, and the matching tokenizer getters.

use alloc::string::String;
use alloc::vec;

use crate::classify::{is_false, is_string, is_true, parse_whole};
use crate::error::{ErrorType, JsonError, JsonResult};
use crate::escaper::unescape_into;
use crate::tokenizer::{Token, Tokenizer};

/// Copies the content of a string token into `out`, resolving escapes.
///
/// `\b`, `\f`, `\n`, `\r` and `\t` are decoded. Any other escaped byte is
/// copied without its backslash, so `\"`, `\\` and `\/` give the escaped
/// character and `\u00e9` gives `u00e9`. Returns the written part of `out`.
///
/// # Errors
/// [`ErrorType::ExpectedString`] if `span` isn't a string token,
/// [`ErrorType::BufferTooSmall`] if the content doesn't fit in `out`.
pub fn parse_string<'o>(span: &[u8], out: &'o mut [u8]) -> JsonResult<&'o [u8]> {
    if !is_string(span) {
        return Err(JsonError::new(ErrorType::ExpectedString, 0));
    }
    let written = unescape_into(string_content(span), out)?;
    Ok(&out[..written])
}

/// # Errors
/// [`ErrorType::ExpectedFloat`] unless the whole span is a float.
pub fn parse_float(span: &[u8]) -> JsonResult<f32> {
    parse_whole(span).ok_or(JsonError::new(ErrorType::ExpectedFloat, 0))
}

/// Same as [`parse_float`] with double precision.
///
/// # Errors
/// [`ErrorType::ExpectedFloat`] unless the whole span is a float.
pub fn parse_double(span: &[u8]) -> JsonResult<f64> {
    parse_whole(span).ok_or(JsonError::new(ErrorType::ExpectedFloat, 0))
}

/// # Errors
/// [`ErrorType::ExpectedInt`] unless the whole span is an `i32`.
pub fn parse_int(span: &[u8]) -> JsonResult<i32> {
    parse_whole(span).ok_or(JsonError::new(ErrorType::ExpectedInt, 0))
}

/// Stores `true` or `false` in `out`. On failure `out` is left untouched.
///
/// # Errors
/// [`ErrorType::ExpectedBool`] unless the span is `true` or `false`.
pub fn parse_bool(span: &[u8], out: &mut bool) -> JsonResult<()> {
    if is_true(span) {
        *out = true;
    } else if is_false(span) {
        *out = false;
    } else {
        return Err(JsonError::new(ErrorType::ExpectedBool, 0));
    }
    Ok(())
}

/// Bytes between the quotes of a string token.
pub(crate) fn string_content(span: &[u8]) -> &[u8] {
    &span[1..span.len() - 1]
}

// Errors from span parsers carry offset 0, rebase them onto the token.
fn at_token<T>(token: Token<'_>, result: JsonResult<T>) -> JsonResult<T> {
    result.map_err(|err| JsonError::new(err.error, token.offset() + err.offset))
}

impl<'input> Tokenizer<'input, '_> {
    fn require_token(&mut self) -> JsonResult<Token<'input>> {
        self.next_token()?
            .ok_or(JsonError::new(ErrorType::UnexpectedEndOfScope, self.offset()))
    }

    /// Reads the next token as a string into `out`.
    ///
    /// # Errors
    /// Fails at the end of the scope, for non-string tokens, or when `out`
    /// is shorter than the whole token, quotes included.
    pub fn get_string<'o>(&mut self, out: &'o mut [u8]) -> JsonResult<&'o [u8]> {
        let token = self.require_token()?;
        if out.len() < token.len() {
            return Err(JsonError::new(
                ErrorType::BufferTooSmall {
                    needed: token.len(),
                    available: out.len(),
                },
                token.offset(),
            ));
        }
        at_token(token, parse_string(token.as_bytes(), out))
    }

    /// Reads the next token as an owned, unescaped string.
    ///
    /// # Errors
    /// Fails at the end of the scope, for non-string tokens, or when the
    /// content isn't valid UTF-8 after unescaping.
    pub fn get_string_owned(&mut self) -> JsonResult<String> {
        let token = self.require_token()?;
        if !token.is_string() {
            return Err(JsonError::new(ErrorType::ExpectedString, token.offset()));
        }
        let mut buf = vec![0u8; token.len()];
        let written = at_token(token, parse_string(token.as_bytes(), &mut buf))?.len();
        buf.truncate(written);
        String::from_utf8(buf).map_err(|_| JsonError::new(ErrorType::InvalidUtf8, token.offset()))
    }

    /// # Errors
    /// Fails at the end of the scope or when the next token isn't a float.
    pub fn get_float(&mut self) -> JsonResult<f32> {
        let token = self.require_token()?;
        at_token(token, parse_float(token.as_bytes()))
    }

    /// # Errors
    /// Fails at the end of the scope or when the next token isn't a float.
    pub fn get_double(&mut self) -> JsonResult<f64> {
        let token = self.require_token()?;
        at_token(token, parse_double(token.as_bytes()))
    }

    /// # Errors
    /// Fails at the end of the scope or when the next token isn't an `i32`.
    pub fn get_int(&mut self) -> JsonResult<i32> {
        let token = self.require_token()?;
        at_token(token, parse_int(token.as_bytes()))
    }

    /// # Errors
    /// Fails at the end of the scope or when the next token isn't a bool.
    pub fn get_bool(&mut self) -> JsonResult<bool> {
        let token = self.require_token()?;
        let mut value = false;
        at_token(token, parse_bool(token.as_bytes(), &mut value))?;
        Ok(value)
    }
}
