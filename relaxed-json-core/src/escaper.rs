use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::str::from_utf8;

use memchr::memchr;

use crate::classify::is_string;
use crate::error::{ErrorType, JsonError, JsonResult};
use crate::extract::string_content;

#[cfg_attr(not(feature = "no-inline"), inline)]
fn decode_escape(c: u8) -> u8 {
    match c {
        b'b' => b'\x08',
        b'f' => b'\x0c',
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        _ => c,
    }
}

/// Walks `content`, calling `emit` with every unescaped run and decoded byte.
fn for_each_part<F: FnMut(&[u8])>(content: &[u8], mut emit: F) {
    let mut pos = 0;
    while let Some(i) = content.get(pos..).and_then(|rest| memchr(b'\\', rest)) {
        let slash = pos + i;
        emit(&content[pos..slash]);
        match content.get(slash + 1) {
            Some(&c) => emit(&[decode_escape(c)]),
            // lone trailing backslash is kept as is
            None => emit(b"\\"),
        }
        pos = slash + 2;
    }
    if let Some(rest) = content.get(pos..) {
        emit(rest);
    }
}

/// Length of `content` once escapes are resolved.
#[must_use]
pub fn unescaped_len(content: &[u8]) -> usize {
    let mut len = 0;
    for_each_part(content, |part| len += part.len());
    len
}

/// Writes string `content` (without quotes) into `out`, resolving escapes.
///
/// # Errors
/// [`ErrorType::BufferTooSmall`] when `out` can't hold the result, nothing
/// is written in that case.
pub fn unescape_into(content: &[u8], out: &mut [u8]) -> JsonResult<usize> {
    let needed = unescaped_len(content);
    if needed > out.len() {
        return Err(JsonError::new(
            ErrorType::BufferTooSmall {
                needed,
                available: out.len(),
            },
            0,
        ));
    }
    let mut written = 0;
    for_each_part(content, |part| {
        out[written..written + part.len()].copy_from_slice(part);
        written += part.len();
    });
    Ok(written)
}

/// Content of a string token with escapes resolved.
///
/// Borrows from `span` when the string holds no escapes.
///
/// # Errors
/// [`ErrorType::ExpectedString`] if `span` isn't a string token.
pub fn unescape(span: &[u8]) -> JsonResult<Cow<'_, [u8]>> {
    if !is_string(span) {
        return Err(JsonError::new(ErrorType::ExpectedString, 0));
    }
    let content = string_content(span);
    if memchr(b'\\', content).is_none() {
        return Ok(Cow::Borrowed(content));
    }
    let mut escaped = Vec::with_capacity(content.len());
    for_each_part(content, |part| escaped.extend_from_slice(part));
    Ok(Cow::Owned(escaped))
}

/// Same as [`unescape`], checked to be UTF-8.
///
/// # Errors
/// [`ErrorType::ExpectedString`] if `span` isn't a string token,
/// [`ErrorType::InvalidUtf8`] if the result isn't UTF-8.
pub fn unescape_str(span: &[u8]) -> JsonResult<Cow<'_, str>> {
    let invalid = JsonError::new(ErrorType::InvalidUtf8, 0);
    match unescape(span)? {
        Cow::Borrowed(bytes) => from_utf8(bytes).map(Cow::Borrowed).map_err(|_| invalid),
        Cow::Owned(bytes) => alloc::string::String::from_utf8(bytes)
            .map(Cow::Owned)
            .map_err(|_| invalid),
    }
}
