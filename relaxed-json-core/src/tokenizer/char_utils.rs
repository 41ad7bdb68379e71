/// Whitespace and the optional `:` and `,` separators.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_separator(c: u8) -> bool {
    matches!(c, b'\t' | b' ' | b'\r' | b'\n' | b':' | b',')
}

/// Bytes that end a bare scalar.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_bare_end(c: u8) -> bool {
    is_separator(c) || is_close(c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_close(c: u8) -> bool {
    c == b']' || c == b'}'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_open(c: u8) -> bool {
    c == b'[' || c == b'{'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_bare_start(c: u8) -> bool {
    matches!(c, b'-' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9')
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_printable(c: u8) -> bool {
    (32..=126).contains(&c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_escape_char(c: u8) -> bool {
    matches!(c, b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u')
}

/// Number of continuation bytes that follow a UTF-8 lead byte, if `c` is one.
#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn utf8_continuations(c: u8) -> Option<u8> {
    match c {
        0b1100_0000..=0b1101_1111 => Some(1),
        0b1110_0000..=0b1110_1111 => Some(2),
        0b1111_0000..=0b1111_0111 => Some(3),
        _ => None,
    }
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_utf8_continuation(c: u8) -> bool {
    (0b1000_0000..=0b1011_1111).contains(&c)
}
