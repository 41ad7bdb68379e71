use core::fmt;
use core::fmt::{Display, Formatter};

/// A specialized `Result` type where the error is hard-wired to [`JsonError`].
pub type JsonResult<T> = Result<T, JsonError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorType {
    /// Byte can't start a token or act as a separator.
    UnexpectedByte(u8),
    /// Non-printable byte inside a bare scalar.
    InvalidBareByte(u8),
    /// Control byte or invalid UTF-8 lead byte inside a string.
    InvalidStringByte(u8),
    /// Character after `\` is not a known escape.
    InvalidEscape(u8),
    /// UTF-8 lead byte not followed by a continuation byte.
    InvalidUtf8Continuation(u8),
    UnterminatedString,
    UnterminatedContainer,
    /// A token was requested but the scope already ended.
    UnexpectedEndOfScope,
    ExpectedObject,
    ExpectedArray,
    ExpectedString,
    ExpectedFloat,
    ExpectedInt,
    ExpectedBool,
    BufferTooSmall {
        needed: usize,
        available: usize,
    },
    InvalidUtf8,
    /// Object key is not a string or bare word.
    InvalidKey,
    /// Object key without a value before the closing bracket.
    MissingValue,
    DepthLimit,
    TrailingContent,
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::UnexpectedByte(c) => write!(f, "unexpected byte 0x{c:02x}"),
            ErrorType::InvalidBareByte(c) => write!(f, "invalid byte 0x{c:02x} in bare scalar"),
            ErrorType::InvalidStringByte(c) => write!(f, "invalid byte 0x{c:02x} in string"),
            ErrorType::InvalidEscape(c) => write!(f, "invalid escape character 0x{c:02x}"),
            ErrorType::InvalidUtf8Continuation(c) => {
                write!(f, "invalid UTF-8 continuation byte 0x{c:02x}")
            }
            ErrorType::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: needed {needed}, available {available}")
            }
            _ => write!(f, "{self:?}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JsonError {
    /// Type of error
    pub error: ErrorType,
    /// Offset into the input where the error was found
    pub offset: usize,
}

impl JsonError {
    #[must_use]
    pub fn new(error: ErrorType, offset: usize) -> Self {
        Self { error, offset }
    }
}

impl Display for JsonError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} at offset {}", self.error, self.offset)
    }
}
