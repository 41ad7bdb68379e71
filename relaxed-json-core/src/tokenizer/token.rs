use core::fmt::{Display, Formatter};
use core::str::from_utf8;

use relaxed_json_common::{ContainerType, Mark, ScalarType};

use crate::classify;
use crate::error::{ErrorType, JsonError, JsonResult};

/// Kind of a token, decided by its first byte alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Container(ContainerType),
    Scalar(ScalarType),
}

/// Span of input produced by [`Tokenizer::next_token`].
///
/// Scalars span their full text, strings include both quotes. Containers
/// span only their opening bracket, the content is either skipped or walked
/// through a child tokenizer.
///
/// [`Tokenizer::next_token`]: crate::Tokenizer::next_token
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'input> {
    pub(crate) offset: usize,
    pub(crate) bytes: &'input [u8],
}

impl<'input> Token<'input> {
    #[must_use]
    pub fn new(offset: usize, bytes: &'input [u8]) -> Self {
        Token { offset, bytes }
    }

    /// Offset of the first byte in the tokenized input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        self.offset..self.offset + self.bytes.len()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &'input [u8] {
        self.bytes
    }

    /// Raw token text, quotes and escapes included.
    ///
    /// # Errors
    /// Returns [`ErrorType::InvalidUtf8`] when the token isn't valid UTF-8,
    /// only possible for a token over input that never went through the
    /// tokenizer.
    pub fn as_str(&self) -> JsonResult<&'input str> {
        from_utf8(self.bytes).map_err(|_| JsonError::new(ErrorType::InvalidUtf8, self.offset))
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self.bytes.first() {
            Some(b'{') => TokenKind::Container(ContainerType::Object),
            Some(b'[') => TokenKind::Container(ContainerType::Array),
            Some(b'"') => TokenKind::Scalar(ScalarType::Quoted),
            _ => TokenKind::Scalar(ScalarType::Bare),
        }
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        classify::is_object(self.bytes)
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        classify::is_array(self.bytes)
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        self.is_object() || self.is_array()
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        classify::is_string(self.bytes)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        classify::is_null(self.bytes)
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        classify::is_true(self.bytes)
    }

    #[must_use]
    pub fn is_false(&self) -> bool {
        classify::is_false(self.bytes)
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        classify::is_bool(self.bytes)
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        classify::is_float(self.bytes)
    }

    #[must_use]
    pub fn is_int(&self) -> bool {
        classify::is_int(self.bytes)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.as_str() {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "{:?}", self.bytes),
        }
    }
}
