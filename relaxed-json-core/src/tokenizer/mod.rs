use core::ops::Range;

use relaxed_json_common::ContainerType;

pub use token::{Token, TokenKind};

use crate::error::{ErrorType, JsonError, JsonResult};
use char_utils::{
    is_bare_end, is_bare_start, is_close, is_escape_char, is_open, is_printable, is_separator,
    is_utf8_continuation, utf8_continuations,
};

mod char_utils;
mod token;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Start,
    Structural,
    Bare,
    String,
    /// Inside a multibyte UTF-8 sequence, with the continuation bytes left.
    Utf8(u8),
    Escape,
    /// Tokenizer hit malformed input and keeps reporting it.
    Failed(JsonError),
}

/// Pull tokenizer over a borrowed byte buffer.
///
/// Each call to [`Tokenizer::next_token`] scans forward to the next token of
/// the current scope. Opening brackets are reported as one byte tokens. A
/// caller either walks the container with a child from [`Tokenizer::enter`],
/// or keeps calling `next_token` on the same tokenizer, which then skips the
/// whole container, tracking only the bracket `depth`.
///
/// The child mutably borrows its parent, so the parent can't be used until
/// the child is dropped. When the child reaches the closing bracket of its
/// scope, it hands its position back to the parent, which resumes right
/// after the container.
///
/// ```
/// use relaxed_json_core::Tokenizer;
///
/// let mut root = Tokenizer::from("{key: [1 2] other: 3}");
/// let mut obj = root.enter_object().unwrap();
/// assert_eq!(obj.next_token().unwrap().unwrap().as_bytes(), b"key");
/// assert!(obj.next_token().unwrap().unwrap().is_array());
/// // array is skipped
/// assert_eq!(obj.next_token().unwrap().unwrap().as_bytes(), b"other");
/// assert_eq!(obj.get_int(), Ok(3));
/// assert_eq!(obj.next_token(), Ok(None));
/// ```
#[derive(Debug)]
pub struct Tokenizer<'input, 'parent> {
    input: &'input [u8],
    /// Position of the next byte to scan
    cursor: usize,
    /// Exclusive upper bound, fixed for the tokenizer's lifetime
    end: usize,
    /// Start of the token currently being scanned
    start: usize,
    /// Containers opened but not closed while skipping
    depth: u32,
    state: State,
    /// Cursor of the tokenizer this one was entered from
    parent: Option<&'parent mut usize>,
    /// The iterator already yielded the sticky error
    error_yielded: bool,
}

impl<'input> From<&'input str> for Tokenizer<'input, 'static> {
    fn from(value: &'input str) -> Self {
        Tokenizer::new(value.as_bytes())
    }
}

impl<'input> From<&'input [u8]> for Tokenizer<'input, 'static> {
    fn from(value: &'input [u8]) -> Self {
        Tokenizer::new(value)
    }
}

impl<'input> Tokenizer<'input, 'static> {
    /// Creates a root tokenizer over the whole `input`.
    #[must_use]
    pub fn new(input: &'input (impl AsRef<[u8]> + ?Sized)) -> Self {
        let input = input.as_ref();
        Self::with_range(input, 0..input.len())
    }

    /// Creates a root tokenizer over `range` of `input`, clamped to its length.
    #[must_use]
    pub fn with_range(input: &'input [u8], range: Range<usize>) -> Self {
        let end = range.end.min(input.len());
        let cursor = range.start.min(end);
        Tokenizer {
            input,
            cursor,
            end,
            start: cursor,
            depth: 0,
            state: State::Start,
            parent: None,
            error_yielded: false,
        }
    }
}

impl<'input, 'parent> Tokenizer<'input, 'parent> {
    /// Offset of the next byte the tokenizer will look at.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// Number of skipped containers that are still open.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// `true` unless the tokenizer was created by [`Tokenizer::enter`].
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whole input buffer, offsets of tokens and errors point into it.
    #[must_use]
    pub fn input(&self) -> &'input [u8] {
        self.input
    }

    /// Scans for the next token of the current scope.
    ///
    /// Returns `Ok(Some(token))` for a token, `Ok(None)` once the scope is
    /// exhausted, either at its closing bracket or at the end of input.
    /// `Ok(None)` is repeated on further calls.
    ///
    /// # Errors
    /// Malformed input returns a [`JsonError`]. The tokenizer is unusable
    /// afterwards and returns the same error on every later call.
    #[allow(clippy::too_many_lines)]
    pub fn next_token(&mut self) -> JsonResult<Option<Token<'input>>> {
        if let State::Failed(err) = self.state {
            return Err(err);
        }

        while self.cursor < self.end {
            let chr = self.input[self.cursor];
            // `continue` dispatches `chr` again in the new state, `break` consumes it.
            loop {
                match self.state {
                    State::Start => {
                        self.state = State::Structural;
                        self.depth = 0;
                        continue;
                    }
                    State::Structural => match chr {
                        c if is_separator(c) => break,
                        b'"' => {
                            self.start = self.cursor;
                            self.state = State::String;
                            break;
                        }
                        c if is_open(c) => {
                            self.start = self.cursor;
                            self.depth += 1;
                            if self.depth > 1 {
                                break;
                            }
                            self.cursor += 1;
                            return Ok(Some(self.token()));
                        }
                        c if is_close(c) => {
                            if self.depth == 0 {
                                self.close_scope();
                                return Ok(None);
                            }
                            self.depth -= 1;
                            break;
                        }
                        c if is_bare_start(c) => {
                            self.start = self.cursor;
                            self.state = State::Bare;
                            break;
                        }
                        c => return Err(self.fail(ErrorType::UnexpectedByte(c))),
                    },
                    State::Bare => match chr {
                        c if is_bare_end(c) => {
                            self.state = State::Structural;
                            if self.depth > 0 {
                                continue;
                            }
                            return Ok(Some(self.token()));
                        }
                        c if is_printable(c) => break,
                        c => return Err(self.fail(ErrorType::InvalidBareByte(c))),
                    },
                    State::String => match chr {
                        b'\\' => {
                            self.state = State::Escape;
                            break;
                        }
                        b'"' => {
                            self.state = State::Structural;
                            if self.depth > 0 {
                                break;
                            }
                            self.cursor += 1;
                            return Ok(Some(self.token()));
                        }
                        c if is_printable(c) => break,
                        c => match utf8_continuations(c) {
                            Some(remain) => {
                                self.state = State::Utf8(remain);
                                break;
                            }
                            None => return Err(self.fail(ErrorType::InvalidStringByte(c))),
                        },
                    },
                    State::Utf8(remain) => {
                        if !is_utf8_continuation(chr) {
                            return Err(self.fail(ErrorType::InvalidUtf8Continuation(chr)));
                        }
                        self.state = if remain > 1 {
                            State::Utf8(remain - 1)
                        } else {
                            State::String
                        };
                        break;
                    }
                    State::Escape => {
                        if !is_escape_char(chr) {
                            return Err(self.fail(ErrorType::InvalidEscape(chr)));
                        }
                        self.state = State::String;
                        break;
                    }
                    State::Failed(err) => return Err(err),
                }
            }
            self.cursor += 1;
        }

        self.end_of_input()
    }

    /// Creates a child tokenizer for the container token that
    /// [`Tokenizer::next_token`] just returned.
    ///
    /// Only valid right after a container token. Use
    /// [`Tokenizer::enter_object`] or [`Tokenizer::enter_array`] to fetch and
    /// check the token in one step.
    pub fn enter(&mut self) -> Tokenizer<'input, '_> {
        log::trace!("entering scope at offset {}", self.cursor);
        Tokenizer {
            input: self.input,
            cursor: self.cursor,
            end: self.end,
            start: self.cursor,
            depth: 0,
            state: State::Start,
            parent: Some(&mut self.cursor),
            error_yielded: false,
        }
    }

    /// Fetches the next token and enters it if it opens a `container`.
    ///
    /// # Errors
    /// Fails with [`ErrorType::ExpectedObject`] or
    /// [`ErrorType::ExpectedArray`] when the scope ended or the next token is
    /// of another kind, or with the tokenizer error for malformed input.
    pub fn enter_container(
        &mut self,
        container: ContainerType,
    ) -> JsonResult<Tokenizer<'input, '_>> {
        let expected = match container {
            ContainerType::Object => ErrorType::ExpectedObject,
            ContainerType::Array => ErrorType::ExpectedArray,
        };
        match self.next_token()? {
            Some(token) if token.kind() == TokenKind::Container(container) => Ok(self.enter()),
            Some(token) => Err(JsonError::new(expected, token.offset())),
            None => Err(JsonError::new(expected, self.cursor)),
        }
    }

    /// See [`Tokenizer::enter_container`].
    ///
    /// # Errors
    /// Fails unless the next token opens an object.
    pub fn enter_object(&mut self) -> JsonResult<Tokenizer<'input, '_>> {
        self.enter_container(ContainerType::Object)
    }

    /// See [`Tokenizer::enter_container`].
    ///
    /// # Errors
    /// Fails unless the next token opens an array.
    pub fn enter_array(&mut self) -> JsonResult<Tokenizer<'input, '_>> {
        self.enter_container(ContainerType::Array)
    }

    fn token(&self) -> Token<'input> {
        Token::new(self.start, &self.input[self.start..self.cursor])
    }

    // Cursor stays on the closing bracket, the parent still counts its
    // container as open and consumes the bracket as the matching close.
    fn close_scope(&mut self) {
        if let Some(parent) = self.parent.as_deref_mut() {
            log::trace!("closing scope at offset {}", self.cursor);
            *parent = self.cursor;
        }
    }

    fn end_of_input(&mut self) -> JsonResult<Option<Token<'input>>> {
        match self.state {
            State::String | State::Escape | State::Utf8(_) => {
                Err(self.fail(ErrorType::UnterminatedString))
            }
            _ if self.depth > 0 || self.parent.is_some() => {
                Err(self.fail(ErrorType::UnterminatedContainer))
            }
            State::Bare => {
                self.state = State::Structural;
                Ok(Some(self.token()))
            }
            _ => Ok(None),
        }
    }

    fn fail(&mut self, error: ErrorType) -> JsonError {
        let err = JsonError::new(error, self.cursor);
        log::debug!("malformed input: {err}");
        self.state = State::Failed(err);
        err
    }
}

/// Yields tokens of the current scope. A malformed input yields its error
/// once and then ends the iteration.
impl<'input> Iterator for Tokenizer<'input, '_> {
    type Item = JsonResult<Token<'input>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error_yielded {
            return None;
        }
        let item = self.next_token().transpose();
        self.error_yielded = matches!(item, Some(Err(_)));
        item
    }
}
