use alloc::borrow::Cow;
use alloc::vec::Vec;

use relaxed_json_common::{ContainerType, Entry, JsonDoc, ScalarType};

use crate::error::{ErrorType, JsonError, JsonResult};
use crate::escaper::unescape_str;
use crate::tokenizer::{Token, TokenKind, Tokenizer};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Deepest container nesting the loader accepts.
    pub max_depth: u32,
    /// Load every top level value into a [`JsonDoc::Sequence`] instead of
    /// rejecting anything after the first one.
    pub multiple_roots: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        LoaderOptions {
            max_depth: 128,
            multiple_roots: false,
        }
    }
}

/// Builds a [`JsonDoc`] tree by entering every container.
///
/// Strings and keys without escapes, as well as bare words, borrow from the
/// input.
#[derive(Copy, Clone, Debug, Default)]
pub struct JsonLoader {
    options: LoaderOptions,
}

/// Loads a single document with default [`LoaderOptions`].
///
/// # Errors
/// Any tokenizer error, or a structural error listed in [`JsonLoader::load`].
pub fn load(input: &[u8]) -> JsonResult<JsonDoc<'_>> {
    JsonLoader::default().load(input)
}

/// See [`load`].
///
/// # Errors
/// Any tokenizer error, or a structural error listed in [`JsonLoader::load`].
pub fn load_str(input: &str) -> JsonResult<JsonDoc<'_>> {
    load(input.as_bytes())
}

impl JsonLoader {
    #[must_use]
    pub fn new(options: LoaderOptions) -> Self {
        JsonLoader { options }
    }

    #[must_use]
    pub fn options(&self) -> LoaderOptions {
        self.options
    }

    /// Loads `input`. Empty input loads as [`JsonDoc::Null`], or as an empty
    /// sequence with `multiple_roots`.
    ///
    /// # Errors
    /// Tokenizer errors, plus [`ErrorType::TrailingContent`] for a second top
    /// level value or a closing bracket without an opening one,
    /// [`ErrorType::InvalidKey`] for a container used as a key,
    /// [`ErrorType::MissingValue`] for a key without value, and
    /// [`ErrorType::DepthLimit`] past `max_depth`.
    pub fn load<'input>(&self, input: &'input [u8]) -> JsonResult<JsonDoc<'input>> {
        let mut root = Tokenizer::new(input);
        let mut docs = Vec::new();
        while let Some(token) = root.next_token()? {
            if !self.options.multiple_roots && !docs.is_empty() {
                return Err(JsonError::new(ErrorType::TrailingContent, token.offset()));
            }
            docs.push(self.load_value(&mut root, token, 0)?);
        }
        // a stray closing bracket ends the root scope early
        if root.offset() < input.len() {
            return Err(JsonError::new(ErrorType::TrailingContent, root.offset()));
        }

        if self.options.multiple_roots {
            Ok(JsonDoc::Sequence(docs))
        } else {
            Ok(docs.pop().unwrap_or_default())
        }
    }

    fn load_value<'input>(
        &self,
        tokenizer: &mut Tokenizer<'input, '_>,
        token: Token<'input>,
        depth: u32,
    ) -> JsonResult<JsonDoc<'input>> {
        match token.kind() {
            TokenKind::Container(container) => {
                if depth >= self.options.max_depth {
                    log::debug!(
                        "depth limit {} reached at offset {}",
                        self.options.max_depth,
                        token.offset()
                    );
                    return Err(JsonError::new(ErrorType::DepthLimit, token.offset()));
                }
                let mut child = tokenizer.enter();
                match container {
                    ContainerType::Array => self.load_sequence(&mut child, depth + 1),
                    ContainerType::Object => self.load_mapping(&mut child, depth + 1),
                }
            }
            TokenKind::Scalar(ScalarType::Quoted) => Ok(JsonDoc::String(load_string(token)?)),
            TokenKind::Scalar(ScalarType::Bare) => Ok(JsonDoc::from_bare(token.as_str()?)),
        }
    }

    fn load_sequence<'input>(
        &self,
        child: &mut Tokenizer<'input, '_>,
        depth: u32,
    ) -> JsonResult<JsonDoc<'input>> {
        let mut sequence = Vec::new();
        while let Some(token) = child.next_token()? {
            sequence.push(self.load_value(child, token, depth)?);
        }
        Ok(JsonDoc::Sequence(sequence))
    }

    fn load_mapping<'input>(
        &self,
        child: &mut Tokenizer<'input, '_>,
        depth: u32,
    ) -> JsonResult<JsonDoc<'input>> {
        let mut mapping = Vec::new();
        while let Some(key_token) = child.next_token()? {
            let key = match key_token.kind() {
                TokenKind::Scalar(ScalarType::Quoted) => load_string(key_token)?,
                TokenKind::Scalar(ScalarType::Bare) => Cow::Borrowed(key_token.as_str()?),
                TokenKind::Container(_) => {
                    return Err(JsonError::new(ErrorType::InvalidKey, key_token.offset()));
                }
            };
            let value = match child.next_token()? {
                Some(value_token) => self.load_value(child, value_token, depth)?,
                None => {
                    return Err(JsonError::new(ErrorType::MissingValue, key_token.offset()));
                }
            };
            mapping.push(Entry::new(key, value));
        }
        Ok(JsonDoc::Mapping(mapping))
    }
}

fn load_string(token: Token<'_>) -> JsonResult<Cow<'_, str>> {
    unescape_str(token.as_bytes())
        .map_err(|err| JsonError::new(err.error, token.offset() + err.offset))
}
