pub mod consts;

use std::fmt::Write;

use relaxed_json_core::{ContainerType, JsonResult, TokenKind, Tokenizer};

///
/// Assert that in for given input, the tokenizer generates expected set of events
///
/// # Panics
///
///    Function panics if there is a difference between expected events string and one generated
///    from the input.
pub fn assert_eq_event(input: &str, events: &str) {
    let line = events_of(input.as_bytes());
    assert_eq!(line, events, "Error in case: {input}");
}

/// Renders a full traversal of `input`, entering every container.
///
/// Every event goes on its own line: `+OBJ`/`-OBJ` and `+ARR`/`-ARR` around
/// container contents, `=VAL :raw` for bare scalars and `=VAL "raw` for
/// strings, raw meaning escapes are left as written. A malformed input ends
/// with `ERR`.
#[must_use]
pub fn events_of(input: &[u8]) -> String {
    let mut line = String::with_capacity(input.len());
    let mut tokenizer = Tokenizer::new(input);
    if write_str_from_event(&mut line, &mut tokenizer).is_err() {
        line.push_str("\nERR");
    }
    line
}

/// Writes events of `tokenizer` until its scope ends.
///
/// # Errors
/// Returns the first tokenizer error, events before it stay in `line`.
pub fn write_str_from_event(line: &mut String, tokenizer: &mut Tokenizer<'_, '_>) -> JsonResult<()> {
    while let Some(token) = tokenizer.next_token()? {
        let _ = match token.kind() {
            TokenKind::Container(container) => {
                let _ = write!(line, "\n+{container}");
                write_str_from_event(line, &mut tokenizer.enter())?;
                write!(line, "\n-{container}")
            }
            TokenKind::Scalar(scalar_type) => {
                let raw = token.as_str()?;
                let value = if token.is_string() {
                    &raw[1..raw.len() - 1]
                } else {
                    raw
                };
                write!(line, "\n=VAL {scalar_type}{value}")
            }
        };
    }
    Ok(())
}

/// Tokens of the top level scope without entering any container, which are
/// rendered by their bracket alone.
///
/// # Errors
/// Returns the first tokenizer error.
pub fn sibling_tokens(input: &[u8]) -> JsonResult<Vec<String>> {
    Tokenizer::new(input)
        .map(|token| token.and_then(|t| t.as_str().map(str::to_owned)))
        .collect()
}

/// Values inside the top level container of `input`, with nested
/// containers skipped.
///
/// # Errors
/// Returns the first tokenizer error, or an error when `input` doesn't start
/// with a `container`.
pub fn skipped_children(input: &[u8], container: ContainerType) -> JsonResult<Vec<String>> {
    let mut root = Tokenizer::new(input);
    let child = root.enter_container(container)?;
    child
        .map(|token| token.and_then(|t| t.as_str().map(str::to_owned)))
        .collect()
}
