//! Zero-copy pull tokenizer for a relaxed JSON dialect.
//!
//! Besides standard JSON, the dialect accepts bare scalars (`key: value`
//! without quotes), and treats `:` and `,` as optional whitespace, so
//! `[1 2 3]` and `[1,2,3]` tokenize the same.
//!
//! [`Tokenizer`] never allocates. Containers are either skipped in one pass
//! or walked with a child tokenizer obtained from [`Tokenizer::enter`].
//! [`treebuild`] builds a [`JsonDoc`] on top of it.
#![no_std]
extern crate alloc;
extern crate core;

pub use error::{ErrorType, JsonError, JsonResult};
pub use relaxed_json_common::{ContainerType, JsonDoc, ScalarType};
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use treebuild::{load, load_str, JsonLoader, LoaderOptions};

pub mod classify;
pub mod error;
pub mod escaper;
pub mod extract;
pub mod tokenizer;
pub mod treebuild;
