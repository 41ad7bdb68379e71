#![no_std]
extern crate alloc;
extern crate core;

pub mod doc;

pub use doc::{Entry, JsonDoc, Mapping, Sequence};

use core::fmt::{Display, Formatter};
use core::ops::Range;

/// Byte range of a token inside the tokenized input.
pub type Mark = Range<usize>;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScalarType {
    /// Unquoted run of printable bytes like:
    /// ```text
    ///   42, -1.5e3, true, null, some-identifier
    /// ```
    Bare,
    /// Double quoted string which permits escapes and UTF-8 inside
    /// E.g. :
    /// ```text
    /// "This is a quoted string with \"quotes\" within."
    /// ```
    Quoted,
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ScalarType::Bare => write!(f, ":"),
            ScalarType::Quoted => write!(f, "\""),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ContainerType {
    Object,
    Array,
}

impl Display for ContainerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ContainerType::Object => write!(f, "OBJ"),
            ContainerType::Array => write!(f, "ARR"),
        }
    }
}
