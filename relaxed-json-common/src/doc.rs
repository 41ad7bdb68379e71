use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Ordered sequence of zero or more [`JsonDoc`]'s
pub type Sequence<'a> = Vec<JsonDoc<'a>>;

/// Ordered key-value pairs of an object, duplicates kept in input order
pub type Mapping<'a> = Vec<Entry<'a>>;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum JsonDoc<'input> {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    FloatingPoint(f64),
    // quoted like `"value"`, escapes already resolved
    String(Cow<'input, str>),
    // bare word that is neither a number nor a keyword, like `ident`
    Bare(Cow<'input, str>),
    // `[x, x, x]` or `[x x x]`
    Sequence(Sequence<'input>),
    // `{"x": Y, a: B}`
    Mapping(Mapping<'input>),
}

impl<'input> JsonDoc<'input> {
    /// Interprets an unquoted scalar.
    ///
    /// `null`, `true` and `false` are keywords, anything that parses as an
    /// `i64` is an integer, anything else containing a digit that parses as
    /// an `f64` is a float. Every other word is kept as [`JsonDoc::Bare`].
    #[must_use]
    pub fn from_bare(value: &'input str) -> JsonDoc<'input> {
        match value.as_bytes() {
            b"null" => return JsonDoc::Null,
            b"true" => return JsonDoc::Bool(true),
            b"false" => return JsonDoc::Bool(false),
            _ => {}
        }

        if let Ok(integer) = value.parse::<i64>() {
            return JsonDoc::Integer(integer);
        }

        if let Some(float) = parse_float(value) {
            return JsonDoc::FloatingPoint(float);
        }

        JsonDoc::Bare(Cow::Borrowed(value))
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonDoc::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonDoc::Bool(x) => Some(*x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonDoc::Integer(x) => Some(*x),
            _ => None,
        }
    }

    /// Numeric value of integers and floats alike.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonDoc::Integer(x) => Some(*x as f64),
            JsonDoc::FloatingPoint(x) => Some(*x),
            _ => None,
        }
    }

    /// Text of quoted strings and bare words.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonDoc::String(x) | JsonDoc::Bare(x) => Some(x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&Sequence<'input>> {
        match self {
            JsonDoc::Sequence(x) => Some(x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping<'input>> {
        match self {
            JsonDoc::Mapping(x) => Some(x),
            _ => None,
        }
    }

    /// First value stored under `key`, if this is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonDoc<'input>> {
        self.as_mapping()?
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Element at `index`, if this is a sequence.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&JsonDoc<'input>> {
        self.as_sequence()?.get(index)
    }

    /// Detaches the document from the input buffer.
    #[must_use]
    pub fn into_owned(self) -> JsonDoc<'static> {
        match self {
            JsonDoc::Null => JsonDoc::Null,
            JsonDoc::Bool(x) => JsonDoc::Bool(x),
            JsonDoc::Integer(x) => JsonDoc::Integer(x),
            JsonDoc::FloatingPoint(x) => JsonDoc::FloatingPoint(x),
            JsonDoc::String(x) => JsonDoc::String(Cow::Owned(x.into_owned())),
            JsonDoc::Bare(x) => JsonDoc::Bare(Cow::Owned(x.into_owned())),
            JsonDoc::Sequence(seq) => {
                JsonDoc::Sequence(seq.into_iter().map(JsonDoc::into_owned).collect())
            }
            JsonDoc::Mapping(map) => {
                JsonDoc::Mapping(map.into_iter().map(Entry::into_owned).collect())
            }
        }
    }
}

fn parse_float(v: &str) -> Option<f64> {
    // Require a digit so words like `inf` or `NaN` stay bare.
    if !v.bytes().any(|c| c.is_ascii_digit()) {
        return None;
    }
    v.parse::<f64>().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'input> {
    pub key: Cow<'input, str>,
    pub value: JsonDoc<'input>,
}

impl<'input> Entry<'input> {
    #[must_use]
    pub fn new(key: Cow<'input, str>, value: JsonDoc<'input>) -> Self {
        Entry { key, value }
    }

    #[must_use]
    pub fn into_owned(self) -> Entry<'static> {
        Entry {
            key: Cow::Owned(self.key.into_owned()),
            value: self.value.into_owned(),
        }
    }
}
