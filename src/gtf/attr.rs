use indexmap::IndexMap;
use thiserror::Error;

/// Parsed view over the attribute column of a GTF line.
///
/// Keys and values borrow from the input line and keep their declaration
/// order, so a consumer can look fields up by key or replay the column
/// exactly as it came in.
#[derive(Debug, Default, PartialEq)]
pub struct Attribute<'a> {
    fields: IndexMap<&'a str, &'a str>,
}

impl<'a> Attribute<'a> {
    /// Parses a semicolon-delimited list of `key "value"` units.
    ///
    /// Each unit splits on its first space; the value keeps everything
    /// after it, minus surrounding single or double quotes. A unit with
    /// no space in it cannot be split and aborts the parse.
    pub fn parse(line: &'a str) -> Result<Attribute<'a>, ParseError> {
        let line = line.trim_end().trim_matches(';');
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut fields = IndexMap::new();
        for unit in line.split(';') {
            let unit = unit.trim();
            let (key, value) = unit
                .split_once(' ')
                .ok_or_else(|| ParseError::MalformedAttribute(unit.to_string()))?;
            fields.insert(key, value.trim_matches(|c| c == '"' || c == '\''));
        }

        Ok(Attribute { fields })
    }

    /// Returns the value stored under `key`, if any.
    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).copied()
    }

    /// Like `get`, but a missing key is a hard error naming the key.
    pub fn require(&self, key: &str) -> Result<&'a str, ParseError> {
        self.get(key)
            .ok_or_else(|| ParseError::MissingAttribute(key.to_string()))
    }

    /// Key/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line or empty attribute column.
    #[error("Empty line, cannot parse attributes")]
    Empty,

    /// Attribute unit with no space to split on.
    #[error("Malformed attribute: {0:?}")]
    MalformedAttribute(String),

    /// A required attribute key is absent.
    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    /// Fewer than 9 tab-separated columns.
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// Start/end column that is not a positive integer.
    #[error("Invalid {field} coordinate: {value:?}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
    },
}
