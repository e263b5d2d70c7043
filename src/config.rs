use std::borrow::Cow;
use std::io::Write;

use crate::error::Result;
use crate::ser::{QsWriter, to_value};

/// Configuration for querystring serialization.
///
/// ## Nesting Depth
///
/// The `max_depth` parameter controls how many levels of nested maps and
/// sequences are flattened into bracketed keys. The root mapping is depth
/// `0`; a structured value found at depth `max_depth` is not descended into
/// and is written with an empty value instead.
///
/// ```
/// use dynamic_url::{Config, Value};
///
/// let query = Value::map().insert("a", Value::map().insert("b", Value::map().insert("c", 1)));
///
/// let config = Config::new().max_depth(1);
/// assert_eq!(config.serialize_string(&query).unwrap(), "a%5Bb%5D=");
///
/// let config = Config::new().max_depth(0);
/// assert_eq!(config.serialize_string(&query).unwrap(), "a=");
/// ```
///
/// ## Defaults
///
/// `prefix = ""`, `separator = "&"`, `skip_nulls = true`, `max_depth = 5`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) prefix: Cow<'static, str>,
    pub(crate) separator: Cow<'static, str>,
    pub(crate) skip_nulls: bool,
    pub(crate) max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            prefix: Cow::Borrowed(""),
            separator: Cow::Borrowed("&"),
            skip_nulls: true,
            max_depth: 5,
        }
    }

    /// Nests every top-level key under `prefix`, so `a=1` becomes
    /// `prefix[a]=1`. Default is empty.
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The string written between `key=value` pairs. Default is `&`.
    ///
    /// The separator is written as-is, without percent-encoding.
    pub fn separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// When `true` (the default), null values are dropped entirely.
    /// Otherwise they are written as the literal text `null`.
    pub const fn skip_nulls(mut self, skip_nulls: bool) -> Self {
        self.skip_nulls = skip_nulls;
        self
    }

    /// Specifies the maximum depth of nested values that will be
    /// flattened. Default is 5.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Serializes an object to a querystring using this `Config`.
    pub fn serialize_string<T: ?Sized + serde::Serialize>(&self, input: &T) -> Result<String> {
        let mut buffer = Vec::with_capacity(128);
        self.serialize_to_writer(input, &mut buffer)?;
        // only whole `&str` chunks are ever written, so nothing is replaced
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Serializes an object to a querystring using this `Config`.
    pub fn serialize_to_writer<T: ?Sized + serde::Serialize, W: Write>(
        &self,
        input: &T,
        writer: &mut W,
    ) -> Result<()> {
        let value = to_value(input)?;
        QsWriter::new(writer, self).write_root(&value)
    }
}
