//! An intermediate, ordered representation of query and route inputs.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A dynamically-typed query value.
///
/// Any `T: Serialize` is lowered into this tree before being flattened into
/// a querystring or used as route parameters. Primitives are stored in their
/// final textual form, so the flattening step only has to distinguish
/// between the four shapes below.
///
/// - `Null`: an absent value (`None`, `()`)
/// - `String`: a primitive, already converted to text (`"12"`, `"true"`)
/// - `Sequence`: an ordered list, keyed by index when flattened
/// - `Map`: ordered key/value entries, in insertion order
///
/// ```
/// use dynamic_url::Value;
///
/// let query = Value::map()
///     .insert("citizen", "robespierre")
///     .insert("heroes", vec!["ironman", "thor"]);
///
/// assert_eq!(
///     dynamic_url::to_string(&query).unwrap(),
///     "citizen=robespierre&heroes%5B0%5D=ironman&heroes%5B1%5D=thor"
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Null,
    String(String),
    Sequence(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Creates an empty `Value::Map`.
    pub const fn map() -> Self {
        Value::Map(Vec::new())
    }

    /// Appends an entry, turning `self` into a map if it is not one already.
    ///
    /// Entries keep the order they were inserted in. Inserting an existing
    /// key replaces its value in place.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match &mut self {
            Value::Map(entries) => match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => *slot = value,
                None => entries.push((key, value)),
            },
            _ => self = Value::Map(vec![(key, value)]),
        }
        self
    }

    /// Looks up a key of a `Value::Map`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for the structured shapes (`Sequence` and `Map`).
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Sequence(s) => f.debug_list().entries(s.iter()).finish(),
            Value::Map(m) => f
                .debug_map()
                .entries(m.iter().map(|(k, v)| (k, v)))
                .finish(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::String(if b { "true" } else { "false" }.to_owned())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

macro_rules! from_itoa {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    let mut buffer = itoa::Buffer::new();
                    Value::String(buffer.format(v).to_owned())
                }
            }
        )*
    };
}

from_itoa!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::String(crate::ser::format_float(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::String(crate::ser::format_float(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
