//! Serialization support for querystrings.

mod encode;
mod key;
mod value;

use encode::encode;
pub use value::to_value;

use serde::ser;

use crate::Value;
use crate::config::Config;
use crate::error::Result;

use std::borrow::Cow;
use std::io::Write;

/// Serializes a value into a querystring.
///
/// Nested maps and sequences are flattened with bracket notation, and each
/// key path and value is percent-encoded once as a URI component.
///
/// ```
/// # use serde::Serialize;
/// #[derive(Serialize)]
/// struct Marvel {
///     hero: &'static str,
/// }
///
/// #[derive(Serialize)]
/// struct Query {
///     citizen: &'static str,
///     marvel: Marvel,
///     villain: Option<&'static str>,
/// }
///
/// let q = Query {
///     citizen: "robespierre",
///     marvel: Marvel { hero: "ironman" },
///     villain: None,
/// };
///
/// assert_eq!(
///     dynamic_url::to_string(&q).unwrap(),
///     "citizen=robespierre&marvel%5Bhero%5D=ironman"
/// );
/// ```
pub fn to_string<T: ?Sized + ser::Serialize>(input: &T) -> Result<String> {
    Config::default().serialize_string(input)
}

/// Serializes a value into a generic writer object.
///
/// ```
/// # use serde::Serialize;
/// #[derive(Serialize)]
/// struct Query {
///     name: &'static str,
///     age: u8,
/// }
///
/// let mut buffer = Vec::new();
/// dynamic_url::to_writer(&Query { name: "Alice Smith", age: 24 }, &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "name=Alice%20Smith&age=24");
/// ```
pub fn to_writer<T: ?Sized + ser::Serialize, W: Write>(input: &T, writer: &mut W) -> Result<()> {
    Config::default().serialize_to_writer(input, writer)
}

/// Formats a float the way JavaScript's `String(number)` does.
///
/// The digits are the shortest round-tripping ones produced by `ryu`. They
/// are laid out positionally for magnitudes in `1e-6..1e21` and in exponent
/// form with an explicit sign (`1e+21`, `1.5e-7`) outside that range.
pub(crate) fn format_float<F>(v: F) -> String
where
    F: ryu::Float + Into<f64> + Copy,
{
    let wide: f64 = v.into();
    if wide.is_nan() {
        return "NaN".to_owned();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if wide == 0.0 {
        // covers -0.0 as well
        return "0".to_owned();
    }

    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(v);
    let (negative, shortest) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest),
    };
    let (mantissa, exponent) = match shortest.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (shortest, 0),
    };

    let point = mantissa.find('.').unwrap_or(mantissa.len());
    let all_digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let significant = all_digits.trim_start_matches('0');
    let leading_zeros = all_digits.len() - significant.len();
    let digits = significant.trim_end_matches('0');

    // the value is 0.<digits> * 10^n
    let n = point as i32 + exponent - leading_zeros as i32;
    let k = digits.len() as i32;

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    if k <= n && n <= 21 {
        out.push_str(digits);
        out.push_str(&"0".repeat((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(-n as usize));
        out.push_str(digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = n - 1;
        out.push('e');
        out.push(if e < 0 { '-' } else { '+' });
        out.push_str(itoa::Buffer::new().format(e.unsigned_abs()));
    }
    out
}

/// Flattens a [`Value`] tree into `key=value` pairs.
///
/// Pairs are written in insertion order and joined by the configured
/// separator. Entries producing no output (skipped nulls, empty or
/// all-null nested values) contribute no separator either.
pub(crate) struct QsWriter<'c, W: Write> {
    writer: W,
    config: &'c Config,
    first_kv: bool,
}

impl<'c, W: Write> QsWriter<'c, W> {
    pub(crate) fn new(writer: W, config: &'c Config) -> Self {
        Self {
            writer,
            config,
            first_kv: true,
        }
    }

    /// Writes the entries of the root value under the configured prefix.
    ///
    /// A root that is neither a map nor a sequence has no entries and
    /// writes nothing.
    pub(crate) fn write_root(&mut self, root: &Value) -> Result<()> {
        let config = self.config;
        self.write_nested(root, &config.prefix, 0)
    }

    fn write_nested(&mut self, value: &Value, prefix: &str, depth: usize) -> Result<()> {
        match value {
            Value::Map(entries) => {
                for (key, value) in entries {
                    self.write_entry(prefix, key, value, depth)?;
                }
            }
            Value::Sequence(items) => {
                let mut buffer = itoa::Buffer::new();
                for (idx, value) in items.iter().enumerate() {
                    self.write_entry(prefix, buffer.format(idx), value, depth)?;
                }
            }
            Value::String(_) | Value::Null => {}
        }
        Ok(())
    }

    fn write_entry(&mut self, prefix: &str, key: &str, value: &Value, depth: usize) -> Result<()> {
        if self.config.skip_nulls && value.is_null() {
            return Ok(());
        }

        // the key path stays unencoded until it reaches a leaf
        let key_path = if prefix.is_empty() {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(format!("{prefix}[{key}]"))
        };

        if value.is_structured() && depth < self.config.max_depth {
            return self.write_nested(value, &key_path, depth + 1);
        }

        let leaf = match value {
            Value::String(s) => s.as_str(),
            Value::Null => "null",
            Value::Sequence(_) | Value::Map(_) => {
                tracing::trace!(key = %key_path, depth, "max depth reached, writing empty value");
                ""
            }
        };
        self.write_pair(&key_path, leaf)
    }

    fn write_pair(&mut self, key: &str, value: &str) -> Result<()> {
        if self.first_kv {
            self.first_kv = false;
        } else {
            self.writer.write_all(self.config.separator.as_bytes())?;
        }
        for chunk in encode(key) {
            self.writer.write_all(chunk.as_bytes())?;
        }
        self.writer.write_all(b"=")?;
        for chunk in encode(value) {
            self.writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::format_float;

    #[test]
    fn floats_format_like_javascript_numbers() {
        assert_eq!(format_float(1.0f64), "1");
        assert_eq!(format_float(-3.0f64), "-3");
        assert_eq!(format_float(1.5f64), "1.5");
        assert_eq!(format_float(0.1f32), "0.1");
        assert_eq!(format_float(-0.0f64), "0");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn large_floats_stay_positional_below_1e21() {
        assert_eq!(format_float(1e16f64), "10000000000000000");
        assert_eq!(format_float(1e20f64), "100000000000000000000");
        assert_eq!(
            format_float(1.2345678901234568e20f64),
            "123456789012345680000"
        );
        assert_eq!(format_float(-2.5e17f64), "-250000000000000000");
        assert_eq!(format_float(1e21f64), "1e+21");
        assert_eq!(format_float(1.5e300f64), "1.5e+300");
    }

    #[test]
    fn small_floats_switch_to_exponent_below_one_millionth() {
        assert_eq!(format_float(0.00001f64), "0.00001");
        assert_eq!(format_float(0.000001f64), "0.000001");
        assert_eq!(format_float(1e-7f64), "1e-7");
        assert_eq!(format_float(-1.5e-8f64), "-1.5e-8");
        assert_eq!(format_float(123.456f64), "123.456");
    }
}
