//! Substitution of `{name}` placeholders in URL templates.

use serde::ser;

use crate::Value;
use crate::error::{Error, Result};
use crate::ser::to_value;

/// Route parameters, dispatched on the shape of the input.
///
/// A bare string replaces every brace-delimited span of the template in one
/// pass ([`RouteParams::Whole`]), while a map substitutes placeholders by
/// name ([`RouteParams::Named`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteParams {
    /// A verbatim replacement for each whole placeholder span.
    Whole(String),
    /// Per-name replacements, in insertion order.
    Named(Vec<(String, String)>),
    /// Nothing to substitute; the template is left untouched.
    Empty,
}

impl RouteParams {
    /// Builds route parameters from any serializable value.
    ///
    /// - strings (and other primitives) select whole mode
    /// - maps and structs select named mode; `None` values are treated as
    ///   absent so their placeholders are preserved, rather than being
    ///   written as the text `null` the way a query value is
    /// - sequences select named mode keyed by index (`{0}`, `{1}`, ...)
    /// - `None` / `()` yield [`RouteParams::Empty`]
    ///
    /// Nested maps or sequences as named values are rejected.
    pub fn from_serialize<T: ?Sized + ser::Serialize>(input: &T) -> Result<Self> {
        match to_value(input)? {
            Value::Null => Ok(RouteParams::Empty),
            Value::String(s) => Ok(RouteParams::Whole(s)),
            Value::Map(entries) => named(entries),
            Value::Sequence(items) => named(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, value)| (idx.to_string(), value))
                    .collect(),
            ),
        }
    }

    /// Applies these parameters to `template`.
    pub fn apply(&self, template: &str) -> String {
        match self {
            RouteParams::Whole(replacement) => substitute_whole(template, replacement),
            RouteParams::Named(params) => substitute_named(template, |name| {
                params
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| value.as_str())
            }),
            RouteParams::Empty => template.to_owned(),
        }
    }
}

fn named(entries: Vec<(String, Value)>) -> Result<RouteParams> {
    let mut params = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        match value {
            Value::String(s) => params.push((key, s)),
            Value::Null => {}
            Value::Sequence(_) | Value::Map(_) => {
                return Err(Error::Unsupported("nested route parameter value"));
            }
        }
    }
    Ok(RouteParams::Named(params))
}

impl From<&str> for RouteParams {
    fn from(s: &str) -> Self {
        RouteParams::Whole(s.to_owned())
    }
}

impl From<String> for RouteParams {
    fn from(s: String) -> Self {
        RouteParams::Whole(s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RouteParams::Named(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Substitutes route parameters into `template`.
///
/// ```
/// use std::collections::BTreeMap;
///
/// // named: unmatched placeholders are preserved
/// let mut params = BTreeMap::new();
/// params.insert("a", "x");
/// assert_eq!(dynamic_url::substitute("/{a}/{b}", &params).unwrap(), "/x/{b}");
///
/// // whole: the full brace-delimited span is replaced
/// assert_eq!(dynamic_url::substitute("/{a}/{b}", "x/y").unwrap(), "/x/y");
/// ```
pub fn substitute<T: ?Sized + ser::Serialize>(template: &str, params: &T) -> Result<String> {
    Ok(RouteParams::from_serialize(params)?.apply(template))
}

/// Replaces each placeholder span of `template` with `replacement`.
///
/// A span is any run of spaces, a `{`, then everything up to the *last* `}`
/// that precedes the next `)` (or the end of the template), then any run of
/// spaces. Consecutive placeholders like `{a}/{b}` therefore form a single
/// span. The replacement is inserted literally.
pub fn substitute_whole(template: &str, replacement: &str) -> String {
    let bytes = template.as_bytes();
    let mut output = String::with_capacity(template.len() + replacement.len());
    let mut last = 0;
    let mut cursor = 0;

    while let Some(offset) = bytes[cursor..].iter().position(|&b| b == b'{') {
        let open = cursor + offset;
        let limit = bytes[open + 1..]
            .iter()
            .position(|&b| b == b')')
            .map_or(bytes.len(), |p| open + 1 + p);
        let Some(close) = bytes[open + 1..limit]
            .iter()
            .rposition(|&b| b == b'}')
            .map(|p| open + 1 + p)
        else {
            cursor = open + 1;
            continue;
        };

        let mut start = open;
        while start > last && bytes[start - 1] == b' ' {
            start -= 1;
        }
        let mut end = close + 1;
        while end < bytes.len() && bytes[end] == b' ' {
            end += 1;
        }

        output.push_str(&template[last..start]);
        output.push_str(replacement);
        last = end;
        cursor = end;
    }

    output.push_str(&template[last..]);
    output
}

/// Replaces each `{name}` placeholder for which `lookup` returns a value.
///
/// A placeholder is a `{`, one or more characters other than `}`, and a
/// closing `}`, found by a non-overlapping left-to-right scan. Names without
/// a value are left in place, braces included, so substitution can happen
/// in stages.
pub fn substitute_named<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let bytes = template.as_bytes();
    let mut output = String::with_capacity(template.len());
    let mut last = 0;
    let mut cursor = 0;

    while let Some(offset) = bytes[cursor..].iter().position(|&b| b == b'{') {
        let open = cursor + offset;
        let Some(close) = bytes[open + 1..]
            .iter()
            .position(|&b| b == b'}')
            .map(|p| open + 1 + p)
        else {
            break;
        };
        if close == open + 1 {
            // `{}` has no name
            cursor = open + 1;
            continue;
        }

        if let Some(value) = lookup(&template[open + 1..close]) {
            output.push_str(&template[last..open]);
            output.push_str(value);
            last = close + 1;
        }
        cursor = close + 1;
    }

    output.push_str(&template[last..]);
    output
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whole_replaces_adjacent_placeholders_as_one_span() {
        assert_eq!(
            substitute_whole("https://example.com/{citizen}/{hero}", "robespierre/ironman"),
            "https://example.com/robespierre/ironman"
        );
    }

    #[test]
    fn whole_consumes_surrounding_spaces() {
        assert_eq!(substitute_whole("a  {x}  b", "-"), "a-b");
    }

    #[test]
    fn whole_stops_at_closing_paren() {
        // the span cannot cross a `)`, so each side is matched separately
        assert_eq!(substitute_whole("{a}(x){b}", "v"), "v(x)v");
        // no `}` before the `)`: the first brace never matches
        assert_eq!(substitute_whole("{a)}", "v"), "{a)}");
    }

    #[test]
    fn whole_without_placeholders_is_unchanged() {
        assert_eq!(substitute_whole("https://example.com/", "v"), "https://example.com/");
        assert_eq!(substitute_whole("unbalanced { brace", "v"), "unbalanced { brace");
    }

    #[test]
    fn whole_inserts_dollar_signs_literally() {
        assert_eq!(substitute_whole("/{a}", "$&"), "/$&");
    }

    #[test]
    fn named_preserves_unknown_placeholders() {
        let lookup = |name: &str| (name == "a").then_some("x");
        assert_eq!(substitute_named("/{a}/{b}", lookup), "/x/{b}");
    }

    #[test]
    fn named_skips_empty_braces_and_unbalanced_input() {
        let lookup = |_: &str| Some("x");
        assert_eq!(substitute_named("/{}/{a}", lookup), "/{}/x");
        assert_eq!(substitute_named("/{a", lookup), "/{a");
    }

    #[test]
    fn named_takes_the_name_up_to_the_first_closing_brace() {
        let lookup = |name: &str| (name == "{a").then_some("x");
        assert_eq!(substitute_named("/{{a}}", lookup), "/x}");
    }

    #[test]
    fn params_dispatch_on_shape() {
        assert_eq!(
            RouteParams::from_serialize("a/b").unwrap(),
            RouteParams::Whole("a/b".into())
        );
        assert_eq!(RouteParams::from_serialize(&()).unwrap(), RouteParams::Empty);
        assert_eq!(
            RouteParams::from_serialize(&["x", "y"]).unwrap(),
            RouteParams::Named(vec![("0".into(), "x".into()), ("1".into(), "y".into())])
        );
    }

    #[test]
    fn nested_named_values_are_rejected() {
        let params = crate::Value::map().insert("a", vec!["x"]);
        let err = RouteParams::from_serialize(&params).unwrap_err();
        assert_eq!(err.to_string(), "unsupported nested route parameter value");
    }
}
