use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode};

/// The set escaped by JavaScript's `encodeURIComponent`.
///
/// Every code point is percent-encoded except the ASCII alphanumerics and
/// the unreserved marks `-`, `_`, `.`, `!`, `~`, `*`, `'`, `(` and `)`.
/// Notably this escapes `[`, `]`, `=`, `&`, `/` and encodes a space as `%20`,
/// so a nested key `a[b]` is written as `a%5Bb%5D`.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a key path or value as a URI component.
///
/// Returns an iterator of string slices to avoid allocating when nothing
/// needs escaping.
pub fn encode(input: &str) -> PercentEncode<'_> {
    percent_encoding::utf8_percent_encode(input, URI_COMPONENT_SET)
}
