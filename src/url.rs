//! A chainable URL builder.

use std::fmt;

use serde::ser;

use crate::config::Config;
use crate::error::Result;
use crate::route::RouteParams;

/// Builds a URL from a template by appending a querystring and filling in
/// `{name}` route parameters.
///
/// Each operation mutates the held string and returns the builder again, so
/// calls can be chained in any order. Operations act on the string as it is
/// held at that moment: a whole-mode route substitution applied after
/// [`set_query_params`](Self::set_query_params) also sees the querystring.
///
/// The builder never validates the URL; whatever is passed in and whatever
/// substitution produces is kept verbatim.
///
/// ```
/// use dynamic_url::DynamicUrl;
/// use std::collections::BTreeMap;
///
/// let mut route = BTreeMap::new();
/// route.insert("citizen", "robespierre");
/// route.insert("hero", "ironman");
///
/// let mut url = DynamicUrl::new("https://example.com/{citizen}/{hero}");
/// url.set_route_params(&route)?
///     .set_query_params(&[("page", 2)].into_iter().collect::<BTreeMap<_, _>>())?;
///
/// assert_eq!(url.resolve(), "https://example.com/robespierre/ironman?page=2");
/// # Ok::<(), dynamic_url::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DynamicUrl {
    url: String,
}

impl DynamicUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Serializes `query` with the default [`Config`] and appends it as
    /// `?querystring`.
    ///
    /// If the query serializes to an empty string (e.g. every value is
    /// `None`), the URL is left unchanged and no `?` is added.
    pub fn set_query_params<T: ?Sized + ser::Serialize>(&mut self, query: &T) -> Result<&mut Self> {
        self.set_query_params_with(query, &Config::default())
    }

    /// Serializes `query` with `config` and appends it as `?querystring`.
    pub fn set_query_params_with<T: ?Sized + ser::Serialize>(
        &mut self,
        query: &T,
        config: &Config,
    ) -> Result<&mut Self> {
        let querystring = config.serialize_string(query)?;
        if querystring.is_empty() {
            tracing::debug!(url = %self.url, "query serialized to nothing, url unchanged");
            return Ok(self);
        }

        tracing::trace!(url = %self.url, query = %querystring, "appending querystring");
        self.url.reserve(querystring.len() + 1);
        self.url.push('?');
        self.url.push_str(&querystring);
        Ok(self)
    }

    /// Substitutes route parameters into the held URL.
    ///
    /// A string replaces every placeholder span in one pass; a map or
    /// struct fills placeholders by name and leaves unknown ones untouched.
    /// See [`RouteParams::from_serialize`] for the full dispatch rules.
    pub fn set_route_params<T: ?Sized + ser::Serialize>(&mut self, params: &T) -> Result<&mut Self> {
        let params = RouteParams::from_serialize(params)?;
        Ok(self.apply_route_params(&params))
    }

    /// Substitutes already-built [`RouteParams`] into the held URL.
    pub fn apply_route_params(&mut self, params: &RouteParams) -> &mut Self {
        let substituted = params.apply(&self.url);
        tracing::trace!(from = %self.url, to = %substituted, "substituted route parameters");
        self.url = substituted;
        self
    }

    /// Returns the URL as currently built.
    pub fn resolve(&self) -> &str {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for DynamicUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for DynamicUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl From<String> for DynamicUrl {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

impl From<&str> for DynamicUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<DynamicUrl> for String {
    fn from(url: DynamicUrl) -> Self {
        url.url
    }
}
