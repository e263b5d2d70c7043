//! Build URLs from templates.
//!
//! `dynamic_url` does two string transformations and offers a small builder
//! that chains them:
//!
//! - **querystrings**: any `serde::Serialize` value is flattened into
//!   `key=value` pairs, using bracket notation for nested maps and
//!   sequences (`marvel[hero]=ironman`, `heroes[0]=thor`). Keys and values
//!   are percent-encoded like JavaScript's `encodeURIComponent`, so the
//!   brackets themselves appear as `%5B` / `%5D`.
//! - **route parameters**: `{name}` placeholders in a template are replaced
//!   either by name from a map or struct, or, given a single string, as one
//!   whole span.
//!
//! Nothing is parsed or validated: the output is whatever the template and
//! the substitutions produce.
//!
//! ## Usage
//!
//! ```
//! use serde::Serialize;
//! use dynamic_url::DynamicUrl;
//!
//! #[derive(Serialize)]
//! struct Route {
//!     citizen: &'static str,
//!     #[serde(rename = "heroesCount")]
//!     heroes_count: u32,
//! }
//!
//! #[derive(Serialize)]
//! struct Query {
//!     heroes: Vec<&'static str>,
//!     villain: Option<&'static str>,
//! }
//!
//! let mut url = DynamicUrl::new("https://example.com/{citizen}/{heroesCount}");
//! url.set_route_params(&Route { citizen: "robespierre", heroes_count: 12 })?
//!     .set_query_params(&Query { heroes: vec!["ironman", "thor"], villain: None })?;
//!
//! assert_eq!(
//!     url.resolve(),
//!     "https://example.com/robespierre/12?heroes%5B0%5D=ironman&heroes%5B1%5D=thor"
//! );
//! # Ok::<(), dynamic_url::Error>(())
//! ```
//!
//! ## Serialization rules
//!
//! See [`Config`] for the options (`prefix`, `separator`, `skip_nulls`,
//! `max_depth`). Values are lowered to a [`Value`] tree first:
//!
//! - `None` and `()` are null, and are skipped unless `skip_nulls` is off,
//!   in which case they are written as `null`.
//! - numbers and booleans use their canonical text (`12`, `1.5`, `true`).
//! - structs and maps keep their field / insertion order; sequences are
//!   keyed by index.
//! - unit enum variants are their name; other variants nest under it.
//!
//! ## Known limitations
//!
//! There is no cycle detection: a `Serialize` implementation that recurses
//! into itself will recurse forever, exactly as it would with any other
//! serde format.

mod config;
mod error;
mod route;
mod ser;
mod url;
mod value;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use route::{RouteParams, substitute, substitute_named, substitute_whole};
#[doc(inline)]
pub use ser::{to_string, to_value, to_writer};
#[doc(inline)]
pub use url::DynamicUrl;
#[doc(inline)]
pub use value::Value;
