//! Route queries and their encoding into a directions query string.
//!
//! Values are written into the URL verbatim. Nothing is percent-encoded,
//! so a value containing `&` or `|` will corrupt the query string; callers
//! that care must escape before building the query.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// Google Directions JSON endpoint.
pub const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Separator used when a single option carries several values.
const LIST_SEPARATOR: &str = "|";

/// Value of a routing option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A single value, e.g. `mode=walking`.
    Scalar(String),
    /// Several values, e.g. `avoid=ferries|tolls`.
    List(Vec<String>),
}

impl OptionValue {
    /// The value as it appears after `name=` in the query string.
    pub fn encode(&self) -> String {
        match self {
            OptionValue::Scalar(value) => value.clone(),
            OptionValue::List(values) => values.join(LIST_SEPARATOR),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Scalar(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Scalar(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::List(values)
    }
}

impl<const N: usize> From<[&str; N]> for OptionValue {
    fn from(values: [&str; N]) -> Self {
        OptionValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Routing options in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    entries: Vec<(String, OptionValue)>,
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an option. Re-inserting a name replaces its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for RouteOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = RouteOptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of routing options with string or string-list values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut options = RouteOptions::new();
                while let Some((name, value)) = map.next_entry::<String, OptionValue>()? {
                    options.insert(name, value);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

/// A single directions request: where from, where to, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub options: RouteOptions,
}

impl RouteQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            options: RouteOptions::new(),
        }
    }

    /// Attach routing options.
    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a single option.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name, value);
        self
    }

    /// All query parameters in emission order: origin, destination, then options.
    fn params(&self) -> impl Iterator<Item = (&str, String)> {
        [
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
        ]
        .into_iter()
        .chain(self.options.iter().map(|(name, value)| (name, value.encode())))
    }
}

/// Encode a query as `?name=value&...&key=<api_key>`.
///
/// The API key is always the final parameter.
pub fn encode_query(query: &RouteQuery, api_key: &str) -> String {
    let mut encoded = String::new();
    for (name, value) in query.params() {
        encoded.push(if encoded.is_empty() { '?' } else { '&' });
        encoded.push_str(name);
        encoded.push('=');
        encoded.push_str(&value);
    }
    encoded.push_str("&key=");
    encoded.push_str(api_key);
    encoded
}

/// Full request URL for `base_url`.
pub fn build_url(base_url: &str, query: &RouteQuery, api_key: &str) -> String {
    format!("{base_url}{}", encode_query(query, api_key))
}
