// Copyright 2025 OnSched client library authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Builds the query strings used by the OnSched list operations.
//!
//! Parameters are emitted in insertion order. Parameters without a value are
//! not included in the query. Values are encoded using
//! `application/x-www-form-urlencoded` rules.

/// Types that can be used as the value of a query parameter.
pub trait QueryParameter {
    /// Formats the value, returns `None` if the parameter should be omitted.
    fn format(&self) -> Option<String>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn format(&self) -> Option<String> {
        self.as_ref().and_then(QueryParameter::format)
    }
}

impl<T: QueryParameter + ?Sized> QueryParameter for &T {
    fn format(&self) -> Option<String> {
        (*self).format()
    }
}

impl QueryParameter for str {
    fn format(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryParameter for String {
    fn format(&self) -> Option<String> {
        Some(self.clone())
    }
}

macro_rules! numeric_parameter {
    ($($t:ty),*) => {
        $(impl QueryParameter for $t {
            fn format(&self) -> Option<String> {
                Some(self.to_string())
            }
        })*
    };
}

numeric_parameter!(i32, i64, u32, u64);

/// A flag that is sent as `"true"` when set and omitted otherwise.
impl QueryParameter for bool {
    fn format(&self) -> Option<String> {
        self.then(|| "true".to_string())
    }
}

/// Multiple values are sent as a single, comma-separated parameter.
impl<T: QueryParameter> QueryParameter for [T] {
    fn format(&self) -> Option<String> {
        let values = self.iter().filter_map(T::format).collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }
        Some(values.join(","))
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn format(&self) -> Option<String> {
        self.as_slice().format()
    }
}

/// An ordered collection of query parameters.
///
/// # Example
/// ```
/// # use onsched_gax::query_parameter::QueryParameters;
/// let query = QueryParameters::new()
///     .add("locationId", Some("loc 1"))
///     .add("serviceGroup", None::<String>)
///     .add("defaultService", true);
/// assert_eq!(query.append_to("https://example.com/services?"),
///     "https://example.com/services?locationId=loc+1&defaultService=true");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, skipping it if `value` formats to `None`.
    pub fn add<V: QueryParameter>(mut self, name: &str, value: V) -> Self {
        if let Some(v) = value.format() {
            self.pairs.push((name.to_string(), v));
        }
        self
    }

    /// Returns `true` if no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the encoded query, without a leading `?`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends the encoded query to `base`.
    ///
    /// The base URL must already end in `?`, or in an existing query.
    pub fn append_to(&self, base: &str) -> String {
        format!("{base}{}", self.encode())
    }
}
