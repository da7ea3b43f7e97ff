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

//! OnSched API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the OnSched client libraries for Rust: the error type
//! returned by all operations, the offset-based paginator, helpers to build
//! query strings, and the generic client builder.
//!
//! Most applications only need the [error::Error] type. The remaining modules
//! are used by `onsched` and `onsched-gax-internal`.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping API calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

/// Converts offset/limit list endpoints into a stream of pages, and merges
/// those pages into a single response.
pub mod paginator;

/// Helpers to serialize optional query parameters in a stable order.
pub mod query_parameter;

/// Types to configure and build clients.
pub mod client_builder;
