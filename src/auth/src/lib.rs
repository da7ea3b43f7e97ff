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

//! OnSched client libraries for Rust - Authentication
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production.
//!
//! The OnSched APIs authenticate each request with an OAuth2 bearer token.
//! Tokens are obtained from the OnSched identity service using the
//! [client credentials] grant.
//!
//! Most applications do not need to use this crate directly, the `onsched`
//! client creates the credentials from the client id and secret. The types in
//! this crate are useful when the application needs to obtain tokens for its
//! own requests.
//!
//! # Example
//! ```
//! # use onsched_auth::credentials::client_credentials::Builder;
//! let credentials = Builder::new("my-client-id", "my-client-secret")
//!     .with_scope("OnSchedAPI")
//!     .build();
//! // No token is fetched until the first request.
//! println!("{credentials:?}");
//! ```
//!
//! [client credentials]: https://datatracker.ietf.org/doc/html/rfc6749#section-4.4

pub mod credentials;
pub mod errors;
pub mod token;
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is [errors::CredentialsError].
pub type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
