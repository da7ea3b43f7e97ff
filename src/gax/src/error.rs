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

//! Errors returned by the OnSched client libraries.
//!
//! The libraries distinguish between errors detected before a request is
//! sent (e.g. an invalid date argument), errors obtaining an access token,
//! errors sending the request or receiving the response, and errors reported
//! by the service as a non-2xx HTTP status.
//!
//! # Examples
//!
//! ```
//! use onsched_gax::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(code) = e.http_status_code() {
//!         println!("the service reported HTTP {code}")
//!     }
//! }
//! ```

mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::CredentialsError;
