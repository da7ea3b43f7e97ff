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

//! OnSched client libraries for Rust.
//!
//! This crate contains a client for the [OnSched] consumer and setup APIs.
//! The client authenticates with the OAuth2 client credentials grant, and
//! returns the decoded JSON responses as [serde_json::Value]. List
//! operations fetch and merge every page of results.
//!
//! # Example
//! ```
//! # use onsched::client::Client;
//! # use onsched::model::AppointmentsQuery;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = Client::builder("my-client-id", "my-client-secret")
//!     .build()
//!     .await?;
//! let appointments = client
//!     .appointments(AppointmentsQuery::new().set_status("BK"))
//!     .await?;
//! println!("{} booked appointments", appointments["count"]);
//! # Ok(()) }
//! ```
//!
//! [OnSched]: https://onsched.com

pub mod client;
pub mod environment;
pub mod model;
pub mod temporal;

mod consumer;
mod setup;

pub use gax::error::Error;

/// The result type for the OnSched operations.
pub type Result<T> = std::result::Result<T, Error>;
