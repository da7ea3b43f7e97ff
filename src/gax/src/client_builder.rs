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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoints or the page size used in
//! list operations. The OnSched client library uses a builder type to provide
//! such functionality, the types in this module are shared by the builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.

use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```
/// use onsched_gax::client_builder::Error;
/// let e = Error::config("unknown environment `staging`");
/// assert!(e.is_config());
/// assert!(!e.is_transport());
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not find the client id or secret.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, a configuration value could not be parsed.
    pub fn is_config(&self) -> bool {
        matches!(&self.0, ErrorKind::Config(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn config<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Config(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not find the client credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid client configuration")]
    Config(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[doc(hidden)]
pub mod internal {
    use super::*;

    /// The configuration shared by all the client builders.
    ///
    /// Endpoints left as `None` are resolved by each client, typically from
    /// the selected environment.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub cred: Option<Cr>,
        pub scope: Option<String>,
        pub token_endpoint: Option<String>,
        pub consumer_endpoint: Option<String>,
        pub setup_endpoint: Option<String>,
        pub timeout: Option<Duration>,
        pub page_size: Option<u32>,
        pub max_pages: Option<u32>,
        pub tracing: bool,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                cred: None,
                scope: None,
                token_endpoint: None,
                consumer_endpoint: None,
                setup_endpoint: None,
                timeout: None,
                page_size: None,
                max_pages: None,
                tracing: false,
            }
        }
    }

    impl<Cr> ClientConfig<Cr> {
        /// The number of items requested per page in list operations.
        pub fn page_size(&self) -> u32 {
            self.page_size
                .filter(|v| *v > 0)
                .unwrap_or(crate::paginator::DEFAULT_PAGE_SIZE)
        }
    }
}
