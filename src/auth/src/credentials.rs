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

//! Types and functions to work with OnSched credentials.
//!
//! [Credentials] hold the access token for one API audience, and refresh it
//! when it expires. Each `onsched` client owns two independent credentials,
//! one for the consumer API and one for the setup API. They never share
//! tokens, even if created with the same client id and secret.

pub mod client_credentials;

use crate::Result;
use crate::token::Token;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};
use std::sync::Arc;

/// The credentials for one OnSched API audience.
///
/// The OnSched APIs use OAuth2 access tokens, obtained from the OnSched
/// identity service in exchange for a client id and a client secret. Access
/// tokens are short lived, the credentials fetch a new token when the current
/// one expires.
///
/// Tokens are refreshed on demand, only when a request needs a token and the
/// current one is missing or expired. Credentials do not refresh tokens in
/// the background, and do not retry failed requests to the identity service.
///
/// Use [client_credentials::Builder] to create credentials from a client id
/// and secret.
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Makes sure the credentials hold a valid token.
    ///
    /// This is a no-op while the current token is valid. Otherwise it fetches
    /// a new token and installs it. On failure nothing is installed, and the
    /// next call tries again.
    pub async fn ensure_valid(&self) -> Result<()> {
        self.inner.token().await.map(|_| ())
    }

    /// Returns a valid token, fetching a new one if needed.
    pub async fn token(&self) -> Result<Token> {
        self.inner.token().await
    }

    /// Returns the headers to authorize a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token().await?;
        build_bearer_headers(&token)
    }
}

/// Provides the access tokens wrapped by [Credentials].
///
/// Applications can implement this trait to supply tokens obtained by other
/// means, or to use fake tokens in tests.
///
/// # Example
/// ```
/// # use onsched_auth::credentials::{Credentials, CredentialsProvider};
/// # use onsched_auth::token::Token;
/// # use onsched_auth::Result;
/// #[derive(Debug)]
/// struct Fixed;
///
/// #[async_trait::async_trait]
/// impl CredentialsProvider for Fixed {
///     async fn token(&self) -> Result<Token> {
///         Ok(Token {
///             token: "test-only".into(),
///             token_type: "Bearer".into(),
///             expires_at: tokio::time::Instant::now() + std::time::Duration::from_secs(60),
///         })
///     }
/// }
///
/// let credentials = Credentials::from(Fixed);
/// ```
#[async_trait::async_trait]
pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
    /// Returns a valid token, fetching a new one if the implementation caches
    /// tokens and the cached token has expired.
    async fn token(&self) -> Result<Token>;
}

pub(crate) fn build_bearer_headers(token: &Token) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&token.authorization()).map_err(|e| {
        crate::errors::CredentialsError::new(false, e)
    })?;
    value.set_sensitive(true);
    Ok(HeaderMap::from_iter([(AUTHORIZATION, value)]))
}
