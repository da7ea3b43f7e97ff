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

//! [OAuth2 client credentials] for the OnSched APIs.
//!
//! The OnSched identity service issues access tokens in exchange for a client
//! id and a client secret. The client id and secret are sent using HTTP Basic
//! authentication, and the request body is a form with the
//! `client_credentials` grant type and the requested scope.
//!
//! Tokens are cached. A new token is requested only when there is no cached
//! token, or when the cached token has expired.
//!
//! # Example
//! ```
//! # use onsched_auth::credentials::client_credentials::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::new("my-client-id", "my-client-secret")
//!     .with_scope("OnSchedAPI")
//!     .with_token_endpoint("https://sandbox-identity.onsched.com/connect/token")
//!     .build();
//! let headers = credentials.headers().await;
//! # });
//! ```
//!
//! [OAuth2 client credentials]: https://datatracker.ietf.org/doc/html/rfc6749#section-4.4

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider};
use crate::errors::{self, CredentialsError, is_transient};
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use std::time::Duration;
use tokio::time::Instant;

/// The default scope for OnSched access tokens.
pub const DEFAULT_SCOPE: &str = "OnSchedAPI";

/// The token endpoint of the OnSched sandbox environment.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://sandbox-identity.onsched.com/connect/token";

const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// The client id and secret used to obtain access tokens.
#[derive(Clone, PartialEq)]
pub struct ClientSecret {
    client_id: String,
    client_secret: String,
}

impl ClientSecret {
    pub fn new<I: Into<String>, S: Into<String>>(client_id: I, client_secret: S) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl std::fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSecret")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .finish()
    }
}

/// A builder for client credentials.
///
/// Building the credentials performs no network I/O. The first token is
/// fetched when a request needs it.
#[derive(Clone, Debug)]
pub struct Builder {
    secret: ClientSecret,
    scope: String,
    token_endpoint: String,
    http_client: Option<reqwest::Client>,
}

impl Builder {
    /// Creates a new builder using the client id and secret.
    pub fn new<I: Into<String>, S: Into<String>>(client_id: I, client_secret: S) -> Self {
        Self::from_secret(ClientSecret::new(client_id, client_secret))
    }

    /// Creates a new builder from an existing [ClientSecret].
    pub fn from_secret(secret: ClientSecret) -> Self {
        Self {
            secret,
            scope: DEFAULT_SCOPE.to_string(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            http_client: None,
        }
    }

    /// Sets the scope requested for the access tokens.
    ///
    /// The default is `OnSchedAPI`.
    pub fn with_scope<V: Into<String>>(mut self, v: V) -> Self {
        self.scope = v.into();
        self
    }

    /// Sets the endpoint for the token requests.
    ///
    /// The default is the token endpoint of the sandbox environment.
    pub fn with_token_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.token_endpoint = v.into();
        self
    }

    /// Sets the HTTP client used for the token requests.
    ///
    /// Use this to share a connection pool, or a timeout configuration, with
    /// other clients.
    pub fn with_http_client(mut self, v: reqwest::Client) -> Self {
        self.http_client = Some(v);
        self
    }

    /// Returns [Credentials] that fetch tokens using the client credentials
    /// grant.
    pub fn build(self) -> Credentials {
        let token_provider = ClientCredentialsTokenProvider {
            secret: self.secret,
            scope: self.scope,
            endpoint: self.token_endpoint,
            client: self.http_client.unwrap_or_default(),
        };
        Credentials::from(ClientCredentials {
            token_provider: TokenCache::new(token_provider),
        })
    }
}

#[derive(Debug)]
struct ClientCredentials<T>
where
    T: TokenProvider,
{
    token_provider: TokenCache<T>,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for ClientCredentials<T>
where
    T: TokenProvider + 'static,
{
    async fn token(&self) -> Result<Token> {
        self.token_provider.token().await
    }
}

#[derive(Debug)]
struct ClientCredentialsTokenProvider {
    secret: ClientSecret,
    scope: String,
    endpoint: String,
    client: reqwest::Client,
}

#[async_trait::async_trait]
impl TokenProvider for ClientCredentialsTokenProvider {
    async fn token(&self) -> Result<Token> {
        let form = [
            ("grant_type", "client_credentials"),
            ("scope", self.scope.as_str()),
        ];
        let builder = self
            .client
            .post(self.endpoint.as_str())
            .basic_auth(self.secret.client_id(), Some(self.secret.client_secret()))
            .form(&form);
        let resp = builder.send().await.map_err(errors::transient)?;

        // Process the response
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| CredentialsError::new(is_transient(status), e))?;
            return Err(CredentialsError::from_msg(
                is_transient(status),
                format!("failed to fetch token, status={status}, body=<{body}>"),
            ));
        }
        let response = resp.json::<TokenResponse>().await.map_err(|e| {
            let transient = !e.is_decode();
            CredentialsError::new(transient, e)
        })?;
        response.into_token()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    // Some deployments return the absolute expiration, in seconds since the
    // epoch, instead of the lifetime.
    #[serde(default)]
    expires_at: Option<i64>,
}

impl TokenResponse {
    fn into_token(self) -> Result<Token> {
        let lifetime = match (self.expires_in, self.expires_at) {
            (Some(seconds), _) => Duration::from_secs(seconds),
            (None, Some(epoch)) => {
                let remaining = epoch.saturating_sub(chrono::Utc::now().timestamp());
                Duration::from_secs(u64::try_from(remaining).unwrap_or(0))
            }
            (None, None) => {
                return Err(errors::permanent_from_msg(
                    "the token response has neither `expires_in` nor `expires_at`",
                ));
            }
        };
        let expires_at = Instant::now()
            .checked_add(lifetime)
            .ok_or_else(|| errors::permanent_from_msg("the token lifetime is out of range"))?;
        Ok(Token {
            token: self.access_token,
            token_type: self
                .token_type
                .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string()),
            expires_at,
        })
    }
}
