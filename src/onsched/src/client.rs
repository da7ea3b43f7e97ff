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

use crate::environment::Environment;
use auth::credentials::Credentials;
use auth::credentials::client_credentials::{self, ClientSecret};
use gax::client_builder::Error as BuilderError;
use gaxi::http::ReqwestClient;
use gaxi::options::ClientConfig;
use std::sync::Arc;
use std::time::Duration;

pub(crate) const CLIENT_ID_VAR: &str = "ONSCHED_CLIENT_ID";
pub(crate) const CLIENT_SECRET_VAR: &str = "ONSCHED_CLIENT_SECRET";
pub(crate) const SCOPE_VAR: &str = "ONSCHED_SCOPE";
pub(crate) const ENVIRONMENT_VAR: &str = "ONSCHED_ENVIRONMENT";

/// Implements a client for the OnSched consumer and setup APIs.
///
/// # Example
/// ```
/// # use onsched::client::Client;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = Client::builder("my-client-id", "my-client-secret")
///     .build()
///     .await?;
/// let locations = client.locations().await?;
/// println!("{locations}");
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The consumer API manages locations, services, customers, availability,
/// and appointments. The setup API manages resources, services, and service
/// allocations. List operations return every page of results, merged into a
/// single response.
///
/// # Authentication
///
/// The client uses the OAuth2 client credentials grant. Each API uses its own
/// access token, fetched on first use and refreshed once it expires. Building
/// the client performs no network I/O.
///
/// # Pooling and Cloning
///
/// `Client` holds a connection pool internally, it is advised to create one
/// and then reuse it. You do not need to wrap `Client` in an [Rc] or [Arc] to
/// reuse it, because it already uses an `Arc` internally.
///
/// [Rc]: std::rc::Rc
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
pub(crate) struct ClientInner {
    pub consumer: ReqwestClient,
    pub setup: ReqwestClient,
    pub consumer_endpoint: String,
    pub setup_endpoint: String,
}

impl Client {
    /// Returns a builder for [Client].
    ///
    /// # Example
    /// ```
    /// # use onsched::client::Client;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = Client::builder("my-client-id", "my-client-secret")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn builder<I: Into<String>, S: Into<String>>(client_id: I, client_secret: S) -> ClientBuilder {
        ClientBuilder::new(ClientSecret::new(client_id, client_secret))
    }

    fn new(builder: ClientBuilder) -> gax::client_builder::Result<Self> {
        let ClientBuilder {
            config,
            environment,
        } = builder;
        let secret = config
            .cred
            .clone()
            .ok_or_else(|| BuilderError::cred("missing client credentials"))?;
        if secret.client_id().is_empty() {
            return Err(BuilderError::cred("the client id is empty"));
        }
        let consumer_endpoint = endpoint(&config.consumer_endpoint, environment.consumer_endpoint());
        let setup_endpoint = endpoint(&config.setup_endpoint, environment.setup_endpoint());
        tracing::debug!(%environment, %consumer_endpoint, %setup_endpoint, "creating client");

        let http = ReqwestClient::make_http_client(&config)?;
        let consumer = ReqwestClient::new(http.clone(), credentials(&config, &secret, environment, &http), &config);
        let setup = ReqwestClient::new(http.clone(), credentials(&config, &secret, environment, &http), &config);
        Ok(Self {
            inner: Arc::new(ClientInner {
                consumer,
                setup,
                consumer_endpoint,
                setup_endpoint,
            }),
        })
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }
}

fn endpoint(configured: &Option<String>, default: String) -> String {
    configured
        .as_deref()
        .map(|e| e.trim_end_matches('/').to_string())
        .unwrap_or(default)
}

// Each API gets its own credentials, and therefore its own token.
fn credentials(
    config: &ClientConfig,
    secret: &ClientSecret,
    environment: Environment,
    http: &reqwest::Client,
) -> Credentials {
    let token_endpoint = config
        .token_endpoint
        .clone()
        .unwrap_or_else(|| environment.token_endpoint().to_string());
    let builder = client_credentials::Builder::from_secret(secret.clone())
        .with_token_endpoint(token_endpoint)
        .with_http_client(http.clone());
    let builder = match &config.scope {
        Some(scope) => builder.with_scope(scope),
        None => builder,
    };
    builder.build()
}

/// A builder for [Client].
///
/// ```
/// # use onsched::client::Client;
/// # use onsched::environment::Environment;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = Client::builder("my-client-id", "my-client-secret")
///     .with_environment(Environment::Live)
///     .with_timeout(std::time::Duration::from_secs(30))
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    config: ClientConfig,
    environment: Environment,
}

impl ClientBuilder {
    fn new(secret: ClientSecret) -> Self {
        Self {
            config: ClientConfig {
                cred: Some(secret),
                ..Default::default()
            },
            environment: Environment::default(),
        }
    }

    /// Creates a builder configured from the environment.
    ///
    /// The client id and secret are read from `ONSCHED_CLIENT_ID` and
    /// `ONSCHED_CLIENT_SECRET`, which must be set. The scope is read from
    /// `ONSCHED_SCOPE` and the environment (`sandbox` or `live`) from
    /// `ONSCHED_ENVIRONMENT`, if they are set.
    ///
    /// # Example
    /// ```
    /// # use onsched::client::ClientBuilder;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = ClientBuilder::from_env()?.build().await?;
    /// # Ok(()) }
    /// ```
    pub fn from_env() -> gax::client_builder::Result<Self> {
        let client_id = required_var(CLIENT_ID_VAR)?;
        let client_secret = required_var(CLIENT_SECRET_VAR)?;
        let mut builder = Self::new(ClientSecret::new(client_id, client_secret));
        if let Ok(scope) = std::env::var(SCOPE_VAR) {
            builder = builder.with_scope(scope);
        }
        if let Ok(environment) = std::env::var(ENVIRONMENT_VAR) {
            let environment = environment
                .parse::<Environment>()
                .map_err(BuilderError::config)?;
            builder = builder.with_environment(environment);
        }
        Ok(builder)
    }

    /// Creates a new client.
    ///
    /// No tokens are fetched until the first request.
    pub async fn build(self) -> gax::client_builder::Result<Client> {
        Client::new(self)
    }

    /// Sets the scope requested for the access tokens. The default is
    /// `OnSchedAPI`.
    pub fn with_scope<V: Into<String>>(mut self, v: V) -> Self {
        self.config.scope = Some(v.into());
        self
    }

    /// Selects the sandbox or live environment. The default is
    /// [Sandbox][Environment::Sandbox].
    ///
    /// Endpoints configured with [with_token_endpoint][Self::with_token_endpoint],
    /// [with_consumer_endpoint][Self::with_consumer_endpoint], or
    /// [with_setup_endpoint][Self::with_setup_endpoint] take precedence over
    /// the environment endpoints.
    pub fn with_environment(mut self, v: Environment) -> Self {
        self.environment = v;
        self
    }

    /// Overrides the OAuth2 token endpoint.
    pub fn with_token_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.token_endpoint = Some(v.into());
        self
    }

    /// Overrides the base URL of the consumer API, for example
    /// `https://sandbox-api.onsched.com/consumer/v1`.
    pub fn with_consumer_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.consumer_endpoint = Some(v.into());
        self
    }

    /// Overrides the base URL of the setup API, for example
    /// `https://sandbox-api.onsched.com/setup/v1`.
    pub fn with_setup_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.setup_endpoint = Some(v.into());
        self
    }

    /// Sets the timeout for each HTTP request, including token requests.
    pub fn with_timeout(mut self, v: Duration) -> Self {
        self.config.timeout = Some(v);
        self
    }

    /// Sets the number of items requested per page in list operations.
    ///
    /// The default is 100.
    pub fn with_page_size(mut self, v: u32) -> Self {
        self.config.page_size = Some(v);
        self
    }

    /// Limits the number of pages fetched by list operations.
    ///
    /// A list operation that needs more pages fails with an
    /// [exhausted][gax::error::Error::is_exhausted] error. By default the
    /// number of pages is not limited.
    pub fn with_max_pages(mut self, v: u32) -> Self {
        self.config.max_pages = Some(v);
        self
    }

    /// Enables tracing spans for each HTTP request.
    ///
    /// Tracing can also be enabled by setting `ONSCHED_RUST_LOGGING=true`.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

#[derive(Debug, thiserror::Error)]
#[error("the environment variable `{0}` is not set")]
struct MissingVar(&'static str);

fn required_var(name: &'static str) -> gax::client_builder::Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(BuilderError::cred(MissingVar(name))),
    }
}
