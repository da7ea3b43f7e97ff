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

use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::paginator::{Paginator, accumulate};
use serde_json::Value;
use tracing::Instrument;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    page_size: u32,
    max_pages: Option<u32>,
    tracing: bool,
}

impl ReqwestClient {
    pub fn new(
        inner: reqwest::Client,
        cred: Credentials,
        config: &crate::options::ClientConfig,
    ) -> Self {
        Self {
            inner,
            cred,
            page_size: config.page_size(),
            max_pages: config.max_pages,
            tracing: crate::options::tracing_enabled(config),
        }
    }

    /// Creates the HTTP client shared by the token and API requests.
    pub fn make_http_client(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<reqwest::Client> {
        let builder = config
            .timeout
            .into_iter()
            .fold(reqwest::Client::builder(), |b, t| b.timeout(t));
        builder.build().map_err(BuilderError::transport)
    }

    /// Sends one request authorized with the bearer token.
    ///
    /// The token is refreshed first if it is missing or expired. A `401` from
    /// the API is returned as an error, the request is not retried with a
    /// new token.
    pub async fn authorized_request<B>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: serde::ser::Serialize + ?Sized,
    {
        if !self.tracing {
            return self.request_attempt(method, url, body).await;
        }
        let span = tracing::info_span!(
            "http_request",
            http.request.method = %method,
            url = %without_query(url)
        );
        self.request_attempt(method, url, body)
            .instrument(span)
            .await
    }

    /// Fetches all the pages of a list operation and merges them.
    ///
    /// Each page is requested by appending `&limit={page_size}&offset={offset}`
    /// to `base_url`, which must already end in `?` or in a query.
    pub async fn fetch_all(&self, base_url: &str) -> Result<Value> {
        let client = self.clone();
        let base_url = base_url.to_string();
        let page_size = self.page_size;
        let execute = move |offset: u64| {
            let client = client.clone();
            let url = format!("{base_url}&limit={page_size}&offset={offset}");
            async move {
                client
                    .authorized_request::<Value>(reqwest::Method::GET, &url, None)
                    .await
            }
        };
        accumulate(Paginator::new(page_size, execute), self.max_pages).await
    }

    async fn request_attempt<B>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: serde::ser::Serialize + ?Sized,
    {
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        let mut builder = self.inner.request(method, url).headers(auth_headers);
        if let Some(body) = body {
            let body = serde_json::to_vec(body).map_err(Error::ser)?;
            builder = builder
                .header(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                )
                .body(body);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        tracing::debug!(status = response.status().as_u16(), "received response");
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

// Query values carry customer data such as emails and names, keep them out of
// the spans.
fn without_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    Err(Error::http(status_code, headers, body))
}

async fn to_http_response(response: reqwest::Response) -> Result<Value> {
    // 204 No Content has no body and throws EOF error if we try to parse with serde::json
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let body = response.bytes().await.map_err(Error::io)?;
    match body {
        content if (content.is_empty() && no_content_status) => Ok(Value::Null),
        content => serde_json::from_slice::<Value>(&content).map_err(Error::deser),
    }
}
