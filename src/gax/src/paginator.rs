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

//! The OnSched list endpoints return bounded slices of a logical list. Each
//! request carries `limit` and `offset` query parameters, and each response
//! includes a `hasMore` flag. The [Paginator] turns such an endpoint into a
//! [futures::Stream] of pages, and [accumulate] merges those pages into the
//! single response that the client operations return.

use crate::error::Error;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// The default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    /// Returns `true` if the service has more items after this page.
    fn has_more(&self) -> bool;
}

impl PageableResponse for Value {
    fn has_more(&self) -> bool {
        self.get("hasMore").and_then(Value::as_bool).unwrap_or(false)
    }
}

/// An adapter that converts offset/limit list endpoints into a
/// [futures::Stream] that can be iterated over in an async fashion.
///
/// Pages are requested strictly in sequence: the offset for page `N + 1` is
/// only computed after page `N` reports `hasMore`. The stream ends after the
/// first page without `hasMore`, or after the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), u64>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the page size and a function to fetch
    /// the page at a given offset.
    pub fn new<F>(page_size: u32, execute: impl Fn(u64) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(0), move |state| {
            let execute = execute.clone();
            async move {
                let offset = match state {
                    ControlFlow::Continue(offset) => offset,
                    ControlFlow::Break(_) => return None,
                };
                match execute(offset).await {
                    Ok(page) => {
                        let has_more = page.has_more();
                        tracing::debug!(offset, has_more, "received page");
                        let next_state = if has_more {
                            ControlFlow::Continue(offset + u64::from(page_size))
                        } else {
                            ControlFlow::Break(())
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// The list returned more pages than the application allows.
#[derive(Debug, thiserror::Error)]
#[error("the list operation has more than {max_pages} pages")]
pub struct PageLimitExceeded {
    max_pages: u32,
}

/// Consumes all the pages and merges them into a single response.
///
/// The result is the last page, with its `data` field replaced by the items
/// of every page (in page order) and its `count` field set to the `total`
/// reported by the last page. If no page contributed any items the last page
/// is returned unmodified.
///
/// Any error aborts the merge, the items from previous pages are discarded.
/// If `max_pages` is set, and the service reports more pages after that many
/// pages, the merge fails with an [exhausted][Error::is_exhausted] error.
pub async fn accumulate(
    mut pages: Paginator<Value, Error>,
    max_pages: Option<u32>,
) -> crate::Result<Value> {
    let mut items: Vec<Value> = Vec::new();
    let mut fetched = 0_u32;
    let mut last = Value::Null;
    while let Some(page) = pages.next().await {
        let page = page?;
        fetched += 1;
        if let Some(Value::Array(data)) = page.get("data") {
            items.extend(data.iter().cloned());
        }
        if let Some(max_pages) = max_pages.filter(|max| fetched >= *max && page.has_more()) {
            return Err(Error::exhausted(PageLimitExceeded { max_pages }));
        }
        last = page;
    }
    if items.is_empty() {
        return Ok(last);
    }
    if let Value::Object(ref mut fields) = last {
        if let Some(total) = fields.get("total").cloned() {
            fields.insert("count".to_string(), total);
        }
        fields.insert("data".to_string(), Value::Array(items));
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    type TestResult = anyhow::Result<()>;

    // Returns a fake `execute` function. It verifies the requested offsets and
    // returns the canned responses in order.
    fn fake(
        responses: Vec<crate::Result<Value>>,
        offsets: Arc<Mutex<Vec<u64>>>,
    ) -> impl Fn(u64) -> futures::future::Ready<crate::Result<Value>> + Clone + Send + 'static
    {
        let responses = Arc::new(Mutex::new(VecDeque::from(responses)));
        move |offset| {
            offsets.lock().unwrap().push(offset);
            let response = responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("too many requests");
            futures::future::ready(response)
        }
    }

    #[tokio::test]
    async fn paginator_streams_pages() -> TestResult {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let execute = fake(
            vec![
                Ok(json!({"hasMore": true, "data": ["a", "b"]})),
                Ok(json!({"hasMore": false, "data": ["c"]})),
            ],
            offsets.clone(),
        );
        let mut pages = Paginator::new(2, execute);
        let mut got = Vec::new();
        while let Some(page) = pages.next().await {
            got.push(page?);
        }
        assert_eq!(got.len(), 2);
        assert_eq!(got[1]["data"], json!(["c"]));
        assert_eq!(*offsets.lock().unwrap(), vec![0, 2]);
        Ok(())
    }

    #[tokio::test]
    async fn paginator_stops_on_error() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let execute = fake(
            vec![
                Ok(json!({"hasMore": true, "data": [1]})),
                Err(Error::http(500, http::HeaderMap::new(), bytes::Bytes::new())),
            ],
            offsets.clone(),
        );
        let mut pages = Paginator::new(100, execute);
        let mut count = 0;
        let mut errors = 0;
        while let Some(page) = pages.next().await {
            count += 1;
            if let Err(e) = page {
                assert_eq!(e.http_status_code(), Some(500), "{e:?}");
                errors += 1;
            }
        }
        assert_eq!(count, 2);
        assert_eq!(errors, 1);
        assert_eq!(*offsets.lock().unwrap(), vec![0, 100]);
    }

    #[test_case::test_case(json!({}), false; "absent")]
    #[test_case::test_case(json!({"hasMore": false}), false; "false")]
    #[test_case::test_case(json!({"hasMore": true}), true; "true")]
    #[test_case::test_case(json!({"hasMore": "yes"}), false; "not a bool")]
    fn has_more(page: Value, want: bool) {
        assert_eq!(page.has_more(), want, "{page}");
    }

    #[tokio::test]
    async fn accumulate_single_page() -> TestResult {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let execute = fake(
            vec![Ok(
                json!({"hasMore": false, "data": ["a", "b"], "total": 2, "object": "list"}),
            )],
            offsets.clone(),
        );
        let got = accumulate(Paginator::new(DEFAULT_PAGE_SIZE, execute), None).await?;
        assert_eq!(
            got,
            json!({"hasMore": false, "data": ["a", "b"], "total": 2, "count": 2, "object": "list"})
        );
        assert_eq!(*offsets.lock().unwrap(), vec![0]);
        Ok(())
    }

    #[tokio::test]
    async fn accumulate_three_pages() -> TestResult {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let execute = fake(
            vec![
                Ok(json!({"hasMore": true, "data": [1, 2], "total": 5, "url": "page0"})),
                Ok(json!({"hasMore": true, "data": [3, 4], "total": 5, "url": "page1"})),
                Ok(json!({"hasMore": false, "data": [5], "total": 5, "url": "page2"})),
            ],
            offsets.clone(),
        );
        let got = accumulate(Paginator::new(DEFAULT_PAGE_SIZE, execute), None).await?;
        assert_eq!(got["data"], json!([1, 2, 3, 4, 5]));
        assert_eq!(got["count"], json!(5));
        assert_eq!(got["url"], json!("page2"));
        assert_eq!(*offsets.lock().unwrap(), vec![0, 100, 200]);
        Ok(())
    }

    #[tokio::test]
    async fn accumulate_without_data() -> TestResult {
        let page = json!({"id": "loc-1", "name": "Main Street"});
        let execute = fake(vec![Ok(page.clone())], Arc::default());
        let got = accumulate(Paginator::new(DEFAULT_PAGE_SIZE, execute), None).await?;
        assert_eq!(got, page);
        assert!(got.get("count").is_none(), "{got}");
        Ok(())
    }

    #[tokio::test]
    async fn accumulate_empty_data() -> TestResult {
        let page = json!({"hasMore": false, "data": [], "total": 0});
        let execute = fake(vec![Ok(page.clone())], Arc::default());
        let got = accumulate(Paginator::new(DEFAULT_PAGE_SIZE, execute), None).await?;
        assert_eq!(got, page);
        Ok(())
    }

    #[tokio::test]
    async fn accumulate_missing_total() -> TestResult {
        let execute = fake(vec![Ok(json!({"data": [1]}))], Arc::default());
        let got = accumulate(Paginator::new(DEFAULT_PAGE_SIZE, execute), None).await?;
        assert_eq!(got, json!({"data": [1]}));
        Ok(())
    }

    #[tokio::test]
    async fn accumulate_error_discards_pages() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let execute = fake(
            vec![
                Ok(json!({"hasMore": true, "data": [1, 2], "total": 4})),
                Err(Error::http(500, http::HeaderMap::new(), bytes::Bytes::new())),
            ],
            offsets.clone(),
        );
        let got = accumulate(Paginator::new(DEFAULT_PAGE_SIZE, execute), None).await;
        let err = got.unwrap_err();
        assert_eq!(err.http_status_code(), Some(500), "{err:?}");
        assert_eq!(*offsets.lock().unwrap(), vec![0, 100]);
    }

    #[tokio::test]
    async fn accumulate_page_limit() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let execute = fake(
            vec![
                Ok(json!({"hasMore": true, "data": [1]})),
                Ok(json!({"hasMore": true, "data": [2]})),
            ],
            offsets.clone(),
        );
        let got = accumulate(Paginator::new(1, execute), Some(2)).await;
        let err = got.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(*offsets.lock().unwrap(), vec![0, 1]);
    }

    #[tokio::test]
    async fn accumulate_page_limit_not_reached() -> TestResult {
        let execute = fake(
            vec![
                Ok(json!({"hasMore": true, "data": [1], "total": 2})),
                Ok(json!({"hasMore": false, "data": [2], "total": 2})),
            ],
            Arc::default(),
        );
        let got = accumulate(Paginator::new(1, execute), Some(2)).await?;
        assert_eq!(got["data"], json!([1, 2]));
        Ok(())
    }
}
