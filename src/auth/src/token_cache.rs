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

use crate::Result;
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Caches a token and refreshes it once it expires.
///
/// The lock is held while checking the current token and while fetching its
/// replacement. Concurrent callers that find the token expired wait for a
/// single refresh instead of starting their own.
///
/// A failed refresh stores nothing. The next caller starts a new refresh.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    // The cached token, `None` until the first successful refresh.
    token: Arc<Mutex<Option<Token>>>,

    // The token provider. This thing does the refreshing.
    inner: Arc<T>,
}

// Implemented manually because `T` need not be `Clone`, we only hold an `Arc<T>`.
impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            token: self.token.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            token: Arc::new(Mutex::new(None)),
            inner: Arc::new(inner),
        }
    }

    /// Returns a valid token, fetching a new one if needed.
    pub async fn token(&self) -> Result<Token> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref().filter(|t| t.is_valid()) {
            tracing::debug!("using cached token");
            return Ok(token.clone());
        }
        match self.inner.token().await {
            Ok(token) => {
                tracing::info!(token_type = %token.token_type, "fetched new access token");
                *guard = Some(token.clone());
                Ok(token)
            }
            Err(e) => {
                tracing::warn!("cannot fetch access token: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CredentialsError;
    use crate::token::tests::MockTokenProvider;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;
    use tokio::time::Instant;

    static TOKEN_VALID_DURATION: Duration = Duration::from_secs(3600);

    fn test_token(name: &str, expires_at: Instant) -> Token {
        Token {
            token: name.to_string(),
            token_type: "Bearer".to_string(),
            expires_at,
        }
    }

    #[tokio::test]
    async fn initial_token_success() {
        let expected = test_token("test-token", Instant::now() + TOKEN_VALID_DURATION);
        let expected_clone = expected.clone();

        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Ok(expected_clone));

        let cache = TokenCache::new(mock);
        let actual = cache.token().await.unwrap();
        assert_eq!(actual, expected);

        // Verify that we use the cached token instead of making a new request
        // to the mock token provider.
        let actual = cache.token().await.unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn initial_token_failure() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(2)
            .returning(|| Err(CredentialsError::from_msg(false, "fail")));

        let cache = TokenCache::new(mock);
        assert!(cache.token().await.is_err());

        // Failures are not cached, a new request is made to the mock token
        // provider when we don't have a valid token.
        assert!(cache.token().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn expired_token_success() {
        let now = Instant::now();
        let initial = test_token("initial-token", now + TOKEN_VALID_DURATION);
        let initial_clone = initial.clone();
        let refresh = test_token("refresh-token", now + 2 * TOKEN_VALID_DURATION);
        let refresh_clone = refresh.clone();

        let mut mock = MockTokenProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(refresh_clone));

        // fetch an initial token
        let cache = TokenCache::new(mock);
        let actual = cache.token().await.unwrap();
        assert_eq!(actual, initial);

        // one second before the expiration the token is still used
        tokio::time::advance(TOKEN_VALID_DURATION - Duration::from_secs(1)).await;
        let actual = cache.token().await.unwrap();
        assert_eq!(actual, initial);

        // the token is expired at `expires_at`
        tokio::time::advance(Duration::from_secs(1)).await;
        let actual = cache.token().await.unwrap();
        assert_eq!(actual, refresh);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_token_failure() {
        let now = Instant::now();
        let initial = test_token("initial-token", now + TOKEN_VALID_DURATION);
        let initial_clone = initial.clone();

        let mut mock = MockTokenProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(initial_clone));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Err(CredentialsError::from_msg(false, "fail")));

        // fetch an initial token
        let cache = TokenCache::new(mock);
        let actual = cache.token().await.unwrap();
        assert_eq!(actual, initial);

        // wait long enough for the token to be expired
        tokio::time::advance(TOKEN_VALID_DURATION).await;

        // make sure we return the error, not the expired token
        assert!(cache.token().await.is_err());
    }

    #[derive(Clone, Debug)]
    struct FakeTokenProvider {
        token: Token,
        calls: Arc<StdMutex<i32>>,
    }

    impl FakeTokenProvider {
        fn new(token: Token) -> Self {
            FakeTokenProvider {
                token,
                calls: Arc::new(StdMutex::new(0)),
            }
        }

        fn calls(&self) -> i32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl TokenProvider for FakeTokenProvider {
        async fn token(&self) -> Result<Token> {
            // Release a token periodically. We give enough time for the
            // waiters in a thundering herd to pile up.
            tokio::time::sleep(Duration::from_millis(50)).await;

            // Track how many calls were made to the inner token provider.
            *self.calls.lock().unwrap() += 1;

            Ok(self.token.clone())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn initial_token_thundering_herd() {
        let token = test_token("initial-token", Instant::now() + TOKEN_VALID_DURATION);
        let tp = FakeTokenProvider::new(token.clone());
        let cache = TokenCache::new(tp.clone());

        // Spawn N tasks, all asking for a token at once.
        let tasks = (0..100)
            .map(|_| {
                let cache_clone = cache.clone();
                tokio::spawn(async move { cache_clone.token().await })
            })
            .collect::<Vec<_>>();

        // Wait for the N token requests to complete, verifying the returned token.
        for task in tasks {
            let actual = task.await.unwrap();
            assert!(actual.is_ok(), "{actual:?}");
            assert_eq!(actual.unwrap(), token);
        }

        // Only the first task refreshes, the others wait and use its token.
        assert_eq!(tp.calls(), 1);
    }
}
