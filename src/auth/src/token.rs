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

//! Types and functions to work with OAuth2 access tokens.

use crate::Result;
// Using tokio's wrapper makes the expiration testable with paused time.
use tokio::time::Instant;

/// Represents an OAuth2 access token.
#[derive(Clone, PartialEq)]
pub struct Token {
    /// The actual token string.
    ///
    /// This is the value used in `Authorization:` header.
    pub token: String,

    /// The type of the token.
    ///
    /// The OnSched identity service always returns `"Bearer"` tokens.
    pub token_type: String,

    /// The instant at which the token expires.
    ///
    /// The token is usable while `expires_at` is in the future. There is no
    /// safety margin, a token is refreshed only once this instant is reached.
    pub expires_at: Instant,
}

impl Token {
    /// Returns `true` if the token has not expired.
    pub fn is_valid(&self) -> bool {
        self.expires_at > Instant::now()
    }

    /// Formats the value of the `Authorization` header for this token.
    pub(crate) fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Fetches new tokens from a token endpoint.
#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::Duration;

    // Used by tests in other modules.
    mockall::mock! {
        #[derive(Debug)]
        pub TokenProvider { }

        #[async_trait::async_trait]
        impl TokenProvider for TokenProvider {
            async fn token(&self) -> Result<Token>;
        }
    }

    #[test]
    fn debug() {
        let expires_at = Instant::now() + Duration::from_secs(3600);
        let token = Token {
            token: "token-test-only".into(),
            token_type: "token-type-test-only".into(),
            expires_at,
        };
        let got = format!("{token:?}");
        assert!(!got.contains("token-test-only"), "{got}");
        assert!(got.contains("token: \"[censored]\""), "{got}");
        assert!(got.contains("token_type: \"token-type-test-only"), "{got}");
        assert!(got.contains(&format!("expires_at: {expires_at:?}")), "{got}");
    }

    #[tokio::test(start_paused = true)]
    async fn validity() {
        let token = Token {
            token: "test-token".into(),
            token_type: "Bearer".into(),
            expires_at: Instant::now() + Duration::from_secs(60),
        };
        assert!(token.is_valid(), "{token:?}");

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(token.is_valid(), "{token:?}");

        // Expired exactly at `expires_at`.
        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(!token.is_valid(), "{token:?}");
    }

    #[test]
    fn authorization() {
        let token = Token {
            token: "abc123".into(),
            token_type: "Bearer".into(),
            expires_at: Instant::now(),
        };
        assert_eq!(token.authorization(), "Bearer abc123");
    }
}
