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

//! The OnSched deployment environments.

use std::str::FromStr;

const SANDBOX_TOKEN_ENDPOINT: &str = "https://sandbox-identity.onsched.com/connect/token";
const SANDBOX_API: &str = "https://sandbox-api.onsched.com";
const LIVE_TOKEN_ENDPOINT: &str = "https://identity.onsched.com/connect/token";
const LIVE_API: &str = "https://api.onsched.com";

/// Selects the OnSched deployment used by a client.
///
/// Each environment has its own identity service and its own API hosts.
/// Client credentials issued for one environment are not valid in the other.
///
/// # Example
/// ```
/// # use onsched::environment::Environment;
/// let env: Environment = "live".parse()?;
/// assert_eq!(env, Environment::Live);
/// assert_eq!(env.consumer_endpoint(), "https://api.onsched.com/consumer/v1");
/// assert!("staging".parse::<Environment>().is_err());
/// # Ok::<(), onsched::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The sandbox environment, intended for development and testing.
    #[default]
    Sandbox,
    /// The production environment.
    Live,
}

impl Environment {
    /// The OAuth2 token endpoint.
    pub fn token_endpoint(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_TOKEN_ENDPOINT,
            Self::Live => LIVE_TOKEN_ENDPOINT,
        }
    }

    /// The base URL of the consumer API.
    pub fn consumer_endpoint(&self) -> String {
        format!("{}/consumer/v1", self.api_host())
    }

    /// The base URL of the setup API.
    pub fn setup_endpoint(&self) -> String {
        format!("{}/setup/v1", self.api_host())
    }

    fn api_host(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_API,
            Self::Live => LIVE_API,
        }
    }

    /// The name used in configuration, `sandbox` or `live`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown OnSched environment `{0}`, expected `sandbox` or `live`")]
struct UnknownEnvironment(String);

impl FromStr for Environment {
    type Err = gax::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Self::Sandbox),
            "live" => Ok(Self::Live),
            _ => Err(gax::error::Error::validation(UnknownEnvironment(
                s.to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_is_sandbox() {
        assert_eq!(Environment::default(), Environment::Sandbox);
    }

    #[test_case(Environment::Sandbox, "https://sandbox-identity.onsched.com/connect/token", "https://sandbox-api.onsched.com/consumer/v1", "https://sandbox-api.onsched.com/setup/v1")]
    #[test_case(Environment::Live, "https://identity.onsched.com/connect/token", "https://api.onsched.com/consumer/v1", "https://api.onsched.com/setup/v1")]
    fn endpoints(env: Environment, token: &str, consumer: &str, setup: &str) {
        assert_eq!(env.token_endpoint(), token);
        assert_eq!(env.consumer_endpoint(), consumer);
        assert_eq!(env.setup_endpoint(), setup);
    }

    #[test_case("sandbox", Environment::Sandbox)]
    #[test_case("live", Environment::Live)]
    fn parse(input: &str, want: Environment) -> anyhow::Result<()> {
        let got = input.parse::<Environment>()?;
        assert_eq!(got, want);
        assert_eq!(got.to_string(), input);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("production")]
    #[test_case("Live"; "case sensitive")]
    fn parse_unknown(input: &str) {
        let err = input.parse::<Environment>().unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("sandbox"), "{err}");
    }
}
