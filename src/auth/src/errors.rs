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

//! Common errors generated by the components in this crate.

use http::StatusCode;

pub use onsched_gax::error::CredentialsError;

/// Returns `true` if a token request failing with `code` may succeed later.
///
/// The classification is informational, the client library does not retry
/// token requests.
pub(crate) fn is_transient(code: StatusCode) -> bool {
    matches!(
        code,
        StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
    )
}

// Errors sending the request are most likely network problems.
pub(crate) fn transient<T: std::error::Error + Send + Sync + 'static>(
    source: T,
) -> CredentialsError {
    CredentialsError::new(true, source)
}

pub(crate) fn permanent_from_msg<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}
