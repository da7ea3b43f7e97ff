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

#[cfg(test)]
mod tests {
    use httptest::matchers::{all_of, contains, request, url_decoded};
    use httptest::responders::{json_encoded, status_code};
    use httptest::{Expectation, Server, cycle};
    use onsched::client::Client;
    use onsched::model::ResourceRequest;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    fn builder(server: &Server) -> onsched::client::ClientBuilder {
        Client::builder("test-client-id", "test-client-secret")
            .with_token_endpoint(server.url("/connect/token").to_string())
            .with_consumer_endpoint(server.url("/consumer/v1").to_string())
            .with_setup_endpoint(server.url("/setup/v1").to_string())
    }

    #[tokio::test]
    async fn build_performs_no_io() -> Result<()> {
        // Any request would fail the test, as the server has no expectations.
        let server = Server::run();
        let _client = builder(&server).build().await?;
        Ok(())
    }

    #[tokio::test]
    async fn each_api_has_its_own_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/connect/token"),
                request::headers(contains((
                    "authorization",
                    "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0"
                ))),
            ])
            .times(2)
            .respond_with(cycle![
                json_encoded(json!({"access_token": "token-1", "expires_in": 3600})),
                json_encoded(json!({"access_token": "token-2", "expires_in": 3600})),
            ]),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/locations/loc-1"),
                request::headers(contains(("authorization", "Bearer token-1"))),
            ])
            .times(2)
            .respond_with(json_encoded(json!({"id": "loc-1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/setup/v1/resources/res-1"),
                request::headers(contains(("authorization", "Bearer token-2"))),
            ])
            .times(2)
            .respond_with(json_encoded(json!({"id": "res-1"}))),
        );

        let client = builder(&server).build().await?;
        client.location("loc-1").await?;
        client.delete_resource("res-1").await?;
        client.location("loc-1").await?;
        client.delete_resource("res-1").await?;
        Ok(())
    }

    #[tokio::test]
    async fn custom_scope() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/connect/token"),
                request::body(url_decoded(contains(("scope", "CustomScope")))),
                request::body(url_decoded(contains(("grant_type", "client_credentials")))),
            ])
            .respond_with(json_encoded(json!({"access_token": "token", "expires_in": 3600}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/consumer/v1/locations"))
                .respond_with(json_encoded(json!({"hasMore": false, "data": []}))),
        );

        let client = builder(&server).with_scope("CustomScope").build().await?;
        client.locations().await?;
        Ok(())
    }

    #[tokio::test]
    async fn token_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/connect/token"))
                .respond_with(status_code(400).body(r#"{"error": "invalid_client"}"#)),
        );

        let client = builder(&server).build().await?;
        let err = client.locations().await.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn api_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/connect/token"))
                .respond_with(json_encoded(json!({"access_token": "token", "expires_in": 3600}))),
        );
        server.expect(
            Expectation::matching(request::method_path("PUT", "/setup/v1/resources/missing"))
                .respond_with(status_code(404).body(r#"{"message": "not found"}"#)),
        );

        let client = builder(&server).build().await?;
        let err = client
            .update_resource("missing", ResourceRequest::new().set_name("x"))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        let payload = err.http_payload().map(|b| b.to_vec()).unwrap_or_default();
        assert_eq!(String::from_utf8(payload)?, r#"{"message": "not found"}"#);
        Ok(())
    }

    #[tokio::test]
    async fn page_size_and_limit() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/connect/token"))
                .respond_with(json_encoded(json!({"access_token": "token", "expires_in": 3600}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/locations"),
                request::query(url_decoded(contains(("limit", "2")))),
            ])
            .times(2)
            .respond_with(json_encoded(json!({
                "hasMore": true, "total": 10, "data": [{"id": "a"}, {"id": "b"}],
            }))),
        );

        let client = builder(&server)
            .with_page_size(2)
            .with_max_pages(2)
            .build()
            .await?;
        let err = client.locations().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }
}
