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
    use chrono::NaiveDate;
    use httptest::matchers::{all_of, contains, eq, json_decoded, request, url_decoded};
    use httptest::responders::json_encoded;
    use httptest::{Expectation, Server};
    use onsched::client::Client;
    use onsched::model::{
        AppointmentsQuery, AvailabilityQuery, BookAppointmentRequest, BookingField,
        CreateAppointmentRequest, CustomersQuery, ServicesQuery,
    };
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    fn expect_token(server: &Server) {
        server.expect(
            Expectation::matching(request::method_path("POST", "/connect/token"))
                .times(1)
                .respond_with(json_encoded(json!({
                    "access_token": "consumer-token",
                    "token_type": "Bearer",
                    "expires_in": 3600,
                }))),
        );
    }

    async fn test_client(server: &Server) -> Result<Client> {
        let client = Client::builder("test-client-id", "test-client-secret")
            .with_token_endpoint(server.url("/connect/token").to_string())
            .with_consumer_endpoint(server.url("/consumer/v1").to_string())
            .with_setup_endpoint(server.url("/setup/v1").to_string())
            .build()
            .await?;
        Ok(client)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn locations() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/locations"),
                request::headers(contains(("authorization", "Bearer consumer-token"))),
                request::query(url_decoded(contains(("limit", "100")))),
                request::query(url_decoded(contains(("offset", "0")))),
            ])
            .respond_with(json_encoded(json!({
                "hasMore": true, "total": 3, "data": [{"id": "l1"}, {"id": "l2"}],
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/locations"),
                request::query(url_decoded(contains(("offset", "100")))),
            ])
            .respond_with(json_encoded(json!({
                "hasMore": false, "total": 3, "count": 1, "data": [{"id": "l3"}],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client.locations().await?;
        let want = json!({
            "hasMore": false,
            "total": 3,
            "count": 3,
            "data": [{"id": "l1"}, {"id": "l2"}, {"id": "l3"}],
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test]
    async fn location() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/locations/loc-1"),
                request::query(url_decoded(contains(("offset", "0")))),
            ])
            .respond_with(json_encoded(json!({"id": "loc-1", "name": "Downtown"}))),
        );

        let client = test_client(&server).await?;
        let got = client.location("loc-1").await?;
        assert_eq!(got, json!({"id": "loc-1", "name": "Downtown"}));
        Ok(())
    }

    #[tokio::test]
    async fn services() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/services"),
                request::query(url_decoded(contains(("locationId", "loc-1")))),
                request::query(url_decoded(contains(("serviceGroup", "group 1")))),
                request::query(url_decoded(contains(("defaultService", "true")))),
            ])
            .respond_with(json_encoded(json!({"hasMore": false, "total": 0, "data": []}))),
        );

        let client = test_client(&server).await?;
        let query = ServicesQuery::new()
            .set_location_id("loc-1")
            .set_service_group("group 1")
            .set_default_service(true);
        let got = client.services(query).await?;
        assert_eq!(got, json!({"hasMore": false, "total": 0, "data": []}));
        Ok(())
    }

    #[tokio::test]
    async fn customers() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/customers"),
                request::query(url_decoded(contains(("email", "a@example.com")))),
                request::query(url_decoded(contains(("deleted", "true")))),
            ])
            .respond_with(json_encoded(json!({
                "hasMore": false, "total": 1, "data": [{"id": "c1"}],
            }))),
        );

        let client = test_client(&server).await?;
        let query = CustomersQuery::new()
            .set_email("a@example.com")
            .set_deleted(true);
        let got = client.customers(query).await?;
        assert_eq!(got["count"], json!(1));
        assert_eq!(got["data"], json!([{"id": "c1"}]));
        Ok(())
    }

    #[tokio::test]
    async fn availability() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/consumer/v1/availability/svc-1/2024-01-15/2024-01-21"
                ),
                request::query(url_decoded(contains(("resourceIds", "r1,r2")))),
                request::query(url_decoded(contains(("dayAvailability", "7")))),
                request::query(url_decoded(contains(("firstDayAvailable", "true")))),
            ])
            .respond_with(json_encoded(json!({"serviceId": "svc-1", "availableTimes": []}))),
        );

        let client = test_client(&server).await?;
        let query = AvailabilityQuery::new("svc-1", date(), "2024-01-21")
            .set_resource_ids(["r1", "r2"])
            .set_day_availability(7)
            .set_first_day_available(true);
        let got = client.availability(query).await?;
        assert_eq!(got, json!({"serviceId": "svc-1", "availableTimes": []}));
        Ok(())
    }

    #[tokio::test]
    async fn availability_rejects_date_time() -> Result<()> {
        // No expectations, any request fails the test.
        let server = Server::run();
        let client = test_client(&server).await?;
        let start = date().and_hms_opt(9, 0, 0).unwrap();
        let err = client
            .availability(AvailabilityQuery::new("svc-1", start, date()))
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn appointments() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/consumer/v1/appointments"),
                request::query(url_decoded(contains(("status", "BK")))),
                request::query(url_decoded(contains(("startDate", "2024-01-15")))),
                request::query(url_decoded(contains(("endDate", "2024-01-16T00:00:00")))),
            ])
            .respond_with(json_encoded(json!({
                "hasMore": false, "total": 1, "data": [{"id": "a1"}],
            }))),
        );

        let client = test_client(&server).await?;
        let end = NaiveDate::from_ymd_opt(2024, 1, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let query = AppointmentsQuery::new()
            .set_status("BK")
            .set_start_date(date())
            .set_end_date(end);
        let got = client.appointments(query).await?;
        assert_eq!(got["data"], json!([{"id": "a1"}]));
        Ok(())
    }

    #[tokio::test]
    async fn create_appointment() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/consumer/v1/appointments"),
                request::body(json_decoded(eq(json!({
                    "serviceId": "svc-1",
                    "startDateTime": "2024-01-15T09:00:00",
                    "endDateTime": "2016-10-30T10:00:00-5:00",
                    "resourceId": "res-1",
                })))),
            ])
            .respond_with(json_encoded(json!({"id": "a-1", "status": "IN"}))),
        );

        let client = test_client(&server).await?;
        let start = date().and_hms_opt(9, 0, 0).unwrap();
        let request = CreateAppointmentRequest::new("svc-1", start, "2016-10-30T10:00:00-5:00")
            .set_resource_id("res-1");
        let got = client.create_appointment(request).await?;
        assert_eq!(got, json!({"id": "a-1", "status": "IN"}));
        Ok(())
    }

    #[tokio::test]
    async fn create_appointment_rejects_date() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let request = CreateAppointmentRequest::new("svc-1", date(), date());
        let err = client.create_appointment(request).await.unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn book_appointment() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/consumer/v1/appointments/a-1/book"),
                request::body(json_decoded(eq(json!({
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "appointmentBookingFields": [{"name": "reason", "value": "checkup"}],
                })))),
            ])
            .respond_with(json_encoded(json!({"id": "a-1", "status": "BK"}))),
        );

        let client = test_client(&server).await?;
        let request = BookAppointmentRequest::new()
            .set_name("Jane Doe")
            .set_email("jane@example.com")
            .set_appointment_booking_fields([BookingField::new("reason", "checkup")]);
        let got = client.book_appointment("a-1", request).await?;
        assert_eq!(got, json!({"id": "a-1", "status": "BK"}));
        Ok(())
    }

    #[tokio::test]
    async fn cancel_appointment() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/consumer/v1/appointments/a-1/cancel"),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"id": "a-1", "status": "CN"}))),
        );

        let client = test_client(&server).await?;
        let got = client.cancel_appointment("a-1").await?;
        assert_eq!(got, json!({"id": "a-1", "status": "CN"}));
        Ok(())
    }

    #[tokio::test]
    async fn service_allocation() -> Result<()> {
        let server = Server::run();
        expect_token(&server);
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/consumer/v1/services/allocations/sa-1",
            ))
            .respond_with(json_encoded(json!({"id": "sa-1"}))),
        );

        let client = test_client(&server).await?;
        let got = client.service_allocation("sa-1").await?;
        assert_eq!(got, json!({"id": "sa-1"}));
        Ok(())
    }
}
