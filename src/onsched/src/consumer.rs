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

//! Operations on the consumer API.

use crate::Result;
use crate::client::Client;
use crate::model::{
    AppointmentsQuery, AvailabilityQuery, BookAppointmentRequest, CreateAppointmentRequest,
    CustomersQuery, ServicesQuery,
};
use reqwest::Method;
use serde_json::Value;

impl Client {
    /// Lists all the locations.
    ///
    /// # Example
    /// ```
    /// # use onsched::client::Client;
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let locations = client.locations().await?;
    /// for location in locations["data"].as_array().into_iter().flatten() {
    ///     println!("{}", location["name"]);
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn locations(&self) -> Result<Value> {
        let inner = self.inner();
        let url = format!("{}/locations?", inner.consumer_endpoint);
        inner.consumer.fetch_all(&url).await
    }

    /// Gets a single location.
    pub async fn location(&self, location_id: &str) -> Result<Value> {
        let inner = self.inner();
        let url = format!("{}/locations/{location_id}?", inner.consumer_endpoint);
        inner.consumer.fetch_all(&url).await
    }

    /// Lists the services matching `query`.
    ///
    /// # Example
    /// ```
    /// # use onsched::client::Client;
    /// # use onsched::model::ServicesQuery;
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let services = client
    ///     .services(ServicesQuery::new().set_location_id("my-location"))
    ///     .await?;
    /// println!("found {} services", services["count"]);
    /// # Ok(()) }
    /// ```
    pub async fn services(&self, query: ServicesQuery) -> Result<Value> {
        let inner = self.inner();
        let url = query
            .to_query()
            .append_to(&format!("{}/services?", inner.consumer_endpoint));
        inner.consumer.fetch_all(&url).await
    }

    /// Lists the customers matching `query`.
    pub async fn customers(&self, query: CustomersQuery) -> Result<Value> {
        let inner = self.inner();
        let url = query
            .to_query()
            .append_to(&format!("{}/customers?", inner.consumer_endpoint));
        inner.consumer.fetch_all(&url).await
    }

    /// Searches the availability of a service.
    ///
    /// The start and end dates must be dates, or strings in `YYYY-MM-DD`
    /// format. Date-times are rejected before any request is sent.
    ///
    /// # Example
    /// ```
    /// # use onsched::client::Client;
    /// # use onsched::model::AvailabilityQuery;
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// use chrono::NaiveDate;
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let query = AvailabilityQuery::new("my-service", day, day)
    ///     .set_resource_id("my-resource");
    /// let availability = client.availability(query).await?;
    /// # Ok(()) }
    /// ```
    pub async fn availability(&self, query: AvailabilityQuery) -> Result<Value> {
        let inner = self.inner();
        let (path, query) = query.to_path_and_query()?;
        let url = query.append_to(&format!("{}{path}?", inner.consumer_endpoint));
        inner.consumer.fetch_all(&url).await
    }

    /// Lists the appointments matching `query`.
    pub async fn appointments(&self, query: AppointmentsQuery) -> Result<Value> {
        let inner = self.inner();
        let query = query.to_query()?;
        let url = query.append_to(&format!("{}/appointments?", inner.consumer_endpoint));
        inner.consumer.fetch_all(&url).await
    }

    /// Creates an appointment in the initial (`IN`) status.
    ///
    /// # Example
    /// ```
    /// # use onsched::client::Client;
    /// # use onsched::model::{BookAppointmentRequest, CreateAppointmentRequest};
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let request = CreateAppointmentRequest::new(
    ///     "my-service",
    ///     "2024-01-15T09:00:00-05:00",
    ///     "2024-01-15T10:00:00-05:00",
    /// )
    /// .set_resource_id("my-resource");
    /// let appointment = client.create_appointment(request).await?;
    /// let id = appointment["id"].as_str().unwrap_or_default();
    /// let booking = BookAppointmentRequest::new()
    ///     .set_name("Jane Doe")
    ///     .set_email("jane@example.com");
    /// client.book_appointment(id, booking).await?;
    /// # Ok(()) }
    /// ```
    pub async fn create_appointment(&self, request: CreateAppointmentRequest) -> Result<Value> {
        request.validate()?;
        let inner = self.inner();
        let url = format!("{}/appointments", inner.consumer_endpoint);
        inner
            .consumer
            .authorized_request(Method::POST, &url, Some(&request))
            .await
    }

    /// Books an appointment created with [create_appointment][Self::create_appointment].
    pub async fn book_appointment(
        &self,
        appointment_id: &str,
        request: BookAppointmentRequest,
    ) -> Result<Value> {
        let inner = self.inner();
        let url = format!("{}/appointments/{appointment_id}/book", inner.consumer_endpoint);
        inner
            .consumer
            .authorized_request(Method::PUT, &url, Some(&request))
            .await
    }

    /// Cancels an appointment.
    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<Value> {
        let inner = self.inner();
        let url = format!(
            "{}/appointments/{appointment_id}/cancel",
            inner.consumer_endpoint
        );
        inner
            .consumer
            .authorized_request(Method::PUT, &url, Some(&serde_json::json!({})))
            .await
    }

    /// Gets a single service allocation.
    pub async fn service_allocation(&self, service_allocation_id: &str) -> Result<Value> {
        let inner = self.inner();
        let url = format!(
            "{}/services/allocations/{service_allocation_id}?",
            inner.consumer_endpoint
        );
        inner.consumer.fetch_all(&url).await
    }
}
