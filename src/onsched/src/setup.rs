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

//! Operations on the setup API.

use crate::Result;
use crate::client::Client;
use crate::model::{
    CreateServiceAllocationRequest, CreateServiceRequest, ResourceRequest, ServiceAllocationsQuery,
};
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
#[error("the `{0}` field is required")]
struct MissingField(&'static str);

impl Client {
    /// Creates a resource, such as a staff member or a room.
    ///
    /// The request must have a [name][ResourceRequest::name].
    ///
    /// # Example
    /// ```
    /// # use onsched::client::Client;
    /// # use onsched::model::{ResourceAddress, ResourceRequest};
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let request = ResourceRequest::new()
    ///     .set_name("Dr. Smith")
    ///     .set_address(ResourceAddress::new().set_city("Toronto"));
    /// let resource = client.create_resource(request).await?;
    /// println!("created {}", resource["id"]);
    /// # Ok(()) }
    /// ```
    pub async fn create_resource(&self, request: ResourceRequest) -> Result<Value> {
        if request.name.as_deref().is_none_or(str::is_empty) {
            return Err(gax::error::Error::validation(MissingField("name")));
        }
        request.validate()?;
        let inner = self.inner();
        let url = format!("{}/resources", inner.setup_endpoint);
        inner
            .setup
            .authorized_request(Method::POST, &url, Some(&request))
            .await
    }

    /// Updates the fields set in `request`.
    pub async fn update_resource(&self, resource_id: &str, request: ResourceRequest) -> Result<Value> {
        request.validate()?;
        let inner = self.inner();
        let url = format!("{}/resources/{resource_id}", inner.setup_endpoint);
        inner
            .setup
            .authorized_request(Method::PUT, &url, Some(&request))
            .await
    }

    /// Deletes a resource.
    pub async fn delete_resource(&self, resource_id: &str) -> Result<Value> {
        let inner = self.inner();
        let url = format!("{}/resources/{resource_id}", inner.setup_endpoint);
        inner
            .setup
            .authorized_request::<Value>(Method::DELETE, &url, None)
            .await
    }

    /// Creates a service.
    pub async fn create_service(&self, request: CreateServiceRequest) -> Result<Value> {
        let inner = self.inner();
        let url = format!("{}/services", inner.setup_endpoint);
        inner
            .setup
            .authorized_request(Method::POST, &url, Some(&request))
            .await
    }

    /// Deletes a service.
    pub async fn delete_service(&self, service_id: &str) -> Result<Value> {
        let inner = self.inner();
        let url = format!("{}/services/{service_id}", inner.setup_endpoint);
        inner
            .setup
            .authorized_request::<Value>(Method::DELETE, &url, None)
            .await
    }

    /// Lists the allocations of a service.
    ///
    /// The allocations are read from the consumer API, using the setup API
    /// credentials.
    pub async fn service_allocations(&self, query: ServiceAllocationsQuery) -> Result<Value> {
        let inner = self.inner();
        let base = format!(
            "{}/services/{}/allocations?",
            inner.consumer_endpoint, query.service_id
        );
        let url = query.to_query()?.append_to(&base);
        inner.setup.fetch_all(&url).await
    }

    /// Allocates a service to a date range, for example to offer it outside
    /// of business hours.
    pub async fn create_service_allocation(
        &self,
        request: CreateServiceAllocationRequest,
    ) -> Result<Value> {
        request.validate()?;
        let inner = self.inner();
        let url = format!(
            "{}/services/{}/allocations",
            inner.setup_endpoint, request.service_id
        );
        inner
            .setup
            .authorized_request(Method::POST, &url, Some(&request))
            .await
    }
}
