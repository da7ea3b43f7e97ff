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

//! Request types for the OnSched consumer and setup APIs.
//!
//! Query types are converted to URL query parameters, request types are sent
//! as JSON payloads. In both cases unset optional fields are omitted. Dates
//! and times are validated against the kinds accepted by each field before
//! any request is sent.

use crate::temporal::{self, Temporal};
use gax::query_parameter::QueryParameters;
use serde::Serialize;

/// Serializes a flag as the `"true"` or `"false"` strings used by the APIs.
mod flag {
    pub fn serialize<S>(v: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(if *v { "true" } else { "false" })
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

// Nested objects are omitted when none of their members are set.
fn is_unset<T: Default + PartialEq>(v: &Option<T>) -> bool {
    v.as_ref().is_none_or(|v| *v == T::default())
}

fn check_optional(
    value: &Option<Temporal>,
    field: &'static str,
    accepts: &[temporal::Kind],
) -> gax::Result<()> {
    value
        .as_ref()
        .map_or(Ok(()), |v| v.check(field, accepts))
}

fn format_optional(
    value: &Option<Temporal>,
    field: &'static str,
    accepts: &[temporal::Kind],
) -> gax::Result<Option<String>> {
    value
        .as_ref()
        .map(|v| v.format_for(field, accepts))
        .transpose()
}

/// Filters for [services][crate::client::Client::services].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServicesQuery {
    /// Return the services offered at this location.
    pub location_id: Option<String>,
    /// Return the services in this service group.
    pub service_group: Option<String>,
    /// Return only the default service.
    pub default_service: bool,
}

impl ServicesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [location_id][ServicesQuery::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [service_group][ServicesQuery::service_group] field.
    pub fn set_service_group<T: Into<String>>(mut self, v: T) -> Self {
        self.service_group = Some(v.into());
        self
    }

    /// Sets the [default_service][ServicesQuery::default_service] field.
    pub fn set_default_service(mut self, v: bool) -> Self {
        self.default_service = v;
        self
    }

    pub(crate) fn to_query(&self) -> QueryParameters {
        QueryParameters::new()
            .add("locationId", &self.location_id)
            .add("serviceGroup", &self.service_group)
            .add("defaultService", self.default_service)
    }
}

/// Filters for [customers][crate::client::Client::customers].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CustomersQuery {
    pub location_id: Option<String>,
    pub group_id: Option<String>,
    pub email: Option<String>,
    pub lastname: Option<String>,
    /// Include deleted customers.
    pub deleted: bool,
}

impl CustomersQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [location_id][CustomersQuery::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [group_id][CustomersQuery::group_id] field.
    pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.group_id = Some(v.into());
        self
    }

    /// Sets the [email][CustomersQuery::email] field.
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    /// Sets the [lastname][CustomersQuery::lastname] field.
    pub fn set_lastname<T: Into<String>>(mut self, v: T) -> Self {
        self.lastname = Some(v.into());
        self
    }

    /// Sets the [deleted][CustomersQuery::deleted] field.
    pub fn set_deleted(mut self, v: bool) -> Self {
        self.deleted = v;
        self
    }

    pub(crate) fn to_query(&self) -> QueryParameters {
        QueryParameters::new()
            .add("locationId", &self.location_id)
            .add("groupId", &self.group_id)
            .add("email", &self.email)
            .add("lastname", &self.lastname)
            .add("deleted", self.deleted)
    }
}

/// Search criteria for [availability][crate::client::Client::availability].
///
/// Availability is an expensive call. Searches across all resources should
/// cover a single date, searches over multiple dates should target a single
/// resource.
///
/// `start_date` and `end_date` accept dates or pre-formatted strings.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct AvailabilityQuery {
    pub service_id: String,
    pub start_date: Temporal,
    pub end_date: Temporal,
    /// The start of the search window, as `HHMM`. Defaults to the start of
    /// business hours.
    pub start_time: Option<i32>,
    /// The end of the search window, as `HHMM`. Defaults to the end of
    /// business hours.
    pub end_time: Option<i32>,
    pub location_id: Option<String>,
    pub resource_id: Option<String>,
    pub resource_group_id: Option<String>,
    /// Restrict the search to these resources.
    pub resource_ids: Vec<String>,
    /// The appointment duration in minutes, only needed when customers choose
    /// the duration.
    pub duration: Option<i32>,
    /// The customer timezone, as an offset from GMT.
    pub tz_offset: Option<i32>,
    /// Return availability for this many days.
    pub day_availability: Option<i32>,
    /// With `day_availability`, return the first day with availability.
    pub first_day_available: bool,
}

impl AvailabilityQuery {
    pub fn new<S, T, U>(service_id: S, start_date: T, end_date: U) -> Self
    where
        S: Into<String>,
        T: Into<Temporal>,
        U: Into<Temporal>,
    {
        Self {
            service_id: service_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            start_time: None,
            end_time: None,
            location_id: None,
            resource_id: None,
            resource_group_id: None,
            resource_ids: Vec::new(),
            duration: None,
            tz_offset: None,
            day_availability: None,
            first_day_available: false,
        }
    }

    /// Sets the [start_time][AvailabilityQuery::start_time] field.
    pub fn set_start_time(mut self, v: i32) -> Self {
        self.start_time = Some(v);
        self
    }

    /// Sets the [end_time][AvailabilityQuery::end_time] field.
    pub fn set_end_time(mut self, v: i32) -> Self {
        self.end_time = Some(v);
        self
    }

    /// Sets the [location_id][AvailabilityQuery::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [resource_id][AvailabilityQuery::resource_id] field.
    pub fn set_resource_id<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_id = Some(v.into());
        self
    }

    /// Sets the [resource_group_id][AvailabilityQuery::resource_group_id] field.
    pub fn set_resource_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_id = Some(v.into());
        self
    }

    /// Sets the [resource_ids][AvailabilityQuery::resource_ids] field.
    pub fn set_resource_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resource_ids = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the [duration][AvailabilityQuery::duration] field.
    pub fn set_duration(mut self, v: i32) -> Self {
        self.duration = Some(v);
        self
    }

    /// Sets the [tz_offset][AvailabilityQuery::tz_offset] field.
    pub fn set_tz_offset(mut self, v: i32) -> Self {
        self.tz_offset = Some(v);
        self
    }

    /// Sets the [day_availability][AvailabilityQuery::day_availability] field.
    pub fn set_day_availability(mut self, v: i32) -> Self {
        self.day_availability = Some(v);
        self
    }

    /// Sets the [first_day_available][AvailabilityQuery::first_day_available] field.
    pub fn set_first_day_available(mut self, v: bool) -> Self {
        self.first_day_available = v;
        self
    }

    /// Returns the path, relative to the consumer API, and the query.
    pub(crate) fn to_path_and_query(&self) -> gax::Result<(String, QueryParameters)> {
        let start = self.start_date.format_for("startDate", temporal::DATE)?;
        let end = self.end_date.format_for("endDate", temporal::DATE)?;
        let path = format!("/availability/{}/{start}/{end}", self.service_id);
        let query = QueryParameters::new()
            .add("startTime", self.start_time)
            .add("endTime", self.end_time)
            .add("locationId", &self.location_id)
            .add("resourceId", &self.resource_id)
            .add("resourceGroupId", &self.resource_group_id)
            .add("resourceIds", &self.resource_ids)
            .add("duration", self.duration)
            .add("tzOffset", self.tz_offset)
            .add("dayAvailability", self.day_availability)
            .add("firstDayAvailable", self.first_day_available);
        Ok((path, query))
    }
}

/// Filters for [appointments][crate::client::Client::appointments].
///
/// `start_date` and `end_date` accept dates, date-times, or pre-formatted
/// strings.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AppointmentsQuery {
    pub location_id: Option<String>,
    pub email: Option<String>,
    pub lastname: Option<String>,
    pub service_id: Option<String>,
    pub service_allocation_id: Option<String>,
    pub resource_id: Option<String>,
    pub customer_id: Option<String>,
    /// The appointment status code, for example `BK` for booked appointments.
    pub status: Option<String>,
    pub booked_by: Option<String>,
    pub start_date: Option<Temporal>,
    pub end_date: Option<Temporal>,
}

impl AppointmentsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [location_id][AppointmentsQuery::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [email][AppointmentsQuery::email] field.
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    /// Sets the [lastname][AppointmentsQuery::lastname] field.
    pub fn set_lastname<T: Into<String>>(mut self, v: T) -> Self {
        self.lastname = Some(v.into());
        self
    }

    /// Sets the [service_id][AppointmentsQuery::service_id] field.
    pub fn set_service_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_id = Some(v.into());
        self
    }

    /// Sets the [service_allocation_id][AppointmentsQuery::service_allocation_id] field.
    pub fn set_service_allocation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_allocation_id = Some(v.into());
        self
    }

    /// Sets the [resource_id][AppointmentsQuery::resource_id] field.
    pub fn set_resource_id<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_id = Some(v.into());
        self
    }

    /// Sets the [customer_id][AppointmentsQuery::customer_id] field.
    pub fn set_customer_id<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_id = Some(v.into());
        self
    }

    /// Sets the [status][AppointmentsQuery::status] field.
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the [booked_by][AppointmentsQuery::booked_by] field.
    pub fn set_booked_by<T: Into<String>>(mut self, v: T) -> Self {
        self.booked_by = Some(v.into());
        self
    }

    /// Sets the [start_date][AppointmentsQuery::start_date] field.
    pub fn set_start_date<T: Into<Temporal>>(mut self, v: T) -> Self {
        self.start_date = Some(v.into());
        self
    }

    /// Sets the [end_date][AppointmentsQuery::end_date] field.
    pub fn set_end_date<T: Into<Temporal>>(mut self, v: T) -> Self {
        self.end_date = Some(v.into());
        self
    }

    pub(crate) fn to_query(&self) -> gax::Result<QueryParameters> {
        let start = format_optional(&self.start_date, "startDate", temporal::ANY)?;
        let end = format_optional(&self.end_date, "endDate", temporal::ANY)?;
        Ok(QueryParameters::new()
            .add("locationId", &self.location_id)
            .add("email", &self.email)
            .add("lastname", &self.lastname)
            .add("serviceId", &self.service_id)
            .add("serviceAllocationId", &self.service_allocation_id)
            .add("resourceId", &self.resource_id)
            .add("customerId", &self.customer_id)
            .add("status", &self.status)
            .add("bookedBy", &self.booked_by)
            .add("startDate", start)
            .add("endDate", end))
    }
}

/// The payload for [create_appointment][crate::client::Client::create_appointment].
///
/// The new appointment is created in the initial (`IN`) status and must be
/// booked with [book_appointment][crate::client::Client::book_appointment].
/// The start and end accept date-times, with or without an offset, or
/// pre-formatted ISO-8601 strings such as `2016-10-30T9:00:00-5:00`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateAppointmentRequest {
    pub service_id: String,
    pub start_date_time: Temporal,
    pub end_date_time: Temporal,
    /// Required for resource based calendars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_allocation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn new<S, T, U>(service_id: S, start_date_time: T, end_date_time: U) -> Self
    where
        S: Into<String>,
        T: Into<Temporal>,
        U: Into<Temporal>,
    {
        Self {
            service_id: service_id.into(),
            start_date_time: start_date_time.into(),
            end_date_time: end_date_time.into(),
            resource_id: None,
            location_id: None,
            customer_id: None,
            service_allocation_id: None,
            booked_by: None,
        }
    }

    /// Sets the [resource_id][CreateAppointmentRequest::resource_id] field.
    pub fn set_resource_id<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_id = Some(v.into());
        self
    }

    /// Sets the [location_id][CreateAppointmentRequest::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [customer_id][CreateAppointmentRequest::customer_id] field.
    pub fn set_customer_id<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_id = Some(v.into());
        self
    }

    /// Sets the [service_allocation_id][CreateAppointmentRequest::service_allocation_id] field.
    pub fn set_service_allocation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_allocation_id = Some(v.into());
        self
    }

    /// Sets the [booked_by][CreateAppointmentRequest::booked_by] field.
    pub fn set_booked_by<T: Into<String>>(mut self, v: T) -> Self {
        self.booked_by = Some(v.into());
        self
    }

    pub(crate) fn validate(&self) -> gax::Result<()> {
        self.start_date_time
            .check("startDateTime", temporal::DATE_TIME)?;
        self.end_date_time.check("endDateTime", temporal::DATE_TIME)
    }
}

/// A custom booking field, sent as `{ "name": ..., "value": ... }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct BookingField {
    pub name: String,
    pub value: String,
}

impl BookingField {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The payload for [book_appointment][crate::client::Client::book_appointment].
///
/// Only appointments in the initial (`IN`) status can be booked.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BookAppointmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The phone type, `H` (home), `M` (mobile) or `B` (business).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub appointment_booking_fields: Vec<BookingField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_booking_fields: Vec<BookingField>,
}

impl BookAppointmentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [email][BookAppointmentRequest::email] field.
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    /// Sets the [name][BookAppointmentRequest::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [phone][BookAppointmentRequest::phone] field.
    pub fn set_phone<T: Into<String>>(mut self, v: T) -> Self {
        self.phone = Some(v.into());
        self
    }

    /// Sets the [phone_type][BookAppointmentRequest::phone_type] field.
    pub fn set_phone_type<T: Into<String>>(mut self, v: T) -> Self {
        self.phone_type = Some(v.into());
        self
    }

    /// Sets the [phone_ext][BookAppointmentRequest::phone_ext] field.
    pub fn set_phone_ext<T: Into<String>>(mut self, v: T) -> Self {
        self.phone_ext = Some(v.into());
        self
    }

    /// Sets the [customer_message][BookAppointmentRequest::customer_message] field.
    pub fn set_customer_message<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_message = Some(v.into());
        self
    }

    /// Sets the [notes][BookAppointmentRequest::notes] field.
    pub fn set_notes<T: Into<String>>(mut self, v: T) -> Self {
        self.notes = Some(v.into());
        self
    }

    /// Sets the [appointment_booking_fields][BookAppointmentRequest::appointment_booking_fields] field.
    pub fn set_appointment_booking_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BookingField>,
    {
        self.appointment_booking_fields = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the [customer_booking_fields][BookAppointmentRequest::customer_booking_fields] field.
    pub fn set_customer_booking_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BookingField>,
    {
        self.customer_booking_fields = v.into_iter().map(Into::into).collect();
        self
    }
}

/// The payload for [create_resource][crate::client::Client::create_resource]
/// and [update_resource][crate::client::Client::update_resource].
///
/// Creating a resource requires a name, updates only send the fields that
/// are set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_id: Option<String>,
    #[serde(skip_serializing_if = "is_unset")]
    pub address: Option<ResourceAddress>,
    #[serde(skip_serializing_if = "is_unset")]
    pub contact: Option<ResourceContact>,
    #[serde(skip_serializing_if = "is_unset")]
    pub options: Option<ResourceOptions>,
}

impl ResourceRequest {
    /// Creates a request with no fields set, as used to update resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [name][ResourceRequest::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the [email][ResourceRequest::email] field.
    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    /// Sets the [description][ResourceRequest::description] field.
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the [location_id][ResourceRequest::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [group_id][ResourceRequest::group_id] field.
    pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.group_id = Some(v.into());
        self
    }

    /// Sets the [timezone_id][ResourceRequest::timezone_id] field.
    pub fn set_timezone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.timezone_id = Some(v.into());
        self
    }

    /// Sets the [address][ResourceRequest::address] field.
    pub fn set_address(mut self, v: ResourceAddress) -> Self {
        self.address = Some(v);
        self
    }

    /// Sets the [contact][ResourceRequest::contact] field.
    pub fn set_contact(mut self, v: ResourceContact) -> Self {
        self.contact = Some(v);
        self
    }

    /// Sets the [options][ResourceRequest::options] field.
    pub fn set_options(mut self, v: ResourceOptions) -> Self {
        self.options = Some(v);
        self
    }

    pub(crate) fn validate(&self) -> gax::Result<()> {
        self.options.as_ref().map_or(Ok(()), ResourceOptions::validate)
    }
}

/// The address of a resource.
///
/// All the members are sent once any of them is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceAddress {
    pub addressline1: String,
    pub addressline2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl ResourceAddress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [addressline1][ResourceAddress::addressline1] field.
    pub fn set_addressline1<T: Into<String>>(mut self, v: T) -> Self {
        self.addressline1 = v.into();
        self
    }

    /// Sets the [addressline2][ResourceAddress::addressline2] field.
    pub fn set_addressline2<T: Into<String>>(mut self, v: T) -> Self {
        self.addressline2 = v.into();
        self
    }

    /// Sets the [city][ResourceAddress::city] field.
    pub fn set_city<T: Into<String>>(mut self, v: T) -> Self {
        self.city = v.into();
        self
    }

    /// Sets the [state][ResourceAddress::state] field.
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the [postal_code][ResourceAddress::postal_code] field.
    pub fn set_postal_code<T: Into<String>>(mut self, v: T) -> Self {
        self.postal_code = v.into();
        self
    }

    /// Sets the [country][ResourceAddress::country] field.
    pub fn set_country<T: Into<String>>(mut self, v: T) -> Self {
        self.country = v.into();
        self
    }
}

/// The contact information of a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceContact {
    /// The preferred phone, `H` (home), `M` (mobile) or `B` (business).
    ///
    /// Always sent with the contact information, even if empty.
    #[serde(rename = "PreferredPhoneType")]
    pub preferred_phone_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone_ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skype_username: Option<String>,
}

impl ResourceContact {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [preferred_phone_type][ResourceContact::preferred_phone_type] field.
    pub fn set_preferred_phone_type<T: Into<String>>(mut self, v: T) -> Self {
        self.preferred_phone_type = v.into();
        self
    }

    /// Sets the [home_phone][ResourceContact::home_phone] field.
    pub fn set_home_phone<T: Into<String>>(mut self, v: T) -> Self {
        self.home_phone = Some(v.into());
        self
    }

    /// Sets the [mobile_phone][ResourceContact::mobile_phone] field.
    pub fn set_mobile_phone<T: Into<String>>(mut self, v: T) -> Self {
        self.mobile_phone = Some(v.into());
        self
    }

    /// Sets the [business_phone][ResourceContact::business_phone] field.
    pub fn set_business_phone<T: Into<String>>(mut self, v: T) -> Self {
        self.business_phone = Some(v.into());
        self
    }

    /// Sets the [business_phone_ext][ResourceContact::business_phone_ext] field.
    pub fn set_business_phone_ext<T: Into<String>>(mut self, v: T) -> Self {
        self.business_phone_ext = Some(v.into());
        self
    }

    /// Sets the [skype_username][ResourceContact::skype_username] field.
    pub fn set_skype_username<T: Into<String>>(mut self, v: T) -> Self {
        self.skype_username = Some(v.into());
        self
    }
}

/// The options of a resource. Only the members that are set are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceOptions {
    /// Accepts date-times or pre-formatted strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<Temporal>,
    /// The calendar used for notifications: 0 (OnSched), 1 (Google) or
    /// 2 (Outlook).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_calendar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlook_calendar_id: Option<String>,
    #[serde(skip_serializing_if = "is_false", serialize_with = "flag::serialize")]
    pub ignore_business_hours: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_availability: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio_link: Option<String>,
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [effective_date][ResourceOptions::effective_date] field.
    pub fn set_effective_date<T: Into<Temporal>>(mut self, v: T) -> Self {
        self.effective_date = Some(v.into());
        self
    }

    /// Sets the [notification_type][ResourceOptions::notification_type] field.
    pub fn set_notification_type(mut self, v: i32) -> Self {
        self.notification_type = Some(v);
        self
    }

    /// Sets the [display_color][ResourceOptions::display_color] field.
    pub fn set_display_color<T: Into<String>>(mut self, v: T) -> Self {
        self.display_color = Some(v.into());
        self
    }

    /// Sets the [google_calendar_id][ResourceOptions::google_calendar_id] field.
    pub fn set_google_calendar_id<T: Into<String>>(mut self, v: T) -> Self {
        self.google_calendar_id = Some(v.into());
        self
    }

    /// Sets the [outlook_calendar_id][ResourceOptions::outlook_calendar_id] field.
    pub fn set_outlook_calendar_id<T: Into<String>>(mut self, v: T) -> Self {
        self.outlook_calendar_id = Some(v.into());
        self
    }

    /// Sets the [ignore_business_hours][ResourceOptions::ignore_business_hours] field.
    pub fn set_ignore_business_hours(mut self, v: bool) -> Self {
        self.ignore_business_hours = v;
        self
    }

    /// Sets the [gender][ResourceOptions::gender] field.
    pub fn set_gender<T: Into<String>>(mut self, v: T) -> Self {
        self.gender = Some(v.into());
        self
    }

    /// Sets the [hourly][ResourceOptions::hourly] field.
    pub fn set_hourly(mut self, v: i32) -> Self {
        self.hourly = Some(v);
        self
    }

    /// Sets the [calendar_availability][ResourceOptions::calendar_availability] field.
    pub fn set_calendar_availability(mut self, v: i32) -> Self {
        self.calendar_availability = Some(v);
        self
    }

    /// Sets the [sort_key][ResourceOptions::sort_key] field.
    pub fn set_sort_key(mut self, v: i32) -> Self {
        self.sort_key = Some(v);
        self
    }

    /// Sets the [bio_link][ResourceOptions::bio_link] field.
    pub fn set_bio_link<T: Into<String>>(mut self, v: T) -> Self {
        self.bio_link = Some(v.into());
        self
    }

    fn validate(&self) -> gax::Result<()> {
        check_optional(&self.effective_date, "effectiveDate", temporal::DATE_TIME)
    }
}

/// The payload for [create_service][crate::client::Client::create_service].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    /// The duration of the service in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_group_id: Option<String>,
    /// Make the service visible to consumers.
    #[serde(skip_serializing_if = "is_false", serialize_with = "flag::serialize")]
    pub public: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub options: Option<ServiceOptions>,
    #[serde(skip_serializing_if = "is_unset")]
    pub fee: Option<ServiceFee>,
}

impl CreateServiceRequest {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, description: D) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            duration: None,
            location_id: None,
            service_group_id: None,
            public: false,
            options: None,
            fee: None,
        }
    }

    /// Sets the [duration][CreateServiceRequest::duration] field.
    pub fn set_duration(mut self, v: i32) -> Self {
        self.duration = Some(v);
        self
    }

    /// Sets the [location_id][CreateServiceRequest::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [service_group_id][CreateServiceRequest::service_group_id] field.
    pub fn set_service_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.service_group_id = Some(v.into());
        self
    }

    /// Sets the [public][CreateServiceRequest::public] field.
    pub fn set_public(mut self, v: bool) -> Self {
        self.public = v;
        self
    }

    /// Sets the [options][CreateServiceRequest::options] field.
    pub fn set_options(mut self, v: ServiceOptions) -> Self {
        self.options = Some(v);
        self
    }

    /// Sets the [fee][CreateServiceRequest::fee] field.
    pub fn set_fee(mut self, v: ServiceFee) -> Self {
        self.fee = Some(v);
        self
    }
}

/// The booking options of a service.
///
/// All the members are sent once any of them is set, flags are sent as
/// `"true"` or `"false"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceOptions {
    pub duration_interval: i32,
    pub duration_min: i32,
    pub duration_max: i32,
    pub padding: i32,
    /// Let customers choose the duration of the appointment.
    #[serde(serialize_with = "flag::serialize")]
    pub duration_select: bool,
    /// Make this the default service.
    #[serde(rename = "durationService", serialize_with = "flag::serialize")]
    pub default_service: bool,
    #[serde(serialize_with = "flag::serialize")]
    pub consumer_padding: bool,
}

impl ServiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [duration_interval][ServiceOptions::duration_interval] field.
    pub fn set_duration_interval(mut self, v: i32) -> Self {
        self.duration_interval = v;
        self
    }

    /// Sets the [duration_min][ServiceOptions::duration_min] field.
    pub fn set_duration_min(mut self, v: i32) -> Self {
        self.duration_min = v;
        self
    }

    /// Sets the [duration_max][ServiceOptions::duration_max] field.
    pub fn set_duration_max(mut self, v: i32) -> Self {
        self.duration_max = v;
        self
    }

    /// Sets the [padding][ServiceOptions::padding] field.
    pub fn set_padding(mut self, v: i32) -> Self {
        self.padding = v;
        self
    }

    /// Sets the [duration_select][ServiceOptions::duration_select] field.
    pub fn set_duration_select(mut self, v: bool) -> Self {
        self.duration_select = v;
        self
    }

    /// Sets the [default_service][ServiceOptions::default_service] field.
    pub fn set_default_service(mut self, v: bool) -> Self {
        self.default_service = v;
        self
    }

    /// Sets the [consumer_padding][ServiceOptions::consumer_padding] field.
    pub fn set_consumer_padding(mut self, v: bool) -> Self {
        self.consumer_padding = v;
        self
    }
}

/// The fees of a service.
///
/// All the members are sent once any of them is set, flags are sent as
/// `"true"` or `"false"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceFee {
    pub fee_amount: f64,
    pub cancellation_fee_amount: f64,
    #[serde(serialize_with = "flag::serialize")]
    pub fee_taxable: bool,
    #[serde(serialize_with = "flag::serialize")]
    pub cancellation_fee_taxable: bool,
    #[serde(serialize_with = "flag::serialize")]
    pub non_refundable: bool,
}

impl ServiceFee {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [fee_amount][ServiceFee::fee_amount] field.
    pub fn set_fee_amount(mut self, v: f64) -> Self {
        self.fee_amount = v;
        self
    }

    /// Sets the [cancellation_fee_amount][ServiceFee::cancellation_fee_amount] field.
    pub fn set_cancellation_fee_amount(mut self, v: f64) -> Self {
        self.cancellation_fee_amount = v;
        self
    }

    /// Sets the [fee_taxable][ServiceFee::fee_taxable] field.
    pub fn set_fee_taxable(mut self, v: bool) -> Self {
        self.fee_taxable = v;
        self
    }

    /// Sets the [cancellation_fee_taxable][ServiceFee::cancellation_fee_taxable] field.
    pub fn set_cancellation_fee_taxable(mut self, v: bool) -> Self {
        self.cancellation_fee_taxable = v;
        self
    }

    /// Sets the [non_refundable][ServiceFee::non_refundable] field.
    pub fn set_non_refundable(mut self, v: bool) -> Self {
        self.non_refundable = v;
        self
    }
}

/// Filters for [service_allocations][crate::client::Client::service_allocations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceAllocationsQuery {
    pub service_id: String,
    pub location_id: Option<String>,
    /// Accepts dates, date-times, or pre-formatted strings.
    pub start_date: Option<Temporal>,
    /// Accepts dates, date-times, or pre-formatted strings.
    pub end_date: Option<Temporal>,
}

impl ServiceAllocationsQuery {
    pub fn new<T: Into<String>>(service_id: T) -> Self {
        Self {
            service_id: service_id.into(),
            ..Default::default()
        }
    }

    /// Sets the [location_id][ServiceAllocationsQuery::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [start_date][ServiceAllocationsQuery::start_date] field.
    pub fn set_start_date<T: Into<Temporal>>(mut self, v: T) -> Self {
        self.start_date = Some(v.into());
        self
    }

    /// Sets the [end_date][ServiceAllocationsQuery::end_date] field.
    pub fn set_end_date<T: Into<Temporal>>(mut self, v: T) -> Self {
        self.end_date = Some(v.into());
        self
    }

    pub(crate) fn to_query(&self) -> gax::Result<QueryParameters> {
        let start = format_optional(&self.start_date, "startDate", temporal::ANY)?;
        let end = format_optional(&self.end_date, "endDate", temporal::ANY)?;
        Ok(QueryParameters::new()
            .add("locationId", &self.location_id)
            .add("startDate", start)
            .add("endDate", end))
    }
}

/// The payload for [create_service_allocation][crate::client::Client::create_service_allocation].
///
/// The start and end dates accept dates or pre-formatted strings. The start
/// and end times use the `HHMM` format.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateServiceAllocationRequest {
    /// The service, sent as part of the request path.
    #[serde(skip)]
    pub service_id: String,
    pub start_date: Temporal,
    pub end_date: Temporal,
    pub start_time: i32,
    pub end_time: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "is_false", serialize_with = "flag::serialize")]
    pub all_day: bool,
}

impl CreateServiceAllocationRequest {
    pub fn new<S, T, U>(
        service_id: S,
        start_date: T,
        end_date: U,
        start_time: i32,
        end_time: i32,
    ) -> Self
    where
        S: Into<String>,
        T: Into<Temporal>,
        U: Into<Temporal>,
    {
        Self {
            service_id: service_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            start_time,
            end_time,
            location_id: None,
            resource_id: None,
            reason: None,
            all_day: false,
        }
    }

    /// Sets the [location_id][CreateServiceAllocationRequest::location_id] field.
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets the [resource_id][CreateServiceAllocationRequest::resource_id] field.
    pub fn set_resource_id<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_id = Some(v.into());
        self
    }

    /// Sets the [reason][CreateServiceAllocationRequest::reason] field.
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    /// Sets the [all_day][CreateServiceAllocationRequest::all_day] field.
    pub fn set_all_day(mut self, v: bool) -> Self {
        self.all_day = v;
        self
    }

    pub(crate) fn validate(&self) -> gax::Result<()> {
        self.start_date.check("startDate", temporal::DATE)?;
        self.end_date.check("endDate", temporal::DATE)
    }
}
