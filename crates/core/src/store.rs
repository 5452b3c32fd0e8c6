// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence seam the lifecycle manager operates through.
//!
//! [`BookingStore`] names exactly the store operations the lifecycle
//! needs. The production implementation is `servis_store::Store`; a
//! stricter or instrumented store can stand in without the lifecycle
//! noticing.

use servis_domain::{BookingDetail, NewBookingRow};
use servis_store::{Store, StoreError, TimelineWrite};

/// Store operations required by the booking lifecycle manager.
pub trait BookingStore {
    /// Inserts or updates a customer keyed by phone number, returning
    /// the customer's row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn upsert_customer_by_phone(
        &mut self,
        phone: &str,
        name: &str,
        email: &str,
        address: &str,
    ) -> Result<i64, StoreError>;

    /// Inserts a booking row and returns its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_booking(&mut self, row: &NewBookingRow) -> Result<String, StoreError>;

    /// Returns a booking's stored status, or `None` if it does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn booking_status(&mut self, booking_id: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites a booking's status.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn update_booking_status(&mut self, booking_id: &str, status: &str)
    -> Result<(), StoreError>;

    /// Overwrites a booking's technician reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn update_booking_technician(
        &mut self,
        booking_id: &str,
        technician_id: i64,
    ) -> Result<(), StoreError>;

    /// Overwrites a booking's actual cost.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn update_booking_actual_cost(
        &mut self,
        booking_id: &str,
        actual_cost: &str,
    ) -> Result<(), StoreError>;

    /// Hard-deletes a booking row, returning the number of rows
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_booking(&mut self, booking_id: &str) -> Result<usize, StoreError>;

    /// Fetches a single booking with all joins.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_booking_detail(
        &mut self,
        booking_id: &str,
    ) -> Result<Option<BookingDetail>, StoreError>;

    /// Lists every booking with active catalog references, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_booking_details(&mut self) -> Result<Vec<BookingDetail>, StoreError>;

    /// Records a status timeline entry (insert or re-mark completed).
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    fn record_status_entry(
        &mut self,
        booking_id: &str,
        status: &str,
        title: &str,
        description: &str,
    ) -> Result<TimelineWrite, StoreError>;

    /// Appends a timeline entry unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn append_timeline_entry(
        &mut self,
        booking_id: &str,
        status: &str,
        title: &str,
        description: &str,
    ) -> Result<(), StoreError>;

    /// Deletes every timeline entry for a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_timeline_entries(&mut self, booking_id: &str) -> Result<usize, StoreError>;

    /// Resolves an active brand name to its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_brand_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError>;

    /// Resolves an active model name to its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_model_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError>;

    /// Resolves an active problem category name to its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_category_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError>;

    /// Picks an available active technician, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_available_technician_id(&mut self) -> Result<Option<i64>, StoreError>;

    /// Returns the name of an active technician by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn technician_name(&mut self, technician_id: i64) -> Result<Option<String>, StoreError>;
}

impl BookingStore for Store {
    fn upsert_customer_by_phone(
        &mut self,
        phone: &str,
        name: &str,
        email: &str,
        address: &str,
    ) -> Result<i64, StoreError> {
        Self::upsert_customer_by_phone(self, phone, name, email, address)
    }

    fn insert_booking(&mut self, row: &NewBookingRow) -> Result<String, StoreError> {
        Self::insert_booking(self, row)
    }

    fn booking_status(&mut self, booking_id: &str) -> Result<Option<String>, StoreError> {
        Self::booking_status(self, booking_id)
    }

    fn update_booking_status(
        &mut self,
        booking_id: &str,
        status: &str,
    ) -> Result<(), StoreError> {
        Self::update_booking_status(self, booking_id, status)
    }

    fn update_booking_technician(
        &mut self,
        booking_id: &str,
        technician_id: i64,
    ) -> Result<(), StoreError> {
        Self::update_booking_technician(self, booking_id, technician_id)
    }

    fn update_booking_actual_cost(
        &mut self,
        booking_id: &str,
        actual_cost: &str,
    ) -> Result<(), StoreError> {
        Self::update_booking_actual_cost(self, booking_id, actual_cost)
    }

    fn delete_booking(&mut self, booking_id: &str) -> Result<usize, StoreError> {
        Self::delete_booking(self, booking_id)
    }

    fn get_booking_detail(
        &mut self,
        booking_id: &str,
    ) -> Result<Option<BookingDetail>, StoreError> {
        Self::get_booking_detail(self, booking_id)
    }

    fn list_booking_details(&mut self) -> Result<Vec<BookingDetail>, StoreError> {
        Self::list_booking_details(self)
    }

    fn record_status_entry(
        &mut self,
        booking_id: &str,
        status: &str,
        title: &str,
        description: &str,
    ) -> Result<TimelineWrite, StoreError> {
        Self::record_status_entry(self, booking_id, status, title, description)
    }

    fn append_timeline_entry(
        &mut self,
        booking_id: &str,
        status: &str,
        title: &str,
        description: &str,
    ) -> Result<(), StoreError> {
        Self::append_timeline_entry(self, booking_id, status, title, description)
    }

    fn delete_timeline_entries(&mut self, booking_id: &str) -> Result<usize, StoreError> {
        Self::delete_timeline_entries(self, booking_id)
    }

    fn find_brand_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError> {
        Self::find_brand_id_by_name(self, name)
    }

    fn find_model_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError> {
        Self::find_model_id_by_name(self, name)
    }

    fn find_category_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError> {
        Self::find_category_id_by_name(self, name)
    }

    fn find_available_technician_id(&mut self) -> Result<Option<i64>, StoreError> {
        Self::find_available_technician_id(self)
    }

    fn technician_name(&mut self, technician_id: i64) -> Result<Option<String>, StoreError> {
        Self::technician_name(self, technician_id)
    }
}
