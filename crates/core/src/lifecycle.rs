// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking lifecycle manager.
//!
//! Every operation takes an explicit store handle; there is no hidden
//! global connection. Primary mutations are fatal on failure; the
//! follow-up timeline write and the optional catalog lookups degrade
//! into [`Warning`]s on the returned [`Outcome`].

use servis_domain::{
    BookingDetail, BookingRequest, BookingStatus, DROP_OFF_SERVICE, NewBookingRow, TimelineLabel,
    estimate_cost, normalize_booking_id, status_copy,
};
use servis_store::StoreError;
use tracing::{info, warn};

use crate::error::CoreError;
use crate::outcome::{Outcome, Warning};
use crate::store::BookingStore;

pub use servis_domain::TransitionPolicy;

/// Timeline copy for technician assignment entries.
const ASSIGNED_TITLE: &str = "Teknisi Ditugaskan";

/// Timeline copy for actual-cost entries.
const COST_UPDATED_TITLE: &str = "Biaya Diperbarui";

/// Placeholder used in assignment copy when the technician name
/// cannot be resolved.
const UNKNOWN_TECHNICIAN: &str = "Unknown";

/// What a status change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The booking was already in the requested status; nothing was
    /// written.
    AlreadySet,
    /// The status was updated and the timeline entry recorded.
    Applied,
}

/// Booking lifecycle manager over an explicit store handle.
pub struct BookingLifecycle<'a, S: BookingStore> {
    store: &'a mut S,
    policy: TransitionPolicy,
}

impl<'a, S: BookingStore> BookingLifecycle<'a, S> {
    /// Creates a lifecycle manager with the default (permissive)
    /// transition policy.
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            policy: TransitionPolicy::default(),
        }
    }

    /// Creates a lifecycle manager with an explicit transition policy.
    pub fn with_policy(store: &'a mut S, policy: TransitionPolicy) -> Self {
        Self { store, policy }
    }

    /// Creates a booking from a submitted form.
    ///
    /// The customer is upserted by phone number; brand, model and
    /// category names resolve against the catalog, degrading to null
    /// references on a miss; the first available technician is
    /// auto-assigned if one exists. The estimated cost comes from the
    /// problem category. The booking starts `pending` with one
    /// timeline entry.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the customer upsert or
    /// booking insert fails. Lookup and timeline failures degrade to
    /// warnings.
    pub fn create_booking(
        &mut self,
        request: &BookingRequest,
    ) -> Result<Outcome<String>, CoreError> {
        request.validate()?;
        let mut warnings = Vec::new();

        let customer_id = self.store.upsert_customer_by_phone(
            request.phone.trim(),
            request.customer_name.trim(),
            &request.email,
            &request.address,
        )?;

        let brand_id = self.resolve_reference(
            "brand_lookup",
            &request.printer_brand,
            &mut warnings,
            BookingStore::find_brand_id_by_name,
        );
        let model_id = self.resolve_reference(
            "model_lookup",
            &request.printer_model,
            &mut warnings,
            BookingStore::find_model_id_by_name,
        );
        let category_id = self.resolve_reference(
            "category_lookup",
            &request.problem_category,
            &mut warnings,
            BookingStore::find_category_id_by_name,
        );

        let technician_id = match self.store.find_available_technician_id() {
            Ok(Some(id)) => Some(id),
            Ok(None) => {
                push_warning(
                    &mut warnings,
                    "technician_pool",
                    "No technician is currently available",
                );
                None
            }
            Err(err) => {
                push_warning(&mut warnings, "technician_pool", err.to_string());
                None
            }
        };

        let row = NewBookingRow {
            customer_id,
            brand_id,
            model_id,
            category_id,
            technician_id,
            problem_description: request.problem_description.clone(),
            service_type: String::from(DROP_OFF_SERVICE),
            appointment_date: request.appointment_date.clone(),
            appointment_time: request.appointment_time.clone(),
            status: String::from(BookingStatus::Pending.as_str()),
            estimated_cost: String::from(estimate_cost(&request.problem_category)),
            notes: request.notes.clone(),
        };
        let booking_id = self.store.insert_booking(&row)?;

        let copy = status_copy(BookingStatus::Pending.as_str());
        self.record_timeline(
            &booking_id,
            BookingStatus::Pending.as_str(),
            &copy.title,
            &copy.description,
            &mut warnings,
        );

        info!(booking_id = %booking_id, customer_id, "Created booking");
        Ok(Outcome::with_warnings(booking_id, warnings))
    }

    /// Changes a booking's status.
    ///
    /// A no-op when the booking is already in the requested status.
    /// Otherwise the status column is overwritten and the timeline
    /// entry recorded through the deduplicating store write: a first
    /// visit inserts, a re-entry marks the existing entry completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist, the transition
    /// policy rejects the change, or the status update fails. A
    /// timeline failure after the update degrades to a warning.
    pub fn set_status(
        &mut self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Outcome<StatusChange>, CoreError> {
        let booking_id = normalize_booking_id(booking_id);
        let mut warnings = Vec::new();

        let stored = self
            .store
            .booking_status(&booking_id)?
            .ok_or_else(|| CoreError::BookingNotFound(booking_id.clone()))?;

        // The status column is plain text; a value outside the known
        // set skips the policy check rather than wedging the booking.
        match stored.parse::<BookingStatus>() {
            Ok(current) if current == status => {
                return Ok(Outcome::with_warnings(StatusChange::AlreadySet, warnings));
            }
            Ok(current) => {
                if !self.policy.allows(current, status) {
                    return Err(CoreError::TransitionDenied {
                        from: current,
                        to: status,
                    });
                }
            }
            Err(_) => {
                push_warning(
                    &mut warnings,
                    "status_parse",
                    format!("Stored status {stored:?} is not a known status"),
                );
            }
        }

        self.store
            .update_booking_status(&booking_id, status.as_str())?;

        let copy = status_copy(status.as_str());
        self.record_timeline(
            &booking_id,
            status.as_str(),
            &copy.title,
            &copy.description,
            &mut warnings,
        );

        info!(booking_id = %booking_id, status = %status, "Updated booking status");
        Ok(Outcome::with_warnings(StatusChange::Applied, warnings))
    }

    /// Assigns a technician to a booking.
    ///
    /// Overwrites any previous assignment and appends an `assigned`
    /// timeline entry naming the technician. Repeated assignments
    /// append repeated entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the update
    /// fails. Name-lookup and timeline failures degrade to warnings,
    /// with an "Unknown" placeholder in the timeline copy.
    pub fn assign_technician(
        &mut self,
        booking_id: &str,
        technician_id: i64,
    ) -> Result<Outcome<String>, CoreError> {
        let booking_id = normalize_booking_id(booking_id);
        let mut warnings = Vec::new();

        self.ensure_exists(&booking_id)?;
        self.store
            .update_booking_technician(&booking_id, technician_id)?;

        let technician = match self.store.technician_name(technician_id) {
            Ok(Some(name)) => name,
            Ok(None) => String::from(UNKNOWN_TECHNICIAN),
            Err(err) => {
                push_warning(&mut warnings, "technician_lookup", err.to_string());
                String::from(UNKNOWN_TECHNICIAN)
            }
        };

        let description =
            format!("Teknisi {technician} telah ditugaskan untuk menangani booking ini");
        self.append_timeline(
            &booking_id,
            TimelineLabel::Assigned,
            ASSIGNED_TITLE,
            &description,
            &mut warnings,
        );

        info!(booking_id = %booking_id, technician_id, "Assigned technician");
        Ok(Outcome::with_warnings(technician, warnings))
    }

    /// Records the actual cost of a finished repair.
    ///
    /// The cost is opaque display text. Appends a `cost_updated`
    /// timeline entry; repeated updates append repeated entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the update
    /// fails. A timeline failure degrades to a warning.
    pub fn record_actual_cost(
        &mut self,
        booking_id: &str,
        actual_cost: &str,
    ) -> Result<Outcome<()>, CoreError> {
        let booking_id = normalize_booking_id(booking_id);
        let mut warnings = Vec::new();

        self.ensure_exists(&booking_id)?;
        self.store
            .update_booking_actual_cost(&booking_id, actual_cost)?;

        let description = format!("Biaya aktual servis: {actual_cost}");
        self.append_timeline(
            &booking_id,
            TimelineLabel::CostUpdated,
            COST_UPDATED_TITLE,
            &description,
            &mut warnings,
        );

        info!(booking_id = %booking_id, "Recorded actual cost");
        Ok(Outcome::with_warnings((), warnings))
    }

    /// Deletes a booking and its timeline.
    ///
    /// Timeline entries go first to satisfy the foreign key; a failure
    /// there is logged and the booking delete still attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking delete fails or removes no
    /// rows.
    pub fn delete_booking(&mut self, booking_id: &str) -> Result<Outcome<()>, CoreError> {
        let booking_id = normalize_booking_id(booking_id);
        let mut warnings = Vec::new();

        if let Err(err) = self.store.delete_timeline_entries(&booking_id) {
            warn!(booking_id = %booking_id, error = %err, "Timeline delete failed");
            push_warning(&mut warnings, "timeline", err.to_string());
        }

        let deleted = self.store.delete_booking(&booking_id)?;
        if deleted == 0 {
            return Err(CoreError::BookingNotFound(booking_id));
        }

        info!(booking_id = %booking_id, "Deleted booking");
        Ok(Outcome::with_warnings((), warnings))
    }

    /// Fetches one booking with all joins by identifier
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the query
    /// fails.
    pub fn booking(&mut self, booking_id: &str) -> Result<BookingDetail, CoreError> {
        let booking_id = normalize_booking_id(booking_id);
        self.store
            .get_booking_detail(&booking_id)?
            .ok_or(CoreError::BookingNotFound(booking_id))
    }

    /// Lists every booking with active catalog references, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn bookings(&mut self) -> Result<Vec<BookingDetail>, CoreError> {
        Ok(self.store.list_booking_details()?)
    }

    /// Resolves a catalog name to a row ID, degrading a miss or a
    /// lookup failure to a warning.
    fn resolve_reference(
        &mut self,
        effect: &str,
        name: &str,
        warnings: &mut Vec<Warning>,
        lookup: fn(&mut S, &str) -> Result<Option<i64>, StoreError>,
    ) -> Option<i64> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        match lookup(self.store, name) {
            Ok(Some(id)) => Some(id),
            Ok(None) => {
                push_warning(warnings, effect, format!("No active match for {name:?}"));
                None
            }
            Err(err) => {
                push_warning(warnings, effect, err.to_string());
                None
            }
        }
    }

    /// Records a deduplicated status timeline entry, degrading a
    /// failure to a warning.
    fn record_timeline(
        &mut self,
        booking_id: &str,
        status: &str,
        title: &str,
        description: &str,
        warnings: &mut Vec<Warning>,
    ) {
        if let Err(err) = self
            .store
            .record_status_entry(booking_id, status, title, description)
        {
            warn!(booking_id = %booking_id, status, error = %err, "Timeline write failed");
            push_warning(warnings, "timeline", err.to_string());
        }
    }

    /// Appends a synthetic-label timeline entry, degrading a failure
    /// to a warning.
    fn append_timeline(
        &mut self,
        booking_id: &str,
        label: TimelineLabel,
        title: &str,
        description: &str,
        warnings: &mut Vec<Warning>,
    ) {
        if let Err(err) =
            self.store
                .append_timeline_entry(booking_id, label.as_str(), title, description)
        {
            warn!(booking_id = %booking_id, label = %label, error = %err, "Timeline write failed");
            push_warning(warnings, "timeline", err.to_string());
        }
    }

    fn ensure_exists(&mut self, booking_id: &str) -> Result<(), CoreError> {
        self.store
            .booking_status(booking_id)?
            .map(|_| ())
            .ok_or_else(|| CoreError::BookingNotFound(booking_id.to_string()))
    }
}

fn push_warning(warnings: &mut Vec<Warning>, effect: &str, detail: impl Into<String>) {
    let warning = Warning::new(effect, detail);
    warn!(effect = %warning.effect, detail = %warning.detail, "Operation degraded");
    warnings.push(warning);
}
