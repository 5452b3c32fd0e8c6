// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence for the Servis booking backend.
//!
//! This crate owns the schema, migrations, and every query and
//! mutation the service runs. It is built on Diesel with an embedded
//! migration set, so a fresh database file (or an in-memory database
//! in tests) is fully usable after construction with no external
//! tooling.
//!
//! The public surface is the [`Store`] adapter: one method per
//! operation, each delegating to a monomorphic function in `queries/`
//! or `mutations/`. Timestamps are stored as RFC 3339 UTC strings.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases. Each
//! `Store::new_in_memory()` call receives a sequential ID from an
//! atomic counter, so parallel tests never collide.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use servis_domain::{
    BookingDetail, BrandWithModels, CategoryWithProblems, GalleryImageRecord, NewBookingRow,
    TechnicianRecord, TimelineEvent,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

mod backend;
mod error;
mod mutations;
mod queries;
mod schema;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use mutations::TimelineWrite;
pub use mutations::catalog::{GalleryImageChanges, TechnicianChanges};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// parallel tests get isolated databases without time-based collisions.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Current UTC time as an RFC 3339 string.
///
/// All stored timestamps go through this single formatter.
pub(crate) fn now_utc() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}

/// `SQLite`-backed store adapter.
///
/// Owns a single connection; callers serialize access (the server
/// wraps the store in a mutex).
pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Creates a store backed by an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via an atomic
    /// counter, ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, StoreError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:servis_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a file-based `SQLite` database.
    ///
    /// Enables WAL mode for better read concurrency.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path_str = path
            .as_ref()
            .to_str()
            .ok_or_else(|| StoreError::InitializationError("Invalid database path".to_string()))?;

        let mut conn = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Inserts or updates a customer keyed by phone number, returning
    /// the customer's row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_customer_by_phone(
        &mut self,
        phone: &str,
        name: &str,
        email: &str,
        address: &str,
    ) -> Result<i64, StoreError> {
        mutations::bookings::upsert_customer_by_phone(&mut self.conn, phone, name, email, address)
    }

    /// Inserts a booking row and returns its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_booking(&mut self, row: &NewBookingRow) -> Result<String, StoreError> {
        mutations::bookings::insert_booking(&mut self.conn, row)
    }

    /// Returns a booking's stored status string, or `None` if the
    /// booking does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn booking_status(&mut self, booking_id: &str) -> Result<Option<String>, StoreError> {
        queries::bookings::booking_status(&mut self.conn, booking_id)
    }

    /// Overwrites a booking's status.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_booking_status(
        &mut self,
        booking_id: &str,
        status: &str,
    ) -> Result<(), StoreError> {
        mutations::bookings::update_booking_status(&mut self.conn, booking_id, status)
    }

    /// Overwrites a booking's technician reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_booking_technician(
        &mut self,
        booking_id: &str,
        technician_id: i64,
    ) -> Result<(), StoreError> {
        mutations::bookings::update_booking_technician(&mut self.conn, booking_id, technician_id)
    }

    /// Overwrites a booking's actual cost.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_booking_actual_cost(
        &mut self,
        booking_id: &str,
        actual_cost: &str,
    ) -> Result<(), StoreError> {
        mutations::bookings::update_booking_actual_cost(&mut self.conn, booking_id, actual_cost)
    }

    /// Hard-deletes a booking row, returning the number of rows
    /// removed.
    ///
    /// Timeline entries must be deleted first to satisfy the foreign
    /// key.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_booking(&mut self, booking_id: &str) -> Result<usize, StoreError> {
        mutations::bookings::delete_booking(&mut self.conn, booking_id)
    }

    /// Fetches a single booking with all joins by its exact
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking_detail(
        &mut self,
        booking_id: &str,
    ) -> Result<Option<BookingDetail>, StoreError> {
        queries::bookings::get_booking_detail(&mut self.conn, booking_id)
    }

    /// Lists every booking with active catalog references, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_booking_details(&mut self) -> Result<Vec<BookingDetail>, StoreError> {
        queries::bookings::list_booking_details(&mut self.conn)
    }

    // ========================================================================
    // Timeline
    // ========================================================================

    /// Records a status timeline entry, inserting on first visit and
    /// re-marking completed on re-entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn record_status_entry(
        &mut self,
        booking_id: &str,
        status: &str,
        title: &str,
        description: &str,
    ) -> Result<TimelineWrite, StoreError> {
        mutations::timeline::record_status_entry(
            &mut self.conn,
            booking_id,
            status,
            title,
            description,
        )
    }

    /// Appends a timeline entry unconditionally (synthetic labels).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_timeline_entry(
        &mut self,
        booking_id: &str,
        status: &str,
        title: &str,
        description: &str,
    ) -> Result<(), StoreError> {
        mutations::timeline::append_timeline_entry(
            &mut self.conn,
            booking_id,
            status,
            title,
            description,
        )
    }

    /// Deletes every timeline entry for a booking, returning the
    /// number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_timeline_entries(&mut self, booking_id: &str) -> Result<usize, StoreError> {
        mutations::timeline::delete_timeline_entries(&mut self.conn, booking_id)
    }

    /// Loads the full timeline for a booking in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn timeline_for(&mut self, booking_id: &str) -> Result<Vec<TimelineEvent>, StoreError> {
        queries::bookings::timeline_for(&mut self.conn, booking_id)
    }

    // ========================================================================
    // Catalog reads
    // ========================================================================

    /// Lists active printer brands with their active models, ordered
    /// by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_brands(&mut self) -> Result<Vec<BrandWithModels>, StoreError> {
        queries::catalog::list_brands(&mut self.conn)
    }

    /// Lists active problem categories with their active problems,
    /// ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_categories(&mut self) -> Result<Vec<CategoryWithProblems>, StoreError> {
        queries::catalog::list_categories(&mut self.conn)
    }

    /// Lists active technicians.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_technicians(&mut self) -> Result<Vec<TechnicianRecord>, StoreError> {
        queries::catalog::list_technicians(&mut self.conn)
    }

    /// Lists active gallery images by sort order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_gallery_images(&mut self) -> Result<Vec<GalleryImageRecord>, StoreError> {
        queries::catalog::list_gallery_images(&mut self.conn)
    }

    /// Resolves an active brand name to its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_brand_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError> {
        queries::catalog::find_brand_id_by_name(&mut self.conn, name)
    }

    /// Resolves an active model name to its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_model_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError> {
        queries::catalog::find_active_model_id_by_name(&mut self.conn, name)
    }

    /// Resolves an active problem category name to its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_category_id_by_name(&mut self, name: &str) -> Result<Option<i64>, StoreError> {
        queries::catalog::find_category_id_by_name(&mut self.conn, name)
    }

    /// Picks an available active technician, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_available_technician_id(&mut self) -> Result<Option<i64>, StoreError> {
        queries::catalog::find_available_technician_id(&mut self.conn)
    }

    /// Returns the name of an active technician by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn technician_name(&mut self, technician_id: i64) -> Result<Option<String>, StoreError> {
        queries::catalog::technician_name(&mut self.conn, technician_id)
    }

    // ========================================================================
    // Catalog writes
    // ========================================================================

    /// Inserts a printer brand, returning its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_brand(&mut self, name: &str) -> Result<i64, StoreError> {
        mutations::catalog::add_brand(&mut self.conn, name)
    }

    /// Renames a printer brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn rename_brand(&mut self, brand_id: i64, name: &str) -> Result<(), StoreError> {
        mutations::catalog::rename_brand(&mut self.conn, brand_id, name)
    }

    /// Soft-deletes a printer brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn deactivate_brand(&mut self, brand_id: i64) -> Result<(), StoreError> {
        mutations::catalog::deactivate_brand(&mut self.conn, brand_id)
    }

    /// Inserts a printer model under a brand, returning its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_model(
        &mut self,
        brand_id: i64,
        name: &str,
        model_type: &str,
    ) -> Result<i64, StoreError> {
        mutations::catalog::add_model(&mut self.conn, brand_id, name, model_type)
    }

    /// Updates a printer model's name and type.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_model(
        &mut self,
        model_id: i64,
        name: &str,
        model_type: &str,
    ) -> Result<(), StoreError> {
        mutations::catalog::update_model(&mut self.conn, model_id, name, model_type)
    }

    /// Soft-deletes a printer model.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn deactivate_model(&mut self, model_id: i64) -> Result<(), StoreError> {
        mutations::catalog::deactivate_model(&mut self.conn, model_id)
    }

    /// Inserts a problem category, returning its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_category(&mut self, name: &str, icon: &str) -> Result<i64, StoreError> {
        mutations::catalog::add_category(&mut self.conn, name, icon)
    }

    /// Updates a problem category's name and icon.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_category(
        &mut self,
        category_id: i64,
        name: &str,
        icon: &str,
    ) -> Result<(), StoreError> {
        mutations::catalog::update_category(&mut self.conn, category_id, name, icon)
    }

    /// Soft-deletes a problem category.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn deactivate_category(&mut self, category_id: i64) -> Result<(), StoreError> {
        mutations::catalog::deactivate_category(&mut self.conn, category_id)
    }

    /// Inserts a problem under a category, returning its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_problem(
        &mut self,
        category_id: i64,
        name: &str,
        description: &str,
        severity: &str,
        estimated_time: &str,
        estimated_cost: &str,
    ) -> Result<i64, StoreError> {
        mutations::catalog::add_problem(
            &mut self.conn,
            category_id,
            name,
            description,
            severity,
            estimated_time,
            estimated_cost,
        )
    }

    /// Updates a problem's descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_problem(
        &mut self,
        problem_id: i64,
        name: &str,
        description: &str,
        severity: &str,
        estimated_time: &str,
        estimated_cost: &str,
    ) -> Result<(), StoreError> {
        mutations::catalog::update_problem(
            &mut self.conn,
            problem_id,
            name,
            description,
            severity,
            estimated_time,
            estimated_cost,
        )
    }

    /// Soft-deletes a problem.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn deactivate_problem(&mut self, problem_id: i64) -> Result<(), StoreError> {
        mutations::catalog::deactivate_problem(&mut self.conn, problem_id)
    }

    /// Inserts a technician, returning its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub fn add_technician(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
        specialization: &[String],
        experience: i32,
        rating: f32,
    ) -> Result<i64, StoreError> {
        mutations::catalog::add_technician(
            &mut self.conn,
            name,
            phone,
            email,
            specialization,
            experience,
            rating,
        )
    }

    /// Applies a partial update to a technician.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_technician(
        &mut self,
        technician_id: i64,
        changes: &TechnicianChanges,
    ) -> Result<(), StoreError> {
        mutations::catalog::update_technician(&mut self.conn, technician_id, changes)
    }

    /// Soft-deletes a technician.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn deactivate_technician(&mut self, technician_id: i64) -> Result<(), StoreError> {
        mutations::catalog::deactivate_technician(&mut self.conn, technician_id)
    }

    /// Inserts a gallery image, returning its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_gallery_image(
        &mut self,
        title: &str,
        alt_text: &str,
        image_url: &str,
        category: &str,
        sort_order: i32,
    ) -> Result<i64, StoreError> {
        mutations::catalog::add_gallery_image(
            &mut self.conn,
            title,
            alt_text,
            image_url,
            category,
            sort_order,
        )
    }

    /// Applies a partial update to a gallery image.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_gallery_image(
        &mut self,
        image_id: i64,
        changes: &GalleryImageChanges,
    ) -> Result<(), StoreError> {
        mutations::catalog::update_gallery_image(&mut self.conn, image_id, changes)
    }

    /// Soft-deletes a gallery image.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn deactivate_gallery_image(&mut self, image_id: i64) -> Result<(), StoreError> {
        mutations::catalog::deactivate_gallery_image(&mut self.conn, image_id)
    }
}
