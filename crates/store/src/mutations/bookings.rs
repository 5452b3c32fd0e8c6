// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and customer writes.

use diesel::SqliteConnection;
use diesel::prelude::*;
use servis_domain::NewBookingRow;
use tracing::info;

use crate::backend::get_last_insert_rowid;
use crate::error::StoreError;
use crate::now_utc;
use crate::schema::{bookings, customers};

/// Normalizes an optional text field: empty input is stored as NULL.
fn optional_text(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Generates a fresh booking identifier.
///
/// Uppercase so that case-normalized lookups hit directly.
fn generate_booking_id() -> String {
    format!("SRV-{:08X}", rand::random::<u32>())
}

/// Inserts or updates a customer keyed by phone number.
///
/// An existing customer's name, email and address are overwritten; a
/// new phone number inserts a new row. This is an upsert by natural
/// key, not an atomic operation: concurrent identical-phone
/// submissions can race. The unique constraint on `phone` turns that
/// race into an error rather than a duplicate row.
///
/// # Errors
///
/// Returns an error if the lookup, update or insert fails.
pub fn upsert_customer_by_phone(
    conn: &mut SqliteConnection,
    phone: &str,
    name: &str,
    email: &str,
    address: &str,
) -> Result<i64, StoreError> {
    let existing: Option<i64> = customers::table
        .filter(customers::phone.eq(phone))
        .select(customers::customer_id)
        .first::<i64>(conn)
        .optional()?;

    if let Some(customer_id) = existing {
        diesel::update(customers::table.filter(customers::customer_id.eq(customer_id)))
            .set((
                customers::name.eq(name),
                customers::email.eq(optional_text(email)),
                customers::address.eq(optional_text(address)),
            ))
            .execute(conn)?;
        info!(customer_id, "Updated existing customer by phone");
        return Ok(customer_id);
    }

    diesel::insert_into(customers::table)
        .values((
            customers::name.eq(name),
            customers::phone.eq(phone),
            customers::email.eq(optional_text(email)),
            customers::address.eq(optional_text(address)),
            customers::created_at.eq(now_utc()),
        ))
        .execute(conn)?;
    let customer_id = get_last_insert_rowid(conn)?;
    info!(customer_id, "Created new customer");
    Ok(customer_id)
}

/// Inserts a booking row with a generated identifier.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    row: &NewBookingRow,
) -> Result<String, StoreError> {
    let booking_id = generate_booking_id();
    let now = now_utc();

    diesel::insert_into(bookings::table)
        .values((
            bookings::booking_id.eq(&booking_id),
            bookings::customer_id.eq(row.customer_id),
            bookings::brand_id.eq(row.brand_id),
            bookings::model_id.eq(row.model_id),
            bookings::category_id.eq(row.category_id),
            bookings::technician_id.eq(row.technician_id),
            bookings::problem_description.eq(&row.problem_description),
            bookings::service_type.eq(&row.service_type),
            bookings::appointment_date.eq(&row.appointment_date),
            bookings::appointment_time.eq(&row.appointment_time),
            bookings::status.eq(&row.status),
            bookings::estimated_cost.eq(&row.estimated_cost),
            bookings::notes.eq(&row.notes),
            bookings::created_at.eq(&now),
            bookings::updated_at.eq(&now),
        ))
        .execute(conn)?;

    info!(booking_id = %booking_id, "Inserted booking");
    Ok(booking_id)
}

/// Overwrites a booking's status and refreshes `updated_at`.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_booking_status(
    conn: &mut SqliteConnection,
    booking_id: &str,
    status: &str,
) -> Result<(), StoreError> {
    diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::status.eq(status),
            bookings::updated_at.eq(now_utc()),
        ))
        .execute(conn)?;
    Ok(())
}

/// Overwrites a booking's technician reference and refreshes
/// `updated_at`.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_booking_technician(
    conn: &mut SqliteConnection,
    booking_id: &str,
    technician_id: i64,
) -> Result<(), StoreError> {
    diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::technician_id.eq(Some(technician_id)),
            bookings::updated_at.eq(now_utc()),
        ))
        .execute(conn)?;
    Ok(())
}

/// Overwrites a booking's actual cost and refreshes `updated_at`.
///
/// The cost is opaque display text; no numeric validation applies.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_booking_actual_cost(
    conn: &mut SqliteConnection,
    booking_id: &str,
    actual_cost: &str,
) -> Result<(), StoreError> {
    diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::actual_cost.eq(Some(actual_cost)),
            bookings::updated_at.eq(now_utc()),
        ))
        .execute(conn)?;
    Ok(())
}

/// Hard-deletes a booking row.
///
/// Bookings are operational records, not catalog reference data, so
/// they are removed outright rather than soft-deleted. Timeline
/// entries must be deleted first to satisfy the foreign key.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_booking(conn: &mut SqliteConnection, booking_id: &str) -> Result<usize, StoreError> {
    Ok(
        diesel::delete(bookings::table.filter(bookings::booking_id.eq(booking_id)))
            .execute(conn)?,
    )
}
