// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking reads: joined list/detail shaping and the timeline.
//!
//! The list view requires every referenced catalog row (brand, model,
//! category) to exist and be active; a booking referencing a
//! soft-deleted brand drops out of the list but remains reachable via
//! the detail lookup, where inactive references render as empty
//! strings.

use diesel::SqliteConnection;
use diesel::prelude::*;
use servis_domain::{BookingCustomer, BookingDetail, TimelineEvent, UNASSIGNED_TECHNICIAN};

use crate::error::StoreError;
use crate::schema::{
    booking_timeline, bookings, customers, printer_brands, printer_models, problem_categories,
    technicians,
};

/// The scalar booking columns every read selects.
type BookingCols = (
    String,         // booking_id
    String,         // problem_description
    String,         // service_type
    String,         // appointment_date
    String,         // appointment_time
    String,         // status
    String,         // estimated_cost
    Option<String>, // actual_cost
    String,         // notes
    String,         // created_at
);

/// The customer columns joined onto every read.
type CustomerCols = (String, String, Option<String>, Option<String>);

/// An optionally present catalog reference: name and active flag.
type CatalogRef = (Option<String>, Option<i32>);

const BOOKING_COLS: (
    bookings::booking_id,
    bookings::problem_description,
    bookings::service_type,
    bookings::appointment_date,
    bookings::appointment_time,
    bookings::status,
    bookings::estimated_cost,
    bookings::actual_cost,
    bookings::notes,
    bookings::created_at,
) = (
    bookings::booking_id,
    bookings::problem_description,
    bookings::service_type,
    bookings::appointment_date,
    bookings::appointment_time,
    bookings::status,
    bookings::estimated_cost,
    bookings::actual_cost,
    bookings::notes,
    bookings::created_at,
);

const CUSTOMER_COLS: (
    customers::name,
    customers::phone,
    customers::email,
    customers::address,
) = (
    customers::name,
    customers::phone,
    customers::email,
    customers::address,
);

/// Returns the stored status of a booking, if it exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn booking_status(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<Option<String>, StoreError> {
    Ok(bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(bookings::status)
        .first::<String>(conn)
        .optional()?)
}

/// Loads the full timeline for a booking in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn timeline_for(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<Vec<TimelineEvent>, StoreError> {
    let rows = booking_timeline::table
        .filter(booking_timeline::booking_id.eq(booking_id))
        .order(booking_timeline::entry_id.asc())
        .select((
            booking_timeline::status,
            booking_timeline::title,
            booking_timeline::description,
            booking_timeline::completed,
            booking_timeline::completed_at,
            booking_timeline::created_at,
        ))
        .load::<(String, String, String, i32, Option<String>, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(status, title, description, completed, completed_at, created_at)| TimelineEvent {
                status,
                title,
                description,
                timestamp: completed_at.unwrap_or(created_at),
                completed: completed != 0,
            },
        )
        .collect())
}

/// Fetches a single booking with all joins by its exact identifier.
///
/// Catalog references are left-joined: a missing or soft-deleted
/// brand/model/category renders as an empty string, a missing or
/// soft-deleted technician as the unassigned placeholder.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_booking_detail(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<Option<BookingDetail>, StoreError> {
    let row = bookings::table
        .inner_join(customers::table)
        .left_join(printer_brands::table)
        .left_join(printer_models::table)
        .left_join(problem_categories::table)
        .left_join(technicians::table)
        .filter(bookings::booking_id.eq(booking_id))
        .select((
            BOOKING_COLS,
            CUSTOMER_COLS,
            (
                printer_brands::name.nullable(),
                printer_brands::is_active.nullable(),
            ),
            (
                printer_models::name.nullable(),
                printer_models::is_active.nullable(),
            ),
            (
                problem_categories::name.nullable(),
                problem_categories::is_active.nullable(),
            ),
            (
                technicians::name.nullable(),
                technicians::is_active.nullable(),
            ),
        ))
        .first::<(
            BookingCols,
            CustomerCols,
            CatalogRef,
            CatalogRef,
            CatalogRef,
            CatalogRef,
        )>(conn)
        .optional()?;

    let Some((booking, customer, brand, model, category, technician)) = row else {
        return Ok(None);
    };

    let timeline = timeline_for(conn, booking_id)?;
    Ok(Some(shape_detail(
        booking,
        customer,
        active_name(brand),
        active_name(model),
        active_name(category),
        technician_display(technician),
        timeline,
    )))
}

/// Lists every booking whose required catalog references (brand,
/// model, category) are present and active, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_booking_details(
    conn: &mut SqliteConnection,
) -> Result<Vec<BookingDetail>, StoreError> {
    let rows = bookings::table
        .inner_join(customers::table)
        .inner_join(printer_brands::table)
        .inner_join(printer_models::table)
        .inner_join(problem_categories::table)
        .left_join(technicians::table)
        .filter(printer_brands::is_active.eq(1))
        .filter(printer_models::is_active.eq(1))
        .filter(problem_categories::is_active.eq(1))
        .order(bookings::created_at.desc())
        .select((
            BOOKING_COLS,
            CUSTOMER_COLS,
            (
                printer_brands::name,
                printer_models::name,
                problem_categories::name,
            ),
            (
                technicians::name.nullable(),
                technicians::is_active.nullable(),
            ),
        ))
        .load::<(
            BookingCols,
            CustomerCols,
            (String, String, String),
            CatalogRef,
        )>(conn)?;

    let mut details = Vec::with_capacity(rows.len());
    for (booking, customer, (brand, model, category), technician) in rows {
        let timeline = timeline_for(conn, &booking.0)?;
        details.push(shape_detail(
            booking,
            customer,
            brand,
            model,
            category,
            technician_display(technician),
            timeline,
        ));
    }
    Ok(details)
}

/// Returns the reference name when the joined row is active.
fn active_name((name, is_active): CatalogRef) -> String {
    match (name, is_active) {
        (Some(name), Some(1)) => name,
        _ => String::new(),
    }
}

/// Returns the technician display name, substituting the unassigned
/// placeholder when absent or soft-deleted.
fn technician_display((name, is_active): CatalogRef) -> String {
    match (name, is_active) {
        (Some(name), Some(1)) => name,
        _ => String::from(UNASSIGNED_TECHNICIAN),
    }
}

#[allow(clippy::too_many_arguments)]
fn shape_detail(
    booking: BookingCols,
    customer: CustomerCols,
    brand: String,
    model: String,
    category: String,
    technician: String,
    timeline: Vec<TimelineEvent>,
) -> BookingDetail {
    let (
        id,
        problem_description,
        service_type,
        appointment_date,
        appointment_time,
        status,
        estimated_cost,
        actual_cost,
        notes,
        created_at,
    ) = booking;
    let (name, phone, email, address) = customer;

    BookingDetail {
        id,
        customer: BookingCustomer {
            name,
            phone,
            email: email.unwrap_or_default(),
            address: address.unwrap_or_default(),
        },
        printer_brand: brand,
        printer_model: model,
        problem_category: category,
        problem_description,
        service_type,
        appointment_date,
        appointment_time,
        status,
        technician,
        estimated_cost,
        actual_cost: actual_cost.unwrap_or_default(),
        notes,
        timeline,
        created_at,
    }
}
