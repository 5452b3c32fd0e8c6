// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timeline writes.
//!
//! Status-label entries are unique per booking. That invariant is
//! enforced twice: a partial unique index in the schema, and a
//! transactional insert-or-mark-completed here so two near-simultaneous
//! status changes cannot both insert. Synthetic labels (`assigned`,
//! `cost_updated`) bypass the uniqueness rule and always append.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::error::StoreError;
use crate::now_utc;
use crate::schema::booking_timeline;

/// The outcome of recording a status timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineWrite {
    /// The status had never been recorded; a new entry was inserted.
    Inserted,
    /// The status was previously recorded; the existing entry was
    /// re-marked completed with a fresh timestamp.
    MarkedCompleted,
}

/// Records a status-change timeline entry.
///
/// First visit to a status inserts exactly one entry; a re-entry into
/// a previously visited status updates the existing entry's completed
/// flag and timestamp instead of inserting a duplicate. The check and
/// the write run inside one transaction.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn record_status_entry(
    conn: &mut SqliteConnection,
    booking_id: &str,
    status: &str,
    title: &str,
    description: &str,
) -> Result<TimelineWrite, StoreError> {
    let now = now_utc();
    let write = conn.transaction::<TimelineWrite, diesel::result::Error, _>(|conn| {
        let existing: Option<i64> = booking_timeline::table
            .filter(booking_timeline::booking_id.eq(booking_id))
            .filter(booking_timeline::status.eq(status))
            .select(booking_timeline::entry_id)
            .first::<i64>(conn)
            .optional()?;

        if let Some(entry_id) = existing {
            diesel::update(
                booking_timeline::table.filter(booking_timeline::entry_id.eq(entry_id)),
            )
            .set((
                booking_timeline::completed.eq(1),
                booking_timeline::completed_at.eq(&now),
            ))
            .execute(conn)?;
            Ok(TimelineWrite::MarkedCompleted)
        } else {
            diesel::insert_into(booking_timeline::table)
                .values((
                    booking_timeline::booking_id.eq(booking_id),
                    booking_timeline::status.eq(status),
                    booking_timeline::title.eq(title),
                    booking_timeline::description.eq(description),
                    booking_timeline::completed.eq(1),
                    booking_timeline::completed_at.eq(&now),
                    booking_timeline::created_at.eq(&now),
                ))
                .execute(conn)?;
            Ok(TimelineWrite::Inserted)
        }
    })?;

    Ok(write)
}

/// Appends a timeline entry unconditionally.
///
/// Used for the synthetic labels; repeated calls append repeated
/// entries.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn append_timeline_entry(
    conn: &mut SqliteConnection,
    booking_id: &str,
    status: &str,
    title: &str,
    description: &str,
) -> Result<(), StoreError> {
    let now = now_utc();
    diesel::insert_into(booking_timeline::table)
        .values((
            booking_timeline::booking_id.eq(booking_id),
            booking_timeline::status.eq(status),
            booking_timeline::title.eq(title),
            booking_timeline::description.eq(description),
            booking_timeline::completed.eq(1),
            booking_timeline::completed_at.eq(&now),
            booking_timeline::created_at.eq(&now),
        ))
        .execute(conn)?;
    Ok(())
}

/// Deletes every timeline entry for a booking.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_timeline_entries(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<usize, StoreError> {
    Ok(
        diesel::delete(
            booking_timeline::table.filter(booking_timeline::booking_id.eq(booking_id)),
        )
        .execute(conn)?,
    )
}
