// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable copy for timeline entries.
//!
//! Status-change entries carry a fixed title and description per
//! status; statuses outside the known set get generic synthesized
//! copy so an unexpected stored value still renders something.

/// Title and description for one timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineCopy {
    /// Short headline shown in the timeline list.
    pub title: String,
    /// Longer customer-facing description.
    pub description: String,
}

/// Fixed copy per booking status.
const STATUS_COPY: &[(&str, &str, &str)] = &[
    (
        "pending",
        "Booking Diterima",
        "Booking Anda telah diterima dan sedang diproses",
    ),
    (
        "confirmed",
        "Booking Dikonfirmasi",
        "Teknisi telah ditugaskan dan akan datang sesuai jadwal",
    ),
    (
        "in-progress",
        "Teknisi Dalam Perjalanan",
        "Teknisi sedang dalam perjalanan ke lokasi Anda",
    ),
    (
        "servicing",
        "Sedang Diperbaiki",
        "Printer sedang dalam proses perbaikan",
    ),
    (
        "completed",
        "Service Selesai",
        "Printer telah berhasil diperbaiki dan berfungsi normal",
    ),
    ("cancelled", "Booking Dibatalkan", "Booking telah dibatalkan"),
];

/// Returns the timeline copy for a status label.
///
/// Known statuses map to their fixed copy; anything else gets a
/// generic "status changed" title and description naming the raw
/// status value.
#[must_use]
pub fn status_copy(status: &str) -> TimelineCopy {
    STATUS_COPY
        .iter()
        .find(|(name, _, _)| *name == status)
        .map_or_else(
            || TimelineCopy {
                title: format!("Status diubah ke {status}"),
                description: format!("Pemesanan diubah statusnya menjadi {status}"),
            },
            |(_, title, description)| TimelineCopy {
                title: (*title).to_string(),
                description: (*description).to_string(),
            },
        )
}
