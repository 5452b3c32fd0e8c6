// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a service booking.
///
/// The stored status column is plain text, so unknown values can exist
/// in the database; this enumeration covers every status the system
/// itself writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    /// Initial state after creation. Awaiting confirmation.
    #[default]
    Pending,
    /// Booking confirmed by the shop.
    Confirmed,
    /// Technician is on the way / work has started.
    InProgress,
    /// Printer is on the bench being repaired.
    Servicing,
    /// Repair finished.
    Completed,
    /// Booking cancelled.
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in-progress" => Ok(Self::InProgress),
            "servicing" => Ok(Self::Servicing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in-progress",
            Self::Servicing => "servicing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A label attached to a timeline entry.
///
/// Either a booking status, or one of the synthetic markers that only
/// exist on the timeline (`assigned`, `cost_updated`). Synthetic
/// entries are exempt from the one-entry-per-label uniqueness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineLabel {
    /// A booking status label, subject to per-booking uniqueness.
    Status(BookingStatus),
    /// A technician was assigned. Appended on every assignment call.
    Assigned,
    /// The actual cost was recorded. Appended on every update.
    CostUpdated,
}

impl TimelineLabel {
    /// Converts this label to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Status(status) => status.as_str(),
            Self::Assigned => "assigned",
            Self::CostUpdated => "cost_updated",
        }
    }

    /// Returns whether entries with this label are unique per booking.
    ///
    /// Status labels are deduplicated; synthetic labels accumulate.
    #[must_use]
    pub const fn is_unique_per_booking(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}

impl std::fmt::Display for TimelineLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Policy hook deciding which status transitions are accepted.
///
/// The admin dashboard deliberately allows any status to follow any
/// other (a cancelled booking can be reopened, a completed one sent
/// back to servicing). That permissiveness is a documented policy
/// here rather than an absence of one, and a stricter policy can be
/// swapped in at lifecycle construction without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may follow any other status.
    #[default]
    Permissive,
}

impl TransitionPolicy {
    /// Checks whether a transition from `from` to `to` is allowed.
    #[must_use]
    pub const fn allows(&self, from: BookingStatus, to: BookingStatus) -> bool {
        match self {
            Self::Permissive => {
                let _ = (from, to);
                true
            }
        }
    }
}
