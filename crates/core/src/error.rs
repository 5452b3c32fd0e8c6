// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use servis_domain::{BookingStatus, DomainError};
use servis_store::StoreError;

/// Errors that can occur in a booking lifecycle operation.
#[derive(Debug)]
pub enum CoreError {
    /// No booking exists with the given identifier.
    BookingNotFound(String),
    /// The transition policy rejected a status change.
    TransitionDenied {
        from: BookingStatus,
        to: BookingStatus,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The store failed a primary mutation or query.
    Store(StoreError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookingNotFound(id) => write!(f, "Booking not found: {id}"),
            Self::TransitionDenied { from, to } => {
                write!(f, "Status transition denied: {from} -> {to}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Store(err) => write!(f, "Store error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
