// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle management for the Servis printer-repair backend.
//!
//! This crate sits between the HTTP surface and the store. It owns
//! booking creation (customer upsert, catalog name resolution, cost
//! estimation, technician auto-assignment), status transitions with
//! deduplicated timeline entries, technician assignment, actual-cost
//! recording, deletion, and the joined read path.
//!
//! Operations run through [`BookingLifecycle`], which takes an
//! explicit store handle implementing [`BookingStore`]. Results come
//! back as [`Outcome`]s: the primary value plus any non-fatal
//! [`Warning`]s (failed timeline writes, unresolved catalog names, an
//! empty technician pool).

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

mod error;
mod lifecycle;
mod outcome;
mod store;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use lifecycle::{BookingLifecycle, StatusChange, TransitionPolicy};
pub use outcome::{Outcome, Warning};
pub use store::BookingStore;
