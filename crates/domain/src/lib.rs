// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod estimate;
mod status;
mod timeline;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use estimate::{DEFAULT_COST_ESTIMATE, estimate_cost};
pub use status::{BookingStatus, TimelineLabel, TransitionPolicy};
pub use timeline::{TimelineCopy, status_copy};
pub use types::{
    BookingCustomer, BookingDetail, BookingRequest, BrandWithModels, CategoryWithProblems,
    DROP_OFF_SERVICE, GalleryImageRecord, ModelSummary, NewBookingRow, ProblemSummary,
    TechnicianRecord, TimelineEvent, UNASSIGNED_TECHNICIAN, normalize_booking_id,
};
