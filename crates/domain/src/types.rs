// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The single service type offered: the customer drops the printer
/// off at the shop.
pub const DROP_OFF_SERVICE: &str = "Antar ke Toko";

/// Display name used when a booking has no (active) technician.
pub const UNASSIGNED_TECHNICIAN: &str = "Belum ditugaskan";

/// Normalizes a booking identifier for lookup.
///
/// Booking identifiers are stored uppercase; lookups accept any case.
#[must_use]
pub fn normalize_booking_id(id: &str) -> String {
    id.trim().to_uppercase()
}

/// A new booking as submitted from the booking form.
///
/// Brand, model and category are free-form names resolved against the
/// catalog at creation time; resolution misses degrade to null
/// references rather than failing the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// The customer's name.
    pub customer_name: String,
    /// The customer's phone number (natural dedup key).
    pub phone: String,
    /// The customer's email (optional).
    pub email: String,
    /// The customer's address (optional).
    pub address: String,
    /// The printer brand name as selected on the form.
    pub printer_brand: String,
    /// The printer model name as selected on the form.
    pub printer_model: String,
    /// The problem category name as selected on the form.
    pub problem_category: String,
    /// Free-text problem description.
    pub problem_description: String,
    /// Appointment date (display text, e.g. "2026-09-01").
    pub appointment_date: String,
    /// Appointment time (display text, e.g. "10:00").
    pub appointment_time: String,
    /// Free-text notes.
    pub notes: String,
}

impl BookingRequest {
    /// Validates the fields a booking cannot be created without.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer name or phone number is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.customer_name.trim().is_empty() {
            return Err(DomainError::MissingField("customer_name"));
        }
        if self.phone.trim().is_empty() {
            return Err(DomainError::MissingField("phone"));
        }
        Ok(())
    }
}

/// The fully resolved field set for a booking insert.
///
/// Produced by the lifecycle manager after customer upsert, catalog
/// name resolution and cost estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingRow {
    /// The resolved customer row identifier.
    pub customer_id: i64,
    /// The resolved printer brand, if the name matched.
    pub brand_id: Option<i64>,
    /// The resolved printer model, if an active one matched.
    pub model_id: Option<i64>,
    /// The resolved problem category, if the name matched.
    pub category_id: Option<i64>,
    /// The auto-assigned technician, if one was available.
    pub technician_id: Option<i64>,
    /// Free-text problem description.
    pub problem_description: String,
    /// Service type (always [`DROP_OFF_SERVICE`] at creation).
    pub service_type: String,
    /// Appointment date.
    pub appointment_date: String,
    /// Appointment time.
    pub appointment_time: String,
    /// Initial booking status.
    pub status: String,
    /// Estimated cost range text.
    pub estimated_cost: String,
    /// Free-text notes.
    pub notes: String,
}

/// Customer fields as joined onto a booking read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// One timeline entry as rendered on a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// The status label (a booking status or a synthetic marker).
    pub status: String,
    pub title: String,
    pub description: String,
    /// `completed_at` when set, otherwise `created_at`.
    pub timestamp: String,
    pub completed: bool,
}

/// A booking joined with its customer, catalog references and
/// timeline, shaped for the dashboard.
///
/// Missing or soft-deleted catalog references render as empty strings
/// (technician as [`UNASSIGNED_TECHNICIAN`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetail {
    pub id: String,
    pub customer: BookingCustomer,
    pub printer_brand: String,
    pub printer_model: String,
    pub problem_category: String,
    pub problem_description: String,
    pub service_type: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
    pub technician: String,
    pub estimated_cost: String,
    pub actual_cost: String,
    pub notes: String,
    pub timeline: Vec<TimelineEvent>,
    pub created_at: String,
}

/// An active printer model under a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: i64,
    pub name: String,
    pub model_type: String,
}

/// An active printer brand with its active models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandWithModels {
    pub id: i64,
    pub name: String,
    pub models: Vec<ModelSummary>,
}

/// An active problem under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub severity: String,
    pub estimated_time: String,
    pub estimated_cost: String,
}

/// An active problem category with its active problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWithProblems {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub problems: Vec<ProblemSummary>,
}

/// A technician roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicianRecord {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Specialization tags (stored as a JSON array).
    pub specialization: Vec<String>,
    /// Years of experience.
    pub experience: i32,
    /// Customer rating, 0.0 to 5.0.
    pub rating: f32,
    /// Whether the technician can currently take new work.
    pub is_available: bool,
}

/// A marketing gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImageRecord {
    pub id: i64,
    pub title: String,
    pub alt_text: String,
    pub image_url: String,
    pub category: String,
    pub sort_order: i32,
}
