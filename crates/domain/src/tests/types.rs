// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingRequest, DomainError, normalize_booking_id};

fn request() -> BookingRequest {
    BookingRequest {
        customer_name: String::from("Budi Santoso"),
        phone: String::from("081234567890"),
        email: String::from("budi@example.com"),
        address: String::from("Jl. Melati 5"),
        printer_brand: String::from("Canon"),
        printer_model: String::from("PIXMA G2010"),
        problem_category: String::from("Masalah Kertas"),
        problem_description: String::from("Kertas selalu macet"),
        appointment_date: String::from("2026-09-01"),
        appointment_time: String::from("10:00"),
        notes: String::new(),
    }
}

#[test]
fn test_booking_id_lookup_is_case_insensitive() {
    assert_eq!(normalize_booking_id("srv-ab12cd"), "SRV-AB12CD");
    assert_eq!(normalize_booking_id("  SRV-AB12CD "), "SRV-AB12CD");
}

#[test]
fn test_valid_request_passes_validation() {
    assert!(request().validate().is_ok());
}

#[test]
fn test_empty_name_or_phone_is_rejected() {
    let mut missing_name = request();
    missing_name.customer_name = String::from("   ");
    assert_eq!(
        missing_name.validate().unwrap_err(),
        DomainError::MissingField("customer_name")
    );

    let mut missing_phone = request();
    missing_phone.phone = String::new();
    assert_eq!(
        missing_phone.validate().unwrap_err(),
        DomainError::MissingField("phone")
    );
}
