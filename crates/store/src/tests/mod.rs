// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod booking_tests;
mod catalog_tests;

use servis_domain::NewBookingRow;

use crate::Store;

pub fn test_store() -> Store {
    Store::new_in_memory().expect("in-memory store")
}

/// Seeded catalog row IDs for booking tests.
pub struct SeededCatalog {
    pub brand_id: i64,
    pub model_id: i64,
    pub category_id: i64,
    pub technician_id: i64,
}

/// Seeds one brand, model, category, problem and technician.
pub fn seed_catalog(store: &mut Store) -> SeededCatalog {
    let brand_id = store.add_brand("Canon").expect("brand");
    let model_id = store
        .add_model(brand_id, "PIXMA G2020", "inkjet")
        .expect("model");
    let category_id = store
        .add_category("Masalah Kertas", "paper")
        .expect("category");
    store
        .add_problem(
            category_id,
            "Paper jam",
            "Kertas tersangkut di dalam printer",
            "medium",
            "1-2 jam",
            "Rp 30.000 - 120.000",
        )
        .expect("problem");
    let technician_id = store
        .add_technician(
            "Budi Santoso",
            "081234567890",
            Some("budi@servis.example"),
            &[String::from("inkjet"), String::from("laser")],
            5,
            4.8,
        )
        .expect("technician");

    SeededCatalog {
        brand_id,
        model_id,
        category_id,
        technician_id,
    }
}

/// Inserts a customer and a booking wired to the seeded catalog,
/// returning the generated booking ID.
pub fn seed_booking(store: &mut Store, catalog: &SeededCatalog) -> String {
    let customer_id = store
        .upsert_customer_by_phone(
            "081298765432",
            "Siti Rahma",
            "siti@customer.example",
            "Jl. Merdeka 10, Bandung",
        )
        .expect("customer");

    let row = NewBookingRow {
        customer_id,
        brand_id: Some(catalog.brand_id),
        model_id: Some(catalog.model_id),
        category_id: Some(catalog.category_id),
        technician_id: None,
        problem_description: String::from("Kertas macet terus"),
        service_type: String::from("Antar ke Toko"),
        appointment_date: String::from("2026-09-01"),
        appointment_time: String::from("10:00"),
        status: String::from("pending"),
        estimated_cost: String::from("Rp 30.000 - 120.000"),
        notes: String::new(),
    };
    store.insert_booking(&row).expect("booking")
}
