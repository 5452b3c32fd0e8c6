// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use servis_domain::BookingRequest;
use servis_store::Store;

pub fn test_store() -> Store {
    Store::new_in_memory().expect("in-memory store")
}

/// Seeds one brand, model, category, problem and technician,
/// returning the technician's row ID.
pub fn seed_catalog(store: &mut Store) -> i64 {
    let brand_id = store.add_brand("Canon").expect("brand");
    store
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
    store
        .add_technician(
            "Budi Santoso",
            "081234567890",
            None,
            &[String::from("inkjet")],
            5,
            4.8,
        )
        .expect("technician")
}

/// A complete, valid booking request matching the seeded catalog.
pub fn sample_request() -> BookingRequest {
    BookingRequest {
        customer_name: String::from("Siti Rahma"),
        phone: String::from("081298765432"),
        email: String::from("siti@customer.example"),
        address: String::from("Jl. Merdeka 10, Bandung"),
        printer_brand: String::from("Canon"),
        printer_model: String::from("PIXMA G2020"),
        problem_category: String::from("Masalah Kertas"),
        problem_description: String::from("Kertas macet terus"),
        appointment_date: String::from("2026-09-01"),
        appointment_time: String::from("10:00"),
        notes: String::new(),
    }
}
