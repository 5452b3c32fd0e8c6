// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use servis_domain::UNASSIGNED_TECHNICIAN;

use super::{seed_booking, seed_catalog, test_store};

#[test]
fn insert_booking_generates_uppercase_prefixed_id() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    let booking_id = seed_booking(&mut store, &catalog);

    assert!(booking_id.starts_with("SRV-"));
    assert_eq!(booking_id, booking_id.to_uppercase());
    assert_eq!(booking_id.len(), 12);
}

#[test]
fn upsert_customer_reuses_row_for_same_phone() {
    let mut store = test_store();

    let first = store
        .upsert_customer_by_phone("0811", "Andi", "", "")
        .expect("insert");
    let second = store
        .upsert_customer_by_phone("0811", "Andi Wijaya", "andi@x.example", "Jl. A 1")
        .expect("update");
    let third = store
        .upsert_customer_by_phone("0822", "Rina", "", "")
        .expect("insert other");

    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn detail_joins_names_and_defaults_technician() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    let booking_id = seed_booking(&mut store, &catalog);

    let detail = store
        .get_booking_detail(&booking_id)
        .expect("query")
        .expect("booking exists");

    assert_eq!(detail.id, booking_id);
    assert_eq!(detail.customer.name, "Siti Rahma");
    assert_eq!(detail.printer_brand, "Canon");
    assert_eq!(detail.printer_model, "PIXMA G2020");
    assert_eq!(detail.problem_category, "Masalah Kertas");
    assert_eq!(detail.status, "pending");
    assert_eq!(detail.technician, UNASSIGNED_TECHNICIAN);
    assert_eq!(detail.actual_cost, "");
}

#[test]
fn detail_lookup_misses_unknown_id() {
    let mut store = test_store();
    let missing = store.get_booking_detail("SRV-DEADBEEF").expect("query");
    assert!(missing.is_none());
}

#[test]
fn list_orders_newest_first_and_requires_active_references() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    let first = seed_booking(&mut store, &catalog);
    let second = seed_booking(&mut store, &catalog);

    let listed = store.list_booking_details().expect("list");
    assert_eq!(listed.len(), 2);
    // Both bookings share a created_at second in the worst case; both
    // IDs must still be present.
    let ids: Vec<&str> = listed.iter().map(|detail| detail.id.as_str()).collect();
    assert!(ids.contains(&first.as_str()));
    assert!(ids.contains(&second.as_str()));

    store.deactivate_brand(catalog.brand_id).expect("soft delete");
    let listed = store.list_booking_details().expect("list after deactivate");
    assert!(listed.is_empty());

    // The detail lookup still reaches the booking, rendering the
    // retired brand as an empty string.
    let detail = store
        .get_booking_detail(&first)
        .expect("query")
        .expect("booking exists");
    assert_eq!(detail.printer_brand, "");
    assert_eq!(detail.printer_model, "PIXMA G2020");
}

#[test]
fn status_and_cost_updates_stick() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    let booking_id = seed_booking(&mut store, &catalog);

    store
        .update_booking_status(&booking_id, "confirmed")
        .expect("status");
    store
        .update_booking_actual_cost(&booking_id, "Rp 85.000")
        .expect("cost");
    store
        .update_booking_technician(&booking_id, catalog.technician_id)
        .expect("technician");

    let detail = store
        .get_booking_detail(&booking_id)
        .expect("query")
        .expect("booking exists");
    assert_eq!(detail.status, "confirmed");
    assert_eq!(detail.actual_cost, "Rp 85.000");
    assert_eq!(detail.technician, "Budi Santoso");

    let status = store.booking_status(&booking_id).expect("status query");
    assert_eq!(status.as_deref(), Some("confirmed"));
}

#[test]
fn delete_booking_reports_row_count() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    let booking_id = seed_booking(&mut store, &catalog);

    assert_eq!(store.delete_booking(&booking_id).expect("delete"), 1);
    assert_eq!(store.delete_booking(&booking_id).expect("redelete"), 0);
    assert!(store.booking_status(&booking_id).expect("status").is_none());
}

#[test]
fn delete_booking_with_timeline_requires_timeline_removal_first() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    let booking_id = seed_booking(&mut store, &catalog);

    store
        .record_status_entry(&booking_id, "pending", "Booking Diterima", "desc")
        .expect("timeline");

    // The foreign key blocks the booking delete while entries remain.
    assert!(store.delete_booking(&booking_id).is_err());

    assert_eq!(
        store
            .delete_timeline_entries(&booking_id)
            .expect("timeline delete"),
        1
    );
    assert_eq!(store.delete_booking(&booking_id).expect("delete"), 1);
}
