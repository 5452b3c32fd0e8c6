// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::TechnicianChanges;

use super::{seed_catalog, test_store};

#[test]
fn brands_group_their_active_models() {
    let mut store = test_store();
    let canon = store.add_brand("Canon").expect("brand");
    let epson = store.add_brand("Epson").expect("brand");
    store.add_model(canon, "PIXMA G2020", "inkjet").expect("model");
    let retired = store.add_model(canon, "LBP2900", "laser").expect("model");
    store.add_model(epson, "L3210", "inkjet").expect("model");
    store.deactivate_model(retired).expect("soft delete");

    let brands = store.list_brands().expect("list");
    assert_eq!(brands.len(), 2);
    // Ordered by name: Canon before Epson.
    assert_eq!(brands[0].name, "Canon");
    assert_eq!(brands[0].models.len(), 1);
    assert_eq!(brands[0].models[0].name, "PIXMA G2020");
    assert_eq!(brands[1].name, "Epson");
    assert_eq!(brands[1].models.len(), 1);
}

#[test]
fn deactivated_brand_leaves_the_listing() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    store.deactivate_brand(catalog.brand_id).expect("soft delete");

    assert!(store.list_brands().expect("list").is_empty());
    assert!(
        store
            .find_brand_id_by_name("Canon")
            .expect("lookup")
            .is_none()
    );
}

#[test]
fn categories_group_their_active_problems() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    store
        .add_problem(
            catalog.category_id,
            "Kertas kusut",
            "Hasil cetak kusut",
            "low",
            "1 jam",
            "Rp 30.000 - 120.000",
        )
        .expect("problem");

    let categories = store.list_categories().expect("list");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Masalah Kertas");
    assert_eq!(categories[0].problems.len(), 2);
}

#[test]
fn name_lookups_resolve_only_active_rows() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);

    assert_eq!(
        store.find_brand_id_by_name("Canon").expect("brand"),
        Some(catalog.brand_id)
    );
    assert_eq!(
        store.find_model_id_by_name("PIXMA G2020").expect("model"),
        Some(catalog.model_id)
    );
    assert_eq!(
        store
            .find_category_id_by_name("Masalah Kertas")
            .expect("category"),
        Some(catalog.category_id)
    );
    assert!(
        store
            .find_brand_id_by_name("Brother")
            .expect("missing brand")
            .is_none()
    );

    store.deactivate_category(catalog.category_id).expect("soft delete");
    assert!(
        store
            .find_category_id_by_name("Masalah Kertas")
            .expect("retired category")
            .is_none()
    );
}

#[test]
fn technician_roster_parses_specialization_json() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);

    let roster = store.list_technicians().expect("roster");
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Budi Santoso");
    assert_eq!(roster[0].specialization, ["inkjet", "laser"]);
    assert!(roster[0].is_available);

    assert_eq!(
        store
            .find_available_technician_id()
            .expect("available pool"),
        Some(catalog.technician_id)
    );
    assert_eq!(
        store
            .technician_name(catalog.technician_id)
            .expect("name lookup")
            .as_deref(),
        Some("Budi Santoso")
    );
}

#[test]
fn unavailable_technician_leaves_the_pool_but_not_the_roster() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);

    store
        .update_technician(
            catalog.technician_id,
            &TechnicianChanges {
                is_available: Some(0),
                ..TechnicianChanges::default()
            },
        )
        .expect("update");

    assert!(
        store
            .find_available_technician_id()
            .expect("pool")
            .is_none()
    );
    let roster = store.list_technicians().expect("roster");
    assert_eq!(roster.len(), 1);
    assert!(!roster[0].is_available);
}

#[test]
fn deactivated_technician_disappears_everywhere() {
    let mut store = test_store();
    let catalog = seed_catalog(&mut store);
    store
        .deactivate_technician(catalog.technician_id)
        .expect("soft delete");

    assert!(store.list_technicians().expect("roster").is_empty());
    assert!(
        store
            .find_available_technician_id()
            .expect("pool")
            .is_none()
    );
    assert!(
        store
            .technician_name(catalog.technician_id)
            .expect("name lookup")
            .is_none()
    );
}

#[test]
fn gallery_orders_by_sort_order_and_honors_soft_delete() {
    let mut store = test_store();
    let second = store
        .add_gallery_image("Ruang servis", "Ruang servis", "/img/b.jpg", "workshop", 2)
        .expect("image");
    store
        .add_gallery_image("Etalase toko", "Etalase toko", "/img/a.jpg", "store", 1)
        .expect("image");

    let images = store.list_gallery_images().expect("list");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].title, "Etalase toko");

    store.deactivate_gallery_image(second).expect("soft delete");
    let images = store.list_gallery_images().expect("list");
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].title, "Etalase toko");
}
