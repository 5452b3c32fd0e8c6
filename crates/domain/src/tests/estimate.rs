// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_COST_ESTIMATE, estimate_cost};

#[test]
fn test_known_categories_return_mapped_ranges() {
    assert_eq!(estimate_cost("Masalah Pencetakan"), "Rp 50.000 - 150.000");
    assert_eq!(
        estimate_cost("Masalah Cartridge / Head"),
        "Rp 75.000 - 200.000"
    );
    assert_eq!(estimate_cost("Masalah Kertas"), "Rp 30.000 - 120.000");
    assert_eq!(estimate_cost("Masalah Internal"), "Rp 100.000 - 500.000");
    assert_eq!(
        estimate_cost("Masalah Jaringan / Wireless"),
        "Rp 50.000 - 120.000"
    );
    assert_eq!(
        estimate_cost("Masalah Software / Reset"),
        "Rp 75.000 - 200.000"
    );
    assert_eq!(
        estimate_cost("Masalah Fisik / Casing"),
        "Rp 50.000 - 350.000"
    );
    assert_eq!(estimate_cost("Masalah Scanner"), "Rp 70.000 - 250.000");
    assert_eq!(estimate_cost("Masalah Fax"), "Rp 50.000 - 120.000");
    assert_eq!(estimate_cost("Masalah Maintenance"), "Rp 40.000 - 300.000");
}

#[test]
fn test_unknown_category_falls_back_to_default() {
    assert_eq!(estimate_cost("Masalah Lainnya"), DEFAULT_COST_ESTIMATE);
    assert_eq!(estimate_cost(""), DEFAULT_COST_ESTIMATE);
    // Exact match only: close variants also fall back.
    assert_eq!(estimate_cost("masalah kertas"), DEFAULT_COST_ESTIMATE);
    assert_eq!(estimate_cost("Masalah Kertas "), DEFAULT_COST_ESTIMATE);
}
