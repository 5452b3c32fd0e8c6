// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cost estimation for service bookings.
//!
//! The estimate is a fixed lookup from the human-readable problem
//! category name to a display cost range. It is computed once at
//! booking creation and stored on the booking as opaque text.

/// The estimate returned for any category not in the lookup table.
pub const DEFAULT_COST_ESTIMATE: &str = "Rp 50.000 - 150.000";

/// Cost ranges per problem category, keyed by display name.
const COST_RANGES: &[(&str, &str)] = &[
    ("Masalah Pencetakan", "Rp 50.000 - 150.000"),
    ("Masalah Cartridge / Head", "Rp 75.000 - 200.000"),
    ("Masalah Kertas", "Rp 30.000 - 120.000"),
    ("Masalah Internal", "Rp 100.000 - 500.000"),
    ("Masalah Jaringan / Wireless", "Rp 50.000 - 120.000"),
    ("Masalah Software / Reset", "Rp 75.000 - 200.000"),
    ("Masalah Fisik / Casing", "Rp 50.000 - 350.000"),
    ("Masalah Scanner", "Rp 70.000 - 250.000"),
    ("Masalah Fax", "Rp 50.000 - 120.000"),
    ("Masalah Maintenance", "Rp 40.000 - 300.000"),
];

/// Returns the estimated cost range for a problem category.
///
/// Total over all inputs: unknown categories fall back to
/// [`DEFAULT_COST_ESTIMATE`]. The match is exact; the lookup uses the
/// raw category name as entered on the booking form, not a resolved
/// catalog identifier.
#[must_use]
pub fn estimate_cost(problem_category: &str) -> &'static str {
    COST_RANGES
        .iter()
        .find(|(name, _)| *name == problem_category)
        .map_or(DEFAULT_COST_ESTIMATE, |(_, range)| range)
}
