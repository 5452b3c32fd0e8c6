// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status_copy;

#[test]
fn test_known_statuses_use_fixed_copy() {
    let pending = status_copy("pending");
    assert_eq!(pending.title, "Booking Diterima");
    assert_eq!(
        pending.description,
        "Booking Anda telah diterima dan sedang diproses"
    );

    let confirmed = status_copy("confirmed");
    assert_eq!(confirmed.title, "Booking Dikonfirmasi");

    let cancelled = status_copy("cancelled");
    assert_eq!(cancelled.title, "Booking Dibatalkan");
    assert_eq!(cancelled.description, "Booking telah dibatalkan");
}

#[test]
fn test_unknown_status_synthesizes_generic_copy() {
    let copy = status_copy("on-hold");
    assert_eq!(copy.title, "Status diubah ke on-hold");
    assert_eq!(
        copy.description,
        "Pemesanan diubah statusnya menjadi on-hold"
    );
}
