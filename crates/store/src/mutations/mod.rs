// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side mutations against the catalog and booking tables.

pub mod bookings;
pub mod catalog;
pub mod timeline;

pub use timeline::TimelineWrite;
