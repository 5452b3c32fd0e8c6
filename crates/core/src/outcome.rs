// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A non-fatal degradation that occurred during an operation.
///
/// Warnings cover the best-effort parts of a lifecycle operation:
/// a timeline write that failed after the primary mutation succeeded,
/// a catalog name that did not resolve, a technician pool that was
/// empty. The primary result stands; the warning records what was
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// What was degraded (e.g. `"timeline"`, `"brand_lookup"`).
    pub effect: String,
    /// Human-readable detail.
    pub detail: String,
}

impl Warning {
    #[must_use]
    pub fn new(effect: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            effect: effect.into(),
            detail: detail.into(),
        }
    }
}

/// The result of a lifecycle operation: a primary value plus any
/// non-fatal warnings collected along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    /// The primary result.
    pub value: T,
    /// Degradations that did not abort the operation.
    pub warnings: Vec<Warning>,
}

impl<T> Outcome<T> {
    /// Wraps a value with no warnings.
    #[must_use]
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Wraps a value with collected warnings.
    #[must_use]
    pub const fn with_warnings(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    /// Whether any warning was recorded.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}
