// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided status string is not a recognized booking status.
    InvalidStatus(String),
    /// A required field on a booking request was empty.
    MissingField(&'static str),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(s) => write!(f, "Invalid booking status: {s}"),
            Self::MissingField(field) => write!(f, "Required field '{field}' is empty"),
        }
    }
}

impl std::error::Error for DomainError {}
