// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStatus, DomainError, TimelineLabel, TransitionPolicy};

#[test]
fn test_status_round_trips_through_strings() {
    for status in [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::InProgress,
        BookingStatus::Servicing,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ] {
        let parsed: BookingStatus = status.as_str().parse().unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_unknown_status_string_is_rejected() {
    let err = "shipped".parse::<BookingStatus>().unwrap_err();
    assert_eq!(err, DomainError::InvalidStatus(String::from("shipped")));
}

#[test]
fn test_synthetic_labels_are_not_unique_per_booking() {
    assert!(TimelineLabel::Status(BookingStatus::Confirmed).is_unique_per_booking());
    assert!(!TimelineLabel::Assigned.is_unique_per_booking());
    assert!(!TimelineLabel::CostUpdated.is_unique_per_booking());
}

#[test]
fn test_synthetic_label_strings() {
    assert_eq!(TimelineLabel::Assigned.as_str(), "assigned");
    assert_eq!(TimelineLabel::CostUpdated.as_str(), "cost_updated");
    assert_eq!(
        TimelineLabel::Status(BookingStatus::Servicing).as_str(),
        "servicing"
    );
}

#[test]
fn test_permissive_policy_allows_every_transition() {
    let policy = TransitionPolicy::Permissive;
    let all = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::InProgress,
        BookingStatus::Servicing,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];
    for from in all {
        for to in all {
            assert!(policy.allows(from, to));
        }
    }
}
