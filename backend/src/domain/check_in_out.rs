//! Check-in and check-out requests.
//!
//! A request starts as [`CheckInOutStatus::Pending`] and is resolved by a
//! manager to approved or rejected. Resolution overwrites whatever status the
//! record currently holds.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::ids::{CheckInOutId, StudentId};

/// Approval state of a check-in/out request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckInOutStatus {
    Pending,
    Approved,
    Rejected,
}

/// Raised when a status string names no known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown check-in/out status: {0}")]
pub struct UnknownCheckInOutStatus(pub String);

impl CheckInOutStatus {
    /// Upper-case spelling used on the wire and in storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for CheckInOutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckInOutStatus {
    type Err = UnknownCheckInOutStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(UnknownCheckInOutStatus(s.to_owned())),
        }
    }
}

/// Direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    CheckIn,
    CheckOut,
}

/// Raised when a movement type string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("type must be Check-in or Check-out, got {0:?}")]
pub struct UnknownMovementKind(pub String);

impl MovementKind {
    /// Display spelling, e.g. `"Check-in"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CheckIn => "Check-in",
            Self::CheckOut => "Check-out",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = UnknownMovementKind;

    /// Accepts `Check-in`, `CHECKIN`, `check_in` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalised.as_str() {
            "checkin" => Ok(Self::CheckIn),
            "checkout" => Ok(Self::CheckOut),
            _ => Err(UnknownMovementKind(s.to_owned())),
        }
    }
}

/// A stored check-in/out request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInOut {
    pub id: CheckInOutId,
    pub student_id: StudentId,
    pub date: NaiveDate,
    pub kind: MovementKind,
    pub status: CheckInOutStatus,
}

impl CheckInOut {
    /// Mark the request approved.
    pub fn approve(&mut self) {
        self.status = CheckInOutStatus::Approved;
    }

    /// Mark the request rejected.
    pub fn reject(&mut self) {
        self.status = CheckInOutStatus::Rejected;
    }
}

/// A request about to be stored; always pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckInOut {
    pub student_id: StudentId,
    pub date: NaiveDate,
    pub kind: MovementKind,
}

impl NewCheckInOut {
    /// Status every new request starts with.
    pub const INITIAL_STATUS: CheckInOutStatus = CheckInOutStatus::Pending;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn pending() -> CheckInOut {
        CheckInOut {
            id: CheckInOutId::new(1),
            student_id: StudentId::new(10),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"),
            kind: MovementKind::CheckIn,
            status: CheckInOutStatus::Pending,
        }
    }

    #[rstest]
    #[case("Check-in", MovementKind::CheckIn)]
    #[case("CHECKIN", MovementKind::CheckIn)]
    #[case("check_out", MovementKind::CheckOut)]
    #[case("Check-out", MovementKind::CheckOut)]
    fn parses_movement_spellings(#[case] raw: &str, #[case] expected: MovementKind) {
        assert_eq!(raw.parse::<MovementKind>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_movement() {
        assert!("move".parse::<MovementKind>().is_err());
    }

    #[rstest]
    fn approve_and_reject_overwrite_status(mut pending: CheckInOut) {
        pending.approve();
        assert_eq!(pending.status, CheckInOutStatus::Approved);
        pending.reject();
        assert_eq!(pending.status, CheckInOutStatus::Rejected);
    }

    #[rstest]
    #[case("pending", CheckInOutStatus::Pending)]
    #[case("APPROVED", CheckInOutStatus::Approved)]
    #[case("Rejected", CheckInOutStatus::Rejected)]
    fn parses_status(#[case] raw: &str, #[case] expected: CheckInOutStatus) {
        assert_eq!(raw.parse::<CheckInOutStatus>(), Ok(expected));
    }
}
