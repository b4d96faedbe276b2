//! Complaint and repair requests raised by students.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::ids::{ComplaintId, StudentId};

/// Lifecycle status of a complaint or repair request.
///
/// New requests start as [`ComplaintStatus::Pending`]. Managers may overwrite
/// the status with any other value; transitions are not restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    Pending,
    Approved,
    Rejected,
    InProgress,
    Resolved,
}

/// Raised when a status string names no known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown complaint status: {0}")]
pub struct UnknownComplaintStatus(pub String);

impl ComplaintStatus {
    /// Canonical upper-case spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = UnknownComplaintStatus;

    /// Case-insensitive; spaces, hyphens and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();
        match normalised.as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "INPROGRESS" => Ok(Self::InProgress),
            "RESOLVED" => Ok(Self::Resolved),
            _ => Err(UnknownComplaintStatus(s.to_owned())),
        }
    }
}

/// A stored complaint or repair request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintRepair {
    pub id: ComplaintId,
    pub description: String,
    pub service_type: Option<String>,
    pub date_time: DateTime<Utc>,
    pub priority_lvl: Option<String>,
    pub status: ComplaintStatus,
    pub student_id: StudentId,
}

/// A request about to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub description: String,
    pub service_type: Option<String>,
    pub date_time: DateTime<Utc>,
    pub priority_lvl: Option<String>,
    pub status: ComplaintStatus,
    pub student_id: StudentId,
}

/// Fields a student supplies when filing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintSubmission {
    pub description: String,
    pub service_type: Option<String>,
    pub priority_lvl: Option<String>,
}
