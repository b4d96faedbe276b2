//! Driving port for the check-in/out approval workflow.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CheckInOut, CheckInOutId, Error, ManagerId, MovementKind, StudentId};

/// Submission and approval of check-in/out requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInOutWorkflow: Send + Sync {
    /// File a new pending request for a student.
    async fn submit(
        &self,
        student: StudentId,
        kind: MovementKind,
        date: NaiveDate,
    ) -> Result<CheckInOut, Error>;

    /// A student's requests, newest first.
    async fn history(&self, student: StudentId) -> Result<Vec<CheckInOut>, Error>;

    /// Requests from the manager's dormitory, newest first.
    async fn list_for_manager(&self, manager: ManagerId) -> Result<Vec<CheckInOut>, Error>;

    /// All pending requests, newest first.
    async fn pending(&self) -> Result<Vec<CheckInOut>, Error>;

    /// Mark a request approved.
    async fn approve(&self, id: CheckInOutId) -> Result<CheckInOut, Error>;

    /// Mark a request rejected.
    async fn reject(&self, id: CheckInOutId) -> Result<CheckInOut, Error>;
}
