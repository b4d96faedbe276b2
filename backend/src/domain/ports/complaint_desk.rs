//! Driving port for complaint and repair requests.

use async_trait::async_trait;

use crate::domain::{
    ComplaintId, ComplaintRepair, ComplaintStatus, ComplaintSubmission, Error, ManagerId,
    StudentId,
};

/// Filing and triage of complaints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintDesk: Send + Sync {
    /// File a new pending complaint for a student.
    async fn submit(
        &self,
        student: StudentId,
        submission: ComplaintSubmission,
    ) -> Result<ComplaintRepair, Error>;

    /// A student's complaints, newest first.
    async fn history(&self, student: StudentId) -> Result<Vec<ComplaintRepair>, Error>;

    /// Complaints from the manager's dormitory, newest first.
    async fn list_for_manager(&self, manager: ManagerId) -> Result<Vec<ComplaintRepair>, Error>;

    /// All pending complaints, newest first.
    async fn pending(&self) -> Result<Vec<ComplaintRepair>, Error>;

    /// Overwrite a complaint's status.
    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<ComplaintRepair, Error>;
}
