//! Driven port for complaint and repair requests.

use async_trait::async_trait;

use crate::domain::{
    ComplaintId, ComplaintRepair, ComplaintStatus, DormitoryId, NewComplaint, StudentId,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading or writing complaints.
    pub enum ComplaintRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "complaint repository connection failed: {message}",
        /// A query failed or returned malformed data.
        Query { message: String } => "complaint repository query failed: {message}",
    }
}

/// Port for complaints. Listings are ordered by submission time, newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Store a new complaint and return it with its assigned id.
    async fn create(&self, complaint: &NewComplaint)
        -> Result<ComplaintRepair, ComplaintRepositoryError>;

    /// Look up a complaint by id.
    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<ComplaintRepair>, ComplaintRepositoryError>;

    /// Overwrite the status of a complaint.
    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<(), ComplaintRepositoryError>;

    /// Complaints filed by a student.
    async fn list_by_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError>;

    /// Complaints filed by students living in `dormitory`.
    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError>;

    /// Complaints in the given status across all dormitories.
    async fn list_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError>;

    /// Number of complaints in the given status across all dormitories.
    async fn count_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<u64, ComplaintRepositoryError>;
}
