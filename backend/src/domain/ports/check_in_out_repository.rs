//! Driven port for check-in/out requests.

use async_trait::async_trait;

use crate::domain::{
    CheckInOut, CheckInOutId, CheckInOutStatus, DormitoryId, NewCheckInOut, StudentId,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading or writing check-in/out requests.
    pub enum CheckInOutRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "check-in/out repository connection failed: {message}",
        /// A query failed or returned malformed data.
        Query { message: String } => "check-in/out repository query failed: {message}",
    }
}

/// Port for check-in/out requests. Listings are ordered by date, newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInOutRepository: Send + Sync {
    /// Store a new pending request and return it with its assigned id.
    async fn create(&self, request: &NewCheckInOut)
        -> Result<CheckInOut, CheckInOutRepositoryError>;

    /// Look up a request by id.
    async fn find_by_id(
        &self,
        id: CheckInOutId,
    ) -> Result<Option<CheckInOut>, CheckInOutRepositoryError>;

    /// Overwrite the status of a request.
    async fn update_status(
        &self,
        id: CheckInOutId,
        status: CheckInOutStatus,
    ) -> Result<(), CheckInOutRepositoryError>;

    /// Requests submitted by a student.
    async fn list_by_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError>;

    /// Requests submitted by students living in `dormitory`.
    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError>;

    /// Requests in the given status across all dormitories.
    async fn list_by_status(
        &self,
        status: CheckInOutStatus,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError>;

    /// Number of requests in the given status across all dormitories.
    async fn count_by_status(
        &self,
        status: CheckInOutStatus,
    ) -> Result<u64, CheckInOutRepositoryError>;
}
