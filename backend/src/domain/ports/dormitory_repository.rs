//! Driven ports for dormitories and their managers.

use async_trait::async_trait;

use crate::domain::{Dormitory, DormitoryId, DormitoryManager, ManagerId, Password};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading dormitory or manager records.
    pub enum DormitoryRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "dormitory repository connection failed: {message}",
        /// A query failed or returned malformed data.
        Query { message: String } => "dormitory repository query failed: {message}",
    }
}

/// Port for dormitory buildings and their managers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DormitoryRepository: Send + Sync {
    /// Look up a dormitory by id.
    async fn find_by_id(&self, id: DormitoryId)
        -> Result<Option<Dormitory>, DormitoryRepositoryError>;

    /// The dormitory a manager is responsible for.
    async fn find_by_manager(
        &self,
        manager: ManagerId,
    ) -> Result<Option<Dormitory>, DormitoryRepositoryError>;

    /// Look up a manager account.
    async fn find_manager(
        &self,
        id: ManagerId,
    ) -> Result<Option<DormitoryManager>, DormitoryRepositoryError>;

    /// Replace a manager's stored password.
    async fn update_manager_password(
        &self,
        id: ManagerId,
        password: &Password,
    ) -> Result<(), DormitoryRepositoryError>;
}
