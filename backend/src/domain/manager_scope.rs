//! Resolve which dormitory a manager acts on.

use super::ports::DormitoryRepository;
use super::{DormitoryId, Error, ManagerId};

/// Dormitory managed by `manager`.
///
/// # Errors
/// `not_found` when the manager is unknown or manages no dormitory; repository
/// failures are mapped through `Error::from`.
pub(crate) async fn dormitory_of<D>(repo: &D, manager: ManagerId) -> Result<DormitoryId, Error>
where
    D: DormitoryRepository + ?Sized,
{
    repo.find_by_manager(manager)
        .await?
        .map(|dormitory| dormitory.id)
        .ok_or_else(|| {
            Error::not_found(format!(
                "Manager with ID {manager} is not assigned to any dormitory or not found"
            ))
        })
}
