//! Driven port for student persistence.

use async_trait::async_trait;

use crate::domain::{DormitoryId, Password, RoomKey, Student, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading or writing student records.
    pub enum StudentRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "student repository connection failed: {message}",
        /// A query failed or returned malformed data.
        Query { message: String } => "student repository query failed: {message}",
    }
}

/// Port for student records.
///
/// Room and roommate references are written through
/// [`super::RoomRepository::apply_occupancy_change`] so that they move together
/// with the room's occupancy counter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Look up a student by id.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Students whose room reference points at `room`, ordered by id.
    async fn list_by_room(&self, room: &RoomKey) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Students with no room, ordered by id.
    async fn list_without_room(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Number of students living anywhere in `dormitory`.
    async fn count_in_dormitory(&self, dormitory: DormitoryId)
        -> Result<u64, StudentRepositoryError>;

    /// Replace the stored password.
    async fn update_password(
        &self,
        id: StudentId,
        password: &Password,
    ) -> Result<(), StudentRepositoryError>;
}
