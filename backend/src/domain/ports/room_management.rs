//! Driving port for room allocation.

use async_trait::async_trait;

use crate::domain::{Error, ManagerId, Room, RoomInfo, Student, StudentId};

/// Room queries and the assign/remove workflow.
///
/// Manager-scoped operations resolve the manager's dormitory first and fail
/// with `not_found` when the manager has none.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomManagement: Send + Sync {
    /// Rooms in the manager's dormitory.
    async fn list_rooms(&self, manager: ManagerId) -> Result<Vec<Room>, Error>;

    /// First room in the manager's dormitory whose number contains `term`.
    async fn search_room(&self, manager: ManagerId, term: &str) -> Result<Room, Error>;

    /// Place a student in a room of the manager's dormitory.
    async fn assign(&self, manager: ManagerId, student: StudentId, room_num: &str)
        -> Result<(), Error>;

    /// Remove the student from any current room, then assign the new one.
    async fn reassign(
        &self,
        manager: ManagerId,
        student: StudentId,
        room_num: &str,
    ) -> Result<(), Error>;

    /// Take a student out of their room. A student without a room is left as is.
    async fn remove_student(&self, student: StudentId) -> Result<(), Error>;

    /// Students not yet placed in any room.
    async fn available_students(&self) -> Result<Vec<Student>, Error>;

    /// A student's room and roommate.
    async fn room_info(&self, student: StudentId) -> Result<RoomInfo, Error>;
}
