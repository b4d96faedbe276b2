//! Driven port for room persistence and occupancy writes.

use async_trait::async_trait;

use crate::domain::{DormitoryId, OccupancyChange, Room, RoomKey};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading or writing rooms.
    pub enum RoomRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "room repository connection failed: {message}",
        /// A query failed or returned malformed data.
        Query { message: String } => "room repository query failed: {message}",
    }
}

/// Port for rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Look up a room by its composite key.
    async fn find(&self, key: &RoomKey) -> Result<Option<Room>, RoomRepositoryError>;

    /// Rooms of a dormitory ordered by room number.
    async fn list_by_dormitory(&self, dormitory: DormitoryId)
        -> Result<Vec<Room>, RoomRepositoryError>;

    /// First room, by room number, whose number contains `term`.
    async fn search(
        &self,
        dormitory: DormitoryId,
        term: &str,
    ) -> Result<Option<Room>, RoomRepositoryError>;

    /// Rooms in a dormitory with occupancy below capacity.
    async fn count_available(&self, dormitory: DormitoryId) -> Result<u64, RoomRepositoryError>;

    /// Persist a room and the affected students as one atomic unit.
    async fn apply_occupancy_change(
        &self,
        change: &OccupancyChange,
    ) -> Result<(), RoomRepositoryError>;
}
