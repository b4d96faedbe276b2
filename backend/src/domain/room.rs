//! Rooms and the occupancy counter.
//!
//! A room is keyed by its number within a dormitory and holds at most
//! [`ROOM_CAPACITY`] students. `occupancy` mirrors the number of students whose
//! room reference points at the room; [`Room::admit`] and [`Room::release`] are
//! the only places it changes.

use super::ids::DormitoryId;
use super::student::Student;

/// Maximum number of students a room holds.
pub const ROOM_CAPACITY: i32 = 2;

/// Composite key addressing a room inside a dormitory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomKey {
    /// Room number as printed on the door, e.g. `"A101"`.
    pub room_num: String,
    /// Building the room belongs to.
    pub dormitory_id: DormitoryId,
}

impl RoomKey {
    /// Build a key from its parts.
    pub fn new(room_num: impl Into<String>, dormitory_id: DormitoryId) -> Self {
        Self {
            room_num: room_num.into(),
            dormitory_id,
        }
    }
}

/// A dormitory room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub key: RoomKey,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub block: Option<String>,
    pub occupancy: i32,
    pub last_inspect: Option<String>,
    pub duration: Option<String>,
}

/// Raised when admitting a student to a room at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Room is already full")]
pub struct RoomFull;

impl Room {
    /// Whether the room has reached [`ROOM_CAPACITY`].
    pub fn is_full(&self) -> bool {
        self.occupancy >= ROOM_CAPACITY
    }

    /// Count one more resident.
    ///
    /// # Errors
    /// Returns [`RoomFull`] and leaves the counter untouched when the room is
    /// already at capacity.
    pub fn admit(&mut self) -> Result<(), RoomFull> {
        if self.is_full() {
            return Err(RoomFull);
        }
        self.occupancy += 1;
        Ok(())
    }

    /// Count one fewer resident. Never drops below zero.
    pub fn release(&mut self) {
        self.occupancy = (self.occupancy - 1).max(0);
    }
}

/// Records that must be written together when occupancy changes.
///
/// Persistence adapters apply the whole change atomically: either every record
/// is written or none is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyChange {
    /// Room with its updated counter.
    pub room: Room,
    /// Students whose room or roommate reference changed.
    pub students: Vec<Student>,
}
