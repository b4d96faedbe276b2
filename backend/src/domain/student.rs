//! Student residents.

use super::ids::StudentId;
use super::password::Password;
use super::room::RoomKey;

/// A student who may live in a dormitory room.
///
/// `room` and `roommate` change only through [`Student::move_in`],
/// [`Student::move_out`] and the roommate helpers so that pairing stays
/// symmetric across the two residents of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone_num: Option<String>,
    pub status: Option<String>,
    pub password: Password,
    pub room: Option<RoomKey>,
    pub roommate: Option<StudentId>,
}

impl Student {
    /// Point the student at `room`.
    pub fn move_in(&mut self, room: RoomKey) {
        self.room = Some(room);
    }

    /// Clear the room and roommate references, returning the old room.
    pub fn move_out(&mut self) -> Option<RoomKey> {
        self.roommate = None;
        self.room.take()
    }

    /// Pair two students as roommates.
    pub fn pair_with(&mut self, other: &mut Self) {
        self.roommate = Some(other.id);
        other.roommate = Some(self.id);
    }

    /// Drop the roommate reference if it points at `other`.
    pub fn unpair_from(&mut self, other: StudentId) {
        if self.roommate == Some(other) {
            self.roommate = None;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::student;
    use super::*;
    use crate::domain::DormitoryId;

    #[test]
    fn pairing_is_symmetric() {
        let mut alice = student(1, "Alice");
        let mut bea = student(2, "Bea");
        alice.pair_with(&mut bea);
        assert_eq!(alice.roommate, Some(bea.id));
        assert_eq!(bea.roommate, Some(alice.id));
    }

    #[test]
    fn move_out_clears_room_and_roommate() {
        let mut alice = student(1, "Alice");
        let key = RoomKey::new("B202", DormitoryId::new(3));
        alice.move_in(key.clone());
        alice.roommate = Some(StudentId::new(2));

        assert_eq!(alice.move_out(), Some(key));
        assert!(alice.room.is_none());
        assert!(alice.roommate.is_none());
    }

    #[test]
    fn unpair_ignores_other_students() {
        let mut alice = student(1, "Alice");
        alice.roommate = Some(StudentId::new(2));
        alice.unpair_from(StudentId::new(9));
        assert_eq!(alice.roommate, Some(StudentId::new(2)));
        alice.unpair_from(StudentId::new(2));
        assert!(alice.roommate.is_none());
    }
}
