//! Room allocation service.
//!
//! Assignment loads the student and the room, checks capacity, then writes the
//! room counter, the student's room reference and the roommate pairing as one
//! [`OccupancyChange`]. There is no lock between the capacity check and the
//! write: two concurrent assignments to the last free bed can both succeed.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::manager_scope::dormitory_of;
use crate::domain::ports::{DormitoryRepository, RoomManagement, RoomRepository, StudentRepository};
use crate::domain::{
    Error, ManagerId, OccupancyChange, Room, RoomFull, RoomInfo, RoomKey, Student, StudentId,
};

/// Room service implementing the [`RoomManagement`] driving port.
#[derive(Clone)]
pub struct RoomService<S, R, D> {
    students: Arc<S>,
    rooms: Arc<R>,
    dormitories: Arc<D>,
}

impl<S, R, D> RoomService<S, R, D> {
    /// Create a room service over the given repositories.
    pub fn new(students: Arc<S>, rooms: Arc<R>, dormitories: Arc<D>) -> Self {
        Self {
            students,
            rooms,
            dormitories,
        }
    }
}

fn room_full_error(key: &RoomKey) -> Error {
    Error::invalid_request(RoomFull.to_string()).with_details(json!({
        "code": "room_full",
        "roomNum": key.room_num,
    }))
}

impl<S, R, D> RoomService<S, R, D>
where
    S: StudentRepository,
    R: RoomRepository,
    D: DormitoryRepository,
{
    async fn require_student(&self, id: StudentId) -> Result<Student, Error> {
        self.students
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Student not found"))
    }

    async fn require_room(&self, key: &RoomKey) -> Result<Room, Error> {
        self.rooms
            .find(key)
            .await?
            .ok_or_else(|| Error::not_found("Room not found"))
    }

    async fn assign_to(&self, student_id: StudentId, key: RoomKey) -> Result<(), Error> {
        let mut student = self.require_student(student_id).await?;
        let mut room = self.require_room(&key).await?;

        if let Some(current) = &student.room {
            warn!(student = %student_id, room = %current.room_num, "student already has a room");
            return Err(Error::invalid_request(
                "Student is already assigned to a room; use reassign instead",
            ));
        }

        if let Err(full) = room.admit() {
            warn!(student = %student_id, room = %key.room_num, "{full}");
            return Err(room_full_error(&key));
        }

        let occupants = self.students.list_by_room(&key).await?;
        student.move_in(key.clone());
        let mut changed = Vec::with_capacity(2);
        if let Some(mut roommate) = occupants.into_iter().find(|other| other.id != student_id) {
            student.pair_with(&mut roommate);
            changed.push(roommate);
        }
        changed.insert(0, student);

        self.rooms
            .apply_occupancy_change(&OccupancyChange {
                room,
                students: changed,
            })
            .await?;

        info!(
            student = %student_id,
            room = %key.room_num,
            dormitory = %key.dormitory_id,
            "student assigned to room"
        );
        Ok(())
    }

    async fn release(&self, student_id: StudentId) -> Result<(), Error> {
        let mut student = self.require_student(student_id).await?;
        let Some(key) = student.room.clone() else {
            return Ok(());
        };

        let former_roommate = student.roommate;
        student.move_out();
        let mut changed = vec![student];
        if let Some(roommate_id) = former_roommate {
            if let Some(mut roommate) = self.students.find_by_id(roommate_id).await? {
                roommate.unpair_from(student_id);
                changed.push(roommate);
            }
        }

        let mut room = self.require_room(&key).await?;
        room.release();

        self.rooms
            .apply_occupancy_change(&OccupancyChange {
                room,
                students: changed,
            })
            .await?;

        info!(student = %student_id, room = %key.room_num, "student removed from room");
        Ok(())
    }
}

#[async_trait]
impl<S, R, D> RoomManagement for RoomService<S, R, D>
where
    S: StudentRepository,
    R: RoomRepository,
    D: DormitoryRepository,
{
    async fn list_rooms(&self, manager: ManagerId) -> Result<Vec<Room>, Error> {
        let dormitory = dormitory_of(self.dormitories.as_ref(), manager).await?;
        Ok(self.rooms.list_by_dormitory(dormitory).await?)
    }

    async fn search_room(&self, manager: ManagerId, term: &str) -> Result<Room, Error> {
        let dormitory = dormitory_of(self.dormitories.as_ref(), manager).await?;
        self.rooms
            .search(dormitory, term.trim())
            .await?
            .ok_or_else(|| Error::not_found("No room found"))
    }

    async fn assign(
        &self,
        manager: ManagerId,
        student: StudentId,
        room_num: &str,
    ) -> Result<(), Error> {
        let dormitory = dormitory_of(self.dormitories.as_ref(), manager).await?;
        self.assign_to(student, RoomKey::new(room_num, dormitory)).await
    }

    async fn reassign(
        &self,
        manager: ManagerId,
        student: StudentId,
        room_num: &str,
    ) -> Result<(), Error> {
        let dormitory = dormitory_of(self.dormitories.as_ref(), manager).await?;
        self.release(student).await?;
        self.assign_to(student, RoomKey::new(room_num, dormitory)).await
    }

    async fn remove_student(&self, student: StudentId) -> Result<(), Error> {
        self.release(student).await
    }

    async fn available_students(&self) -> Result<Vec<Student>, Error> {
        Ok(self.students.list_without_room().await?)
    }

    async fn room_info(&self, student: StudentId) -> Result<RoomInfo, Error> {
        let student = self.require_student(student).await?;
        let room = match &student.room {
            Some(key) => self.rooms.find(key).await?,
            None => None,
        };
        let roommate = match student.roommate {
            Some(id) => self.students.find_by_id(id).await?,
            None => None,
        };
        Ok(RoomInfo { room, roommate })
    }
}

#[cfg(test)]
#[path = "room_service_tests.rs"]
mod tests;
