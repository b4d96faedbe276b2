//! Repository port implementations for [`InMemoryStore`].

use async_trait::async_trait;

use super::{InMemoryStore, next_id};
use crate::domain::ports::{
    AnnouncementRepository, AnnouncementRepositoryError, CheckInOutRepository,
    CheckInOutRepositoryError, ComplaintRepository, ComplaintRepositoryError, DormitoryRepository,
    DormitoryRepositoryError, RoomRepository, RoomRepositoryError, StudentRepository,
    StudentRepositoryError,
};
use crate::domain::{
    Announcement, AnnouncementId, CheckInOut, CheckInOutId, CheckInOutStatus, ComplaintId,
    ComplaintRepair, ComplaintStatus, Dormitory, DormitoryId, DormitoryManager, ManagerId,
    NewAnnouncement, NewCheckInOut, NewComplaint, OccupancyChange, Password, Room, RoomKey,
    Student, StudentId,
};

fn newest_announcements_first(items: &mut [Announcement]) {
    items.sort_by(|a, b| b.date_time.cmp(&a.date_time).then(b.id.cmp(&a.id)));
}

fn newest_complaints_first(items: &mut [ComplaintRepair]) {
    items.sort_by(|a, b| b.date_time.cmp(&a.date_time).then(b.id.cmp(&a.id)));
}

fn newest_movements_first(items: &mut [CheckInOut]) {
    items.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.state.lock().await.students.get(&id).cloned())
    }

    async fn list_by_room(&self, room: &RoomKey) -> Result<Vec<Student>, StudentRepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .students
            .values()
            .filter(|student| student.room.as_ref() == Some(room))
            .cloned()
            .collect())
    }

    async fn list_without_room(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .students
            .values()
            .filter(|student| student.room.is_none())
            .cloned()
            .collect())
    }

    async fn count_in_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<u64, StudentRepositoryError> {
        let state = self.state.lock().await;
        let count = state
            .students
            .values()
            .filter(|student| {
                student
                    .room
                    .as_ref()
                    .is_some_and(|room| room.dormitory_id == dormitory)
            })
            .count();
        Ok(count as u64)
    }

    async fn update_password(
        &self,
        id: StudentId,
        password: &Password,
    ) -> Result<(), StudentRepositoryError> {
        if let Some(student) = self.state.lock().await.students.get_mut(&id) {
            student.password = password.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn find(&self, key: &RoomKey) -> Result<Option<Room>, RoomRepositoryError> {
        Ok(self.state.lock().await.rooms.get(key).cloned())
    }

    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<Room>, RoomRepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .rooms
            .values()
            .filter(|room| room.key.dormitory_id == dormitory)
            .cloned()
            .collect())
    }

    async fn search(
        &self,
        dormitory: DormitoryId,
        term: &str,
    ) -> Result<Option<Room>, RoomRepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .rooms
            .values()
            .find(|room| room.key.dormitory_id == dormitory && room.key.room_num.contains(term))
            .cloned())
    }

    async fn count_available(&self, dormitory: DormitoryId) -> Result<u64, RoomRepositoryError> {
        let state = self.state.lock().await;
        let count = state
            .rooms
            .values()
            .filter(|room| room.key.dormitory_id == dormitory && !room.is_full())
            .count();
        Ok(count as u64)
    }

    async fn apply_occupancy_change(
        &self,
        change: &OccupancyChange,
    ) -> Result<(), RoomRepositoryError> {
        let mut state = self.state.lock().await;
        if !state.rooms.contains_key(&change.room.key) {
            return Err(RoomRepositoryError::query(format!(
                "room {} does not exist",
                change.room.key.room_num
            )));
        }
        if let Some(missing) = change
            .students
            .iter()
            .find(|student| !state.students.contains_key(&student.id))
        {
            return Err(RoomRepositoryError::query(format!(
                "student {} does not exist",
                missing.id
            )));
        }

        state
            .rooms
            .insert(change.room.key.clone(), change.room.clone());
        for student in &change.students {
            state.students.insert(student.id, student.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl DormitoryRepository for InMemoryStore {
    async fn find_by_id(
        &self,
        id: DormitoryId,
    ) -> Result<Option<Dormitory>, DormitoryRepositoryError> {
        Ok(self.state.lock().await.dormitories.get(&id).cloned())
    }

    async fn find_by_manager(
        &self,
        manager: ManagerId,
    ) -> Result<Option<Dormitory>, DormitoryRepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .dormitories
            .values()
            .find(|dormitory| dormitory.manager_id == Some(manager))
            .cloned())
    }

    async fn find_manager(
        &self,
        id: ManagerId,
    ) -> Result<Option<DormitoryManager>, DormitoryRepositoryError> {
        Ok(self.state.lock().await.managers.get(&id).cloned())
    }

    async fn update_manager_password(
        &self,
        id: ManagerId,
        password: &Password,
    ) -> Result<(), DormitoryRepositoryError> {
        if let Some(manager) = self.state.lock().await.managers.get_mut(&id) {
            manager.password = password.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl AnnouncementRepository for InMemoryStore {
    async fn create(
        &self,
        announcement: &NewAnnouncement,
    ) -> Result<Announcement, AnnouncementRepositoryError> {
        let mut state = self.state.lock().await;
        let id = AnnouncementId::new(next_id(&mut state.sequences.announcements));
        let created = Announcement {
            id,
            title: announcement.title.clone(),
            description: announcement.description.clone(),
            date_time: announcement.date_time,
            manager_id: announcement.manager_id,
        };
        state.announcements.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(
        &self,
        id: AnnouncementId,
    ) -> Result<Option<Announcement>, AnnouncementRepositoryError> {
        Ok(self.state.lock().await.announcements.get(&id).cloned())
    }

    async fn update(&self, announcement: &Announcement) -> Result<(), AnnouncementRepositoryError> {
        self.state
            .lock()
            .await
            .announcements
            .insert(announcement.id, announcement.clone());
        Ok(())
    }

    async fn delete(&self, id: AnnouncementId) -> Result<bool, AnnouncementRepositoryError> {
        Ok(self.state.lock().await.announcements.remove(&id).is_some())
    }

    async fn list_by_manager(
        &self,
        manager: ManagerId,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .announcements
            .values()
            .filter(|a| a.manager_id == manager)
            .cloned()
            .collect();
        newest_announcements_first(&mut items);
        Ok(items)
    }

    async fn search_by_title(
        &self,
        manager: ManagerId,
        keyword: &str,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .announcements
            .values()
            .filter(|a| a.manager_id == manager && a.title.contains(keyword))
            .cloned()
            .collect();
        newest_announcements_first(&mut items);
        Ok(items)
    }

    async fn list_for_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError> {
        let state = self.state.lock().await;
        let Some(manager) = state
            .dormitories
            .get(&dormitory)
            .and_then(|dormitory| dormitory.manager_id)
        else {
            return Ok(Vec::new());
        };
        let mut items: Vec<_> = state
            .announcements
            .values()
            .filter(|a| a.manager_id == manager)
            .cloned()
            .collect();
        newest_announcements_first(&mut items);
        Ok(items)
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryStore {
    async fn create(
        &self,
        complaint: &NewComplaint,
    ) -> Result<ComplaintRepair, ComplaintRepositoryError> {
        let mut state = self.state.lock().await;
        let id = ComplaintId::new(next_id(&mut state.sequences.complaints));
        let created = ComplaintRepair {
            id,
            description: complaint.description.clone(),
            service_type: complaint.service_type.clone(),
            date_time: complaint.date_time,
            priority_lvl: complaint.priority_lvl.clone(),
            status: complaint.status,
            student_id: complaint.student_id,
        };
        state.complaints.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<ComplaintRepair>, ComplaintRepositoryError> {
        Ok(self.state.lock().await.complaints.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<(), ComplaintRepositoryError> {
        if let Some(complaint) = self.state.lock().await.complaints.get_mut(&id) {
            complaint.status = status;
        }
        Ok(())
    }

    async fn list_by_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .complaints
            .values()
            .filter(|c| c.student_id == student)
            .cloned()
            .collect();
        newest_complaints_first(&mut items);
        Ok(items)
    }

    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .complaints
            .values()
            .filter(|c| state.dormitory_of_student(c.student_id) == Some(dormitory))
            .cloned()
            .collect();
        newest_complaints_first(&mut items);
        Ok(items)
    }

    async fn list_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .complaints
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        newest_complaints_first(&mut items);
        Ok(items)
    }

    async fn count_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<u64, ComplaintRepositoryError> {
        let state = self.state.lock().await;
        let count = state
            .complaints
            .values()
            .filter(|c| c.status == status)
            .count();
        Ok(count as u64)
    }
}

#[async_trait]
impl CheckInOutRepository for InMemoryStore {
    async fn create(
        &self,
        request: &NewCheckInOut,
    ) -> Result<CheckInOut, CheckInOutRepositoryError> {
        let mut state = self.state.lock().await;
        let id = CheckInOutId::new(next_id(&mut state.sequences.check_in_outs));
        let created = CheckInOut {
            id,
            student_id: request.student_id,
            date: request.date,
            kind: request.kind,
            status: NewCheckInOut::INITIAL_STATUS,
        };
        state.check_in_outs.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(
        &self,
        id: CheckInOutId,
    ) -> Result<Option<CheckInOut>, CheckInOutRepositoryError> {
        Ok(self.state.lock().await.check_in_outs.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: CheckInOutId,
        status: CheckInOutStatus,
    ) -> Result<(), CheckInOutRepositoryError> {
        if let Some(request) = self.state.lock().await.check_in_outs.get_mut(&id) {
            request.status = status;
        }
        Ok(())
    }

    async fn list_by_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .check_in_outs
            .values()
            .filter(|r| r.student_id == student)
            .cloned()
            .collect();
        newest_movements_first(&mut items);
        Ok(items)
    }

    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .check_in_outs
            .values()
            .filter(|r| state.dormitory_of_student(r.student_id) == Some(dormitory))
            .cloned()
            .collect();
        newest_movements_first(&mut items);
        Ok(items)
    }

    async fn list_by_status(
        &self,
        status: CheckInOutStatus,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError> {
        let state = self.state.lock().await;
        let mut items: Vec<_> = state
            .check_in_outs
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect();
        newest_movements_first(&mut items);
        Ok(items)
    }

    async fn count_by_status(
        &self,
        status: CheckInOutStatus,
    ) -> Result<u64, CheckInOutRepositoryError> {
        let state = self.state.lock().await;
        let count = state
            .check_in_outs
            .values()
            .filter(|r| r.status == status)
            .count();
        Ok(count as u64)
    }
}
