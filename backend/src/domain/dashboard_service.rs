//! Dashboard read models.
//!
//! Each dashboard is recomputed from the repositories on every call. Nothing
//! is cached.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::manager_scope::dormitory_of;
use crate::domain::ports::{
    AnnouncementRepository, CheckInOutRepository, ComplaintRepository, DashboardQuery,
    DormitoryRepository, RoomRepository, StudentRepository,
};
use crate::domain::{
    CheckInOutStatus, ComplaintStatus, Error, ManagerDashboard, ManagerId, StudentDashboard,
    StudentId, MANAGER_RECENT_ANNOUNCEMENTS, STUDENT_RECENT_LIMIT,
};

/// Repositories read by [`DashboardService`].
pub struct DashboardSources<S, R, D, A, C, K> {
    pub students: Arc<S>,
    pub rooms: Arc<R>,
    pub dormitories: Arc<D>,
    pub announcements: Arc<A>,
    pub complaints: Arc<C>,
    pub check_in_outs: Arc<K>,
}

/// Service implementing the [`DashboardQuery`] driving port.
pub struct DashboardService<S, R, D, A, C, K> {
    sources: DashboardSources<S, R, D, A, C, K>,
}

impl<S, R, D, A, C, K> DashboardService<S, R, D, A, C, K> {
    pub fn new(sources: DashboardSources<S, R, D, A, C, K>) -> Self {
        Self { sources }
    }
}

fn most_recent<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

#[async_trait]
impl<S, R, D, A, C, K> DashboardQuery for DashboardService<S, R, D, A, C, K>
where
    S: StudentRepository,
    R: RoomRepository,
    D: DormitoryRepository,
    A: AnnouncementRepository,
    C: ComplaintRepository,
    K: CheckInOutRepository,
{
    async fn student_dashboard(&self, student: StudentId) -> Result<StudentDashboard, Error> {
        let src = &self.sources;
        let student = src
            .students
            .find_by_id(student)
            .await?
            .ok_or_else(|| Error::not_found("Student not found"))?;

        let (room, announcements) = match &student.room {
            Some(key) => (
                src.rooms.find(key).await?,
                src.announcements.list_for_dormitory(key.dormitory_id).await?,
            ),
            None => (None, Vec::new()),
        };
        let recent_activities = src.check_in_outs.list_by_student(student.id).await?;
        let recent_requests = src.complaints.list_by_student(student.id).await?;

        Ok(StudentDashboard {
            room,
            recent_activities: most_recent(recent_activities, STUDENT_RECENT_LIMIT),
            recent_requests: most_recent(recent_requests, STUDENT_RECENT_LIMIT),
            announcements: most_recent(announcements, STUDENT_RECENT_LIMIT),
        })
    }

    async fn manager_dashboard(&self, manager: ManagerId) -> Result<ManagerDashboard, Error> {
        let src = &self.sources;
        let dormitory = dormitory_of(src.dormitories.as_ref(), manager).await?;

        let total_students = src.students.count_in_dormitory(dormitory).await?;
        let available_rooms = src.rooms.count_available(dormitory).await?;
        let pending_check_ins = src
            .check_in_outs
            .count_by_status(CheckInOutStatus::Pending)
            .await?;
        let active_complaints = src
            .complaints
            .count_by_status(ComplaintStatus::Pending)
            .await?;
        let announcements = src.announcements.list_by_manager(manager).await?;

        Ok(ManagerDashboard {
            total_students,
            available_rooms,
            pending_check_ins,
            active_complaints,
            announcements: most_recent(announcements, MANAGER_RECENT_ANNOUNCEMENTS),
        })
    }
}
