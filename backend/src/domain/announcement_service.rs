//! Announcement publishing and reading.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{AnnouncementBoard, AnnouncementRepository, DormitoryRepository, StudentRepository};
use crate::domain::{
    Announcement, AnnouncementContent, AnnouncementId, AnnouncementOrder, Error, ManagerId,
    NewAnnouncement, StudentId,
};

/// Service implementing the [`AnnouncementBoard`] driving port.
#[derive(Clone)]
pub struct AnnouncementService<A, S, D> {
    announcements: Arc<A>,
    students: Arc<S>,
    dormitories: Arc<D>,
    clock: Arc<dyn Clock>,
}

impl<A, S, D> AnnouncementService<A, S, D> {
    pub fn new(
        announcements: Arc<A>,
        students: Arc<S>,
        dormitories: Arc<D>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            announcements,
            students,
            dormitories,
            clock,
        }
    }
}

#[async_trait]
impl<A, S, D> AnnouncementBoard for AnnouncementService<A, S, D>
where
    A: AnnouncementRepository,
    S: StudentRepository,
    D: DormitoryRepository,
{
    async fn for_student(
        &self,
        student: StudentId,
        order: AnnouncementOrder,
    ) -> Result<Vec<Announcement>, Error> {
        let student = self
            .students
            .find_by_id(student)
            .await?
            .ok_or_else(|| Error::not_found("Student not found"))?;
        // Students without a room belong to no dormitory yet.
        let Some(room) = student.room else {
            return Ok(Vec::new());
        };

        let mut announcements = self
            .announcements
            .list_for_dormitory(room.dormitory_id)
            .await?;
        order.sort(&mut announcements);
        Ok(announcements)
    }

    async fn by_manager(&self, manager: ManagerId) -> Result<Vec<Announcement>, Error> {
        Ok(self.announcements.list_by_manager(manager).await?)
    }

    async fn search(&self, manager: ManagerId, keyword: &str) -> Result<Vec<Announcement>, Error> {
        Ok(self
            .announcements
            .search_by_title(manager, keyword.trim())
            .await?)
    }

    async fn publish(
        &self,
        manager: ManagerId,
        content: AnnouncementContent,
    ) -> Result<Announcement, Error> {
        if self.dormitories.find_manager(manager).await?.is_none() {
            return Err(Error::not_found("Manager not found"));
        }

        let AnnouncementContent { title, description } = content;
        let created = self
            .announcements
            .create(&NewAnnouncement {
                title,
                description,
                date_time: self.clock.utc(),
                manager_id: manager,
            })
            .await?;

        info!(announcement = %created.id, manager = %manager, "announcement published");
        Ok(created)
    }

    async fn revise(
        &self,
        id: AnnouncementId,
        content: AnnouncementContent,
    ) -> Result<Announcement, Error> {
        let mut announcement = self
            .announcements
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Announcement not found"))?;

        announcement.title = content.title;
        announcement.description = content.description;
        announcement.date_time = self.clock.utc();
        self.announcements.update(&announcement).await?;

        info!(announcement = %id, "announcement revised");
        Ok(announcement)
    }

    async fn retract(&self, id: AnnouncementId) -> Result<(), Error> {
        if !self.announcements.delete(id).await? {
            return Err(Error::not_found("Announcement not found"));
        }
        info!(announcement = %id, "announcement deleted");
        Ok(())
    }
}
