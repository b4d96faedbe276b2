//! Driving port for announcements.

use async_trait::async_trait;

use crate::domain::{
    Announcement, AnnouncementContent, AnnouncementId, AnnouncementOrder, Error, ManagerId,
    StudentId,
};

/// Publishing and reading announcements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnouncementBoard: Send + Sync {
    /// Announcements for the student's dormitory. Empty when the student has
    /// no room.
    async fn for_student(
        &self,
        student: StudentId,
        order: AnnouncementOrder,
    ) -> Result<Vec<Announcement>, Error>;

    /// A manager's announcements, newest first.
    async fn by_manager(&self, manager: ManagerId) -> Result<Vec<Announcement>, Error>;

    /// A manager's announcements whose title contains `keyword`, newest first.
    async fn search(&self, manager: ManagerId, keyword: &str) -> Result<Vec<Announcement>, Error>;

    /// Publish a new announcement stamped with the current time.
    async fn publish(
        &self,
        manager: ManagerId,
        content: AnnouncementContent,
    ) -> Result<Announcement, Error>;

    /// Replace title and body and refresh the timestamp.
    async fn revise(
        &self,
        id: AnnouncementId,
        content: AnnouncementContent,
    ) -> Result<Announcement, Error>;

    /// Delete an announcement.
    async fn retract(&self, id: AnnouncementId) -> Result<(), Error>;
}
