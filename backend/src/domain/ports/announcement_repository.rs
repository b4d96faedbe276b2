//! Driven port for announcements.

use async_trait::async_trait;

use crate::domain::{Announcement, AnnouncementId, DormitoryId, ManagerId, NewAnnouncement};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading or writing announcements.
    pub enum AnnouncementRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "announcement repository connection failed: {message}",
        /// A query failed or returned malformed data.
        Query { message: String } => "announcement repository query failed: {message}",
    }
}

/// Port for announcements. Listings are newest first unless noted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// Store a new announcement and return it with its assigned id.
    async fn create(
        &self,
        announcement: &NewAnnouncement,
    ) -> Result<Announcement, AnnouncementRepositoryError>;

    /// Look up an announcement by id.
    async fn find_by_id(
        &self,
        id: AnnouncementId,
    ) -> Result<Option<Announcement>, AnnouncementRepositoryError>;

    /// Overwrite title, description and timestamp of an existing announcement.
    async fn update(&self, announcement: &Announcement) -> Result<(), AnnouncementRepositoryError>;

    /// Delete an announcement. Returns whether a row was removed.
    async fn delete(&self, id: AnnouncementId) -> Result<bool, AnnouncementRepositoryError>;

    /// Announcements written by a manager.
    async fn list_by_manager(
        &self,
        manager: ManagerId,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError>;

    /// Announcements written by a manager whose title contains `keyword`.
    async fn search_by_title(
        &self,
        manager: ManagerId,
        keyword: &str,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError>;

    /// Announcements written by the manager of `dormitory`.
    async fn list_for_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError>;
}
