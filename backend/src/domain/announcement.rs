//! Announcements published by dormitory managers.

use chrono::{DateTime, Utc};

use super::ids::{AnnouncementId, ManagerId};

/// A published announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub manager_id: ManagerId,
}

/// Announcement awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnnouncement {
    pub title: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub manager_id: ManagerId,
}

/// Title and body supplied by a manager when writing an announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementContent {
    pub title: String,
    pub description: String,
}

/// Ordering applied to announcement listings by publication time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnouncementOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl AnnouncementOrder {
    /// Sort `items` in place by publication time.
    pub fn sort(self, items: &mut [Announcement]) {
        match self {
            Self::Ascending => items.sort_by(|a, b| a.date_time.cmp(&b.date_time)),
            Self::Descending => items.sort_by(|a, b| b.date_time.cmp(&a.date_time)),
        }
    }
}
