//! PostgreSQL-backed `AnnouncementRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AnnouncementRepository, AnnouncementRepositoryError};
use crate::domain::{Announcement, AnnouncementId, DormitoryId, ManagerId, NewAnnouncement};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_helpers::contains_pattern;
use super::models::{AnnouncementRow, AnnouncementUpdate, NewAnnouncementRow};
use super::pool::{DbPool, PoolError};
use super::schema::{announcements, dormitories};

/// Diesel implementation of the announcement repository port.
#[derive(Clone)]
pub struct DieselAnnouncementRepository {
    pool: DbPool,
}

impl DieselAnnouncementRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AnnouncementRepositoryError {
    map_basic_pool_error(error, AnnouncementRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AnnouncementRepositoryError {
    map_basic_diesel_error(
        error,
        AnnouncementRepositoryError::query,
        AnnouncementRepositoryError::connection,
    )
}

fn into_domain(rows: Vec<AnnouncementRow>) -> Vec<Announcement> {
    rows.into_iter().map(Announcement::from).collect()
}

#[async_trait]
impl AnnouncementRepository for DieselAnnouncementRepository {
    async fn create(
        &self,
        announcement: &NewAnnouncement,
    ) -> Result<Announcement, AnnouncementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(announcements::table)
            .values(NewAnnouncementRow {
                title: &announcement.title,
                description: &announcement.description,
                date_time: announcement.date_time,
                manager_id: announcement.manager_id.get(),
            })
            .returning(AnnouncementRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: AnnouncementId,
    ) -> Result<Option<Announcement>, AnnouncementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = announcements::table
            .find(id.get())
            .select(AnnouncementRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Announcement::from))
    }

    async fn update(&self, announcement: &Announcement) -> Result<(), AnnouncementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(announcements::table.find(announcement.id.get()))
            .set(AnnouncementUpdate {
                title: &announcement.title,
                description: &announcement.description,
                date_time: announcement.date_time,
            })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete(&self, id: AnnouncementId) -> Result<bool, AnnouncementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(announcements::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn list_by_manager(
        &self,
        manager: ManagerId,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = announcements::table
            .filter(announcements::manager_id.eq(manager.get()))
            .order((announcements::date_time.desc(), announcements::id.desc()))
            .select(AnnouncementRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(into_domain(rows))
    }

    async fn search_by_title(
        &self,
        manager: ManagerId,
        keyword: &str,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = announcements::table
            .filter(announcements::manager_id.eq(manager.get()))
            .filter(announcements::title.like(contains_pattern(keyword)))
            .order((announcements::date_time.desc(), announcements::id.desc()))
            .select(AnnouncementRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(into_domain(rows))
    }

    async fn list_for_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<Announcement>, AnnouncementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let manager = dormitories::table
            .find(dormitory.get())
            .select(dormitories::manager_id)
            .first::<Option<i64>>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .flatten();
        let Some(manager) = manager else {
            return Ok(Vec::new());
        };

        let rows = announcements::table
            .filter(announcements::manager_id.eq(manager))
            .order((announcements::date_time.desc(), announcements::id.desc()))
            .select(AnnouncementRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(into_domain(rows))
    }
}
