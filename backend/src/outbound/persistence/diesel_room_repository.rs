//! PostgreSQL-backed `RoomRepository`.
//!
//! Occupancy changes update the room counter and every affected student row
//! inside one transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{RoomRepository, RoomRepositoryError};
use crate::domain::{DormitoryId, OccupancyChange, ROOM_CAPACITY, Room, RoomKey};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_helpers::{contains_pattern, count_to_u64};
use super::models::{RoomRow, StudentPlacement};
use super::pool::{DbPool, PoolError};
use super::schema::{rooms, students};

/// Diesel implementation of the room repository port.
#[derive(Clone)]
pub struct DieselRoomRepository {
    pool: DbPool,
}

impl DieselRoomRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RoomRepositoryError {
    map_basic_pool_error(error, RoomRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RoomRepositoryError {
    map_basic_diesel_error(
        error,
        RoomRepositoryError::query,
        RoomRepositoryError::connection,
    )
}

#[async_trait]
impl RoomRepository for DieselRoomRepository {
    async fn find(&self, key: &RoomKey) -> Result<Option<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = rooms::table
            .find((key.room_num.as_str(), key.dormitory_id.get()))
            .select(RoomRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Room::from))
    }

    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = rooms::table
            .filter(rooms::dormitory_id.eq(dormitory.get()))
            .order(rooms::room_num.asc())
            .select(RoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn search(
        &self,
        dormitory: DormitoryId,
        term: &str,
    ) -> Result<Option<Room>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = rooms::table
            .filter(rooms::dormitory_id.eq(dormitory.get()))
            .filter(rooms::room_num.like(contains_pattern(term)))
            .order(rooms::room_num.asc())
            .select(RoomRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Room::from))
    }

    async fn count_available(&self, dormitory: DormitoryId) -> Result<u64, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let count: i64 = rooms::table
            .filter(rooms::dormitory_id.eq(dormitory.get()))
            .filter(rooms::occupancy.lt(ROOM_CAPACITY))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(count_to_u64(count))
    }

    async fn apply_occupancy_change(
        &self,
        change: &OccupancyChange,
    ) -> Result<(), RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let key = &change.room.key;

        conn.transaction(|conn| {
            async move {
                let updated = diesel::update(
                    rooms::table.find((key.room_num.as_str(), key.dormitory_id.get())),
                )
                .set(rooms::occupancy.eq(change.room.occupancy))
                .execute(conn)
                .await?;
                if updated == 0 {
                    return Err(diesel::result::Error::NotFound);
                }

                for student in &change.students {
                    diesel::update(students::table.find(student.id.get()))
                        .set(StudentPlacement::from(student))
                        .execute(conn)
                        .await?;
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
