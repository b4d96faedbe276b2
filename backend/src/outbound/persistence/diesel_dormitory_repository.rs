//! PostgreSQL-backed `DormitoryRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DormitoryRepository, DormitoryRepositoryError};
use crate::domain::{Dormitory, DormitoryId, DormitoryManager, ManagerId, Password};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{DormitoryRow, ManagerRow};
use super::pool::{DbPool, PoolError};
use super::schema::{dormitories, dormitory_managers};

/// Diesel implementation of the dormitory repository port.
#[derive(Clone)]
pub struct DieselDormitoryRepository {
    pool: DbPool,
}

impl DieselDormitoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DormitoryRepositoryError {
    map_basic_pool_error(error, DormitoryRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DormitoryRepositoryError {
    map_basic_diesel_error(
        error,
        DormitoryRepositoryError::query,
        DormitoryRepositoryError::connection,
    )
}

#[async_trait]
impl DormitoryRepository for DieselDormitoryRepository {
    async fn find_by_id(
        &self,
        id: DormitoryId,
    ) -> Result<Option<Dormitory>, DormitoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = dormitories::table
            .find(id.get())
            .select(DormitoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Dormitory::from))
    }

    async fn find_by_manager(
        &self,
        manager: ManagerId,
    ) -> Result<Option<Dormitory>, DormitoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = dormitories::table
            .filter(dormitories::manager_id.eq(manager.get()))
            .select(DormitoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Dormitory::from))
    }

    async fn find_manager(
        &self,
        id: ManagerId,
    ) -> Result<Option<DormitoryManager>, DormitoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = dormitory_managers::table
            .find(id.get())
            .select(ManagerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(DormitoryManager::from))
    }

    async fn update_manager_password(
        &self,
        id: ManagerId,
        password: &Password,
    ) -> Result<(), DormitoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(dormitory_managers::table.find(id.get()))
            .set(dormitory_managers::password.eq(password.expose()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
