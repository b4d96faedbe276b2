//! PostgreSQL-backed `CheckInOutRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CheckInOutRepository, CheckInOutRepositoryError};
use crate::domain::{
    CheckInOut, CheckInOutId, CheckInOutStatus, DormitoryId, NewCheckInOut, StudentId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_helpers::count_to_u64;
use super::models::{CheckInOutRow, NewCheckInOutRow};
use super::pool::{DbPool, PoolError};
use super::schema::{check_in_outs, students};

/// Diesel implementation of the check-in/out repository port.
#[derive(Clone)]
pub struct DieselCheckInOutRepository {
    pool: DbPool,
}

impl DieselCheckInOutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CheckInOutRepositoryError {
    map_basic_pool_error(error, CheckInOutRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CheckInOutRepositoryError {
    map_basic_diesel_error(
        error,
        CheckInOutRepositoryError::query,
        CheckInOutRepositoryError::connection,
    )
}

fn decode_all(rows: Vec<CheckInOutRow>) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError> {
    rows.into_iter()
        .map(|row| CheckInOut::try_from(row).map_err(CheckInOutRepositoryError::query))
        .collect()
}

#[async_trait]
impl CheckInOutRepository for DieselCheckInOutRepository {
    async fn create(
        &self,
        request: &NewCheckInOut,
    ) -> Result<CheckInOut, CheckInOutRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(check_in_outs::table)
            .values(NewCheckInOutRow {
                student_id: request.student_id.get(),
                date: request.date,
                kind: request.kind.as_str(),
                status: NewCheckInOut::INITIAL_STATUS.as_str(),
            })
            .returning(CheckInOutRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        CheckInOut::try_from(row).map_err(CheckInOutRepositoryError::query)
    }

    async fn find_by_id(
        &self,
        id: CheckInOutId,
    ) -> Result<Option<CheckInOut>, CheckInOutRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = check_in_outs::table
            .find(id.get())
            .select(CheckInOutRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(|row| CheckInOut::try_from(row).map_err(CheckInOutRepositoryError::query))
            .transpose()
    }

    async fn update_status(
        &self,
        id: CheckInOutId,
        status: CheckInOutStatus,
    ) -> Result<(), CheckInOutRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(check_in_outs::table.find(id.get()))
            .set(check_in_outs::status.eq(status.as_str()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn list_by_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = check_in_outs::table
            .filter(check_in_outs::student_id.eq(student.get()))
            .order((check_in_outs::date.desc(), check_in_outs::id.desc()))
            .select(CheckInOutRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode_all(rows)
    }

    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = check_in_outs::table
            .inner_join(students::table)
            .filter(students::dormitory_id.eq(dormitory.get()))
            .order((check_in_outs::date.desc(), check_in_outs::id.desc()))
            .select(CheckInOutRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode_all(rows)
    }

    async fn list_by_status(
        &self,
        status: CheckInOutStatus,
    ) -> Result<Vec<CheckInOut>, CheckInOutRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = check_in_outs::table
            .filter(check_in_outs::status.eq(status.as_str()))
            .order((check_in_outs::date.desc(), check_in_outs::id.desc()))
            .select(CheckInOutRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode_all(rows)
    }

    async fn count_by_status(
        &self,
        status: CheckInOutStatus,
    ) -> Result<u64, CheckInOutRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let count: i64 = check_in_outs::table
            .filter(check_in_outs::status.eq(status.as_str()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(count_to_u64(count))
    }
}
