//! PostgreSQL-backed `ComplaintRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ComplaintRepository, ComplaintRepositoryError};
use crate::domain::{
    ComplaintId, ComplaintRepair, ComplaintStatus, DormitoryId, NewComplaint, StudentId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_helpers::count_to_u64;
use super::models::{ComplaintRow, NewComplaintRow};
use super::pool::{DbPool, PoolError};
use super::schema::{complaint_repairs, students};

/// Diesel implementation of the complaint repository port.
#[derive(Clone)]
pub struct DieselComplaintRepository {
    pool: DbPool,
}

impl DieselComplaintRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ComplaintRepositoryError {
    map_basic_pool_error(error, ComplaintRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ComplaintRepositoryError {
    map_basic_diesel_error(
        error,
        ComplaintRepositoryError::query,
        ComplaintRepositoryError::connection,
    )
}

fn decode(row: ComplaintRow) -> Result<ComplaintRepair, ComplaintRepositoryError> {
    ComplaintRepair::try_from(row).map_err(ComplaintRepositoryError::query)
}

fn decode_all(rows: Vec<ComplaintRow>) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError> {
    rows.into_iter().map(decode).collect()
}

#[async_trait]
impl ComplaintRepository for DieselComplaintRepository {
    async fn create(
        &self,
        complaint: &NewComplaint,
    ) -> Result<ComplaintRepair, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(complaint_repairs::table)
            .values(NewComplaintRow {
                description: &complaint.description,
                service_type: complaint.service_type.as_deref(),
                date_time: complaint.date_time,
                priority_lvl: complaint.priority_lvl.as_deref(),
                status: complaint.status.as_str(),
                student_id: complaint.student_id.get(),
            })
            .returning(ComplaintRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode(row)
    }

    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<ComplaintRepair>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = complaint_repairs::table
            .find(id.get())
            .select(ComplaintRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(decode).transpose()
    }

    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<(), ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(complaint_repairs::table.find(id.get()))
            .set(complaint_repairs::status.eq(status.as_str()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn list_by_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = complaint_repairs::table
            .filter(complaint_repairs::student_id.eq(student.get()))
            .order((
                complaint_repairs::date_time.desc(),
                complaint_repairs::id.desc(),
            ))
            .select(ComplaintRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode_all(rows)
    }

    async fn list_by_dormitory(
        &self,
        dormitory: DormitoryId,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = complaint_repairs::table
            .inner_join(students::table)
            .filter(students::dormitory_id.eq(dormitory.get()))
            .order((
                complaint_repairs::date_time.desc(),
                complaint_repairs::id.desc(),
            ))
            .select(ComplaintRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode_all(rows)
    }

    async fn list_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<Vec<ComplaintRepair>, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = complaint_repairs::table
            .filter(complaint_repairs::status.eq(status.as_str()))
            .order((
                complaint_repairs::date_time.desc(),
                complaint_repairs::id.desc(),
            ))
            .select(ComplaintRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        decode_all(rows)
    }

    async fn count_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<u64, ComplaintRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let count: i64 = complaint_repairs::table
            .filter(complaint_repairs::status.eq(status.as_str()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(count_to_u64(count))
    }
}
