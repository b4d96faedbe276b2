//! Check-in/out request service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::domain::manager_scope::dormitory_of;
use crate::domain::ports::{
    CheckInOutRepository, CheckInOutWorkflow, DormitoryRepository, StudentRepository,
};
use crate::domain::{
    CheckInOut, CheckInOutId, CheckInOutStatus, Error, ManagerId, MovementKind, NewCheckInOut,
    StudentId,
};

/// Service implementing the [`CheckInOutWorkflow`] driving port.
#[derive(Clone)]
pub struct CheckInOutService<C, S, D> {
    requests: Arc<C>,
    students: Arc<S>,
    dormitories: Arc<D>,
}

impl<C, S, D> CheckInOutService<C, S, D> {
    /// Create the service over its repositories.
    pub fn new(requests: Arc<C>, students: Arc<S>, dormitories: Arc<D>) -> Self {
        Self {
            requests,
            students,
            dormitories,
        }
    }
}

impl<C, S, D> CheckInOutService<C, S, D>
where
    C: CheckInOutRepository,
{
    async fn resolve(&self, id: CheckInOutId, status: CheckInOutStatus) -> Result<CheckInOut, Error> {
        let mut request = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Request not found"))?;

        match status {
            CheckInOutStatus::Approved => request.approve(),
            CheckInOutStatus::Rejected => request.reject(),
            CheckInOutStatus::Pending => request.status = CheckInOutStatus::Pending,
        }
        self.requests.update_status(id, request.status).await?;

        info!(request = %id, status = %request.status, "check-in/out request resolved");
        Ok(request)
    }
}

#[async_trait]
impl<C, S, D> CheckInOutWorkflow for CheckInOutService<C, S, D>
where
    C: CheckInOutRepository,
    S: StudentRepository,
    D: DormitoryRepository,
{
    async fn submit(
        &self,
        student: StudentId,
        kind: MovementKind,
        date: NaiveDate,
    ) -> Result<CheckInOut, Error> {
        if self.students.find_by_id(student).await?.is_none() {
            return Err(Error::not_found("Student not found"));
        }

        let created = self
            .requests
            .create(&NewCheckInOut {
                student_id: student,
                date,
                kind,
            })
            .await?;

        info!(request = %created.id, student = %student, kind = %kind, "check-in/out request submitted");
        Ok(created)
    }

    async fn history(&self, student: StudentId) -> Result<Vec<CheckInOut>, Error> {
        Ok(self.requests.list_by_student(student).await?)
    }

    async fn list_for_manager(&self, manager: ManagerId) -> Result<Vec<CheckInOut>, Error> {
        let dormitory = dormitory_of(self.dormitories.as_ref(), manager).await?;
        Ok(self.requests.list_by_dormitory(dormitory).await?)
    }

    async fn pending(&self) -> Result<Vec<CheckInOut>, Error> {
        Ok(self
            .requests
            .list_by_status(NewCheckInOut::INITIAL_STATUS)
            .await?)
    }

    async fn approve(&self, id: CheckInOutId) -> Result<CheckInOut, Error> {
        self.resolve(id, CheckInOutStatus::Approved).await
    }

    async fn reject(&self, id: CheckInOutId) -> Result<CheckInOut, Error> {
        self.resolve(id, CheckInOutStatus::Rejected).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        MockCheckInOutRepository, MockDormitoryRepository, MockStudentRepository,
    };
    use crate::domain::student::fixtures::student;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    type Service =
        CheckInOutService<MockCheckInOutRepository, MockStudentRepository, MockDormitoryRepository>;

    #[fixture]
    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date")
    }

    fn record(id: i64, status: CheckInOutStatus, date: NaiveDate) -> CheckInOut {
        CheckInOut {
            id: CheckInOutId::new(id),
            student_id: StudentId::new(1),
            date,
            kind: MovementKind::CheckIn,
            status,
        }
    }

    fn service(requests: MockCheckInOutRepository, students: MockStudentRepository) -> Service {
        CheckInOutService::new(
            Arc::new(requests),
            Arc::new(students),
            Arc::new(MockDormitoryRepository::new()),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn submit_creates_pending_request(date: NaiveDate) {
        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_id()
            .return_once(|_| Ok(Some(student(1, "Alice"))));
        let mut requests = MockCheckInOutRepository::new();
        requests
            .expect_create()
            .times(1)
            .withf(move |new| new.kind == MovementKind::CheckOut && new.date == date)
            .return_once(move |new| {
                Ok(CheckInOut {
                    id: CheckInOutId::new(11),
                    student_id: new.student_id,
                    date: new.date,
                    kind: new.kind,
                    status: NewCheckInOut::INITIAL_STATUS,
                })
            });

        let created = service(requests, students)
            .submit(StudentId::new(1), MovementKind::CheckOut, date)
            .await
            .expect("submission succeeds");

        assert_eq!(created.status, CheckInOutStatus::Pending);
        assert_eq!(created.id, CheckInOutId::new(11));
    }

    #[rstest]
    #[tokio::test]
    async fn submit_for_unknown_student_is_not_found(date: NaiveDate) {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().return_once(|_| Ok(None));
        let mut requests = MockCheckInOutRepository::new();
        requests.expect_create().times(0);

        let error = service(requests, students)
            .submit(StudentId::new(99), MovementKind::CheckIn, date)
            .await
            .expect_err("unknown student");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case::approve(CheckInOutStatus::Approved)]
    #[case::reject(CheckInOutStatus::Rejected)]
    #[tokio::test]
    async fn resolution_overwrites_status(date: NaiveDate, #[case] target: CheckInOutStatus) {
        let mut requests = MockCheckInOutRepository::new();
        requests
            .expect_find_by_id()
            .with(eq(CheckInOutId::new(5)))
            .return_once(move |_| Ok(Some(record(5, CheckInOutStatus::Pending, date))));
        requests
            .expect_update_status()
            .with(eq(CheckInOutId::new(5)), eq(target))
            .times(1)
            .return_once(|_, _| Ok(()));

        let svc = service(requests, MockStudentRepository::new());
        let resolved = match target {
            CheckInOutStatus::Approved => svc.approve(CheckInOutId::new(5)).await,
            _ => svc.reject(CheckInOutId::new(5)).await,
        }
        .expect("resolution succeeds");

        assert_eq!(resolved.status, target);
    }

    #[rstest]
    #[tokio::test]
    async fn approving_an_already_rejected_request_overwrites_it(date: NaiveDate) {
        let mut requests = MockCheckInOutRepository::new();
        requests
            .expect_find_by_id()
            .return_once(move |_| Ok(Some(record(6, CheckInOutStatus::Rejected, date))));
        requests
            .expect_update_status()
            .with(eq(CheckInOutId::new(6)), eq(CheckInOutStatus::Approved))
            .return_once(|_, _| Ok(()));

        let resolved = service(requests, MockStudentRepository::new())
            .approve(CheckInOutId::new(6))
            .await
            .expect("overwrite succeeds");
        assert_eq!(resolved.status, CheckInOutStatus::Approved);
    }

    #[rstest]
    #[tokio::test]
    async fn resolving_missing_request_is_not_found() {
        let mut requests = MockCheckInOutRepository::new();
        requests.expect_find_by_id().returning(|_| Ok(None));
        requests.expect_update_status().times(0);

        let svc = service(requests, MockStudentRepository::new());
        for result in [
            svc.approve(CheckInOutId::new(404)).await,
            svc.reject(CheckInOutId::new(404)).await,
        ] {
            let error = result.expect_err("missing request");
            assert_eq!(error.code(), ErrorCode::NotFound);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn pending_queries_pending_status() {
        let mut requests = MockCheckInOutRepository::new();
        requests
            .expect_list_by_status()
            .with(eq(CheckInOutStatus::Pending))
            .return_once(|_| Ok(Vec::new()));

        let pending = service(requests, MockStudentRepository::new())
            .pending()
            .await
            .expect("pending list");
        assert!(pending.is_empty());
    }
}
